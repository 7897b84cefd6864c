//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::Post;

/// Create / update request. The owner always comes from the token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub content: String,
    /// Absent and `null` both mean no media
    #[serde(default)]
    pub media: Option<Vec<String>>,
}

impl PostRequest {
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.content, self.media.unwrap_or_default())
    }
}

/// Post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub media: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            user_id: post.user_id,
            content: post.content,
            media: post.media,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// `GET /api/posts/feed?page=&limit=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
