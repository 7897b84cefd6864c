//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// A user-authored post
///
/// `user_id` is fixed at creation; only the owner may edit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    /// Owning user
    pub user_id: UserId,
    pub content: String,
    /// Media URLs or references, in display order
    pub media: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post
    pub fn new(user_id: UserId, content: String, media: Vec<String>) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id,
            content,
            media,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Replace body and media
    pub fn edit(&mut self, content: String, media: Vec<String>) {
        self.content = content;
        self.media = media;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post() {
        let owner = UserId::new();
        let post = Post::new(owner, "hello".to_string(), vec![]);

        assert!(post.is_owned_by(&owner));
        assert!(!post.is_owned_by(&UserId::new()));
        assert!(post.deleted_at.is_none());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_edit_keeps_owner_and_id() {
        let owner = UserId::new();
        let mut post = Post::new(owner, "hello".to_string(), vec![]);
        let id = post.post_id;

        post.edit("edited".to_string(), vec!["a.png".to_string()]);

        assert_eq!(post.post_id, id);
        assert_eq!(post.user_id, owner);
        assert_eq!(post.content, "edited");
        assert_eq!(post.media, vec!["a.png".to_string()]);
        assert!(post.updated_at >= post.created_at);
    }
}
