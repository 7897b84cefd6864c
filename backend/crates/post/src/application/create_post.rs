//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::require_content;
use crate::domain::entity::post::Post;
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    /// Owner; taken from the authenticated caller, never from the body
    pub user_id: UserId,
    pub content: String,
    pub media: Vec<String>,
}

/// Create post use case
pub struct CreatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    post_repo: Arc<P>,
    owners: Arc<O>,
}

impl<P, O> CreatePostUseCase<P, O>
where
    P: PostRepository,
    O: OwnerDirectory,
{
    pub fn new(post_repo: Arc<P>, owners: Arc<O>) -> Self {
        Self { post_repo, owners }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        if input.user_id.is_nil() {
            return Err(PostError::Validation("user id is required".to_string()));
        }
        let content = require_content(input.content)?;

        if !self.owners.owner_exists(&input.user_id).await? {
            return Err(PostError::OwnerNotFound);
        }

        let post = Post::new(input.user_id, content, input.media);

        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %post.user_id,
            "Post created"
        );

        Ok(post)
    }
}
