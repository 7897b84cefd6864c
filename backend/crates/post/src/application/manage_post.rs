//! Manage Post Use Case
//!
//! Edit and delete. Both re-read the stored post and require the caller to
//! be its owner. The read and the write are separate statements, so two
//! concurrent edits are last-writer-wins.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::application::{parse_post_id, require_content};
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: String,
    /// Caller; must match the stored owner
    pub user_id: UserId,
    pub content: String,
    pub media: Vec<String>,
}

/// Manage post use case
pub struct ManagePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ManagePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Replace body and media of an owned post
    pub async fn update(&self, input: UpdatePostInput) -> PostResult<Post> {
        let post_id = parse_post_id(&input.post_id)?;
        let content = require_content(input.content)?;

        let mut post = self.load_owned(&post_id, &input.user_id).await?;
        post.edit(content, input.media);

        self.post_repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post updated");

        Ok(post)
    }

    /// Soft delete an owned post
    pub async fn delete(&self, actor: &UserId, post_id: &str) -> PostResult<()> {
        let post_id = parse_post_id(post_id)?;

        self.load_owned(&post_id, actor).await?;
        self.post_repo.delete(&post_id).await?;

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    async fn load_owned(&self, post_id: &PostId, actor: &UserId) -> PostResult<Post> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.is_owned_by(actor) {
            return Err(PostError::Forbidden);
        }

        Ok(post)
    }
}
