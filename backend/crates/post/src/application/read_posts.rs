//! Read Posts Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_post_id;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::pagination::Pagination;
use crate::error::{PostError, PostResult};

/// Read posts use case
pub struct ReadPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ReadPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// A single live post
    pub async fn get(&self, post_id: &str) -> PostResult<Post> {
        let post_id = parse_post_id(post_id)?;

        self.post_repo
            .find_by_id(&post_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }

    /// Every post of one user, newest first. Unknown users have none.
    pub async fn by_user(&self, user_id: &str) -> PostResult<Vec<Post>> {
        let user_id = UserId::parse(user_id)
            .map_err(|e| PostError::Validation(format!("invalid user id: {e}")))?;

        self.post_repo.find_by_user_id(&user_id).await
    }

    /// Feed page, newest first
    pub async fn feed(&self, page: i64, limit: i64) -> PostResult<Vec<Post>> {
        let pagination = Pagination::new(page, limit);

        tracing::debug!(
            page = pagination.page(),
            limit = pagination.limit(),
            offset = pagination.offset(),
            "Loading feed"
        );

        self.post_repo.find_feed(pagination).await
    }
}
