//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Soft-deleted posts are invisible to every method.

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::value_object::pagination::Pagination;
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// All posts of one user, newest first
    async fn find_by_user_id(&self, user_id: &UserId) -> PostResult<Vec<Post>>;

    /// One page of all posts, newest first
    async fn find_feed(&self, pagination: Pagination) -> PostResult<Vec<Post>>;

    /// Persist content and media. `PostNotFound` if no live row matches.
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Soft delete. `PostNotFound` if no live row matches.
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;
}

/// Existence check for post owners
///
/// Kept separate so this crate does not depend on the user repository.
#[trait_variant::make(OwnerDirectory: Send)]
pub trait LocalOwnerDirectory {
    /// Whether a live user with this id exists
    async fn owner_exists(&self, user_id: &UserId) -> PostResult<bool>;
}
