//! Application Layer
//!
//! Use cases and application services.

pub mod create_post;
pub mod manage_post;
pub mod read_posts;

use kernel::id::PostId;

use crate::error::{PostError, PostResult};

// Re-exports
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use manage_post::{ManagePostUseCase, UpdatePostInput};
pub use read_posts::ReadPostsUseCase;

pub(crate) fn parse_post_id(raw: &str) -> PostResult<PostId> {
    PostId::parse(raw).map_err(|e| PostError::Validation(format!("invalid post id: {e}")))
}

pub(crate) fn require_content(content: String) -> PostResult<String> {
    if content.trim().is_empty() {
        return Err(PostError::Validation("content is required".to_string()));
    }
    Ok(content)
}
