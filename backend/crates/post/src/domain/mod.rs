//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::post::Post;
pub use repository::{OwnerDirectory, PostRepository};
pub use value_object::pagination::Pagination;
