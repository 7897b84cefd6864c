//! Post (Content) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, pagination, repository traits
//! - `application/` - Use cases (create, edit, delete, read, feed)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Authentication comes from the `auth` crate's gate. A post's owner is
//! always the authenticated caller, and only the owner may edit or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;
