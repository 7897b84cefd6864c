//! Auth (Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (register, login, user management)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer-token gate
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (`platform::password`)
//! - Stateless HS256 tokens valid for 24 hours (`platform::token`); there is
//!   no revocation, so deleting a user does not invalidate issued tokens
//! - Login never reveals whether an email is registered
//! - A user may only modify or delete their own identity

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGate, AuthenticatedUser, require_bearer_token};
pub use presentation::router::{auth_router, users_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
