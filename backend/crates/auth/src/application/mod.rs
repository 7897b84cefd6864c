//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod manage_user;
pub mod register;

use platform::token::TokenService;

use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use manage_user::{CreateUserInput, ManageUserUseCase};
pub use register::{RegisterInput, RegisterUseCase};

/// Result of a successful register or login
#[derive(Debug)]
pub struct AuthOutput {
    pub token: String,
    pub user: User,
}

pub(crate) fn issue_token(tokens: &TokenService, user: &User) -> AuthResult<String> {
    tokens
        .issue(user.user_id.into_uuid())
        .map_err(|e| AuthError::Internal(e.to_string()))
}

pub(crate) fn require_non_empty(field: &str, value: String) -> AuthResult<String> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation(format!("{field} is required")));
    }
    Ok(value)
}
