//! Login Use Case
//!
//! Authenticates by email + password and issues a token.

use std::sync::{Arc, LazyLock};

use platform::token::TokenService;

use crate::application::{AuthOutput, issue_token};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Verified when no account matches, so an unknown email costs the same
/// Argon2 work as a wrong password.
static DECOY_PASSWORD: LazyLock<Option<UserPassword>> = LazyLock::new(|| {
    UserPassword::from_raw(&RawPassword::for_login("decoy-password".to_string())).ok()
});

pub(crate) fn decoy_password() -> Option<&'static UserPassword> {
    DECOY_PASSWORD.as_ref()
}

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    /// Every credential failure is `InvalidCredentials`, whether the email
    /// is unknown, unparseable, or the password does not match.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let raw_password = RawPassword::for_login(input.password);

        let user = match Email::new(input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            if let Some(decoy) = decoy_password() {
                let _ = decoy.verify(&raw_password);
            }
            return Err(AuthError::InvalidCredentials);
        };

        match user.password_hash.verify(&raw_password) {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!(
                    user_id = %user.user_id,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                return Err(AuthError::InvalidCredentials);
            }
        }

        let token = issue_token(&self.tokens, &user)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput { token, user })
    }
}
