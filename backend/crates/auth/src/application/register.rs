//! Register Use Case
//!
//! Creates a new user account and logs it in.

use std::sync::Arc;

use platform::token::TokenService;

use crate::application::{AuthOutput, issue_token, require_non_empty};
use crate::domain::entity::user::{Profile, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    /// The email/user-name checks and the insert are separate statements;
    /// two concurrent registrations can both pass the checks. The unique
    /// indexes then reject the loser at `create`, which surfaces the same
    /// `EmailTaken` / `UserNameTaken`.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let user_name = UserName::new(&input.user_name)?;
        let email = Email::new(input.email)?;
        let full_name = require_non_empty("full name", input.full_name)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password)?;

        let user = User::new(
            user_name,
            email,
            password_hash,
            Profile {
                full_name,
                ..Default::default()
            },
        );

        self.user_repo.create(&user).await?;

        let token = issue_token(&self.tokens, &user)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(AuthOutput { token, user })
    }
}
