//! User Management Use Case
//!
//! Read, create, update, patch and delete identities. Mutations of an
//! existing identity are only allowed to the identity itself.

use std::sync::Arc;

use crate::application::require_non_empty;
use crate::domain::entity::user::{Profile, ProfilePatch, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Create user input (no token is issued)
pub struct CreateUserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
}

/// User management use case
pub struct ManageUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ManageUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Fetch one live user
    pub async fn get(&self, user_id: &str) -> AuthResult<User> {
        let user_id = UserId::parse(user_id)?;
        self.load(&user_id).await
    }

    /// Create a user without logging in
    pub async fn create(&self, input: CreateUserInput) -> AuthResult<User> {
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
                bio: input.bio,
                avatar: input.avatar,
            },
        );

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User created");

        Ok(user)
    }

    /// Overwrite full name, bio and avatar
    pub async fn update(&self, actor: &UserId, user_id: &str, profile: Profile) -> AuthResult<User> {
        let user_id = authorize_self(actor, user_id)?;
        let full_name = require_non_empty("full name", profile.full_name)?;

        let mut user = self.load(&user_id).await?;
        user.replace_profile(Profile {
            full_name,
            ..profile
        });

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User profile replaced");

        Ok(user)
    }

    /// Apply the fields present in `patch`
    pub async fn patch(
        &self,
        actor: &UserId,
        user_id: &str,
        patch: ProfilePatch,
    ) -> AuthResult<User> {
        let user_id = authorize_self(actor, user_id)?;

        let mut user = self.load(&user_id).await?;
        if patch.is_empty() {
            return Ok(user);
        }

        user.apply_patch(patch);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User profile patched");

        Ok(user)
    }

    /// Soft delete. Issued tokens stay valid until they expire.
    pub async fn delete(&self, actor: &UserId, user_id: &str) -> AuthResult<()> {
        let user_id = authorize_self(actor, user_id)?;

        self.user_repo.delete(&user_id).await?;

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }

    async fn load(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Parse the target id and require it to be the caller
fn authorize_self(actor: &UserId, user_id: &str) -> AuthResult<UserId> {
    let target = UserId::parse(user_id)?;
    if target != *actor {
        return Err(AuthError::Forbidden);
    }
    Ok(target)
}
