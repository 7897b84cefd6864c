//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Every lookup ignores soft-deleted users. Uniqueness of email and user
//! name is enforced by the store itself: `create` reports a violated
//! constraint as `EmailTaken` / `UserNameTaken`, which is the authoritative
//! signal even when a use-case pre-check passed.

use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Persist profile changes. `UserNotFound` if no live row matches.
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Soft delete. `UserNotFound` if no live row matches.
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;
}
