//! User Entity
//!
//! A registered identity: credentials plus public profile.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, email::Email, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// UUID identifier, assigned at creation and never changed
    pub user_id: UserId,
    /// Public handle (unique)
    pub user_name: UserName,
    /// Login identifier (unique)
    pub email: Email,
    /// Argon2id PHC string. Never serialized to clients.
    pub password_hash: UserPassword,
    pub full_name: String,
    pub bio: String,
    /// Avatar URL or media reference
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Profile fields that may be changed after registration
///
/// Used as-is by a full update, where every field overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
}

/// Partial profile update
///
/// `None` leaves a field untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.bio.is_none() && self.avatar.is_none()
    }
}

impl User {
    /// Create a new user
    pub fn new(
        user_name: UserName,
        email: Email,
        password_hash: UserPassword,
        profile: Profile,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            full_name: profile.full_name,
            bio: profile.bio,
            avatar: profile.avatar,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Overwrite the profile fields. Email, user name, password and id are kept.
    pub fn replace_profile(&mut self, profile: Profile) {
        self.full_name = profile.full_name;
        self.bio = profile.bio;
        self.avatar = profile.avatar;
        self.updated_at = Utc::now();
    }

    /// Apply only the fields present in `patch`
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            UserName::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            UserPassword::from_phc_string("$argon2id$placeholder"),
            Profile {
                full_name: "Alice A".to_string(),
                bio: "old".to_string(),
                avatar: "https://cdn.example.com/a.png".to_string(),
            },
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = sample_user();
        assert!(!user.user_id.is_nil());
        assert!(!user.is_deleted());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_patch_absent_field_is_untouched() {
        let mut user = sample_user();
        user.apply_patch(ProfilePatch {
            full_name: Some("Alice B".to_string()),
            ..Default::default()
        });
        assert_eq!(user.full_name, "Alice B");
        assert_eq!(user.bio, "old");
        assert_eq!(user.avatar, "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_patch_empty_string_clears_field() {
        let mut user = sample_user();
        user.apply_patch(ProfilePatch {
            bio: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(user.bio, "");
        assert_eq!(user.full_name, "Alice A");
    }

    #[test]
    fn test_replace_profile_keeps_identity_fields() {
        let mut user = sample_user();
        let id = user.user_id;
        let email = user.email.clone();

        user.replace_profile(Profile {
            full_name: "New".to_string(),
            ..Default::default()
        });

        assert_eq!(user.user_id, id);
        assert_eq!(user.email, email);
        assert_eq!(user.user_name.as_str(), "alice");
        assert_eq!(user.full_name, "New");
        assert_eq!(user.bio, "");
        assert_eq!(user.avatar, "");
    }
}
