//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::{Profile, ProfilePatch, User};

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register / login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ============================================================================
// Users
// ============================================================================

/// Public view of a user. The password hash is never included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.user_name.to_string(),
            email: user.email.to_string(),
            full_name: user.full_name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Create user request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
}

/// Full profile update. Omitted fields are cleared.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
}

impl From<UpdateUserRequest> for Profile {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            bio: req.bio,
            avatar: req.avatar,
        }
    }
}

/// Partial profile update. Omitted or `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl From<PatchUserRequest> for ProfilePatch {
    fn from(req: PatchUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            bio: req.bio,
            avatar: req.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_request_distinguishes_absent_and_empty() {
        let patch: PatchUserRequest = serde_json::from_str(r#"{"bio": ""}"#).unwrap();
        assert_eq!(patch.bio.as_deref(), Some(""));
        assert_eq!(patch.full_name, None);
        assert_eq!(patch.avatar, None);

        let patch: PatchUserRequest = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(patch.bio, None);
    }

    #[test]
    fn test_register_request_uses_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"alice","email":"a@x.com","password":"secret1","fullName":"Alice A"}"#,
        )
        .unwrap();
        assert_eq!(req.full_name, "Alice A");
    }
}
