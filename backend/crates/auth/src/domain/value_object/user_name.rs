//! User Name Value Object
//!
//! The public handle of a user. Unique among non-deleted users and compared
//! exactly as stored (after NFKC normalisation and trimming).
//!
//! ## Invariants
//! - 1..=50 characters after normalisation
//! - no whitespace or control characters

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = input.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AppError::bad_request("username is required"));
        }

        let char_count = name.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "username must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, char_count
            )));
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::bad_request(
                "username cannot contain whitespace or control characters",
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Restore from the database without re-validating
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("alice").unwrap().as_str(), "alice");
        assert_eq!(UserName::new("Alice_99").unwrap().as_str(), "Alice_99");
        assert_eq!(UserName::new("ユーザー").unwrap().as_str(), "ユーザー");
    }

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(UserName::new("  alice  ").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth "ａｌｉｃｅ"
        let name = UserName::new("\u{FF41}\u{FF4C}\u{FF49}\u{FF43}\u{FF45}").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_empty_fails() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_inner_whitespace_fails() {
        assert!(UserName::new("ali ce").is_err());
        assert!(UserName::new("ali\tce").is_err());
        assert!(UserName::new("ali\u{0000}ce").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserName::new("alice").unwrap().to_string(), "alice");
    }
}
