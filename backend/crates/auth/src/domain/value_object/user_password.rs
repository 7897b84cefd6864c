//! User Password Value Object
//!
//! Domain wrappers over `platform::password`. `RawPassword` is user input
//! (zeroized on drop), `UserPassword` is the stored Argon2id PHC string.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("secret1".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw).unwrap();
//! assert!(hashed.verify(&RawPassword::for_login("secret1".to_string())).unwrap());
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new password for storage, applying the registration policy
    ///
    /// ## Errors
    /// `400 Bad Request` with a user-facing message on policy violation
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("password must be at least {} characters", min))
            }
            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("password must be at most {} characters", max))
            }
            PasswordPolicyError::EmptyOrWhitespace => AppError::bad_request("password is required"),
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Wrap a login attempt. No policy: a bad candidate just fails to verify.
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw
            .0
            .hash()
            .map_err(|e| AppError::internal("password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    /// Restore from the PHC string stored in the database
    ///
    /// A corrupt value is only detected by [`Self::verify`].
    pub fn from_phc_string(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_phc_string(phc_string))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
    pub fn verify(&self, raw: &RawPassword) -> Result<bool, PasswordHashError> {
        self.0.verify(&raw.0)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret1".to_string()).is_ok());

        use platform::password::MIN_PASSWORD_LENGTH;
        let short_pass = "a".repeat(MIN_PASSWORD_LENGTH - 1);
        let err = RawPassword::new(short_pass).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "password must be at least 6 characters");

        use platform::password::MAX_PASSWORD_LENGTH;
        let long_pass = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(RawPassword::new(long_pass).is_err());

        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        assert!(hashed.verify(&raw).unwrap());

        let wrong = RawPassword::for_login("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_login_candidate_skips_policy() {
        let hashed = UserPassword::from_raw(&RawPassword::new("secret1".to_string()).unwrap())
            .unwrap();

        // Too short for registration, still just a mismatch at login
        assert!(!hashed.verify(&RawPassword::for_login("abc".to_string())).unwrap());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string().to_string());
        assert!(restored.verify(&raw).unwrap());
    }

    #[test]
    fn test_corrupt_stored_hash() {
        let stored = UserPassword::from_phc_string("plaintext-oops");
        let raw = RawPassword::for_login("secret1".to_string());
        assert!(stored.verify(&raw).is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
        assert!(!debug.contains("argon2"));
    }
}
