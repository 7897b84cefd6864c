//! Password Hashing and Verification
//!
//! One-way credential storage with:
//! - Argon2id hashing with a random 128-bit salt per hash
//! - A fixed cost parameter set (`Argon2::default()`, m=19456 KiB, t=2, p=1)
//! - Constant-time verification (performed inside `argon2`)
//! - Zeroization of clear text passwords on drop
//!
//! Hashing and verification are pure functions of their inputs apart from
//! the salt, and are safe to call concurrently from any thread.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length accepted at registration
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Salt generation or the hash computation itself failed
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a parseable PHC string
    #[error("invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new password for storage, enforcing the registration policy
    ///
    /// - NFKC-normalised before any check
    /// - 6..=128 Unicode code points
    /// - no control characters other than space, tab, newline
    /// - not empty or whitespace only
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Wrap a login attempt without applying the registration policy
    ///
    /// A candidate that would fail the policy simply fails verification.
    /// Normalisation still applies so both sides hash the same bytes.
    pub fn for_verification(raw: String) -> Self {
        Self(raw.nfkc().collect())
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, parameters, salt and digest,
/// so verification needs nothing but the string itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string read back from storage
    ///
    /// No parsing happens here; a corrupt value is reported by [`Self::verify`].
    pub fn from_phc_string(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `Ok(false)` on mismatch. `Err(InvalidHashFormat)` only when the
    /// stored hash cannot be parsed.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        let parsed_hash =
            PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(PasswordHashError::InvalidHashFormat),
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
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

    fn clear(raw: &str) -> ClearTextPassword {
        ClearTextPassword::for_verification(raw.to_string())
    }

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("abc12".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_password_minimum_length_accepted() {
        assert!(ClearTextPassword::new("secret".to_string()).is_ok());
        assert!(ClearTextPassword::new("secret1".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        let result = ClearTextPassword::new(String::new());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defg".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_unicode_password() {
        // Counted in code points, not bytes
        assert!(ClearTextPassword::new("パスワード安全".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = clear("TestPassword123!");
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password).unwrap());
        assert!(!hashed.verify(&clear("WrongPassword123!")).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let password = clear("same-input");
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password).unwrap());
        assert!(second.verify(&password).unwrap());
    }

    #[test]
    fn test_hash_is_argon2id() {
        let hashed = clear("whatever1").hash().unwrap();
        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_distinct_passwords_do_not_cross_verify() {
        let candidates = ["secret1", "secret2", "Secret1", "secret1 ", "🔑🔑🔑🔑🔑🔑"];
        let hashes: Vec<HashedPassword> = candidates
            .iter()
            .map(|p| clear(p).hash().unwrap())
            .collect();

        for (i, hash) in hashes.iter().enumerate() {
            for (j, candidate) in candidates.iter().enumerate() {
                assert_eq!(hash.verify(&clear(candidate)).unwrap(), i == j);
            }
        }
    }

    #[test]
    fn test_nfkc_normalisation_on_both_sides() {
        // U+FF21 FULLWIDTH LATIN CAPITAL LETTER A normalises to "A"
        let hashed = ClearTextPassword::new("\u{FF21}bcdefg".to_string())
            .unwrap()
            .hash()
            .unwrap();
        assert!(hashed.verify(&clear("Abcdefg")).unwrap());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = clear("TestPassword123!");
        let stored = password.hash().unwrap().as_phc_string().to_string();

        let restored = HashedPassword::from_phc_string(stored);
        assert!(restored.verify(&password).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hashed = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(matches!(
            hashed.verify(&clear("anything")),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let password = clear("hunter22");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter22"));

        let hashed = password.hash().unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
