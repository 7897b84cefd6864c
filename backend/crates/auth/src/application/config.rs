//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::sync::Arc;

use platform::token::TokenService;

/// Length of a generated development secret
const GENERATED_SECRET_LEN: usize = 32;

/// Auth application configuration
///
/// Read once at start-up and injected; nothing here changes afterwards.
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for identity tokens
    token_secret: Vec<u8>,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens stop validating when the process restarts.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; GENERATED_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Build the token service for this secret
    pub fn token_service(&self) -> Arc<TokenService> {
        Arc::new(TokenService::new(&self.token_secret))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.token_secret.len(), GENERATED_SECRET_LEN);
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_token_service_uses_secret() {
        let config = AuthConfig::new("s3cret");
        let token = config.token_service().issue(Uuid::new_v4()).unwrap();

        assert!(AuthConfig::new("s3cret").token_service().validate(&token).is_ok());
        assert!(AuthConfig::new("other").token_service().validate(&token).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", AuthConfig::new("hunter2"));
        assert!(!debug.contains("hunter2"));
    }
}
