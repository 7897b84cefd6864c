//! Signed Identity Tokens
//!
//! HS256 JWTs carrying `sub` (identity id), `iat`, `exp` and a random `jti`.
//! The lifetime is fixed at [`TOKEN_TTL_SECS`]. Tokens are stateless: a token
//! stays valid until `exp` even if the identity is deleted or its password is
//! changed afterwards, because there is no server-side revocation list.
//!
//! Expiry is checked here against an explicit `now` rather than by
//! `jsonwebtoken` (which applies a default leeway), so the boundary is exact.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 24 hours
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token validation/issuance errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not decodable, or the signature does not verify
    #[error("token is malformed")]
    Malformed,

    /// `now` is at or past `exp`
    #[error("token has expired")]
    Expired,

    /// Decodes and verifies, but the claims are unusable
    #[error("token is invalid: {0}")]
    Invalid(String),

    /// Encoding failed while issuing
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Decoded, validated claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identity the token was issued to
    pub subject: Uuid,
    /// Unique per issued token
    pub token_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Wire form. Every field is optional so that a verified token with a
/// missing claim is reported as `Invalid` instead of `Malformed`.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    jti: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Issues and validates identity tokens with one process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build from the configured signing secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `subject`, valid for 24 hours from now
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, subject: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let issued_at = now.timestamp();
        let claims = WireClaims {
            sub: Some(subject.to_string()),
            jti: Some(Uuid::new_v4().to_string()),
            iat: Some(issued_at),
            exp: Some(issued_at + TOKEN_TTL_SECS),
        };

        jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature, decode, and check expiry against the current time
    pub fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Verify signature, decode, and check expiry against `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let data = jsonwebtoken::decode::<WireClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::MissingRequiredClaim(claim) => {
                    TokenError::Invalid(format!("missing {claim} claim"))
                }
                _ => TokenError::Malformed,
            })?;

        let claims = data.claims;

        let subject = claims
            .sub
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TokenError::Invalid("missing subject".to_string()))?;
        let subject = Uuid::parse_str(subject)
            .map_err(|_| TokenError::Invalid("subject is not an identity id".to_string()))?;

        let token_id = claims
            .jti
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| TokenError::Invalid("missing token id".to_string()))?;

        let issued_at = claims
            .iat
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .ok_or_else(|| TokenError::Invalid("missing issued-at".to_string()))?;
        let expires_at = claims
            .exp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .ok_or_else(|| TokenError::Invalid("missing expiry".to_string()))?;

        if expires_at <= issued_at {
            return Err(TokenError::Invalid("expiry precedes issuance".to_string()));
        }

        if now >= expires_at {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            subject,
            token_id,
            issued_at,
            expires_at,
        })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &ALGORITHM)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
