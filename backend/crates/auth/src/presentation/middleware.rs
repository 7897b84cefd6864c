//! Auth Middleware
//!
//! The authentication gate for protected routes. A request moves through
//! header extraction, token validation and identity binding; any failing
//! step rejects it with `401` before a handler runs.
//!
//! The gate trusts the token's subject and never reads the user store.
//! Whether that user still exists is for the handler's use-case to find out.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::bearer::{BearerError, extract_bearer};
use platform::token::TokenService;

use crate::error::{AuthError, AuthResult};

/// Identity bound to a request that passed the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    /// When the presented token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Bearer-token gate
#[derive(Debug, Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Resolve the caller from the `Authorization` header
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        let token = extract_bearer(headers).map_err(|e| match e {
            BearerError::Missing => AuthError::MissingToken,
            BearerError::Malformed => AuthError::MalformedAuthorization,
        })?;

        let claims = self.tokens.validate(token).map_err(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: UserId::from_uuid(claims.subject),
            expires_at: claims.expires_at,
        })
    }
}

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state(gate, require_bearer_token)`.
pub async fn require_bearer_token(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = gate.authenticate(req.headers())?;

    tracing::debug!(user_id = %user.user_id, "Request authenticated");

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    /// Only present behind [`require_bearer_token`]
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
