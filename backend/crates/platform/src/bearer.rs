//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>`. The header must split on single
//! spaces into exactly two parts and the first part must be the literal
//! scheme; anything else is malformed.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Expected authorization scheme (case-sensitive)
pub const BEARER_SCHEME: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header, or an empty one
    #[error("no token provided")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("invalid token format")]
    Malformed,
}

/// Extract the token from the `Authorization` header
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?;

    if value.is_empty() {
        return Err(BearerError::Missing);
    }

    let value = value.to_str().map_err(|_| BearerError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(BearerError::Missing));
        assert_eq!(extract_bearer(&headers_with("")), Err(BearerError::Missing));
    }

    #[test]
    fn test_malformed_header() {
        for value in [
            "Bearer",
            "Bearer ",
            "bearer abc",
            "Basic dXNlcjpwYXNz",
            "Bearer abc def",
            "Bearer  abc",
            "abc",
            "Token abc",
        ] {
            assert_eq!(
                extract_bearer(&headers_with(value)),
                Err(BearerError::Malformed),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        );
        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }
}
