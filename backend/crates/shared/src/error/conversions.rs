//! Error conversions
//!
//! Store error classification and the single HTTP rendering used for every
//! failure response.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "axum")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation`
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether the error is a unique-constraint violation.
///
/// Repositories use this to turn a losing registration race into `Conflict`.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.as_ref() == PG_UNIQUE_VIOLATION),
        _ => false,
    }
}

// ============================================================================
// Axum rendering (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side details stay in the logs
        let message = if self.kind() == ErrorKind::InternalServerError {
            ErrorKind::InternalServerError.as_str().to_lowercase()
        } else {
            self.message().to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_non_database_errors_are_not_conflicts() {
        use super::is_unique_violation;

        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_error_body_shape() {
        use super::*;
        use axum::response::IntoResponse;

        let response =
            AppError::new(ErrorKind::Unauthorized, "invalid email or password").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "invalid email or password" }));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_internal_error_hides_details() {
        use super::*;
        use axum::response::IntoResponse;

        let response = AppError::internal("connection reset by peer at 10.0.0.3").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "internal server error");
    }
}
