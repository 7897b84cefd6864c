//! Post Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Malformed or missing request input
    #[error("{0}")]
    Validation(String),

    /// Caller does not own the post
    #[error("not allowed to modify another user's post")]
    Forbidden,

    /// Post not found (or soft-deleted)
    #[error("post not found")]
    PostNotFound,

    /// The owning user does not exist
    #[error("user not found")]
    OwnerNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::Forbidden => ErrorKind::Forbidden,
            PostError::PostNotFound | PostError::OwnerNotFound => ErrorKind::NotFound,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::Forbidden => {
                tracing::warn!("Attempt to modify another user's post");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for PostError {
    fn from(rejection: JsonRejection) -> Self {
        PostError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for PostError {
    fn from(rejection: QueryRejection) -> Self {
        PostError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PostError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PostError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(PostError::PostNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(PostError::OwnerNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PostError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_message() {
        let app = PostError::PostNotFound.to_app_error();
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.message(), "post not found");
    }
}
