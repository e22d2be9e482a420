//! Request-level error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors a request handler can end in.
///
/// Each variant maps to exactly one status class; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input (400)
    #[error("{0}")]
    Validation(String),

    /// Missing session or insufficient role (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Unknown slug, id or locale (404)
    #[error("{0} not found")]
    NotFound(String),

    /// Store unreachable, template failure, anything unexpected (500)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to a client. Internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Log server-side failures. Client errors are not logged.
    pub(crate) fn log(&self) {
        if let AppError::Internal(e) = self {
            error!("Request failed: {:#}", e);
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("Name is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::not_found("Artist").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = AppError::Internal(anyhow::anyhow!("connection refused at 10.0.0.3"));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::validation("Title and content are required");
        assert_eq!(err.public_message(), "Title and content are required");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::not_found("Post").public_message(), "Post not found");
    }

    #[test]
    fn test_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
