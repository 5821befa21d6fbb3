//! Unified error handling
//!
//! Application-level error type and JSON error responses.
//!
//! | Variant | Status | Surfaced message |
//! |--------------|--------|---------------------------------|
//! | NotFound | 404 | resource description |
//! | Validation | 400 | validation message |
//! | Unconfigured | 400 | which integration is missing |
//! | External | 500 | upstream error message |
//! | Internal | 500 | generic (details logged only) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An external integration is not configured on this deployment
    #[error("Integration not configured: {0}")]
    Unconfigured(String),

    /// An external dependency was reached but failed; the upstream
    /// message is surfaced to the caller
    #[error("External service error: {0}")]
    External(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            AppError::Unconfigured(msg) => (StatusCode::BAD_REQUEST, "not_configured", msg.clone()),
            AppError::External(msg) => {
                error!(target: "external", error = %msg, "External dependency failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "external_error", msg.clone())
            }
            AppError::Internal(err) => {
                // Log internal errors without exposing details
                error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unconfigured(msg: impl Into<String>) -> Self {
        Self::Unconfigured(msg.into())
    }

    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(msg.into()))
    }
}
