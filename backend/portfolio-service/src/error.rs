/// Error types for Portfolio Service
///
/// This module defines all error types that can occur in the portfolio-service.
/// Errors are converted to appropriate HTTP responses for API clients. Only two
/// body shapes are produced: `{error, details}` for validation failures and a
/// bare `{error}` for everything else.
use crate::models::{FieldViolation, ValidationError};
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result type for portfolio-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned for every unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Payload rejected by an insert schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resource not found; the message is returned to the caller as-is
    #[error("{0}")]
    NotFound(String),

    /// Verb not supported on this route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything else; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Bare error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error body for rejected payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub error: String,
    pub details: Vec<FieldViolation>,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    /// JSON body sent to the client for this error
    pub fn body(&self) -> serde_json::Value {
        let body = match self {
            AppError::Validation(err) => serde_json::to_value(ValidationErrorBody {
                error: err.message().to_string(),
                details: err.violations.clone(),
            }),
            other => serde_json::to_value(ErrorBody {
                error: other.public_message(),
            }),
        };
        body.unwrap_or_else(|_| serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }))
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.message().to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Log the cause of server-side failures. Client errors are not logged
    /// here; the request logger already records their status.
    pub fn log(&self) {
        if let AppError::Internal(cause) = self {
            tracing::error!(error = %cause, "request failed");
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;
    use serde_json::json;

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = AppError::Internal("lock poisoned at storage.rs:42".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), json!({"error": "Internal server error"}));
    }

    #[test]
    fn validation_errors_carry_details() {
        let err = AppError::from(ValidationError::new(
            EntityKind::MediaItem,
            vec![FieldViolation::invalid_json("expected value at line 1 column 1")],
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.body();
        assert_eq!(body["error"], "Invalid media item data");
        assert_eq!(body["details"][0]["code"], "invalid_json");
        assert_eq!(body["details"][0]["path"], json!([]));
    }

    #[test]
    fn not_found_and_method_not_allowed_bodies() {
        assert_eq!(
            AppError::not_found("Post not found").body(),
            json!({"error": "Post not found"})
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::MethodNotAllowed.body(),
            json!({"error": "Method not allowed"})
        );
    }
}
