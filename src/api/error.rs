//! HTTP error type.
//!
//! All errors map to appropriate HTTP status codes via the `IntoResponse` impl.
//! Store failures are logged server-side and returned to clients as a generic
//! message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Student 'a1b2c3d4e5f6' not found")]
    pub error: String,
}

/// API error type.
///
/// Maps to HTTP status codes:
/// - BadRequest: 400 Bad Request
/// - NotFound: 404 Not Found
/// - Conflict: 409 Conflict
/// - ServiceUnavailable: 503 Service Unavailable
/// - Internal: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(message) => {
                tracing::warn!(reason = %message, "Rejected request");
                message
            }
            ApiError::NotFound(message) | ApiError::Conflict(message) => message,
            ApiError::ServiceUnavailable(reason) => {
                tracing::warn!(target: "mentorship.availability", reason = %reason, "Store unavailable");
                "Service temporarily unavailable".to_string()
            }
            ApiError::Internal(err) => {
                tracing::error!(target: "mentorship.database", error = %err, "Store operation failed");
                "An internal error occurred".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { message } => ApiError::BadRequest(message),
            ServiceError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ServiceError::Conflict { message } => ApiError::Conflict(message),
            ServiceError::Unavailable { message } => ApiError::ServiceUnavailable(message),
            ServiceError::Database { message } => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
