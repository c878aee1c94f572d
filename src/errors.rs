// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the pipeline can surface to a caller
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum GourmetError {
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal server error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

/// Convert GourmetError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for GourmetError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            GourmetError::AddressNotFound(_) => (StatusCode::NOT_FOUND, "ADDRESS_NOT_FOUND"),
            GourmetError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            GourmetError::ExternalApi(_) => (StatusCode::BAD_GATEWAY, "EXTERNAL_API_ERROR"),
            GourmetError::RateLimitExceeded => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED")
            }
            GourmetError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GourmetError::AddressNotFound(_) => StatusCode::NOT_FOUND,
            GourmetError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GourmetError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            GourmetError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            GourmetError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
