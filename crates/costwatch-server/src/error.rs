//! Error types for costwatch-server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use costwatch_core::DetectorError;
use serde::Serialize;
use thiserror::Error;

/// Server-level errors (startup, configuration).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// API-level errors, rendered as `{ error, code }` JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Detector(#[from] DetectorError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Detector(DetectorError::InvalidThreshold { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_THRESHOLD")
            }
            ApiError::Detector(DetectorError::MalformedRecord { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MALFORMED_RECORD")
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("x".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Detector(DetectorError::InvalidThreshold { threshold: -1.0 })
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
