//! # HTTP Error Mapping
//!
//! Errors cross this boundary exactly once: validation failures become
//! 422 with a per-field detail array, storage failures become 500 with
//! truncated text. Handlers never map errors themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::gateway::GatewayError;
use crate::schema::ValidationFailure;

/// Maximum length of an error message exposed to clients.
const MAX_ERROR_DETAIL: usize = 200;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-boundary errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected by the validation layer
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// Storage operation failed
    #[error("{0}")]
    Storage(#[from] GatewayError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let violations = match &self {
            ApiError::Validation(failure) => serde_json::to_value(&failure.violations).ok(),
            ApiError::Storage(_) => None,
        };
        let body = ErrorResponse {
            error: truncate_detail(&self.to_string()),
            code: status.as_u16(),
            violations,
        };
        (status, Json(body)).into_response()
    }
}

/// Clip error text so driver internals do not leak verbatim.
pub fn truncate_detail(message: &str) -> String {
    message.chars().take(MAX_ERROR_DETAIL).collect()
}
