//! API error type with the error-flagged JSON envelope clients expect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::dialogue::Condition;

/// Error envelope mirroring the analysis payload shape, so clients can
/// render failures in the chat transcript unchanged. `isError` is the
/// flag existing frontends key on.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub response: String,
    pub detected_symptoms: Vec<String>,
    pub possible_conditions: Vec<Condition>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// User-facing apology placed in the `response` field of the
    /// envelope. Detail stays in the logs, not on the wire.
    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error while processing your request. \
         Please try again."
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(%detail, "Rejected API request");
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            response: self.apology().to_string(),
            detected_symptoms: vec![],
            possible_conditions: vec![],
            is_error: true,
        };

        (status, Json(body)).into_response()
    }
}
