use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::BackendError;
use crate::application::services::GenerationError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error surfaced to clients as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<BackendError> for ApiError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Status { status, body } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Ollama API error: {}", body),
            ),
            BackendError::Timeout => Self::new(StatusCode::GATEWAY_TIMEOUT, "Request timed out"),
            BackendError::Connection(reason) => Self::new(
                StatusCode::BAD_GATEWAY,
                format!("Error connecting to Ollama: {}", reason),
            ),
            BackendError::InvalidResponse(reason) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", reason),
            ),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::Attachment(e) => Self::bad_request(e.to_string()),
            GenerationError::Backend(e) => e.into(),
        }
    }
}
