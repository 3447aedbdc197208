use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use colloquy_core::error::PayloadError;
use colloquy_render::error::RenderError;

/// Unified API error type for all route handlers.
///
/// Missing or disabled personas are not errors here: the chat routes turn
/// them into the not-found page themselves.
#[derive(Debug)]
pub enum ApiError {
    MalformedPayload(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MalformedPayload(msg) => {
                tracing::warn!("rejected payload: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        ApiError::MalformedPayload(e.to_string())
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
