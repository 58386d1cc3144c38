use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::scribe::ScribeError;

/// Application error type for the HTTP surface
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// Provider call failed (transport error or non-success response)
    Upstream(ScribeError),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Upstream(err) => {
                tracing::error!("Provider error: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::Upstream(err) => write!(f, "Provider error: {err}"),
            AppError::Internal(msg) => write!(f, "Internal server error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ScribeError> for AppError {
    fn from(err: ScribeError) -> Self {
        AppError::Upstream(err)
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
