//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request input (bad category, malformed payload, failed prediction).
    BadRequest(String),
    /// A model artifact could not be loaded or parsed.
    ModelLoad(String),
    /// The chat agent or LLM call failed.
    Agent(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ModelLoad(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Agent(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        if status.is_server_error() {
            error!("{}", detail);
        }
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
