// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// The request to the chat service never produced a response.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        network_error_text(self.to_string())
    }
}

pub const NETWORK_ERROR: &str = "Network error";

/// Platform message, or the generic fallback when it carries no text.
pub fn network_error_text(text: String) -> String {
    if text.trim().is_empty() {
        NETWORK_ERROR.to_string()
    } else {
        text
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, "bad_request", m.as_str()),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}
