//! Per-request failures and how they reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::http::response::{json_response, raw_response, TEXT_PLAIN};

/// Errors a single request can hit. None of them affect the listener.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// A numeric query parameter did not parse.
    #[error("Invalid value '{value}' for query parameter '{name}'")]
    InvalidQuery { name: &'static str, value: String },

    /// `/status` was asked for a code that cannot end a response.
    #[error("Status code {0} is not a final status (200..=999)")]
    InvalidStatus(u16),

    /// The request body could not be read.
    #[error("Failed to read request body: {0}")]
    Body(#[from] axum::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ResponderError {
    pub fn status(&self) -> StatusCode {
        match self {
            ResponderError::InvalidQuery { .. }
            | ResponderError::InvalidStatus(_)
            | ResponderError::Body(_) => StatusCode::BAD_REQUEST,
            ResponderError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResponderError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "Request failed");

        let payload = match &self {
            ResponderError::InvalidQuery { name, value } => json!({
                "error": "Invalid query parameter",
                "parameter": name,
                "value": value,
            }),
            other => json!({ "error": other.to_string() }),
        };

        json_response(status, &payload).unwrap_or_else(|_| {
            raw_response(status, TEXT_PLAIN, status.as_str().as_bytes().to_vec())
        })
    }
}
