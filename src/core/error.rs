//! Typed error handling for the agora engine
//!
//! Two things can actually go wrong here: a pluggable fetch can fail, and
//! the HTTP layer can receive parameters it refuses even after defensive
//! defaulting. Invalid UI selections are deliberately *not* errors — the
//! controls offer closed enumerations, so out-of-enum input is ignored as a
//! no-op (see the controller setters).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the agora engine
#[derive(Debug)]
pub enum AgoraError {
    /// The pluggable fetch rejected. The controller logs this, returns to
    /// Idle, and keeps the last known-good displayed collection.
    Fetch { message: String },

    /// A query parameter was unusable even after defaulting
    InvalidParam { param: String, value: String },

    /// Internal engine errors (should not happen in normal operation)
    Internal(String),
}

impl AgoraError {
    /// Wrap a fetch failure coming out of a [`ListingFetcher`] implementation
    ///
    /// [`ListingFetcher`]: crate::core::fetch::ListingFetcher
    pub fn fetch(err: anyhow::Error) -> Self {
        AgoraError::Fetch {
            message: format!("{err:#}"),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AgoraError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AgoraError::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            AgoraError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AgoraError::Fetch { .. } => "FETCH_FAILED",
            AgoraError::InvalidParam { .. } => "INVALID_PARAM",
            AgoraError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AgoraError::InvalidParam { param, value } => Some(serde_json::json!({
                "param": param,
                "value": value,
            })),
            _ => None,
        }
    }
}

impl fmt::Display for AgoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgoraError::Fetch { message } => write!(f, "Listings fetch failed: {}", message),
            AgoraError::InvalidParam { param, value } => {
                write!(f, "Invalid value '{}' for parameter '{}'", value, param)
            }
            AgoraError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AgoraError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AgoraError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AgoraError {
    fn from(err: anyhow::Error) -> Self {
        AgoraError::fetch(err)
    }
}

/// A specialized Result type for agora operations
pub type AgoraResult<T> = Result<T, AgoraError>;
