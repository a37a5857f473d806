// web_app/error.rs - Backend call errors
//
// Server functions flatten these into `ServerFnError` strings, so the
// client can only see the Display text. Auth failures carry a fixed
// prefix that `is_auth_failure` recognizes on the other side.

use thiserror::Error;

/// Prefix every auth failure message starts with
pub const AUTH_FAILURE_MARKER: &str = "unauthorized:";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 or 403 from the backend
    #[error("unauthorized: backend answered {0}")]
    Unauthorized(u16),

    #[error("backend error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected before anything was sent
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Classifies a non-success status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized(status),
            _ => ApiError::Status {
                status,
                message: summarize_body(body),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Pulls `detail` out of a FastAPI-style error body, else the trimmed text.
fn summarize_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no details".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

/// True when a server function error string came from an auth failure.
///
/// Leptos prefixes the message with its own error kind, so this looks
/// for the marker anywhere in the text.
pub fn is_auth_failure(message: &str) -> bool {
    message.contains(AUTH_FAILURE_MARKER)
}
