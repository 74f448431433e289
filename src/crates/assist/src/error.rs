//! Error types for the assist client.
//!
//! These are internal to the crate: the public operations absorb every
//! variant and return a fallback value instead. They exist so the fallible
//! request path can use `?` and so the absorbed failure can be logged with
//! a useful shape.

use thiserror::Error;

/// Result type for the fallible request path.
pub type Result<T> = std::result::Result<T, AssistError>;

/// Errors that can occur while talking to the AI backend. A missing API
/// key is not an error: the public operations short-circuit to their
/// keyless fallback before any request exists.
#[derive(Debug, Error)]
pub enum AssistError {
    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API authentication failure (401/403).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other non-success status from the backend.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response arrived but did not match the requested shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for AssistError {
    fn from(err: serde_json::Error) -> Self {
        AssistError::InvalidResponse(err.to_string())
    }
}
