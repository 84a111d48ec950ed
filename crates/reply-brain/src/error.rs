//! Error types for reply-brain.

use thiserror::Error;

/// Errors from the generative reply API.
///
/// These never reach callers of [`crate::ReplyBrain::generate_reply`]; they
/// select the fallback path and are logged.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// No API key, or the HTTP client could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connection failure or timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status from the API.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body had no usable reply text.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
