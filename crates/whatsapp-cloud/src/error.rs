//! Error types for whatsapp-cloud.

use thiserror::Error;

/// Errors that can occur when talking to the WhatsApp Cloud API.
#[derive(Debug, Error)]
pub enum WhatsAppError {
    /// HTTP request failed (connection, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status. The raw body is kept for diagnostics.
    #[error("WhatsApp API error ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Missing or invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
