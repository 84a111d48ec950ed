//! Error types for calendar-feed.

use thiserror::Error;

/// Errors that can occur while fetching a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure or timeout.
    #[error("calendar unreachable: {0}")]
    Unreachable(String),

    /// The calendar host answered with a non-success status.
    #[error("calendar host returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
