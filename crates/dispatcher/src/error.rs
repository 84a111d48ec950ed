//! Error types for dispatch operations.

use concierge_database::DatabaseError;
use thiserror::Error;

/// Errors that abort a dispatch call.
///
/// Per-room failures never appear here; they become outcome statuses.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Transport credentials missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Manual trigger for a room that does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(i64),

    /// Persistence layer failure.
    #[error("store error: {0}")]
    Store(String),
}

impl From<DatabaseError> for DispatchError {
    fn from(err: DatabaseError) -> Self {
        DispatchError::Store(err.to_string())
    }
}
