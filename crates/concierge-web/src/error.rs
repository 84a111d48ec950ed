//! Error types for the web layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dispatcher::DispatchError;
use thiserror::Error;

/// Errors returned by handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Dispatch could not start.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Invalid request parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Webhook verification failed.
    #[error("Verification failed")]
    Forbidden,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            WebError::Dispatch(DispatchError::RoomNotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Dispatch(err) => {
                tracing::error!("Dispatch error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Forbidden => StatusCode::FORBIDDEN,
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, WebError>;
