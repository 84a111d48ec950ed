//! Application state shared across handlers.

use database::Database;
use dispatcher::Dispatcher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection, for the message log queries.
    pub db: Database,
    /// Dispatch controller.
    pub dispatcher: Dispatcher,
    /// Expected `hub.verify_token` for the webhook handshake.
    pub verify_token: Option<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, dispatcher: Dispatcher, verify_token: Option<String>) -> Self {
        Self {
            db,
            dispatcher,
            verify_token,
        }
    }
}
