//! Operator dispatch triggers.

use axum::extract::State;
use axum::Json;
use booking_core::DispatchOutcome;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// Result of a full dispatch run.
#[derive(Debug, Serialize)]
pub struct SearchAndSendResponse {
    pub message: String,
    pub found: usize,
    pub sent: usize,
    pub details: Vec<DispatchOutcome>,
}

/// Request to dispatch one room.
#[derive(Debug, Deserialize)]
pub struct ManualRequest {
    pub room_id: i64,
    #[serde(default)]
    pub template_name: Option<String>,
}

/// Run today's dispatch over all rooms.
///
/// Succeeds whenever the run starts, even if individual rooms failed.
pub async fn search_and_send(State(state): State<AppState>) -> Result<Json<SearchAndSendResponse>> {
    info!("Dispatch triggered on demand");
    let report = state.dispatcher.run_dispatch_for_all_rooms().await?;

    Ok(Json(SearchAndSendResponse {
        message: format!(
            "Processed {} rooms: {} check-ins today, {} messages sent",
            report.outcomes.len(),
            report.found,
            report.sent
        ),
        found: report.found,
        sent: report.sent,
        details: report.outcomes,
    }))
}

/// Run today's dispatch for one room.
pub async fn manual(
    State(state): State<AppState>,
    Json(req): Json<ManualRequest>,
) -> Result<Json<DispatchOutcome>> {
    let outcome = state
        .dispatcher
        .run_dispatch_for_room(req.room_id, req.template_name.as_deref())
        .await?;
    Ok(Json(outcome))
}
