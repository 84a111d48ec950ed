//! Reply preview endpoint.

use axum::extract::State;
use axum::Json;
use dispatcher::ReplyPreview;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub message: String,
    #[serde(default)]
    pub guest_name: Option<String>,
}

/// Generate a reply without sending it.
pub async fn test_ai_response(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Json<ReplyPreview> {
    let preview = state
        .dispatcher
        .generate_reply_preview(&req.message, req.guest_name.as_deref().unwrap_or(""))
        .await;
    Json(preview)
}
