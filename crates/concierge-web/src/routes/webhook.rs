//! WhatsApp webhook endpoints.

use axum::extract::{Query, State};
use axum::Json;
use booking_core::InboundMessage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use whatsapp_cloud::WebhookPayload;

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Query parameters of the verification handshake.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: usize,
}

/// Answer the subscription handshake by echoing the challenge.
pub async fn verify(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<String> {
    let expected = state.verify_token.as_deref().ok_or(WebError::Forbidden)?;

    if params.mode.as_deref() == Some("subscribe")
        && params.verify_token.as_deref() == Some(expected)
    {
        info!("Webhook verified");
        Ok(params.challenge.unwrap_or_default())
    } else {
        Err(WebError::Forbidden)
    }
}

/// Accept a notification and answer each text message in the background.
pub async fn receive(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Json<WebhookAck> {
    let messages = payload.text_messages();
    debug!("Webhook notification with {} text messages", messages.len());

    for incoming in &messages {
        let mut message = InboundMessage::new(&incoming.from, &incoming.body);
        if let Some(name) = &incoming.name {
            message = message.with_sender_name(name);
        }

        let dispatcher = state.dispatcher.clone();
        tokio::spawn(async move {
            dispatcher.handle_inbound_message(message).await;
        });
    }

    Json(WebhookAck {
        received: messages.len(),
    })
}
