//! Inbound guest message flow.

use booking_core::{ConversationRecord, InboundMessage};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{DEFAULT_HOTEL_PHONE, HOTEL_PHONE_SETTING};
use crate::dispatcher::Dispatcher;

/// Result of answering one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InboundResult {
    pub delivered: bool,
}

/// Reply preview for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyPreview {
    pub reply: String,
    pub detected_language: String,
}

impl Dispatcher {
    /// Answer an inbound guest message in its language.
    ///
    /// The reply is sent before the exchange is logged; a logging failure
    /// does not affect the result.
    pub async fn handle_inbound_message(&self, message: InboundMessage) -> InboundResult {
        let hotel_phone = self.hotel_phone().await;
        let guest_name = message.sender_name.as_deref().unwrap_or("");

        let reply = self
            .responder
            .generate_reply(&message.text, guest_name, &hotel_phone)
            .await;

        let delivered = match self.transport.send_text(&message.sender, &reply.text).await {
            Ok(delivery) => {
                if !delivery.ok {
                    warn!(sender = %message.sender, detail = %delivery.detail, "Reply rejected");
                }
                delivery.ok
            }
            Err(e) => {
                warn!(sender = %message.sender, error = %e, "Reply not sent");
                false
            }
        };

        info!(
            sender = %message.sender,
            language = reply.language,
            delivered,
            "Answered guest message"
        );

        let record = ConversationRecord {
            sender: message.sender,
            inbound_text: message.text,
            reply_text: reply.text,
            language: reply.language.to_string(),
            delivered,
        };
        if let Err(e) = self.store.append_conversation(&record).await {
            warn!(sender = %record.sender, error = %e, "Failed to log conversation");
        }

        InboundResult { delivered }
    }

    /// Generate a reply without sending or logging it.
    pub async fn generate_reply_preview(&self, text: &str, guest_name: &str) -> ReplyPreview {
        let hotel_phone = self.hotel_phone().await;
        let reply = self
            .responder
            .generate_reply(text, guest_name, &hotel_phone)
            .await;

        ReplyPreview {
            reply: reply.text,
            detected_language: reply.language.to_string(),
        }
    }

    async fn hotel_phone(&self) -> String {
        match self.store.get_setting(HOTEL_PHONE_SETTING).await {
            Ok(Some(phone)) if !phone.trim().is_empty() => phone.trim().to_string(),
            Ok(_) => DEFAULT_HOTEL_PHONE.to_string(),
            Err(e) => {
                warn!(error = %e, "Failed to read hotel phone setting");
                DEFAULT_HOTEL_PHONE.to_string()
            }
        }
    }
}
