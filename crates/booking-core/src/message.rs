//! Inbound guest messages and the conversation log.

use serde::{Deserialize, Serialize};

/// A guest message delivered through the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Sender address (phone number in wire form).
    pub sender: String,
    /// Free text body.
    pub text: String,
    /// Sender display name, if the transport provided one.
    pub sender_name: Option<String>,
}

impl InboundMessage {
    /// Create an inbound message without a display name.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            sender_name: None,
        }
    }

    /// Set the sender display name.
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }
}

/// One answered inbound exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub sender: String,
    pub inbound_text: String,
    pub reply_text: String,
    pub language: String,
    pub delivered: bool,
}
