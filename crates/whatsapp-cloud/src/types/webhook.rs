//! Types for inbound webhook notifications.
//!
//! Every field defaults so that unrelated change notifications (statuses,
//! template reviews) decode without error and simply yield no messages.

use serde::Deserialize;

use super::TextBody;

/// Webhook notification body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookChange {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: ChangeValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub messages: Vec<WebhookMessage>,
    #[serde(default)]
    pub statuses: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub wa_id: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookMessage {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextBody>,
}

/// A decoded inbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingText {
    /// Sender phone number as reported (digits, no leading `+`).
    pub from: String,
    /// Sender profile name, when the contact block carried one.
    pub name: Option<String>,
    pub body: String,
    pub message_id: String,
}

impl WebhookPayload {
    /// All text messages in the notification, in delivery order.
    pub fn text_messages(&self) -> Vec<IncomingText> {
        let mut out = Vec::new();
        for change in self.entry.iter().flat_map(|e| e.changes.iter()) {
            let value = &change.value;
            for message in &value.messages {
                if message.kind != "text" {
                    continue;
                }
                let Some(text) = &message.text else {
                    continue;
                };
                let name = value
                    .contacts
                    .iter()
                    .find(|c| c.wa_id == message.from)
                    .or_else(|| value.contacts.first())
                    .and_then(|c| c.profile.as_ref())
                    .map(|p| p.name.trim().to_string())
                    .filter(|n| !n.is_empty());
                out.push(IncomingText {
                    from: message.from.clone(),
                    name,
                    body: text.body.clone(),
                    message_id: message.id.clone(),
                });
            }
        }
        out
    }
}
