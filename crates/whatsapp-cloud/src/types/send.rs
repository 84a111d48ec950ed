//! Types for sending messages via the WhatsApp Cloud API.

use serde::{Deserialize, Serialize};

/// Top-level body of a `POST /{phone_number_id}/messages` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest {
    /// Always `"whatsapp"`.
    pub messaging_product: &'static str,
    /// Always `"individual"`.
    pub recipient_type: &'static str,
    /// Recipient phone number in international format.
    pub to: String,
    /// Message type and its type-specific body.
    #[serde(flatten)]
    pub content: MessageContent,
}

impl SendRequest {
    /// Build a template message request.
    ///
    /// The components list is the optional header followed by a mandatory empty body.
    pub fn template(
        to: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
        header: Option<HeaderParameter>,
    ) -> Self {
        let mut components = Vec::with_capacity(2);
        if let Some(header) = header {
            components.push(Component::header(header));
        }
        components.push(Component::body());

        Self::new(
            to,
            MessageContent::Template {
                template: Template {
                    name: name.into(),
                    language: Language { code: language.into() },
                    components,
                },
            },
        )
    }

    /// Build a free-form text message request.
    pub fn text(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(
            to,
            MessageContent::Text {
                text: TextBody {
                    body: body.into(),
                    preview_url: None,
                },
            },
        )
    }

    fn new(to: impl Into<String>, content: MessageContent) -> Self {
        Self {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: to.into(),
            content,
        }
    }
}

/// Message type tag and body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Template { template: Template },
    Text { text: TextBody },
}

/// A pre-approved template reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub name: String,
    pub language: Language,
    pub components: Vec<Component>,
}

/// Template language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: String,
}

/// Which part of the template a component fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Header,
    Body,
}

/// A template component with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub parameters: Vec<HeaderParameter>,
}

impl Component {
    /// A header component carrying one parameter.
    pub fn header(parameter: HeaderParameter) -> Self {
        Self {
            kind: ComponentKind::Header,
            parameters: vec![parameter],
        }
    }

    /// An empty body component.
    pub fn body() -> Self {
        Self {
            kind: ComponentKind::Body,
            parameters: Vec::new(),
        }
    }
}

/// A template header parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HeaderParameter {
    Text { text: String },
    Image { image: MediaLink },
    Video { video: MediaLink },
    Document { document: MediaLink },
    Location { location: Location },
}

impl HeaderParameter {
    /// A text header parameter.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// An image header parameter.
    pub fn image(link: impl Into<String>) -> Self {
        Self::Image {
            image: MediaLink::new(link),
        }
    }

    /// A video header parameter.
    pub fn video(link: impl Into<String>) -> Self {
        Self::Video {
            video: MediaLink::new(link),
        }
    }

    /// A document header parameter.
    pub fn document(link: impl Into<String>) -> Self {
        Self::Document {
            document: MediaLink::new(link),
        }
    }

    /// A location header parameter.
    pub fn location(latitude: f64, longitude: f64) -> Self {
        Self::Location {
            location: Location {
                latitude,
                longitude,
                name: None,
                address: None,
            },
        }
    }
}

/// Publicly reachable media URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaLink {
    pub link: String,
}

impl MediaLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

/// Location header value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Text message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<bool>,
}

/// Result of an accepted send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// Message ID assigned by the API, if the response carried one.
    pub message_id: Option<String>,
    /// Raw response body.
    pub detail: String,
}

impl SendResult {
    /// Interpret a 2xx response body. Unknown shapes are kept as raw detail.
    pub fn from_body(body: String) -> Self {
        let message_id = serde_json::from_str::<SendResponse>(&body)
            .ok()
            .and_then(|r| r.messages.into_iter().next())
            .map(|m| m.id);
        Self {
            message_id,
            detail: body,
        }
    }
}

/// Success response from the messages endpoint.
#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    messages: Vec<SentMessageId>,
}

#[derive(Debug, Deserialize)]
struct SentMessageId {
    id: String,
}
