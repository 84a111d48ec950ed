//! Rooms and hotels as seen by the dispatch pipeline.

use serde::{Deserialize, Serialize};

/// Template used when a room has no template name configured.
pub const DEFAULT_TEMPLATE_NAME: &str = "oberth";

/// A bookable unit whose calendar feed is monitored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable room ID.
    pub id: i64,
    /// Owning hotel ID.
    pub hotel_id: i64,
    /// Display name.
    pub name: String,
    /// ICS feed URL. Must be an absolute HTTP(S) URL to be usable.
    pub calendar_url: Option<String>,
    /// Stored WhatsApp contact, if any. Usually discovered per booking instead.
    pub contact_number: Option<String>,
    /// WhatsApp template sent to guests checking in.
    pub template_name: String,
}

impl Room {
    /// Template name to send, falling back to [`DEFAULT_TEMPLATE_NAME`] when blank.
    pub fn template(&self) -> &str {
        let name = self.template_name.trim();
        if name.is_empty() {
            DEFAULT_TEMPLATE_NAME
        } else {
            name
        }
    }
}

/// A hotel owning one or more rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}
