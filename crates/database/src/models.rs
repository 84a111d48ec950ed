//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hotel owning one or more rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    /// Reception phone number, shown in guest replies.
    pub phone: Option<String>,
}

/// A monitored room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    /// ICS feed URL.
    pub calendar_url: Option<String>,
    /// Stored guest contact number, used when the booking has none.
    pub contact_number: Option<String>,
    pub template_name: String,
}

/// Fields for inserting a room.
#[derive(Debug, Clone, Default)]
pub struct NewRoom {
    pub hotel_id: i64,
    pub name: String,
    pub calendar_url: Option<String>,
    pub contact_number: Option<String>,
    pub template_name: String,
}

/// A recorded dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SentMessage {
    pub id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
    /// Dispatch date (YYYY-MM-DD).
    pub sent_date: String,
    pub template_name: String,
    /// Outcome status (e.g., "sent", "not_found").
    pub status: String,
    pub content: String,
    pub created_at: String,
}

/// Fields for appending a dispatch outcome.
#[derive(Debug, Clone)]
pub struct NewSentMessage {
    pub hotel_id: i64,
    pub room_id: i64,
    pub sent_date: String,
    pub template_name: String,
    pub status: String,
    pub content: String,
}

/// Optional filters for sent message queries. Dates are inclusive YYYY-MM-DD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFilter {
    pub hotel_id: Option<i64>,
    pub room_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Message counts for one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HotelMessageStats {
    pub hotel_id: i64,
    /// `None` when the hotel row no longer exists.
    pub hotel_name: Option<String>,
    pub total: i64,
    pub sent: i64,
}

/// A logged inbound message and its reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub id: i64,
    pub sender: String,
    pub inbound_text: String,
    pub reply_text: String,
    pub language: String,
    pub delivered: bool,
    pub created_at: String,
}

/// Fields for appending a conversation exchange.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub sender: String,
    pub inbound_text: String,
    pub reply_text: String,
    pub language: String,
    pub delivered: bool,
}
