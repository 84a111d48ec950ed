//! Persistence seam and its SQLite implementation.

use async_trait::async_trait;
use booking_core::{ConversationRecord, Hotel, Room, SentMessageRecord};
use concierge_database::{
    conversation, hotel, models, sent_message, setting, Database, DatabaseError,
};

use crate::error::DispatchError;

/// Storage the dispatcher reads rooms from and appends records to.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All monitored rooms, in a stable order.
    async fn list_rooms(&self) -> Result<Vec<Room>, DispatchError>;

    /// A single room, or `None` if it does not exist.
    async fn get_room(&self, room_id: i64) -> Result<Option<Room>, DispatchError>;

    /// A hotel, or `None` if it does not exist.
    async fn get_hotel(&self, hotel_id: i64) -> Result<Option<Hotel>, DispatchError>;

    /// Append one dispatch outcome record.
    async fn append_sent_message(&self, record: &SentMessageRecord) -> Result<(), DispatchError>;

    /// Read a setting value.
    async fn get_setting(&self, key: &str) -> Result<Option<String>, DispatchError>;

    /// Append one inbound/reply exchange.
    async fn append_conversation(&self, record: &ConversationRecord) -> Result<(), DispatchError>;
}

/// [`BookingStore`] backed by the SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn room_from_row(row: models::Room) -> Room {
    Room {
        id: row.id,
        hotel_id: row.hotel_id,
        name: row.name,
        calendar_url: row.calendar_url,
        contact_number: row.contact_number,
        template_name: row.template_name,
    }
}

fn not_found_as_none<T>(result: Result<T, DatabaseError>) -> Result<Option<T>, DispatchError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DatabaseError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl BookingStore for SqliteStore {
    async fn list_rooms(&self) -> Result<Vec<Room>, DispatchError> {
        let rows = hotel::list_rooms(self.db.pool()).await?;
        Ok(rows.into_iter().map(room_from_row).collect())
    }

    async fn get_room(&self, room_id: i64) -> Result<Option<Room>, DispatchError> {
        let row = not_found_as_none(hotel::get_room(self.db.pool(), room_id).await)?;
        Ok(row.map(room_from_row))
    }

    async fn get_hotel(&self, hotel_id: i64) -> Result<Option<Hotel>, DispatchError> {
        let row = not_found_as_none(hotel::get_hotel(self.db.pool(), hotel_id).await)?;
        Ok(row.map(|h| Hotel {
            id: h.id,
            name: h.name,
            phone: h.phone,
        }))
    }

    async fn append_sent_message(&self, record: &SentMessageRecord) -> Result<(), DispatchError> {
        let row = models::NewSentMessage {
            hotel_id: record.hotel_id,
            room_id: record.room_id,
            sent_date: record.sent_date.format("%Y-%m-%d").to_string(),
            template_name: record.template_name.clone(),
            status: record.status.as_str().to_string(),
            content: record.content.clone(),
        };
        sent_message::append_sent_message(self.db.pool(), &row).await?;
        Ok(())
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, DispatchError> {
        Ok(setting::get_setting(self.db.pool(), key).await?)
    }

    async fn append_conversation(&self, record: &ConversationRecord) -> Result<(), DispatchError> {
        let row = models::NewConversation {
            sender: record.sender.clone(),
            inbound_text: record.inbound_text.clone(),
            reply_text: record.reply_text.clone(),
            language: record.language.clone(),
            delivered: record.delivered,
        };
        conversation::append_conversation(self.db.pool(), &row).await?;
        Ok(())
    }
}
