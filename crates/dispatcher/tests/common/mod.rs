//! Shared fakes for dispatcher integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use booking_core::{ConversationRecord, Hotel, Room, SentMessageRecord};
use chrono::NaiveDate;
use dispatcher::{
    async_trait, BookingStore, Delivery, DispatchConfig, DispatchError, Dispatcher,
    MessageTransport,
};
use reply_brain::{ReplyBrain, ReplyBrainConfig};
use whatsapp_cloud::HeaderParameter;

pub const ANA_FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:booking-1\r\n\
DTSTART:20250615T000000Z\r\n\
DTEND:20250617T000000Z\r\n\
SUMMARY:CLOSED - [1001] Ana Pop\r\n\
DESCRIPTION:Phone: +40 722 111 222\\nFirst Name: Ana\\nLast Name: Pop\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const NO_PHONE_FEED: &str = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
DTSTART;VALUE=DATE:20250615\r\n\
SUMMARY:CLOSED - [2002] Jonas Weber\r\n\
DESCRIPTION:Email: jonas@example.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const EMPTY_FEED: &str = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";

pub fn room(id: i64, hotel_id: i64, url: Option<&str>) -> Room {
    Room {
        id,
        hotel_id,
        name: format!("Room {}", id),
        calendar_url: url.map(str::to_string),
        contact_number: None,
        template_name: "oberth".to_string(),
    }
}

pub fn hotel(id: i64, name: &str) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        phone: None,
    }
}

/// In-memory store.
#[derive(Default)]
pub struct MemoryStore {
    pub rooms: Vec<Room>,
    pub hotels: Vec<Hotel>,
    pub settings: HashMap<String, String>,
    pub records: Mutex<Vec<SentMessageRecord>>,
    pub conversations: Mutex<Vec<ConversationRecord>>,
    pub fail_writes: bool,
    /// Room whose outcome writes panic.
    pub panic_writes_for: Option<i64>,
}

impl MemoryStore {
    pub fn new(rooms: Vec<Room>, hotels: Vec<Hotel>) -> Self {
        Self {
            rooms,
            hotels,
            ..Default::default()
        }
    }

    pub fn records(&self) -> Vec<SentMessageRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn conversations(&self) -> Vec<ConversationRecord> {
        self.conversations.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list_rooms(&self) -> Result<Vec<Room>, DispatchError> {
        Ok(self.rooms.clone())
    }

    async fn get_room(&self, room_id: i64) -> Result<Option<Room>, DispatchError> {
        Ok(self.rooms.iter().find(|r| r.id == room_id).cloned())
    }

    async fn get_hotel(&self, hotel_id: i64) -> Result<Option<Hotel>, DispatchError> {
        Ok(self.hotels.iter().find(|h| h.id == hotel_id).cloned())
    }

    async fn append_sent_message(&self, record: &SentMessageRecord) -> Result<(), DispatchError> {
        if self.fail_writes {
            return Err(DispatchError::Store("disk full".to_string()));
        }
        if self.panic_writes_for == Some(record.room_id) {
            panic!("store write panicked");
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, DispatchError> {
        Ok(self.settings.get(key).cloned())
    }

    async fn append_conversation(&self, record: &ConversationRecord) -> Result<(), DispatchError> {
        if self.fail_writes {
            return Err(DispatchError::Store("disk full".to_string()));
        }
        self.conversations.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCall {
    pub to: String,
    pub template: String,
    pub language: String,
    pub header: Option<HeaderParameter>,
}

/// Transport that records calls and optionally rejects them.
#[derive(Default)]
pub struct RecordingTransport {
    pub unconfigured: bool,
    pub reject: bool,
    pub templates: Mutex<Vec<TemplateCall>>,
    pub texts: Mutex<Vec<(String, String)>>,
}

impl RecordingTransport {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn templates(&self) -> Vec<TemplateCall> {
        self.templates.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<(String, String)> {
        self.texts.lock().unwrap().clone()
    }

    fn delivery(&self) -> Delivery {
        if self.reject {
            Delivery::failed("{\"error\":{\"message\":\"Recipient not in allowed list\"}}")
        } else {
            Delivery::ok("{\"messages\":[{\"id\":\"wamid.test\"}]}")
        }
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    fn check_configured(&self) -> Result<(), DispatchError> {
        if self.unconfigured {
            Err(DispatchError::Configuration("WHATSAPP_API_KEY not set".to_string()))
        } else {
            Ok(())
        }
    }

    async fn send_template(
        &self,
        to: &str,
        template_name: &str,
        language: &str,
        header: Option<HeaderParameter>,
    ) -> Result<Delivery, DispatchError> {
        self.templates.lock().unwrap().push(TemplateCall {
            to: to.to_string(),
            template: template_name.to_string(),
            language: language.to_string(),
            header,
        });
        Ok(self.delivery())
    }

    async fn send_text(&self, to: &str, body: &str) -> Result<Delivery, DispatchError> {
        self.texts
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(self.delivery())
    }
}

/// Transport that panics when sending a template.
pub struct PanickingTransport;

#[async_trait]
impl MessageTransport for PanickingTransport {
    fn check_configured(&self) -> Result<(), DispatchError> {
        Ok(())
    }

    async fn send_template(
        &self,
        _to: &str,
        _template_name: &str,
        _language: &str,
        _header: Option<HeaderParameter>,
    ) -> Result<Delivery, DispatchError> {
        panic!("transport panicked");
    }

    async fn send_text(&self, _to: &str, _body: &str) -> Result<Delivery, DispatchError> {
        panic!("transport panicked");
    }
}

/// ICS feed with Ana Pop checking in on `date`.
pub fn feed_starting(date: NaiveDate) -> String {
    ANA_FEED.replace("20250615T000000Z", &format!("{}T000000Z", date.format("%Y%m%d")))
}

/// Dispatcher over the fakes, with fallback-only replies.
pub fn dispatcher(store: Arc<MemoryStore>, transport: Arc<dyn MessageTransport>) -> Dispatcher {
    let brain = ReplyBrain::new(ReplyBrainConfig::default()).unwrap();
    let config = DispatchConfig::default()
        .with_calendar_timeout(Duration::from_millis(300))
        .with_concurrency(3);
    Dispatcher::new(store, transport, Arc::new(brain), config).unwrap()
}
