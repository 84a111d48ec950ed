//! Dispatch controller.
//!
//! Each room moves through one run as:
//!
//! ```text
//! start ─► fetch feed ─► invalid_feed | fetch_error
//!              │
//!              ▼
//!          find today ─► not_found
//!              │
//!              ▼
//!          check phone ─► no_phone
//!              │
//!              ▼
//!            send ─► sent | send_error
//! ```
//!
//! Every terminal state produces one [`DispatchOutcome`] and one appended
//! [`SentMessageRecord`]. Rooms run on spawned tasks so a panic in one room
//! becomes a `send_error` for that room only. Check-in dates are UTC calendar
//! dates, matching how feed start times are normalized.

use std::sync::{Arc, Mutex};

use booking_core::{
    phone, DispatchOutcome, OutcomeStatus, Room, RunReport, SentMessageRecord,
};
use calendar_feed::{find_today, FeedClient};
use chrono::{NaiveDate, Utc};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use url::Url;
use whatsapp_cloud::HeaderParameter;

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::responder::ReplyGenerator;
use crate::store::BookingStore;
use crate::transport::MessageTransport;

/// Hotel label used when a room's hotel cannot be found.
pub const UNKNOWN_HOTEL: &str = "Unknown";

/// Latest known outcome of a room task, kept so a panic does not lose it.
type Checkpoint = Arc<Mutex<Option<DispatchOutcome>>>;

/// Coordinates feed lookup, reservation matching and message sending.
#[derive(Clone)]
pub struct Dispatcher {
    pub(crate) store: Arc<dyn BookingStore>,
    pub(crate) transport: Arc<dyn MessageTransport>,
    pub(crate) responder: Arc<dyn ReplyGenerator>,
    feeds: FeedClient,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher.
    pub fn new(
        store: Arc<dyn BookingStore>,
        transport: Arc<dyn MessageTransport>,
        responder: Arc<dyn ReplyGenerator>,
        config: DispatchConfig,
    ) -> Result<Self, DispatchError> {
        let feeds = FeedClient::new(config.calendar_timeout)
            .map_err(|e| DispatchError::Configuration(e.to_string()))?;

        Ok(Self {
            store,
            transport,
            responder,
            feeds,
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run today's dispatch over every room.
    pub async fn run_dispatch_for_all_rooms(&self) -> Result<RunReport, DispatchError> {
        self.run_for_all_rooms_on(Utc::now().date_naive()).await
    }

    /// Run the dispatch over every room for a given check-in date.
    ///
    /// Fails only when the transport is unconfigured or rooms cannot be listed.
    /// Outcomes are returned in room order.
    pub async fn run_for_all_rooms_on(&self, today: NaiveDate) -> Result<RunReport, DispatchError> {
        self.transport.check_configured()?;
        let rooms = self.store.list_rooms().await?;

        info!(rooms = rooms.len(), date = %today, "Starting dispatch run");

        let outcomes: Vec<DispatchOutcome> = stream::iter(rooms)
            .map(|room| {
                let template = room.template().to_string();
                self.spawn_room(room, template, today)
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let report = RunReport::from_outcomes(outcomes);
        info!(
            rooms = report.outcomes.len(),
            found = report.found,
            sent = report.sent,
            "Dispatch run finished"
        );
        Ok(report)
    }

    /// Run today's dispatch for one room, optionally with another template.
    pub async fn run_dispatch_for_room(
        &self,
        room_id: i64,
        template_override: Option<&str>,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.run_for_room_on(room_id, template_override, Utc::now().date_naive())
            .await
    }

    /// Run the dispatch for one room and a given check-in date.
    pub async fn run_for_room_on(
        &self,
        room_id: i64,
        template_override: Option<&str>,
        today: NaiveDate,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.transport.check_configured()?;
        let room = self
            .store
            .get_room(room_id)
            .await?
            .ok_or(DispatchError::RoomNotFound(room_id))?;

        let template = template_override
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| room.template())
            .to_string();

        info!(room_id, template = %template, date = %today, "Manual dispatch");
        Ok(self.spawn_room(room, template, today).await)
    }

    async fn spawn_room(&self, room: Room, template: String, today: NaiveDate) -> DispatchOutcome {
        let hotel = self.guarded_hotel_name(room.hotel_id).await;
        let checkpoint = Checkpoint::default();

        let this = self.clone();
        let task_room = room.clone();
        let task_hotel = hotel.clone();
        let task_template = template.clone();
        let task_checkpoint = checkpoint.clone();

        let handle = tokio::spawn(async move {
            this.process_room(task_room, task_hotel, task_template, today, task_checkpoint)
                .await
        });

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let mut outcome = checkpoint
                    .lock()
                    .ok()
                    .and_then(|mut slot| slot.take())
                    .unwrap_or_else(|| {
                        DispatchOutcome::new(&room, hotel, OutcomeStatus::SendError, "")
                    });
                outcome.status = OutcomeStatus::SendError;
                outcome.message = format!("Room processing failed: {}", e);
                log_outcome(&outcome);
                self.guarded_record(&outcome, template, today).await;
                outcome
            }
        }
    }

    async fn process_room(
        &self,
        room: Room,
        hotel: String,
        template: String,
        today: NaiveDate,
        checkpoint: Checkpoint,
    ) -> DispatchOutcome {
        let (outcome, sent_content) = self
            .classify(&room, &hotel, &template, today, &checkpoint)
            .await;
        save_checkpoint(&checkpoint, &outcome);

        log_outcome(&outcome);
        self.record(&outcome, &template, today, sent_content).await;
        outcome
    }

    /// Hotel lookup on its own task; a panic falls back to [`UNKNOWN_HOTEL`].
    async fn guarded_hotel_name(&self, hotel_id: i64) -> String {
        let this = self.clone();
        match tokio::spawn(async move { this.hotel_name(hotel_id).await }).await {
            Ok(name) => name,
            Err(e) => {
                warn!(hotel_id, error = %e, "Hotel lookup panicked");
                UNKNOWN_HOTEL.to_string()
            }
        }
    }

    /// Record a failed room's outcome on its own task so a panicking store
    /// cannot abort the run.
    async fn guarded_record(&self, outcome: &DispatchOutcome, template: String, today: NaiveDate) {
        let this = self.clone();
        let task_outcome = outcome.clone();
        let handle =
            tokio::spawn(async move { this.record(&task_outcome, &template, today, None).await });

        if let Err(e) = handle.await {
            warn!(room_id = outcome.room_id, error = %e, "Recording dispatch outcome panicked");
        }
    }

    /// Walk one room through the state machine. The second value is the
    /// record content for a sent message.
    async fn classify(
        &self,
        room: &Room,
        hotel: &str,
        template: &str,
        today: NaiveDate,
        checkpoint: &Checkpoint,
    ) -> (DispatchOutcome, Option<String>) {
        let outcome = |status, message: String| DispatchOutcome::new(room, hotel, status, message);

        let url = match room.calendar_url.as_deref().map(str::trim) {
            Some(url) if is_http_url(url) => url,
            Some(url) if !url.is_empty() => {
                return (
                    outcome(OutcomeStatus::InvalidFeed, format!("Invalid calendar URL: {}", url)),
                    None,
                )
            }
            _ => {
                return (
                    outcome(OutcomeStatus::InvalidFeed, "Room has no calendar URL".to_string()),
                    None,
                )
            }
        };

        let events = match self.feeds.fetch(url).await {
            Ok(events) => events,
            Err(e) => {
                return (
                    outcome(OutcomeStatus::FetchError, format!("Calendar fetch failed: {}", e)),
                    None,
                )
            }
        };

        if events.is_empty() {
            return (
                outcome(OutcomeStatus::InvalidFeed, "Calendar feed has no events".to_string()),
                None,
            );
        }

        let Some(reservation) = find_today(&events, today) else {
            return (
                outcome(OutcomeStatus::NotFound, format!("No check-in on {}", today)),
                None,
            );
        };

        let guest = reservation.guest_name.clone();
        save_checkpoint(
            checkpoint,
            &outcome(OutcomeStatus::SendError, String::new())
                .with_guest(guest.clone(), reservation.phone.clone()),
        );
        let phone = reservation.phone.clone().or_else(|| {
            room.contact_number
                .as_deref()
                .and_then(phone::normalize)
        });

        let Some(phone) = phone else {
            let message = match &reservation.raw_phone {
                Some(raw) => format!("Unrecognized phone number for {}: {}", guest, raw),
                None => format!("No phone number for {}", guest),
            };
            return (
                outcome(OutcomeStatus::NoPhone, message).with_guest(guest, None),
                None,
            );
        };

        let first_name = reservation.first_name.clone();
        let header = if first_name.is_empty() {
            None
        } else {
            Some(HeaderParameter::text(first_name.as_str()))
        };

        let result = self
            .transport
            .send_template(&phone, template, &self.config.template_language, header)
            .await;

        match result {
            Ok(delivery) if delivery.ok => (
                outcome(
                    OutcomeStatus::Sent,
                    format!("Template {} sent to {} ({})", template, guest, phone),
                )
                .with_guest(guest, Some(phone)),
                Some(format!("Template: {}, First name: {}", template, first_name)),
            ),
            Ok(delivery) => (
                outcome(
                    OutcomeStatus::SendError,
                    format!("WhatsApp rejected message: {}", delivery.detail),
                )
                .with_guest(guest, Some(phone)),
                None,
            ),
            Err(e) => (
                outcome(OutcomeStatus::SendError, e.to_string()).with_guest(guest, Some(phone)),
                None,
            ),
        }
    }

    async fn hotel_name(&self, hotel_id: i64) -> String {
        match self.store.get_hotel(hotel_id).await {
            Ok(Some(hotel)) => hotel.name,
            Ok(None) => UNKNOWN_HOTEL.to_string(),
            Err(e) => {
                warn!(hotel_id, error = %e, "Hotel lookup failed");
                UNKNOWN_HOTEL.to_string()
            }
        }
    }

    /// Append the outcome record. Failures are logged only.
    async fn record(
        &self,
        outcome: &DispatchOutcome,
        template: &str,
        today: NaiveDate,
        sent_content: Option<String>,
    ) {
        let record = SentMessageRecord {
            hotel_id: outcome.hotel_id,
            room_id: outcome.room_id,
            sent_date: today,
            template_name: template.to_string(),
            status: outcome.status,
            content: sent_content.unwrap_or_else(|| outcome.message.clone()),
        };

        if let Err(e) = self.store.append_sent_message(&record).await {
            warn!(room_id = outcome.room_id, error = %e, "Failed to record dispatch outcome");
        }
    }
}

fn save_checkpoint(checkpoint: &Checkpoint, outcome: &DispatchOutcome) {
    if let Ok(mut slot) = checkpoint.lock() {
        *slot = Some(outcome.clone());
    }
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

fn log_outcome(outcome: &DispatchOutcome) {
    if outcome.status.is_error() {
        warn!(
            room_id = outcome.room_id,
            hotel = %outcome.hotel,
            status = %outcome.status,
            "{}",
            outcome.message
        );
    } else {
        info!(
            room_id = outcome.room_id,
            hotel = %outcome.hotel,
            status = %outcome.status,
            "{}",
            outcome.message
        );
    }
}
