//! Dispatch outcomes and run reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::room::Room;

/// Terminal classification of one room's processing within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Template message accepted by the transport.
    Sent,
    /// No booking checks in today.
    NotFound,
    /// Booking found but no usable phone number.
    NoPhone,
    /// Calendar URL unusable, or the feed parsed to zero events.
    InvalidFeed,
    /// Calendar host unreachable, timed out or answered non-2xx.
    FetchError,
    /// Transport rejected the message, or processing failed unexpectedly.
    SendError,
}

impl OutcomeStatus {
    /// Wire name, as stored in the sent message log.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Sent => "sent",
            OutcomeStatus::NotFound => "not_found",
            OutcomeStatus::NoPhone => "no_phone",
            OutcomeStatus::InvalidFeed => "invalid_feed",
            OutcomeStatus::FetchError => "fetch_error",
            OutcomeStatus::SendError => "send_error",
        }
    }

    /// Whether this status represents a failure worth a warning.
    pub fn is_error(&self) -> bool {
        !matches!(self, OutcomeStatus::Sent | OutcomeStatus::NotFound)
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one room in a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub room_id: i64,
    pub room: String,
    pub hotel_id: i64,
    pub hotel: String,
    pub status: OutcomeStatus,
    /// Human-readable detail.
    pub message: String,
    /// Whether a booking checking in today was found.
    pub reservation_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl DispatchOutcome {
    /// Create an outcome for a room.
    pub fn new(
        room: &Room,
        hotel: impl Into<String>,
        status: OutcomeStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room.id,
            room: room.name.clone(),
            hotel_id: room.hotel_id,
            hotel: hotel.into(),
            status,
            message: message.into(),
            reservation_found: false,
            guest: None,
            phone: None,
        }
    }

    /// Attach the guest found in today's booking.
    pub fn with_guest(mut self, guest: impl Into<String>, phone: Option<String>) -> Self {
        self.reservation_found = true;
        self.guest = Some(guest.into());
        self.phone = phone;
        self
    }
}

/// Aggregate result of a dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Rooms with a booking checking in today.
    pub found: usize,
    /// Rooms whose message was sent.
    pub sent: usize,
    /// Per-room outcomes, in room order.
    pub outcomes: Vec<DispatchOutcome>,
}

impl RunReport {
    /// Build a report from ordered outcomes.
    pub fn from_outcomes(outcomes: Vec<DispatchOutcome>) -> Self {
        let found = outcomes.iter().filter(|o| o.reservation_found).count();
        let sent = outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Sent)
            .count();
        Self {
            found,
            sent,
            outcomes,
        }
    }
}

/// One row of the sent message log, appended for every outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessageRecord {
    pub hotel_id: i64,
    pub room_id: i64,
    pub sent_date: NaiveDate,
    pub template_name: String,
    pub status: OutcomeStatus,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room {
            id: 7,
            hotel_id: 3,
            name: "Apartment 7".to_string(),
            calendar_url: Some("https://example.com/7.ics".to_string()),
            contact_number: None,
            template_name: "oberth".to_string(),
        }
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OutcomeStatus::InvalidFeed).unwrap();
        assert_eq!(json, "\"invalid_feed\"");
        assert_eq!(OutcomeStatus::NoPhone.to_string(), "no_phone");
        assert!(OutcomeStatus::FetchError.is_error());
        assert!(!OutcomeStatus::NotFound.is_error());
    }

    #[test]
    fn test_report_counts() {
        let outcomes = vec![
            DispatchOutcome::new(&room(), "Hotel", OutcomeStatus::Sent, "ok")
                .with_guest("Ana Pop", Some("+40722111222".to_string())),
            DispatchOutcome::new(&room(), "Hotel", OutcomeStatus::NoPhone, "no phone")
                .with_guest("Unknown", None),
            DispatchOutcome::new(&room(), "Hotel", OutcomeStatus::NotFound, "none"),
        ];

        let report = RunReport::from_outcomes(outcomes);
        assert_eq!(report.found, 2);
        assert_eq!(report.sent, 1);
        assert_eq!(report.outcomes.len(), 3);
    }

    #[test]
    fn test_outcome_omits_missing_guest() {
        let outcome = DispatchOutcome::new(&room(), "Hotel", OutcomeStatus::NotFound, "none");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "not_found");
        assert!(json.get("guest").is_none());
        assert_eq!(json["room_id"], 7);
    }
}
