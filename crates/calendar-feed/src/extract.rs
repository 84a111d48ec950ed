//! Guest details from booking descriptions.

use std::sync::LazyLock;

use booking_core::phone;
use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::parser::CalendarEvent;

/// Guest name used when neither the description nor the summary names one.
pub const UNKNOWN_GUEST: &str = "Unknown";

// Labels and values share one line; `[ \t]*` keeps an empty label from taking the next line.
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Phone:[ \t]*([+0-9 ]+)").unwrap());
static FIRST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"First Name:[ \t]*([^\r\n]+)").unwrap());
static LAST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Last Name:[ \t]*([^\r\n]+)").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Email:[ \t]*([^\r\n]+)").unwrap());
static COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Company Name:[ \t]*([^\r\n]+)").unwrap());
static NOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Notes:[ \t]*([^\r\n]+)").unwrap());

/// A booking checking in today, with the guest fields pulled out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReservation {
    /// Full guest name, or [`UNKNOWN_GUEST`].
    pub guest_name: String,
    /// First token of the guest name; empty for an unknown guest.
    pub first_name: String,
    /// Phone text as written in the description.
    pub raw_phone: Option<String>,
    /// Phone in international form. `None` when missing or unrecognized.
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    /// The event the fields were taken from.
    pub event: CalendarEvent,
}

/// Select the first event (in feed order) starting on `today`.
///
/// Events without a start date never match.
pub fn find_today(events: &[CalendarEvent], today: NaiveDate) -> Option<ExtractedReservation> {
    let event = events.iter().find(|e| e.start == Some(today))?;
    debug!(
        "Found reservation for {}: {}",
        today,
        event.summary.as_deref().unwrap_or_default()
    );
    Some(extract(event))
}

/// Pull guest fields out of an event's description and summary.
pub fn extract(event: &CalendarEvent) -> ExtractedReservation {
    let description = event.description.as_deref().unwrap_or_default();

    let raw_phone = capture(&PHONE, description).filter(|p| !p.is_empty());
    let phone = raw_phone.as_deref().and_then(phone::normalize);

    let guest_name = name_from_description(description)
        .or_else(|| event.summary.as_deref().and_then(name_from_summary))
        .unwrap_or_else(|| UNKNOWN_GUEST.to_string());

    let first_name = if guest_name == UNKNOWN_GUEST {
        String::new()
    } else {
        guest_name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    };

    ExtractedReservation {
        guest_name,
        first_name,
        raw_phone,
        phone,
        email: capture(&EMAIL, description),
        company: capture(&COMPANY, description),
        notes: capture(&NOTES, description),
        event: event.clone(),
    }
}

/// First capture group of the first match, trimmed.
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn name_from_description(description: &str) -> Option<String> {
    let first = capture(&FIRST_NAME, description).filter(|s| !s.is_empty())?;
    let last = capture(&LAST_NAME, description).filter(|s| !s.is_empty())?;
    Some(format!("{} {}", first, last))
}

/// Name from a channel-manager summary like `CLOSED - [7788] Ana Pop SRL`.
fn name_from_summary(summary: &str) -> Option<String> {
    if !summary.contains("CLOSED - [") {
        return None;
    }

    let (_, rest) = summary.split_once("] ")?;
    let mut tokens = rest.split(' ').filter(|t| !t.is_empty());
    let first = tokens.next()?;
    let last = tokens.next()?;
    Some(format!("{} {}", first, last))
}
