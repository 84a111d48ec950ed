//! Line scanner for ICS feeds.

use chrono::NaiveDate;
use tracing::warn;

/// One `VEVENT` entry from a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Unique external ID (`UID`).
    pub uid: Option<String>,
    /// Check-in date. `None` when `DTSTART` is missing or malformed.
    pub start: Option<NaiveDate>,
    /// Check-out date.
    pub end: Option<NaiveDate>,
    /// Summary line, escapes decoded.
    pub summary: Option<String>,
    /// Free-text description, escapes decoded.
    pub description: Option<String>,
}

impl CalendarEvent {
    fn is_empty(&self) -> bool {
        self.uid.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.summary.is_none()
            && self.description.is_none()
    }
}

/// Parse the events of an ICS feed.
///
/// Never fails: malformed dates are logged and left unset, and anything
/// outside a `BEGIN:VEVENT` / `END:VEVENT` pair is ignored. A feed without
/// events yields an empty vector.
pub fn parse_events(feed: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut current: Option<CalendarEvent> = None;

    for line in unfold(feed) {
        if line.starts_with("BEGIN:VEVENT") {
            current = Some(CalendarEvent::default());
            continue;
        }
        if line.starts_with("END:VEVENT") {
            if let Some(event) = current.take() {
                if !event.is_empty() {
                    events.push(event);
                }
            }
            continue;
        }

        let Some(event) = current.as_mut() else {
            continue;
        };

        if line.starts_with("DTSTART") {
            event.start = parse_date(&line);
        } else if line.starts_with("DTEND") {
            event.end = parse_date(&line);
        } else if line.starts_with("SUMMARY") {
            event.summary = value(&line).map(|v| unescape(v.trim()));
        } else if line.starts_with("DESCRIPTION") {
            event.description = value(&line).map(|v| unescape(v.trim()));
        } else if line.starts_with("UID") {
            event.uid = value(&line).map(|v| v.trim().to_string());
        }
    }

    events
}

/// Join RFC 5545 continuation lines onto the line they continue.
fn unfold(feed: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in feed.lines() {
        let is_continuation = raw.starts_with(' ') || raw.starts_with('\t');
        match lines.last_mut() {
            Some(previous) if is_continuation => previous.push_str(&raw[1..]),
            _ => lines.push(raw.to_string()),
        }
    }

    lines
}

/// Text after the first colon (property parameters come before it).
fn value(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value)
}

/// Read a `YYYYMMDD[THHMMSS[Z]]` value as a calendar date.
fn parse_date(line: &str) -> Option<NaiveDate> {
    let Some(raw) = value(line) else {
        warn!("Date line without value: {}", line);
        return None;
    };

    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);

    let parsed = date_part
        .get(..8)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| NaiveDate::parse_from_str(digits, "%Y%m%d").ok());

    if parsed.is_none() {
        warn!("Failed to parse date: {}", raw);
    }

    parsed
}

/// Decode ICS text escapes.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(',') => out.push(','),
            Some(';') => out.push(';'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
