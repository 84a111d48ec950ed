//! Booking calendar feeds.
//!
//! Fetches a room's ICS feed, scans it into [`CalendarEvent`]s and picks the
//! booking checking in on a given day.
//!
//! The parser is deliberately narrow: only `BEGIN:VEVENT`, `END:VEVENT`,
//! `UID`, `DTSTART`, `DTEND`, `SUMMARY` and `DESCRIPTION` lines are read.
//! Folded lines are unfolded and text escapes decoded before matching.
//!
//! # Example
//!
//! ```rust
//! use calendar_feed::{find_today, parse_events};
//! use chrono::NaiveDate;
//!
//! let feed = "BEGIN:VCALENDAR\r\n\
//!     BEGIN:VEVENT\r\n\
//!     DTSTART:20250615T000000Z\r\n\
//!     DESCRIPTION:Phone: +40 722 111 222\\nFirst Name: Ana\\nLast Name: Pop\r\n\
//!     END:VEVENT\r\n\
//!     END:VCALENDAR\r\n";
//!
//! let events = parse_events(feed);
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let reservation = find_today(&events, today).unwrap();
//! assert_eq!(reservation.guest_name, "Ana Pop");
//! assert_eq!(reservation.phone.as_deref(), Some("+40722111222"));
//! ```

mod client;
mod error;
mod extract;
mod parser;

pub use client::{FeedClient, DEFAULT_FEED_TIMEOUT};
pub use error::FeedError;
pub use extract::{extract, find_today, ExtractedReservation, UNKNOWN_GUEST};
pub use parser::{parse_events, CalendarEvent};
