//! Shared domain types for the check-in concierge.
//!
//! This crate defines the values that flow between the calendar feed,
//! the WhatsApp transport, the reply brain and the dispatch controller:
//!
//! - [`Room`] / [`Hotel`] - units read from the administrative store
//! - [`DispatchOutcome`] / [`RunReport`] - per-room results of a dispatch run
//! - [`SentMessageRecord`] - the row appended for every outcome
//! - [`InboundMessage`] - a guest message delivered by the webhook
//! - [`phone::normalize`] - raw phone text to international form
//!
//! # Example
//!
//! ```rust
//! use booking_core::phone;
//!
//! assert_eq!(phone::normalize("0722 111 222").as_deref(), Some("+40722111222"));
//! assert_eq!(phone::normalize("n/a"), None);
//! ```

mod message;
mod outcome;
pub mod phone;
mod room;

pub use message::{ConversationRecord, InboundMessage};
pub use outcome::{DispatchOutcome, OutcomeStatus, RunReport, SentMessageRecord};
pub use room::{Hotel, Room, DEFAULT_TEMPLATE_NAME};
