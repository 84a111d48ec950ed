//! Check-in dispatch controller.
//!
//! For every monitored room the [`Dispatcher`] fetches the room's calendar
//! feed, picks the booking that checks in today, normalizes the guest phone
//! number and sends a pre-approved WhatsApp template. Each room yields one
//! [`booking_core::DispatchOutcome`] and one persisted record, whatever
//! happened. Inbound guest messages are answered in their own language.
//!
//! Collaborators sit behind traits so tests can replace them:
//!
//! - [`BookingStore`] - rooms, hotels, settings and the append-only logs
//! - [`MessageTransport`] - outbound WhatsApp messages
//! - [`ReplyGenerator`] - guest reply text

mod config;
mod dispatcher;
mod error;
mod inbound;
mod responder;
mod store;
mod transport;

pub use config::{
    DispatchConfig, DEFAULT_CALENDAR_TIMEOUT, DEFAULT_CONCURRENCY, DEFAULT_HOTEL_PHONE,
    DEFAULT_TEMPLATE_LANGUAGE, HOTEL_PHONE_SETTING,
};
pub use dispatcher::{Dispatcher, UNKNOWN_HOTEL};
pub use error::DispatchError;
pub use inbound::{InboundResult, ReplyPreview};
pub use responder::ReplyGenerator;
pub use store::{BookingStore, SqliteStore};
pub use transport::{Delivery, MessageTransport};

// Re-export for implementors of the seams.
pub use async_trait::async_trait;
