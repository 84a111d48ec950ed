//! WhatsApp Cloud API client library.
//!
//! This crate provides a Rust client for the WhatsApp Business Cloud API.
//! It supports:
//!
//! - Sending pre-approved template messages with an optional header parameter
//! - Sending free-form text replies inside the customer service window
//! - Decoding inbound webhook notifications
//!
//! # Example
//!
//! ```no_run
//! use whatsapp_cloud::{HeaderParameter, WhatsAppClient, WhatsAppConfig};
//!
//! # async fn example() -> Result<(), whatsapp_cloud::WhatsAppError> {
//! let config = WhatsAppConfig::new("123456789", "access-token");
//! let client = WhatsAppClient::new(config)?;
//!
//! let header = HeaderParameter::text("Ana");
//! let result = client
//!     .send_template("+40722111222", "oberth", "ro", Some(header))
//!     .await?;
//! println!("Accepted as {:?}", result.message_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WhatsAppClient;
pub use config::WhatsAppConfig;
pub use error::WhatsAppError;
pub use types::*;
