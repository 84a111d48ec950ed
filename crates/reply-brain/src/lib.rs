//! Guest reply generation.
//!
//! Detects the language of an inbound guest message and produces a short
//! reply in that language. Replies come from an OpenAI-compatible chat
//! completion API when one is configured; any failure there falls back to a
//! fixed localized greeting with the hotel contact number.
//!
//! # Example
//!
//! ```rust,no_run
//! use reply_brain::{ReplyBrain, ReplyBrainConfig};
//!
//! # async fn example() -> Result<(), reply_brain::ReplyError> {
//! let brain = ReplyBrain::new(ReplyBrainConfig::from_env())?;
//! let reply = brain
//!     .generate_reply("Guten Tag, wann ist der Check-in?", "Jonas", "+40700000000")
//!     .await;
//! assert_eq!(reply.language, "de");
//! # Ok(())
//! # }
//! ```

mod api_types;
mod brain;
mod config;
mod error;
pub mod language;
pub mod locale;

pub use brain::{Reply, ReplyBrain, ReplySource};
pub use config::{ReplyBrainConfig, ReplyBrainConfigBuilder};
pub use error::ReplyError;
pub use language::{detect_language, DEFAULT_LANGUAGE};
pub use locale::Locale;
