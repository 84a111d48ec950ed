//! Dispatch configuration.

use std::env;
use std::time::Duration;

/// Default number of rooms processed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Default template language code.
pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "ro";

/// Default calendar feed timeout.
pub const DEFAULT_CALENDAR_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings key holding the reception phone number.
pub const HOTEL_PHONE_SETTING: &str = "hotel_phone";

/// Reception number used when no `hotel_phone` setting exists.
pub const DEFAULT_HOTEL_PHONE: &str = "+40700000000";

/// Configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Maximum rooms processed at once. Values below 1 are treated as 1.
    pub concurrency: usize,
    /// Language code for template messages.
    pub template_language: String,
    /// Timeout for each calendar feed request.
    pub calendar_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            template_language: DEFAULT_TEMPLATE_LANGUAGE.to_string(),
            calendar_timeout: DEFAULT_CALENDAR_TIMEOUT,
        }
    }
}

impl DispatchConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DISPATCH_CONCURRENCY` - Rooms processed at once (default: 4)
    /// - `DISPATCH_TEMPLATE_LANGUAGE` - Template language code (default: ro)
    /// - `CALENDAR_TIMEOUT_SECS` - Feed request timeout (default: 10)
    pub fn from_env() -> Self {
        let concurrency = env::var("DISPATCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONCURRENCY);

        let template_language = env::var("DISPATCH_TEMPLATE_LANGUAGE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_LANGUAGE.to_string());

        let calendar_timeout = env::var("CALENDAR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CALENDAR_TIMEOUT);

        Self {
            concurrency,
            template_language,
            calendar_timeout,
        }
    }

    /// Set the concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the calendar timeout.
    pub fn with_calendar_timeout(mut self, timeout: Duration) -> Self {
        self.calendar_timeout = timeout;
        self
    }
}
