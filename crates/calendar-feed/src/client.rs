//! HTTP fetcher for calendar feeds.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::parser::{parse_events, CalendarEvent};

/// Default timeout for a single feed request.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for downloading and parsing ICS feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
}

impl FeedClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Unreachable(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// Fetch a feed and parse its events.
    ///
    /// Network errors, timeouts and non-2xx answers are errors. A reachable
    /// feed with no events is `Ok` with an empty vector.
    pub async fn fetch(&self, url: &str) -> Result<Vec<CalendarEvent>, FeedError> {
        debug!("Fetching calendar feed: {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FeedError::Unreachable(format!("failed to read feed body: {}", e)))?;

        let events = parse_events(&text);
        debug!("Parsed {} events from {}", events.len(), url);
        Ok(events)
    }

    /// Fetch a feed, logging failures and returning an empty vector instead.
    pub async fn fetch_events(&self, url: &str) -> Vec<CalendarEvent> {
        match self.fetch(url).await {
            Ok(events) => {
                if events.is_empty() {
                    warn!("No events found in calendar feed {}", url);
                }
                events
            }
            Err(e) => {
                warn!("Calendar fetch failed for {}: {}", url, e);
                Vec::new()
            }
        }
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self {
            http: Client::builder()
                .timeout(DEFAULT_FEED_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}
