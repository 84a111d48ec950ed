//! WhatsApp Cloud API HTTP client.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::WhatsAppConfig;
use crate::error::WhatsAppError;
use crate::types::{HeaderParameter, SendRequest, SendResult};

/// Client for the WhatsApp Cloud messages endpoint.
///
/// Requests are never retried here; a non-success status is returned as
/// [`WhatsAppError::Rejected`] with the raw response body.
#[derive(Clone)]
pub struct WhatsAppClient {
    http: Client,
    config: WhatsAppConfig,
}

impl WhatsAppClient {
    /// Create a client. Fails immediately when credentials are missing.
    pub fn new(config: WhatsAppConfig) -> Result<Self, WhatsAppError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WhatsAppError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, WhatsAppError> {
        Self::new(WhatsAppConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Post a prepared request to the messages endpoint.
    pub async fn send(&self, request: &SendRequest) -> Result<SendResult, WhatsAppError> {
        let url = self.config.messages_url();
        debug!("WhatsApp send to {}: {}", url, serde_json::to_string(request)?);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("WhatsApp API rejected message ({}): {}", status, body);
            return Err(WhatsAppError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("WhatsApp API accepted message: {}", body);
        Ok(SendResult::from_body(body))
    }

    /// Send a pre-approved template message.
    ///
    /// # Arguments
    /// * `to` - Recipient phone number in international format
    /// * `template_name` - Approved template name
    /// * `language` - Template language code (e.g., "ro")
    /// * `header` - Optional header parameter, placed before the empty body component
    pub async fn send_template(
        &self,
        to: &str,
        template_name: &str,
        language: &str,
        header: Option<HeaderParameter>,
    ) -> Result<SendResult, WhatsAppError> {
        let request = SendRequest::template(to, template_name, language, header);
        self.send(&request).await
    }

    /// Send a free-form text message.
    pub async fn send_text(&self, to: &str, body: &str) -> Result<SendResult, WhatsAppError> {
        let request = SendRequest::text(to, body);
        self.send(&request).await
    }
}
