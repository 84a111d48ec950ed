//! Outbound message transport seam.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;
use whatsapp_cloud::{HeaderParameter, WhatsAppClient, WhatsAppError};

use crate::error::DispatchError;

/// Result of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub ok: bool,
    /// Transport response body or error text.
    pub detail: String,
}

impl Delivery {
    pub fn ok(detail: impl Into<String>) -> Self {
        Self {
            ok: true,
            detail: detail.into(),
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            detail: detail.into(),
        }
    }
}

/// Trait for sending outbound guest messages.
///
/// Transport failures are reported as `Delivery { ok: false, .. }`; only
/// missing credentials are an `Err`. Implementations must not retry.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Fail fast when credentials are missing.
    fn check_configured(&self) -> Result<(), DispatchError>;

    /// Send a pre-approved template message.
    async fn send_template(
        &self,
        to: &str,
        template_name: &str,
        language: &str,
        header: Option<HeaderParameter>,
    ) -> Result<Delivery, DispatchError>;

    /// Send a free-form text message.
    async fn send_text(&self, to: &str, body: &str) -> Result<Delivery, DispatchError>;
}

fn delivery_from(result: Result<whatsapp_cloud::SendResult, WhatsAppError>) -> Result<Delivery, DispatchError> {
    match result {
        Ok(sent) => Ok(Delivery::ok(sent.detail)),
        Err(WhatsAppError::Config(msg)) => Err(DispatchError::Configuration(msg)),
        Err(WhatsAppError::Rejected { status, body }) => {
            warn!("WhatsApp rejected message with status {}", status);
            Ok(Delivery::failed(body))
        }
        Err(e) => Ok(Delivery::failed(e.to_string())),
    }
}

#[async_trait]
impl MessageTransport for WhatsAppClient {
    fn check_configured(&self) -> Result<(), DispatchError> {
        self.config()
            .validate()
            .map_err(|e| DispatchError::Configuration(e.to_string()))
    }

    async fn send_template(
        &self,
        to: &str,
        template_name: &str,
        language: &str,
        header: Option<HeaderParameter>,
    ) -> Result<Delivery, DispatchError> {
        delivery_from(
            WhatsAppClient::send_template(self, to, template_name, language, header).await,
        )
    }

    async fn send_text(&self, to: &str, body: &str) -> Result<Delivery, DispatchError> {
        delivery_from(WhatsAppClient::send_text(self, to, body).await)
    }
}
