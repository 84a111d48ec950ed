//! Configuration types for whatsapp-cloud.

use std::env;
use std::time::Duration;

use crate::error::WhatsAppError;

/// Default Graph API base URL.
pub const DEFAULT_API_URL: &str = "https://graph.facebook.com";

/// Default Graph API version.
pub const DEFAULT_API_VERSION: &str = "v19.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the WhatsApp Cloud API.
#[derive(Clone)]
pub struct WhatsAppConfig {
    /// Graph API base URL (e.g., "https://graph.facebook.com").
    pub api_url: String,
    /// Graph API version segment (e.g., "v19.0").
    pub api_version: String,
    /// Sending phone number ID from the WhatsApp Business account.
    pub phone_number_id: String,
    /// Bearer token for the API.
    pub access_token: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Token expected in the webhook verification handshake.
    pub verify_token: Option<String>,
}

impl WhatsAppConfig {
    /// Create a configuration with default URL, version and timeout.
    pub fn new(phone_number_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            phone_number_id: phone_number_id.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
            verify_token: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `WHATSAPP_API_KEY` - access token
    /// - `WHATSAPP_PHONE_NUMBER_ID` - sending phone number ID
    ///
    /// Optional environment variables:
    /// - `WHATSAPP_API_URL` - API base URL (default: https://graph.facebook.com)
    /// - `WHATSAPP_API_VERSION` - API version (default: v19.0)
    /// - `WHATSAPP_TIMEOUT_SECS` - request timeout (default: 15)
    /// - `WHATSAPP_VERIFY_TOKEN` - webhook verification token
    pub fn from_env() -> Result<Self, WhatsAppError> {
        let access_token = required("WHATSAPP_API_KEY")?;
        let phone_number_id = required("WHATSAPP_PHONE_NUMBER_ID")?;

        let api_url = env::var("WHATSAPP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_version =
            env::var("WHATSAPP_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let timeout = env::var("WHATSAPP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let verify_token = env::var("WHATSAPP_VERIFY_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_url,
            api_version,
            phone_number_id,
            access_token,
            timeout,
            verify_token,
        })
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the webhook verification token.
    pub fn with_verify_token(mut self, token: impl Into<String>) -> Self {
        self.verify_token = Some(token.into());
        self
    }

    /// Get the messages endpoint URL.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/{}/messages",
            self.api_url.trim_end_matches('/'),
            self.api_version,
            self.phone_number_id
        )
    }

    /// Check that credentials are present.
    pub fn validate(&self) -> Result<(), WhatsAppError> {
        if self.access_token.trim().is_empty() {
            return Err(WhatsAppError::Config("access token is empty".to_string()));
        }
        if self.phone_number_id.trim().is_empty() {
            return Err(WhatsAppError::Config("phone number ID is empty".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("phone_number_id", &self.phone_number_id)
            .field("timeout", &self.timeout)
            .field("verify_token", &self.verify_token.as_ref().map(|_| "<set>"))
            .finish_non_exhaustive()
    }
}

fn required(name: &str) -> Result<String, WhatsAppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| WhatsAppError::Config(format!("{} not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        let config = WhatsAppConfig::new("639183785947357", "token");
        assert_eq!(
            config.messages_url(),
            "https://graph.facebook.com/v19.0/639183785947357/messages"
        );

        let config = config.with_api_url("http://127.0.0.1:9000/");
        assert_eq!(
            config.messages_url(),
            "http://127.0.0.1:9000/v19.0/639183785947357/messages"
        );
    }

    #[test]
    fn test_validate() {
        assert!(WhatsAppConfig::new("id", "token").validate().is_ok());
        assert!(WhatsAppConfig::new("id", " ").validate().is_err());
        assert!(WhatsAppConfig::new("", "token").validate().is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = WhatsAppConfig::new("id", "super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    // Environment scenarios share one test; env vars are process-global.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all() {
            for var in [
                "WHATSAPP_API_KEY",
                "WHATSAPP_PHONE_NUMBER_ID",
                "WHATSAPP_API_URL",
                "WHATSAPP_API_VERSION",
                "WHATSAPP_TIMEOUT_SECS",
                "WHATSAPP_VERIFY_TOKEN",
            ] {
                std::env::remove_var(var);
            }
        }

        // Missing token
        clear_all();
        std::env::set_var("WHATSAPP_PHONE_NUMBER_ID", "123");
        match WhatsAppConfig::from_env() {
            Err(WhatsAppError::Config(msg)) => assert!(msg.contains("WHATSAPP_API_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }

        // Missing phone number ID
        clear_all();
        std::env::set_var("WHATSAPP_API_KEY", "token");
        assert!(WhatsAppConfig::from_env().is_err());

        // Defaults
        clear_all();
        std::env::set_var("WHATSAPP_API_KEY", "token");
        std::env::set_var("WHATSAPP_PHONE_NUMBER_ID", "123");
        let config = WhatsAppConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.verify_token.is_none());

        // Overrides
        std::env::set_var("WHATSAPP_API_URL", "http://localhost:9999");
        std::env::set_var("WHATSAPP_API_VERSION", "v21.0");
        std::env::set_var("WHATSAPP_TIMEOUT_SECS", "3");
        std::env::set_var("WHATSAPP_VERIFY_TOKEN", "hook-secret");
        let config = WhatsAppConfig::from_env().unwrap();
        assert_eq!(config.messages_url(), "http://localhost:9999/v21.0/123/messages");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.verify_token.as_deref(), Some("hook-secret"));

        clear_all();
    }
}
