//! Configuration for ReplyBrain.

use std::env;
use std::time::Duration;

/// Configuration for ReplyBrain.
#[derive(Clone)]
pub struct ReplyBrainConfig {
    /// Chat completion API base URL.
    pub api_url: String,

    /// API key. Without one every reply uses the fallback.
    pub api_key: Option<String>,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for the reply.
    pub max_tokens: u32,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: f32,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ReplyBrainConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 150,
            temperature: 0.7,
            timeout: Duration::from_secs(20),
        }
    }
}

impl ReplyBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `REPLY_API_KEY` - API key (absent: fallback replies only)
    /// - `REPLY_API_URL` - API URL (default: https://api.openai.com)
    /// - `REPLY_MODEL` - Model name (default: gpt-4o-mini)
    /// - `REPLY_MAX_TOKENS` - Max tokens (default: 150)
    /// - `REPLY_TEMPERATURE` - Temperature (default: 0.7)
    /// - `REPLY_TIMEOUT_SECS` - Request timeout (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("REPLY_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let api_url = env::var("REPLY_API_URL").unwrap_or(defaults.api_url);
        let model = env::var("REPLY_MODEL").unwrap_or(defaults.model);

        let max_tokens = env::var("REPLY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_tokens);

        let temperature = env::var("REPLY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.temperature);

        let timeout = env::var("REPLY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> ReplyBrainConfigBuilder {
        ReplyBrainConfigBuilder::default()
    }

    /// Chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for ReplyBrainConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyBrainConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for ReplyBrainConfig.
#[derive(Debug, Default)]
pub struct ReplyBrainConfigBuilder {
    config: ReplyBrainConfig,
}

impl ReplyBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ReplyBrainConfig {
        self.config
    }
}
