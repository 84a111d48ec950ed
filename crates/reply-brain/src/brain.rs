//! ReplyBrain implementation using a chat completion API.

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::ReplyBrainConfig;
use crate::error::ReplyError;
use crate::language::detect_language;
use crate::locale::Locale;

/// Where a reply's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Generated,
    Fallback,
}

/// A reply ready to send to the guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Never empty.
    pub text: String,
    /// Detected language of the inbound message.
    pub language: &'static str,
    pub source: ReplySource,
}

/// Produces short localized replies to guest messages.
pub struct ReplyBrain {
    client: Client,
    config: ReplyBrainConfig,
}

impl ReplyBrain {
    /// Create a new ReplyBrain with the given configuration.
    pub fn new(config: ReplyBrainConfig) -> Result<Self, ReplyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ReplyError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        if config.api_key.is_some() {
            info!("ReplyBrain initialized with model: {}", config.model);
        } else {
            info!("ReplyBrain initialized without API key, using fallback replies");
        }

        Ok(Self { client, config })
    }

    /// Create a ReplyBrain from environment variables.
    pub fn from_env() -> Result<Self, ReplyError> {
        Self::new(ReplyBrainConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ReplyBrainConfig {
        &self.config
    }

    /// Generate a reply to `text` in its detected language.
    ///
    /// Never fails: any API problem yields the localized fallback of greeting,
    /// thanks and a contact line with `hotel_phone`. A generated reply that does
    /// not mention `hotel_phone` gets the contact line appended.
    pub async fn generate_reply(&self, text: &str, guest_name: &str, hotel_phone: &str) -> Reply {
        let language = detect_language(text);
        let locale = Locale::for_code(language);

        match self.chat_completion(locale, text, guest_name).await {
            Ok(generated) => {
                let text = if hotel_phone.is_empty() || generated.contains(hotel_phone) {
                    generated
                } else {
                    format!("{} {}", generated, locale.contact_line(hotel_phone))
                };
                Reply {
                    text,
                    language,
                    source: ReplySource::Generated,
                }
            }
            Err(e) => {
                match e {
                    ReplyError::Configuration(_) => debug!("Using fallback reply: {}", e),
                    _ => warn!("Reply generation failed, using fallback: {}", e),
                }
                Reply {
                    text: locale.fallback_reply(guest_name, hotel_phone),
                    language,
                    source: ReplySource::Fallback,
                }
            }
        }
    }

    /// Make a chat completion request and return the trimmed reply text.
    async fn chat_completion(
        &self,
        locale: &Locale,
        text: &str,
        guest_name: &str,
    ) -> Result<String, ReplyError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ReplyError::Configuration("no API key configured".to_string()))?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(locale.instruction),
                ChatMessage::user(locale.task_for(text, guest_name)),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to reply API: {:?}", request);

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReplyError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReplyError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(ReplyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ReplyError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .reply_text()
            .ok_or_else(|| ReplyError::MalformedResponse("no reply content".to_string()))
    }
}
