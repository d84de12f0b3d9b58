//! OpenAI API client struct and request building.

use crate::{Message, ProviderError};

use super::config::OpenAiConfig;
use super::params::{ModelFamily, MAX_OUTPUT_TOKENS};

/// OpenAI chat-completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// `{base_url}/chat/completions`, tolerating a trailing slash on the base.
    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for a streamed completion.
    pub(crate) fn build_request_body(model: &str, messages: &[Message]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": true,
            "temperature": 0,
        });
        body[ModelFamily::of(model).max_tokens_field()] = serde_json::json!(MAX_OUTPUT_TOKENS);
        body
    }
}
