//! Model provider connection settings.

use serde::{Deserialize, Serialize};

/// Connection settings for the OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Seconds allowed to establish the connection.
    pub connect_timeout: u32,
    /// Seconds allowed for a whole streamed response.
    pub request_timeout: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            connect_timeout: 10,
            request_timeout: 300,
        }
    }
}
