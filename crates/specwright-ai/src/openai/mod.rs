//! OpenAI chat-completions client.
//!
//! Implements `ModelGateway` against `POST {base_url}/chat/completions`
//! with `stream: true`, decoding the SSE body into text fragments.
//! Any OpenAI-compatible endpoint works through `base_url`.

mod api;
mod client;
mod config;
mod params;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use params::{ModelFamily, MAX_OUTPUT_TOKENS};
