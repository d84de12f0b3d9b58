//! Conversation engine for Specwright.
//!
//! Provides:
//! - the `ModelGateway` seam and an OpenAI chat-completions client behind it
//! - Server-Sent Events decoding for token-by-token responses
//! - `Session`, which owns the conversation history and turns it into
//!   either an interview reply or a requirements/design document

pub mod catalog;
pub mod gateway;
pub mod openai;
pub mod prompts;
pub mod reference;
pub mod session;
pub mod streaming;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use catalog::ModelCatalog;
pub use gateway::{FragmentStream, ModelGateway};
pub use openai::{ModelFamily, OpenAiClient, OpenAiConfig};
pub use reference::{ReferenceDocument, ReferenceUnavailable};
pub use session::{Session, SessionError, TurnStream};
pub use specwright_common::DocType;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Any fault reported by the model provider.
///
/// The gateway never retries; whichever variant occurs ends the stream.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Authentication failed: {0}")]
    AuthError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
