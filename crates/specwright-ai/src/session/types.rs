//! Session types: errors, the turn stream, and the per-turn buffer.

use futures_util::stream::BoxStream;
use specwright_common::{DocType, UnknownDocType};

use crate::ProviderError;

/// Fragments of one turn, borrowing the session until dropped.
pub type TurnStream<'a> = BoxStream<'a, Result<String, SessionError>>;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("invalid document type: {0}")]
    InvalidDocType(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<UnknownDocType> for SessionError {
    fn from(e: UnknownDocType) -> Self {
        SessionError::InvalidDocType(e.0)
    }
}

/// Text assembled so far for one model call.
#[derive(Debug, Default)]
pub struct StreamingTurn {
    buffer: String,
    fragments: usize,
}

impl StreamingTurn {
    pub fn push(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
        self.fragments += 1;
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn into_text(self) -> String {
        self.buffer
    }
}

/// Where the system prompt of a turn comes from.
#[derive(Debug, Clone)]
pub(super) enum SystemPrompt {
    Text(String),
    /// Document template, resolved against the reference file when the
    /// turn starts.
    Document(DocType),
}

/// What a completed turn is recorded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TurnKind {
    /// User and assistant messages appended to history.
    Exchange,
    /// Assistant text stored as the opening; history untouched.
    Greeting,
}

impl TurnKind {
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            TurnKind::Exchange => "exchange",
            TurnKind::Greeting => "greeting",
        }
    }
}
