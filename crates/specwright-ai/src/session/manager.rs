//! Session struct and conversation state.

use std::path::PathBuf;
use std::sync::Arc;

use specwright_common::{DocType, SessionId};
use tracing::info;

use crate::catalog::ModelCatalog;
use crate::gateway::ModelGateway;
use crate::prompts::DEFAULT_CHAT_PROMPT;
use crate::reference::ReferenceDocument;
use crate::{Message, Role};

use super::types::SessionError;

/// One interview: history, active model, and the settings used to
/// synthesize documents from it.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) gateway: Arc<dyn ModelGateway>,
    pub(super) catalog: ModelCatalog,
    pub(super) current_model: String,
    /// Completed user/assistant messages, plus at most one dangling user turn
    /// per failed or abandoned call.
    pub(super) history: Vec<Message>,
    /// Greeting produced by `greet`, kept out of `history`.
    pub(super) opening: Option<Message>,
    pub(super) chat_prompt: String,
    pub(super) doc_type: DocType,
    pub(super) reference: ReferenceDocument,
}

impl Session {
    /// Start an empty session on the catalog's default model.
    pub fn new(gateway: Arc<dyn ModelGateway>, catalog: ModelCatalog) -> Self {
        let id = SessionId::new();
        let current_model = catalog.default_model().to_string();
        info!(session = %id.short(), model = %current_model, "Session created");
        Self {
            id,
            gateway,
            catalog,
            current_model,
            history: Vec::new(),
            opening: None,
            chat_prompt: DEFAULT_CHAT_PROMPT.to_string(),
            doc_type: DocType::default(),
            reference: ReferenceDocument::none(),
        }
    }

    /// Replace the default interview prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.chat_prompt = prompt.into();
        self
    }

    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = doc_type;
        self
    }

    pub fn with_reference_document(mut self, path: Option<PathBuf>) -> Self {
        self.reference = ReferenceDocument::new(path);
        self
    }

    /// Switch models. Unknown ids leave the session unchanged.
    pub fn change_model(&mut self, model: &str) -> Result<(), SessionError> {
        if !self.catalog.contains(model) {
            return Err(SessionError::InvalidModel(model.to_string()));
        }
        info!(session = %self.id.short(), from = %self.current_model, to = %model, "Model changed");
        self.current_model = model.to_string();
        Ok(())
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn current_model(&self) -> &str {
        &self.current_model
    }

    pub fn supported_models(&self) -> &[String] {
        self.catalog.models()
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn opening(&self) -> Option<&Message> {
        self.opening.as_ref()
    }

    pub fn reference_document(&self) -> &ReferenceDocument {
        &self.reference
    }

    /// Raw history, for assertions in tests.
    #[cfg(any(test, feature = "testing"))]
    pub fn messages(&self) -> &[Message] {
        &self.history
    }

    /// Completed `(user, assistant)` exchanges in order.
    ///
    /// A user message counts only when the next message answers it, so
    /// unanswered turns left by failed or abandoned calls are skipped.
    pub fn history_for_display(&self) -> Vec<(&Message, &Message)> {
        self.history
            .windows(2)
            .filter(|pair| pair[0].role == Role::User && pair[1].role == Role::Assistant)
            .map(|pair| (&pair[0], &pair[1]))
            .collect()
    }

    /// `[system] + [opening] + history + [user]`.
    pub(super) fn build_outbound(&self, system: &str, user_text: &str) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.history.len() + 3);
        if !system.trim().is_empty() {
            msgs.push(Message::system(system));
        }
        if let Some(ref opening) = self.opening {
            msgs.push(opening.clone());
        }
        msgs.extend(self.history.iter().cloned());
        msgs.push(Message {
            role: Role::User,
            content: user_text.to_string(),
        });
        msgs
    }
}
