//! Streaming turn methods for Session (respond, synthesize, greet).

use futures_util::StreamExt;
use specwright_common::DocType;
use tracing::{debug, info, warn};

use crate::prompts::{self, GREETING_PROMPT, GREETING_TRIGGER};
use crate::Message;

use super::manager::Session;
use super::types::{SessionError, StreamingTurn, SystemPrompt, TurnKind, TurnStream};

impl Session {
    /// Answer one user message.
    ///
    /// `system_prompt` overrides the session's interview prompt for this
    /// turn only. The user message joins history when the stream is first
    /// polled; the reply joins it once the stream completes.
    pub fn respond(
        &mut self,
        user_text: impl Into<String>,
        system_prompt: Option<&str>,
    ) -> TurnStream<'_> {
        let system = system_prompt
            .map(str::to_string)
            .unwrap_or_else(|| self.chat_prompt.clone());
        self.run_turn(TurnKind::Exchange, SystemPrompt::Text(system), user_text.into())
    }

    /// Write a document of the session's configured type from the interview so far.
    pub fn synthesize(&mut self) -> TurnStream<'_> {
        let doc_type = self.doc_type;
        self.synthesize_as(doc_type)
    }

    /// Write a document of the given type from the interview so far.
    pub fn synthesize_as(&mut self, doc_type: DocType) -> TurnStream<'_> {
        let trigger = prompts::document_trigger(doc_type).to_string();
        self.run_turn(TurnKind::Exchange, SystemPrompt::Document(doc_type), trigger)
    }

    /// Ask the model for an opening question. On completion it replaces
    /// the stored opening; history is never touched.
    pub fn greet(&mut self) -> TurnStream<'_> {
        self.run_turn(
            TurnKind::Greeting,
            SystemPrompt::Text(GREETING_PROMPT.to_string()),
            GREETING_TRIGGER.to_string(),
        )
    }

    fn run_turn(&mut self, kind: TurnKind, system: SystemPrompt, user_text: String) -> TurnStream<'_> {
        let session = self;

        let turn = async_stream::try_stream! {
            let system = match system {
                SystemPrompt::Text(text) => text,
                SystemPrompt::Document(doc_type) => {
                    debug!(session = %session.id.short(), doc_type = %doc_type, "Synthesizing document");
                    let example = session.reference.load_or_warn().await;
                    prompts::document_prompt(doc_type, example.as_deref())
                }
            };

            let outbound = match kind {
                TurnKind::Exchange => session.build_outbound(&system, &user_text),
                TurnKind::Greeting => vec![Message::system(system), Message::user(user_text.clone())],
            };
            if kind == TurnKind::Exchange {
                session.history.push(Message::user(user_text));
            }

            info!(
                session = %session.id.short(),
                kind = kind.as_str(),
                model = %session.current_model,
                messages = outbound.len(),
                "Turn started"
            );

            let mut fragments = session.gateway.stream(&session.current_model, outbound);
            let mut buffer = StreamingTurn::default();

            while let Some(item) = fragments.next().await {
                match item {
                    Ok(fragment) => {
                        buffer.push(&fragment);
                        yield fragment;
                    }
                    Err(e) => {
                        warn!(
                            session = %session.id.short(),
                            kind = kind.as_str(),
                            fragments = buffer.fragments(),
                            error = %e,
                            "Turn failed"
                        );
                        Err::<(), SessionError>(SessionError::Provider(e))?;
                    }
                }
            }

            info!(
                session = %session.id.short(),
                kind = kind.as_str(),
                fragments = buffer.fragments(),
                chars = buffer.text().len(),
                "Turn completed"
            );

            let reply = Message::assistant(buffer.into_text());
            match kind {
                TurnKind::Exchange => session.history.push(reply),
                TurnKind::Greeting => session.opening = Some(reply),
            }
        };

        Box::pin(turn)
    }
}
