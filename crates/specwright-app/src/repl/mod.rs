//! Line-oriented terminal front end.
//!
//! Each input line becomes a `Command`. Streaming commands print fragments
//! as they arrive; `/doc` also writes them to the artifact file.

mod command;
mod turn;

#[cfg(test)]
mod tests;

use std::io::Write;

use specwright_ai::{Session, SessionError};
use specwright_common::DocType;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::artifact::ArtifactWriter;
use crate::transcript;

pub use command::Command;
pub use turn::{ctrl_c, drive, TurnOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    session: Session,
    artifact: ArtifactWriter,
}

impl Repl {
    pub fn new(session: Session, artifact: ArtifactWriter) -> Self {
        Self { session, artifact }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn artifact(&self) -> &ArtifactWriter {
        &self.artifact
    }

    /// Read commands until `/quit`, end of input, or Ctrl-C at the prompt.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        writeln!(
            out,
            "{}",
            transcript::banner(self.session.current_model(), self.session.doc_type().as_str())
        )?;

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = ctrl_c() => None,
            };
            let Some(line) = line else {
                writeln!(out)?;
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };

            if self.handle(command, out).await? == Flow::Quit {
                break;
            }
        }

        info!(session = %self.session.id().short(), "Session ended");
        Ok(())
    }

    pub async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> std::io::Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Say(text) => {
                let stream = self.session.respond(text, None);
                drive(stream, out, None, ctrl_c()).await?;
            }
            Command::Start => {
                let stream = self.session.greet();
                drive(stream, out, None, ctrl_c()).await?;
            }
            Command::Doc(name) => {
                let doc_type = match name.map(|n| n.parse::<DocType>()).transpose() {
                    Ok(doc_type) => doc_type,
                    Err(e) => {
                        writeln!(out, "error: {}", SessionError::from(e))?;
                        return Ok(Flow::Continue);
                    }
                };
                self.write_document(doc_type, out).await?;
            }
            Command::Model(id) => match self.session.change_model(&id) {
                Ok(()) => writeln!(out, "model: {id}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Models => {
                let models = transcript::render_models(
                    self.session.supported_models(),
                    self.session.current_model(),
                );
                write!(out, "{models}")?;
            }
            Command::History => {
                let text = transcript::render_history(
                    self.session.opening(),
                    &self.session.history_for_display(),
                );
                write!(out, "{text}")?;
            }
            Command::Help => writeln!(out, "{}", transcript::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn write_document<W: Write>(
        &mut self,
        doc_type: Option<DocType>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let mut sink = match self.artifact.begin().await {
            Ok(sink) => Some(sink),
            Err(e) => {
                warn!(error = %e, "Could not open artifact, printing only");
                writeln!(out, "warning: document will not be saved: {e}")?;
                None
            }
        };

        let stream = match doc_type {
            Some(doc_type) => self.session.synthesize_as(doc_type),
            None => self.session.synthesize(),
        };
        let outcome = drive(stream, out, sink.as_mut(), ctrl_c()).await?;

        if let TurnOutcome::Failed(ref e) = outcome {
            warn!(error = %e, "Document incomplete");
        }

        if let Some(sink) = sink {
            let path = sink.finish().await?;
            if matches!(outcome, TurnOutcome::Completed) {
                writeln!(out, "Document written to {}", path.display())?;
            }
        }
        Ok(())
    }
}
