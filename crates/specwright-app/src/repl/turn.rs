//! Drives one turn stream to the terminal (and optionally the artifact).

use std::future::Future;
use std::io::Write;

use futures_util::StreamExt;
use specwright_ai::{SessionError, TurnStream};
use tracing::warn;

use crate::artifact::ArtifactSink;

/// How a turn ended.
#[derive(Debug)]
pub enum TurnOutcome {
    Completed,
    Failed(SessionError),
    /// Abandoned by the user; the stream was dropped.
    Interrupted,
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Print fragments as they arrive until the stream ends or `interrupt` fires.
pub async fn drive<W, F>(
    mut stream: TurnStream<'_>,
    out: &mut W,
    mut sink: Option<&mut ArtifactSink>,
    interrupt: F,
) -> std::io::Result<TurnOutcome>
where
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            item = stream.next() => match item {
                Some(Ok(fragment)) => {
                    out.write_all(fragment.as_bytes())?;
                    out.flush()?;
                    if let Some(artifact) = sink.as_mut() {
                        if let Err(e) = artifact.write(&fragment).await {
                            warn!(path = %artifact.path().display(), error = %e, "Artifact write failed");
                            sink = None;
                        }
                    }
                }
                Some(Err(e)) => {
                    writeln!(out)?;
                    writeln!(out, "error: {e}")?;
                    return Ok(TurnOutcome::Failed(e));
                }
                None => {
                    writeln!(out)?;
                    return Ok(TurnOutcome::Completed);
                }
            },
            _ = &mut interrupt => {
                writeln!(out)?;
                writeln!(out, "(interrupted)")?;
                return Ok(TurnOutcome::Interrupted);
            }
        }
    }
}
