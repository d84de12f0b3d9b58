//! In-memory gateway for tests.
//!
//! `ScriptedGateway` replays canned replies in order and records every
//! call it serves, so session behavior can be checked without a network.
//! Like a real gateway it does nothing until the returned stream is polled.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::stream::{self, StreamExt};

use crate::gateway::{FragmentStream, ModelGateway};
use crate::{Message, ProviderError};

/// One `stream` invocation as seen by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<Message>,
}

struct Script {
    items: Vec<Result<String, ProviderError>>,
    hang: bool,
}

/// Replays scripted replies, one per `stream` call.
#[derive(Default)]
pub struct ScriptedGateway {
    scripts: Arc<Mutex<VecDeque<Script>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply that emits `fragments` and completes.
    pub fn reply<I, S>(self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(fragments, None, false)
    }

    /// Queue a reply that emits `fragments` and then fails with `error`.
    pub fn fail_after<I, S>(self, fragments: I, error: ProviderError) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(fragments, Some(error), false)
    }

    /// Queue a reply that emits `fragments` and then never finishes.
    pub fn hang_after<I, S>(self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(fragments, None, true)
    }

    fn push<I, S>(self, fragments: I, error: Option<ProviderError>, hang: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<Result<String, ProviderError>> =
            fragments.into_iter().map(|f| Ok(f.into())).collect();
        items.extend(error.map(Err));
        lock(&self.scripts).push_back(Script { items, hang });
        self
    }

    /// Every call whose stream has been polled, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

impl ModelGateway for ScriptedGateway {
    fn stream(&self, model: &str, messages: Vec<Message>) -> FragmentStream {
        let scripts = Arc::clone(&self.scripts);
        let calls = Arc::clone(&self.calls);
        let call = RecordedCall {
            model: model.to_string(),
            messages,
        };

        stream::once(async move {
            lock(&calls).push(call);

            let script = lock(&scripts).pop_front().unwrap_or_else(|| Script {
                items: vec![Err(ProviderError::ApiError("no scripted reply".into()))],
                hang: false,
            });

            let items = stream::iter(script.items);
            if script.hang {
                items.chain(stream::pending()).boxed()
            } else {
                items.boxed()
            }
        })
        .flatten()
        .boxed()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn call_is_recorded_on_first_poll() {
        let gateway = ScriptedGateway::new().reply(["a", "b"]);

        let mut stream = gateway.stream("gpt-4", vec![Message::user("hi")]);
        assert_eq!(gateway.call_count(), 0);

        assert_eq!(stream.next().await.unwrap().unwrap(), "a");
        assert_eq!(
            gateway.calls(),
            vec![RecordedCall {
                model: "gpt-4".into(),
                messages: vec![Message::user("hi")],
            }]
        );
    }

    #[tokio::test]
    async fn dropped_stream_leaves_script_queued() {
        let gateway = ScriptedGateway::new().reply(["first"]);

        drop(gateway.stream("gpt-4", vec![Message::user("ignored")]));

        let fragments: Vec<_> = gateway
            .stream("gpt-4", vec![Message::user("hi")])
            .collect()
            .await;
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].as_deref().unwrap(), "first");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn exhausted_script_fails() {
        let gateway = ScriptedGateway::new();
        let mut stream = gateway.stream("gpt-4", vec![Message::user("hi")]);
        assert!(matches!(
            stream.next().await,
            Some(Err(ProviderError::ApiError(_)))
        ));
    }
}
