//! The seam between a session and a model provider.

use futures_util::stream::BoxStream;

use crate::{Message, ProviderError};

/// Text fragments of one streamed response, in emission order.
///
/// Ends after the last fragment, or with a single `Err` when the provider
/// fails part way. Not restartable.
pub type FragmentStream = BoxStream<'static, Result<String, ProviderError>>;

/// Anything that can turn a message list into a streamed completion.
///
/// Implementations do no work until the returned stream is first polled
/// and hold no state between calls.
pub trait ModelGateway: Send + Sync {
    fn stream(&self, model: &str, messages: Vec<Message>) -> FragmentStream;
}
