//! ModelGateway implementation for OpenAiClient (streaming).

use futures_util::StreamExt;
use tracing::debug;

use crate::gateway::{FragmentStream, ModelGateway};
use crate::streaming::{sse_events, SseEvent};
use crate::{Message, ProviderError};

use super::client::OpenAiClient;

const DONE_SENTINEL: &str = "[DONE]";

impl ModelGateway for OpenAiClient {
    fn stream(&self, model: &str, messages: Vec<Message>) -> FragmentStream {
        let body = Self::build_request_body(model, &messages);
        let http = self.http.clone();
        let url = self.completions_url();
        let api_key = self.config.api_key.clone();
        let model = model.to_string();

        let fragments = async_stream::try_stream! {
            debug!(model = %model, messages = messages.len(), "OpenAI streaming request");

            let response = http
                .post(&url)
                .bearer_auth(&api_key)
                .json(&body)
                .send()
                .await
                .map_err(send_error)?;

            let response = check_status(response).await?;

            let mut events = Box::pin(sse_events(response));
            while let Some(event) = events.next().await {
                let event = event?;
                match parse_chunk(&event)? {
                    Chunk::Done => break,
                    Chunk::Text(text) => yield text,
                    Chunk::Empty => {}
                }
            }

            debug!(model = %model, "OpenAI stream finished");
        };

        Box::pin(fragments)
    }
}

fn send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(err.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ProviderError::AuthError(format!("HTTP {status}")));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(200).collect::<String>();
        return Err(ProviderError::ApiError(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Chunk {
    Text(String),
    Empty,
    Done,
}

/// Interpret one SSE event of a chat-completions stream.
pub(crate) fn parse_chunk(event: &SseEvent) -> Result<Chunk, ProviderError> {
    let data = event.data.trim();
    if data == DONE_SENTINEL {
        return Ok(Chunk::Done);
    }

    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| ProviderError::ParseError(e.to_string()))?;

    if let Some(error) = json.get("error") {
        let message = error["message"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| error.to_string());
        return Err(ProviderError::ApiError(message));
    }

    match json["choices"][0]["delta"]["content"].as_str() {
        Some(text) if !text.is_empty() => Ok(Chunk::Text(text.to_string())),
        _ => Ok(Chunk::Empty),
    }
}
