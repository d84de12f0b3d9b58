//! Server-Sent Events (SSE) streaming parser.
//!
//! Chat-completions endpoints stream token-by-token responses as SSE.
//! `SseDecoder` turns lines into events; `sse_events` drives it over a
//! reqwest response body and yields events as the caller pulls them.

use futures_util::{Stream, StreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_util::io::StreamReader;

use crate::ProviderError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server sends one.
    pub event: Option<String>,
    /// The event data (JSON string, or `[DONE]`).
    pub data: String,
}

/// Incremental line-oriented SSE decoder.
#[derive(Debug, Default)]
pub struct SseDecoder {
    current_event: Option<String>,
    current_data: String,
}

impl SseDecoder {
    /// Feed one line (without its terminator). Returns an event when the
    /// line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            // Empty line = end of event
            let event = self.take_event();
            self.current_event = None;
            return event;
        }

        if let Some(event_type) = field_value(line, "event") {
            self.current_event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !self.current_data.is_empty() {
                self.current_data.push('\n');
            }
            self.current_data.push_str(data);
        }
        // Ignore other fields (id:, retry:, comments)
        None
    }

    /// Flush an event left open when the body ends without a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        self.take_event()
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        if self.current_data.is_empty() {
            return None;
        }
        Some(SseEvent {
            event: self.current_event.take(),
            data: std::mem::take(&mut self.current_data),
        })
    }
}

/// `name: value` or `name:value`.
fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Decode an SSE response body into events, pulled one at a time.
pub fn sse_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, ProviderError>> + Send + 'static {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let reader = tokio::io::BufReader::new(StreamReader::new(byte_stream));

    async_stream::try_stream! {
        let mut lines = reader.lines();
        let mut decoder = SseDecoder::default();

        while let Some(line) = lines.next_line().await.map_err(read_error)? {
            if let Some(event) = decoder.push_line(&line) {
                yield event;
            }
        }

        if let Some(event) = decoder.finish() {
            yield event;
        }
    }
}

fn read_error(err: std::io::Error) -> ProviderError {
    let timed_out = err.kind() == std::io::ErrorKind::TimedOut
        || err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
            .is_some_and(|e| e.is_timeout());
    if timed_out {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(lines: &[&str]) -> Vec<SseEvent> {
        let mut decoder = SseDecoder::default();
        let mut events: Vec<SseEvent> = lines
            .iter()
            .filter_map(|line| decoder.push_line(line))
            .collect();
        events.extend(decoder.finish());
        events
    }

    #[test]
    fn data_lines_end_at_blank_line() {
        let events = decode(&["data: {\"a\":1}", "", "data: [DONE]", ""]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data, "{\"a\":1}");
        assert_eq!(events[0].event, None);
        assert_eq!(events[1].data, "[DONE]");
    }

    #[test]
    fn event_type_is_attached() {
        let events = decode(&["event: message", "data: hi", ""]);
        assert_eq!(events[0].event.as_deref(), Some("message"));
        assert_eq!(events[0].data, "hi");
    }

    #[test]
    fn multi_line_data_is_joined() {
        let events = decode(&["data: one", "data: two", ""]);
        assert_eq!(events[0].data, "one\ntwo");
    }

    #[test]
    fn missing_space_after_colon_is_accepted() {
        let events = decode(&["data:{}", ""]);
        assert_eq!(events[0].data, "{}");
    }

    #[test]
    fn comments_and_ids_are_ignored() {
        let events = decode(&[": keep-alive", "id: 7", "retry: 100", "data: x", ""]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "x");
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let events = decode(&["data: x\r", "\r"]);
        assert_eq!(events, vec![SseEvent { event: None, data: "x".into() }]);
    }

    #[test]
    fn unterminated_event_is_flushed() {
        let events = decode(&["data: tail"]);
        assert_eq!(events[0].data, "tail");
    }

    #[test]
    fn blank_lines_without_data_yield_nothing() {
        let events = decode(&["", "", "event: ping", ""]);
        assert!(events.is_empty());
    }

    #[test]
    fn event_type_does_not_leak_into_next_event() {
        let events = decode(&["event: a", "data: 1", "", "data: 2", ""]);
        assert_eq!(events[1].event, None);
    }
}
