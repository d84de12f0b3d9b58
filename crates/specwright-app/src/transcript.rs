//! Plain-text rendering of the conversation and model list.

use specwright_ai::Message;

pub const HELP: &str = "\
Commands:
  <text>          answer the interviewer
  /start          ask for an opening question
  /doc [type]     write the document (unified, requirements, design)
  /model <id>     switch model
  /models         list models
  /history        show the conversation
  /help           show this help
  /quit           exit (Ctrl-D also works)
Ctrl-C stops a reply that is still streaming.";

pub fn banner(model: &str, doc_type: &str) -> String {
    format!(
        "Specwright v{}  model: {model}  document: {doc_type}\nType /help for commands.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Opening (if any) followed by each completed exchange.
pub fn render_history(opening: Option<&Message>, pairs: &[(&Message, &Message)]) -> String {
    let mut out = String::new();
    if let Some(opening) = opening {
        out.push_str(&format!("Assistant: {}\n\n", opening.content));
    }
    for (user, assistant) in pairs {
        out.push_str(&format!("You: {}\n\n", user.content));
        out.push_str(&format!("Assistant: {}\n\n", assistant.content));
    }
    if out.is_empty() {
        out.push_str("(no conversation yet)\n");
    }
    out
}

/// One model per line, the active one marked with `*`.
pub fn render_models(models: &[String], current: &str) -> String {
    models
        .iter()
        .map(|model| {
            let marker = if model == current { '*' } else { ' ' };
            format!("{marker} {model}\n")
        })
        .collect()
}
