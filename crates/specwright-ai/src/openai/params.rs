//! Per-model request parameters.

/// Output cap sent with every request.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Model families differ only in which field carries the output cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// `o1`, `o3-mini`, ... take `max_completion_tokens`.
    Reasoning,
    /// Everything else takes `max_tokens`.
    Chat,
}

impl ModelFamily {
    /// Reasoning models are named `o` followed by a digit.
    pub fn of(model: &str) -> Self {
        let mut chars = model.chars();
        match (chars.next(), chars.next()) {
            (Some('o'), Some(c)) if c.is_ascii_digit() => ModelFamily::Reasoning,
            _ => ModelFamily::Chat,
        }
    }

    pub fn max_tokens_field(&self) -> &'static str {
        match self {
            ModelFamily::Reasoning => "max_completion_tokens",
            ModelFamily::Chat => "max_tokens",
        }
    }
}
