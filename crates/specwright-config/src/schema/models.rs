//! Supported model identifiers.

use serde::{Deserialize, Serialize};

/// The model a session starts with and the set it may switch between.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub default: String,
    pub available: Vec<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: "chatgpt-4o-latest".into(),
            available: vec![
                "chatgpt-4o-latest".into(),
                "gpt-4".into(),
                "o1".into(),
                "o3-mini".into(),
            ],
        }
    }
}
