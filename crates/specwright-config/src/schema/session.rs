//! Conversation and document synthesis settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specwright_common::DocType;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Replaces the built-in interview prompt when set.
    pub system_prompt: Option<String>,
    /// Example document appended to the synthesis prompt when readable.
    pub reference_document: Option<PathBuf>,
    pub doc_type: DocType,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
            reference_document: Some(PathBuf::from("docs").join("design.md")),
            doc_type: DocType::Unified,
        }
    }
}
