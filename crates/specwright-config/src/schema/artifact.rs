//! Generated document output settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory for generated documents. A temporary directory is used when unset.
    pub output_dir: Option<PathBuf>,
    pub file_name: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: "document.md".into(),
        }
    }
}
