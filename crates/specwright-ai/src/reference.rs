//! Optional example document used to steer synthesis.
//!
//! The file is re-read on every synthesis so edits take effect without a
//! restart. Any failure just means "no example".

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Why the example document could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceUnavailable {
    #[error("no reference document configured")]
    NotConfigured,
    #[error("reference document not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read reference document {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference document is empty: {0}")]
    Empty(PathBuf),
}

/// Location of the example document, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDocument {
    path: Option<PathBuf>,
}

impl ReferenceDocument {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn none() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the document.
    pub async fn load(&self) -> Result<String, ReferenceUnavailable> {
        let path = self.path.as_ref().ok_or(ReferenceUnavailable::NotConfigured)?;

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReferenceUnavailable::Missing(path.clone()));
            }
            Err(source) => {
                return Err(ReferenceUnavailable::Unreadable {
                    path: path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Err(ReferenceUnavailable::Empty(path.clone()));
        }
        Ok(content)
    }

    /// Read the document, logging and discarding any failure.
    pub async fn load_or_warn(&self) -> Option<String> {
        match self.load().await {
            Ok(content) => {
                debug!(bytes = content.len(), "Loaded reference document");
                Some(content)
            }
            Err(ReferenceUnavailable::NotConfigured) => None,
            Err(e) => {
                warn!(error = %e, "Reference document unavailable, synthesizing without example");
                None
            }
        }
    }
}
