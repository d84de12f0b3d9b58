//! Markdown artifact the generated document is streamed into.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Decides where documents go. The output directory is resolved on first
/// use; without one configured a fresh temp dir is created and kept.
#[derive(Debug)]
pub struct ArtifactWriter {
    output_dir: Option<PathBuf>,
    file_name: String,
    resolved_dir: Option<PathBuf>,
}

impl ArtifactWriter {
    pub fn new(output_dir: Option<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir,
            file_name: file_name.into(),
            resolved_dir: None,
        }
    }

    /// Path of the artifact, once a document has been started.
    pub fn path(&self) -> Option<PathBuf> {
        self.resolved_dir
            .as_ref()
            .map(|dir| dir.join(&self.file_name))
    }

    async fn resolve_dir(&mut self) -> std::io::Result<PathBuf> {
        if let Some(ref dir) = self.resolved_dir {
            return Ok(dir.clone());
        }
        let dir = match self.output_dir {
            Some(ref dir) => {
                tokio::fs::create_dir_all(dir).await?;
                dir.clone()
            }
            None => tempfile::Builder::new()
                .prefix("specwright-")
                .tempdir()?
                .keep(),
        };
        debug!(dir = %dir.display(), "Artifact directory ready");
        self.resolved_dir = Some(dir.clone());
        Ok(dir)
    }

    /// Truncate the artifact and open it for a new document.
    pub async fn begin(&mut self) -> std::io::Result<ArtifactSink> {
        let path = self.resolve_dir().await?.join(&self.file_name);
        let file = tokio::fs::File::create(&path).await?;
        info!(path = %path.display(), "Writing document");
        Ok(ArtifactSink {
            path,
            file,
            bytes: 0,
        })
    }
}

/// An open artifact receiving fragments as they arrive.
#[derive(Debug)]
pub struct ArtifactSink {
    path: PathBuf,
    file: tokio::fs::File,
    bytes: usize,
}

impl ArtifactSink {
    pub async fn write(&mut self, fragment: &str) -> std::io::Result<()> {
        self.file.write_all(fragment.as_bytes()).await?;
        self.bytes += fragment.len();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close, returning where the document lives.
    pub async fn finish(mut self) -> std::io::Result<PathBuf> {
        self.file.flush().await?;
        debug!(path = %self.path.display(), bytes = self.bytes, "Document closed");
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_fragments_to_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        let mut writer = ArtifactWriter::new(Some(out.clone()), "document.md");
        assert!(writer.path().is_none());

        let mut sink = writer.begin().await.unwrap();
        sink.write("# Doc\n").await.unwrap();
        sink.write("body").await.unwrap();
        let path = sink.finish().await.unwrap();

        assert_eq!(path, out.join("document.md"));
        assert_eq!(writer.path(), Some(path.clone()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Doc\nbody");
    }

    #[tokio::test]
    async fn begin_truncates_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ArtifactWriter::new(Some(dir.path().to_path_buf()), "document.md");

        let mut sink = writer.begin().await.unwrap();
        sink.write("a much longer first document").await.unwrap();
        sink.finish().await.unwrap();

        let mut sink = writer.begin().await.unwrap();
        sink.write("short").await.unwrap();
        let path = sink.finish().await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "short");
    }

    #[tokio::test]
    async fn temp_dir_is_used_and_reused_without_output_dir() {
        let mut writer = ArtifactWriter::new(None, "document.md");

        let first = writer.begin().await.unwrap();
        let first_path = first.path().to_path_buf();
        first.finish().await.unwrap();

        let second = writer.begin().await.unwrap();
        assert_eq!(second.path(), first_path);
        second.finish().await.unwrap();

        assert!(first_path.exists());
        if let Some(dir) = first_path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
