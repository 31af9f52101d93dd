//! Local file source. Every fetch re-reads the file from disk.

use seek_core::loader::{Fetch, LoadError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Fetch for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tracing::debug!(path = %self.path.display(), "reading database file");
        tokio::fs::read(&self.path).await.map_err(|e| LoadError::Fetch {
            location: self.location(),
            source: Box::new(e),
        })
    }
}
