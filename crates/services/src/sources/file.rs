use std::path::{Path, PathBuf};

use async_trait::async_trait;

use roadmap_core::model::ProblemsDocument;

use crate::error::SourceError;
use crate::sources::ProblemsSource;

/// Reads the document from a local file instead of the network.
#[derive(Clone, Debug)]
pub struct FileProblemsSource {
    path: PathBuf,
}

impl FileProblemsSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProblemsSource for FileProblemsSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<ProblemsDocument, SourceError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(ProblemsDocument::from_json_slice(&body)?)
    }
}
