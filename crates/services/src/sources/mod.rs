use async_trait::async_trait;

use roadmap_core::model::ProblemsDocument;

use crate::error::SourceError;

mod file;
mod http;
mod static_source;

pub use file::FileProblemsSource;
pub use http::HttpProblemsSource;
pub use static_source::{StaticProblemsSource, StaticResponse};

/// Something that can produce the problems document.
#[async_trait]
pub trait ProblemsSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Fetch and parse the document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` on transport, status, I/O or parse failures.
    async fn fetch(&self) -> Result<ProblemsDocument, SourceError>;
}
