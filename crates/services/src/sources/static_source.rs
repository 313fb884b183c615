use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use roadmap_core::model::ProblemsDocument;

use crate::error::SourceError;
use crate::sources::ProblemsSource;

/// Canned answer served by `StaticProblemsSource`.
#[derive(Clone, Debug)]
pub enum StaticResponse {
    /// A successful response with this raw body; parsed like a real one.
    Body(String),
    /// A non-success status.
    Status(StatusCode),
}

/// In-memory source for previews and tests.
///
/// Counts how many times it was fetched.
#[derive(Debug)]
pub struct StaticProblemsSource {
    response: StaticResponse,
    fetches: AtomicUsize,
}

impl StaticProblemsSource {
    #[must_use]
    pub fn new(response: StaticResponse) -> Self {
        Self {
            response,
            fetches: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(StaticResponse::Body(body.into()))
    }

    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        Self::new(StaticResponse::Status(status))
    }

    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ProblemsSource for StaticProblemsSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> Result<ProblemsDocument, SourceError> {
        self.fetches.fetch_add(1, Ordering::AcqRel);
        match &self.response {
            StaticResponse::Body(body) => Ok(ProblemsDocument::from_json_slice(body.as_bytes())?),
            StaticResponse::Status(status) => Err(SourceError::HttpStatus(*status)),
        }
    }
}
