//! Shared error types for the services crate.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use roadmap_core::model::DocumentError;

/// Errors emitted while fetching a problems document.
///
/// The `Display` output is what the page shows to the user, so an HTTP status
/// failure renders as the bare reason phrase (e.g. `Not Found`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("{}", reason_phrase(.0))]
    HttpStatus(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted while resolving where the document lives.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid document path {raw:?}: {source}")]
    InvalidDocumentPath {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

fn reason_phrase(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_owned(), str::to_owned)
}
