use std::env;

use url::Url;

use crate::error::SourceConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
pub const DEFAULT_DOCUMENT_PATH: &str = "/problems.json";

/// Where the problems document is served from.
///
/// The document path is resolved against the base URL the same way a page
/// resolves a link, so `/problems.json` always lands at the host root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    base_url: Url,
    document_path: String,
    document_url: Url,
}

impl SourceConfig {
    /// Build a config from a base URL and a document path.
    ///
    /// # Errors
    ///
    /// Returns `SourceConfigError` when the base URL does not parse or the
    /// path cannot be joined onto it.
    pub fn new(base_url: &str, document_path: &str) -> Result<Self, SourceConfigError> {
        let base = Url::parse(base_url.trim()).map_err(|source| {
            SourceConfigError::InvalidBaseUrl {
                raw: base_url.to_string(),
                source,
            }
        })?;
        let document_url = base.join(document_path.trim()).map_err(|source| {
            SourceConfigError::InvalidDocumentPath {
                raw: document_path.to_string(),
                source,
            }
        })?;
        Ok(Self {
            base_url: base,
            document_path: document_path.trim().to_string(),
            document_url,
        })
    }

    /// Read `ROADMAP_BASE_URL` and `ROADMAP_DOCUMENT_PATH`, falling back to
    /// the defaults for unset or blank values.
    ///
    /// # Errors
    ///
    /// Returns `SourceConfigError` when a provided value is invalid.
    pub fn from_env() -> Result<Self, SourceConfigError> {
        let base_url = non_blank_var("ROADMAP_BASE_URL");
        let document_path = non_blank_var("ROADMAP_DOCUMENT_PATH");
        Self::new(
            base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            document_path.as_deref().unwrap_or(DEFAULT_DOCUMENT_PATH),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    #[must_use]
    pub fn document_url(&self) -> &Url {
        &self.document_url
    }
}

impl Default for SourceConfig {
    /// # Panics
    ///
    /// Panics if the built-in defaults cannot be parsed.
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_DOCUMENT_PATH)
            .expect("default source config should be valid")
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
