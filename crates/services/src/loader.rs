use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;

use roadmap_core::model::ProblemsDocument;

use crate::sources::ProblemsSource;

/// A fetch failure, flattened to the message shown to the user.
///
/// Transport, status, I/O and parse failures are deliberately not
/// distinguished past this point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure(String);

impl LoadFailure {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for LoadFailure {}

pub type LoadOutcome = Result<ProblemsDocument, LoadFailure>;

/// One-shot document loader.
///
/// The first call to `load` fetches from the source; every later call, from
/// any clone, waits for and returns that same outcome. Concurrent callers
/// never trigger a second fetch.
#[derive(Clone)]
pub struct ProblemsLoader {
    source: Arc<dyn ProblemsSource>,
    outcome: Arc<OnceCell<LoadOutcome>>,
}

impl ProblemsLoader {
    #[must_use]
    pub fn new(source: Arc<dyn ProblemsSource>) -> Self {
        Self {
            source,
            outcome: Arc::new(OnceCell::new()),
        }
    }

    /// Fetch the document once and return the cached outcome.
    pub async fn load(&self) -> LoadOutcome {
        self.outcome
            .get_or_init(|| async {
                let location = self.source.describe();
                tracing::debug!(%location, "fetching problems document");
                match self.source.fetch().await {
                    Ok(document) => {
                        if let Err(err) = document.validate() {
                            tracing::warn!(%location, error = %err, "problems document has repeated ids");
                        }
                        tracing::info!(
                            %location,
                            categories = document.categories.len(),
                            "problems document loaded"
                        );
                        Ok(document)
                    }
                    Err(err) => {
                        tracing::warn!(%location, error = %err, "problems document failed to load");
                        Err(LoadFailure::new(err.to_string()))
                    }
                }
            })
            .await
            .clone()
    }

    /// True once a fetch has completed, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outcome.initialized()
    }
}
