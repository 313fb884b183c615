use std::sync::Arc;

use services::ProblemsSource;

use crate::platform::LinkOpenerRef;

pub const DEFAULT_PAGE_TITLE: &str = "Yen's LeetCode Roadmap — Minimal UI";

pub trait UiApp: Send + Sync {
    fn problems_source(&self) -> Arc<dyn ProblemsSource>;

    fn page_title(&self) -> String {
        DEFAULT_PAGE_TITLE.to_string()
    }

    /// Opens problem links outside the webview. `None` keeps native link behavior.
    fn link_opener(&self) -> Option<LinkOpenerRef> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    page_title: String,
    problems_source: Arc<dyn ProblemsSource>,
    link_opener: Option<LinkOpenerRef>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            page_title: app.page_title(),
            problems_source: app.problems_source(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    #[must_use]
    pub fn problems_source(&self) -> Arc<dyn ProblemsSource> {
        Arc::clone(&self.problems_source)
    }

    #[must_use]
    pub fn link_opener(&self) -> Option<LinkOpenerRef> {
        self.link_opener.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
