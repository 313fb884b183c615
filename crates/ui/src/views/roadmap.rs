use dioxus::prelude::*;
use services::ProblemsLoader;

use crate::components::CategoryCard;
use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{PAGE_SUBTITLE, RoadmapVm};

/// Loads the problems document once and lists its categories.
#[component]
pub fn RoadmapPage() -> Element {
    let ctx = use_context::<AppContext>();
    let source = ctx.problems_source();
    let loader = use_hook(move || ProblemsLoader::new(source));

    // Reads no signals, so the fetch runs once per mount.
    let resource = use_resource(move || {
        let loader = loader.clone();
        async move {
            loader
                .load()
                .await
                .map(|document| RoadmapVm::from_document(&document))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page-shell",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "page-loading", "Loading…" }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "load-error",
                        p { class: "load-error-label", "Failed to load problems.json" }
                        code { class: "load-error-reason", "{err.message()}" }
                    }
                },
                ViewState::Ready(data) => rsx! {
                    header { class: "page-header",
                        h1 { class: "page-title", "{ctx.page_title()}" }
                        p { class: "page-subtitle", "{PAGE_SUBTITLE}" }
                    }
                    for entry in data.categories {
                        CategoryCard { key: "{entry.key}", category: entry.category.clone() }
                    }
                },
            }
        }
    }
}
