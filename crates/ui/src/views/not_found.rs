use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page-shell",
            p { class: "load-error-label", "Nothing at /{path}" }
            Link { class: "back-link", to: Route::Roadmap {}, "Back to the roadmap" }
        }
    }
}
