use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{NotFoundPage, RoadmapPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", RoadmapPage)] Roadmap {},
    #[route("/:..segments", NotFoundPage)] NotFound { segments: Vec<String> },
}
