use dioxus::prelude::*;
use roadmap_core::model::Difficulty;

use crate::vm::DifficultyBadgeVm;

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> Element {
    let badge = DifficultyBadgeVm::from(&difficulty);
    rsx! {
        span {
            class: "difficulty-badge",
            style: "{badge.style()}",
            aria_label: "{badge.aria_label}",
            title: "{badge.aria_label}",
            "{badge.label}"
        }
    }
}
