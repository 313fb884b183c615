use dioxus::prelude::*;
use roadmap_core::model::Problem;

use crate::components::DifficultyBadge;
use crate::context::AppContext;
use crate::vm::{ProblemRowVm, map_problem_rows};

const LINK_COLOR: &str = "#f59e0b";

#[component]
pub fn ProblemTable(#[props(default)] problems: Vec<Problem>) -> Element {
    let rows = map_problem_rows(&problems);

    rsx! {
        div { class: "problem-table-scroll",
            table { class: "problem-table",
                thead {
                    tr { class: "problem-table-head",
                        th { "Problem" }
                        th { "Difficulty" }
                        th { "Link" }
                    }
                }
                tbody {
                    for row in rows {
                        ProblemRow { key: "{row.key}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProblemRow(row: ProblemRowVm) -> Element {
    let opener = try_use_context::<AppContext>().and_then(|ctx| ctx.link_opener());
    let url = row.url.clone();
    let open_externally = row.is_web_link && opener.is_some();

    rsx! {
        tr { class: "problem-row", style: "background: {row.background};",
            td { "{row.title}" }
            td {
                DifficultyBadge { difficulty: row.difficulty.clone() }
            }
            td {
                a {
                    href: "{row.url}",
                    target: "_blank",
                    rel: "noreferrer",
                    style: "color: {LINK_COLOR};",
                    onclick: move |evt: MouseEvent| {
                        if !open_externally {
                            return;
                        }
                        if let Some(opener) = &opener {
                            evt.prevent_default();
                            opener.open_url(&url);
                        }
                    },
                    "Open ↗"
                }
            }
        }
    }
}
