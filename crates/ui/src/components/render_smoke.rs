use dioxus::prelude::*;
use roadmap_core::model::{Difficulty, Problem, ProblemId};

use super::{DifficultyBadge, ProblemTable};

fn render_badge(label: &str) -> String {
    let difficulty = Difficulty::from_label(label);
    dioxus_ssr::render_element(rsx! { DifficultyBadge { difficulty } })
}

#[test]
fn badge_uses_exact_palette() {
    let cases = [
        ("Easy", "#16a34a", "#052e17"),
        ("Medium", "#ca8a04", "#2a2206"),
        ("Hard", "#dc2626", "#3b0a0a"),
    ];
    for (label, color, bg) in cases {
        let html = render_badge(label);
        assert!(html.contains(&format!("color: {color};")), "{label}: {html}");
        assert!(html.contains(&format!("background: {bg};")), "{label}: {html}");
        assert!(html.contains(&format!(">{label}</span>")), "{label}: {html}");
    }
}

#[test]
fn badge_falls_back_to_hard_palette_with_literal_text() {
    let html = render_badge("Legendary");
    assert!(html.contains("color: #dc2626;"), "{html}");
    assert!(html.contains("background: #3b0a0a;"), "{html}");
    assert!(html.contains(">Legendary</span>"), "{html}");
    assert!(html.contains("Difficulty: Legendary"), "{html}");
}

#[test]
fn empty_table_keeps_headers() {
    let html = dioxus_ssr::render_element(rsx! { ProblemTable {} });
    for header in ["Problem", "Difficulty", "Link"] {
        assert!(html.contains(&format!("<th>{header}</th>")), "missing {header} in {html}");
    }
    assert!(!html.contains("<tr class=\"problem-row\""), "unexpected row in {html}");
}

#[test]
fn table_renders_rows_in_input_order() {
    let problems = vec![
        Problem::new(
            ProblemId::new("2"),
            "Zigzag Conversion",
            Difficulty::Medium,
            "https://leetcode.com/problems/zigzag-conversion/",
        ),
        Problem::new(
            ProblemId::new("1"),
            "Add Two Numbers",
            Difficulty::Hard,
            "/problems/add-two-numbers",
        ),
    ];
    let html = dioxus_ssr::render_element(rsx! { ProblemTable { problems } });

    let zigzag = html.find("Zigzag Conversion").expect("first row");
    let add = html.find("Add Two Numbers").expect("second row");
    assert!(zigzag < add, "rows reordered in {html}");
    assert_eq!(html.matches("<tr class=\"problem-row\"").count(), 2, "{html}");
    assert!(html.contains("href=\"/problems/add-two-numbers\""), "{html}");
    assert!(html.contains("target=\"_blank\""), "{html}");
    assert!(html.contains("rel=\"noreferrer\""), "{html}");
    assert!(html.contains("color: #f59e0b;"), "{html}");
    assert!(html.contains("Open"), "{html}");
}
