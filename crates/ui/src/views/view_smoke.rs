use std::sync::Arc;

use async_trait::async_trait;
use roadmap_core::model::{Category, CategoryId, Difficulty, Problem, ProblemId, ProblemsDocument};
use services::{ProblemsSource, SourceError, StaticProblemsSource, StatusCode};

use super::test_harness::{ViewKind, setup_view_harness};

const THREE_CATEGORIES: &str = r#"{"categories":[
    {"id":"A","name":"Alpha Category","order":3,"problems":[
        {"id":"a1","title":"Alpha One","difficulty":"Easy","url":"https://example.com/a1"}
    ]},
    {"id":"B","name":"Bravo Category","order":1,"problems":[]},
    {"id":"C","name":"Charlie Category","order":2,"problems":[
        {"id":"c1","title":"Charlie One","difficulty":"Hard","url":"https://example.com/c1"},
        {"id":"c2","title":"Charlie Two","difficulty":"Medium","url":"https://example.com/c2"}
    ]}
]}"#;

/// Never resolves, so the page stays in its loading state.
struct PendingSource;

#[async_trait]
impl ProblemsSource for PendingSource {
    fn describe(&self) -> String {
        "pending".to_string()
    }

    async fn fetch(&self) -> Result<ProblemsDocument, SourceError> {
        std::future::pending().await
    }
}

fn graphs_category(problem_count: usize) -> Category {
    let problems = (0..problem_count)
        .map(|i| {
            Problem::new(
                ProblemId::new(format!("g{i}")),
                format!("Graph Problem {i}"),
                Difficulty::Medium,
                format!("https://example.com/g{i}"),
            )
        })
        .collect();
    Category::new(CategoryId::new("graphs"), "Graphs", None, problems)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_loading_placeholder_while_pending() {
    let mut harness = setup_view_harness(ViewKind::Roadmap, Arc::new(PendingSource));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Loading"), "missing loading placeholder in {html}");
    assert!(!html.contains("page-title"), "header rendered during load: {html}");
    assert!(!html.contains("Failed to load"), "error rendered during load: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_categories_sorted_by_order() {
    let source = Arc::new(StaticProblemsSource::json(THREE_CATEGORIES));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source.clone());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    let bravo = position(&html, "Bravo Category");
    let charlie = position(&html, "Charlie Category");
    let alpha = position(&html, "Alpha Category");
    assert!(bravo < charlie && charlie < alpha, "wrong order in {html}");
    assert!(html.contains("0 / 2"), "missing count in {html}");
    assert!(!html.contains("Loading"), "still loading in {html}");
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_keeps_input_order_for_equal_orders() {
    let body = r#"{"categories":[
        {"id":"x","name":"Xray Category","problems":[]},
        {"id":"y","name":"Yankee Category","order":0,"problems":[]},
        {"id":"z","name":"Zulu Category","problems":[]}
    ]}"#;
    let mut harness =
        setup_view_harness(ViewKind::Roadmap, Arc::new(StaticProblemsSource::json(body)));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    let x = position(&html, "Xray Category");
    let y = position(&html, "Yankee Category");
    let z = position(&html, "Zulu Category");
    assert!(x < y && y < z, "input order not preserved in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_error_panel_on_404() {
    let source = Arc::new(StaticProblemsSource::status(StatusCode::NOT_FOUND));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to load problems.json"), "missing label in {html}");
    assert!(html.contains("Not Found"), "missing reason in {html}");
    assert!(!html.contains("category-card"), "category rendered in {html}");
    assert!(!html.contains("Loading"), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_error_panel_on_malformed_document() {
    let source = Arc::new(StaticProblemsSource::json(r#"{"categories":[{"id":"a"}]}"#));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to load problems.json"), "missing label in {html}");
    assert!(!html.contains("category-card"), "category rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_documents_with_repeated_ids() {
    let body = r#"{"categories":[
        {"id":"a","name":"Arrays","order":null,"problems":[
            {"id":"1","title":"First Twin","difficulty":"Easy","url":"https://x/1"},
            {"id":"1","title":"Second Twin","difficulty":"Hard","url":"https://x/2"}
        ]},
        {"id":"a","name":"Arrays Again","order":0.5,"problems":[]}
    ]}"#;
    let mut harness =
        setup_view_harness(ViewKind::Roadmap, Arc::new(StaticProblemsSource::json(body)));
    harness.rebuild();
    harness.settle().await;
    assert_eq!(harness.card_handles.count(), 2);

    harness.toggle_card(0);
    let html = harness.render();
    assert!(!html.contains("Failed to load"), "unexpected error in {html}");
    assert!(html.contains("Arrays Again"), "second card missing in {html}");
    let first = position(&html, "First Twin");
    let second = position(&html, "Second Twin");
    assert!(first < second, "rows reordered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_renders_header_only_for_empty_document() {
    let source = Arc::new(StaticProblemsSource::json(r#"{"categories":[]}"#));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("LeetCode Roadmap"), "missing header in {html}");
    assert!(!html.contains("category-card"), "unexpected card in {html}");
    assert!(!html.contains("Failed to load"), "unexpected error in {html}");
    assert!(!html.contains("Loading"), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_does_not_refetch_on_rerender() {
    let source = Arc::new(StaticProblemsSource::json(THREE_CATEGORIES));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source.clone());
    harness.rebuild();
    harness.settle().await;

    harness.toggle_card(0);
    harness.toggle_card(1);
    harness.settle().await;

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn category_card_starts_collapsed_with_zero_progress() {
    let mut harness = setup_view_harness(
        ViewKind::Card(graphs_category(4)),
        Arc::new(PendingSource),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Graphs"), "missing name in {html}");
    assert!(html.contains("0 / 4"), "missing count in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert!(html.contains("rotate(0deg)"), "arrow not at rest in {html}");
    assert!(!html.contains("<table"), "body rendered while collapsed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn category_card_toggle_parity_controls_body() {
    let mut harness = setup_view_harness(
        ViewKind::Card(graphs_category(2)),
        Arc::new(PendingSource),
    );
    harness.rebuild();
    assert_eq!(harness.card_handles.count(), 1);

    for toggles in 1..=4 {
        harness.toggle_card(0);
        let html = harness.render();
        let expanded = toggles % 2 == 1;
        assert_eq!(
            html.contains("<table"),
            expanded,
            "after {toggles} toggles: {html}"
        );
        assert!(html.contains("0 / 2"), "count changed after {toggles} toggles: {html}");
        if expanded {
            assert!(html.contains("Graph Problem 1"), "missing rows in {html}");
            assert!(html.contains("rotate(180deg)"), "arrow not rotated in {html}");
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn category_cards_toggle_independently() {
    let source = Arc::new(StaticProblemsSource::json(THREE_CATEGORIES));
    let mut harness = setup_view_harness(ViewKind::Roadmap, source);
    harness.rebuild();
    harness.settle().await;
    assert_eq!(harness.card_handles.count(), 3);

    // Mount order follows display order: B, C, A.
    harness.toggle_card(1);
    let html = harness.render();
    assert!(html.contains("Charlie One"), "C not expanded in {html}");
    assert!(!html.contains("Alpha One"), "A expanded too in {html}");
}
