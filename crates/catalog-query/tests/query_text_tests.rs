//! Query text integration tests: rendering, parsing and request building.

use std::sync::Arc;

use catalog_query::{
    normalize, parse, parse_with_report, render, CategoryRegistry, CollectionScope, Criterion,
    QueryError, QueryLogic, SearchForm, SearchRequest,
};
use proptest::prelude::*;
use rstest::rstest;

fn artwork() -> CategoryRegistry {
    CategoryRegistry::artwork()
}

// === Rendering ===

#[test]
fn test_render_artist_and_collection() {
    let criteria = vec![
        Criterion::first("Artist", "Mozart"),
        Criterion::then(QueryLogic::And, "Collection", "Students"),
    ];
    assert_eq!(
        render(&artwork(), &criteria).unwrap(),
        "AR=(Mozart) AND CO=(Students)"
    );
}

#[rstest]
#[case(QueryLogic::And, "All=(sea) AND DU=(2024)")]
#[case(QueryLogic::Or, "All=(sea) OR DU=(2024)")]
#[case(QueryLogic::Not, "All=(sea) NOT DU=(2024)")]
fn test_render_each_logic(#[case] logic: QueryLogic, #[case] expected: &str) {
    let criteria = vec![
        Criterion::first("All", "sea"),
        Criterion::then(logic, "Date Uploaded", "2024"),
    ];
    assert_eq!(render(&artwork(), &criteria).unwrap(), expected);
}

#[test]
fn test_render_music_score_codes() {
    let registry = CategoryRegistry::music_score();
    let criteria = vec![
        Criterion::first("Copyright", "public domain"),
        Criterion::then(QueryLogic::Or, "Creator", "Liszt"),
    ];
    assert_eq!(
        render(&registry, &criteria).unwrap(),
        "CR=(public domain) OR CRE=(Liszt)"
    );
}

// === Parsing ===

#[test]
fn test_parse_artist_and_collection() {
    assert_eq!(
        parse(&artwork(), "AR=(Mozart) AND CO=(Students)"),
        vec![
            Criterion::first("Artist", "Mozart"),
            Criterion::then(QueryLogic::And, "Collection", "Students"),
        ]
    );
}

#[test]
fn test_parse_empty_text() {
    assert!(parse(&artwork(), "").is_empty());
}

#[test]
fn test_parse_unknown_code() {
    assert_eq!(
        parse(&artwork(), "ZZ=(unknown)"),
        vec![Criterion::first("ZZ", "unknown")]
    );
}

#[rstest]
#[case("AR=(a) AND CO=(b)", Some(QueryLogic::And))]
#[case("AR=(a) OR CO=(b)", Some(QueryLogic::Or))]
#[case("AR=(a) NOT CO=(b)", Some(QueryLogic::Not))]
#[case("AR=(a)   OR   CO=(b)", Some(QueryLogic::Or))]
#[case("AR=(a) and CO=(b)", None)]
#[case("AR=(a) ORCO=(b)", None)]
#[case("AR=(a) CO=(b)", None)]
fn test_parse_logic_detection(#[case] input: &str, #[case] expected: Option<QueryLogic>) {
    let criteria = parse(&artwork(), input);
    assert_eq!(criteria.len(), 2, "input: {input}");
    assert_eq!(criteria[1].logic, expected, "input: {input}");
}

#[rstest]
#[case("AR=(Mozart", 0)]
#[case("AR=() AND CO=(x)", 1)]
#[case("AR=(a) AND )CO=(b)", 2)]
#[case("AR = (a)", 0)]
#[case("junk AR=(a) more junk", 1)]
fn test_parse_malformed_fragments_skipped(#[case] input: &str, #[case] count: usize) {
    assert_eq!(parse(&artwork(), input).len(), count, "input: {input}");
}

#[test]
fn test_parse_hand_edited_preview() {
    let (criteria, report) = parse_with_report(
        &artwork(),
        "  AR=( Monet )  OR PR=(500) NOT XX=(draft)",
    );
    assert_eq!(
        criteria,
        vec![
            Criterion::first("Artist", "Monet"),
            Criterion::then(QueryLogic::Or, "Price", "500"),
            Criterion::then(QueryLogic::Not, "XX", "draft"),
        ]
    );
    assert_eq!(report.unresolved_codes, vec!["XX".to_string()]);
    assert!(report.missing_logic.is_empty());
}

#[test]
fn test_parse_escaped_parenthesis() {
    let criteria = parse(&artwork(), r"All=(Sonata (op. 2\)) AND AR=(a\\b)");
    assert_eq!(criteria[0].text, "Sonata (op. 2)");
    assert_eq!(criteria[1].text, r"a\b");
}

// === Request building ===

#[test]
fn test_request_from_hand_edited_text() {
    let request = SearchRequest::from_query_text(
        &artwork(),
        "AR=(Mozart) CO=(Students)",
        CollectionScope::Students,
    )
    .unwrap();
    assert_eq!(request.criteria[0].logic, None);
    assert_eq!(request.criteria[1].logic, Some(QueryLogic::And));
    assert_eq!(request.collection_scope, CollectionScope::Students);
}

#[test]
fn test_request_rejects_unknown_category() {
    let err = SearchRequest::from_query_text(&artwork(), "AR=(a) OR ZZ=(b)", CollectionScope::All)
        .unwrap_err();
    assert!(matches!(err, QueryError::InvalidCriterion { index: 1, .. }));
}

#[test]
fn test_request_json_default_scope() {
    let request = SearchRequest::from_json(
        r#"{"criteria":[{"category":"Artist","text":"Mozart"}]}"#,
    )
    .unwrap();
    assert_eq!(request.collection_scope, CollectionScope::All);
    assert_eq!(request.criteria.len(), 1);
}

// === Form workflow ===

#[test]
fn test_form_build_edit_submit() {
    let mut form = SearchForm::new(Arc::new(artwork()));

    form.category = "Artist".into();
    form.text = "Mozart".into();
    form.add_input().unwrap();

    form.logic = QueryLogic::Not;
    form.category = "Price".into();
    form.text = "100".into();
    form.add_input().unwrap();
    assert_eq!(form.preview(), "AR=(Mozart) NOT PR=(100)");

    let preview = form.preview().replace("Mozart", "Haydn");
    form.edit_preview(preview);
    let request = form.submit().unwrap();
    assert_eq!(request.criteria[0].text, "Haydn");
    assert_eq!(request.criteria[1].logic, Some(QueryLogic::Not));
}

// === Round trip ===

fn artwork_label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["All", "Artist", "Collection", "Price", "Date Uploaded"])
        .prop_map(str::to_string)
}

fn search_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ()\\\\=.,]{1,24}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("text must not be blank", |s| !s.is_empty())
}

fn logic() -> impl Strategy<Value = QueryLogic> {
    prop::sample::select(QueryLogic::ALL.to_vec())
}

fn criteria() -> impl Strategy<Value = Vec<Criterion>> {
    prop::collection::vec(
        (artwork_label(), search_text(), logic()),
        1..6,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(category, text, logic)| Criterion::then(logic, category, text))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_parse_inverts_render(criteria in criteria()) {
        let registry = artwork();
        let text = render(&registry, &criteria).unwrap();
        prop_assert_eq!(parse(&registry, &text), normalize(criteria));
    }

    #[test]
    fn test_parse_never_panics(input in "\\PC{0,64}") {
        let registry = artwork();
        let criteria = parse(&registry, &input);
        for criterion in criteria.iter().skip(1) {
            prop_assert!(criterion.text.trim() == criterion.text);
        }
    }
}
