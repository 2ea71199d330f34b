mod common;

use ai_readability::{analyze, IssueType, Severity};
use common::{page, paragraph, WELL_OPTIMIZED_PAGE};

#[test]
fn well_optimized_page_scores_high() {
    let result = analyze(WELL_OPTIMIZED_PAGE);

    assert_eq!(result.breakdown.answer_placement, 95);
    assert_eq!(result.breakdown.fact_density, 95);
    assert_eq!(result.breakdown.heading_structure, 100);
    assert_eq!(result.breakdown.eeat, 100);
    assert_eq!(result.breakdown.snippability, 100);
    assert_eq!(result.breakdown.schema, 100);
    assert_eq!(result.overall_score, 98);
    assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("well optimized"));
}

#[test]
fn empty_input_reports_missing_structure() {
    let result = analyze("");

    assert_eq!(result.breakdown.heading_structure, 60);
    assert_eq!(result.breakdown.schema, 0);
    assert_eq!(result.breakdown.fact_density, 0);
    for kind in [IssueType::HeadingStructure, IssueType::Schema, IssueType::FactDensity] {
        assert!(result.issues_of(kind).count() >= 1, "no issue for {kind}");
    }
    assert!(result.overall_score <= 100);
}

#[test]
fn direct_answer_near_top_scores_ninety_five() {
    let html = page(
        "<h1>Rust</h1><p>Rust is a language empowering everyone to build reliable software.</p>\
         <p>More detail follows here for readers who want it.</p>",
    );
    let result = analyze(&html);

    assert_eq!(result.breakdown.answer_placement, 95);
    assert_eq!(result.issues_of(IssueType::AnswerPlacement).count(), 0);
}

#[test]
fn h1_straight_to_h3_flags_orphan_and_skip() {
    let html = page(&format!(
        "<h1>Guide</h1><p>{long}</p><h3>Details</h3><p>{long}</p>",
        long = "A guide is a document that walks the reader through a task step by step with care."
    ));
    let result = analyze(&html);

    let messages: Vec<&str> = result
        .issues_of(IssueType::HeadingStructure)
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(result.breakdown.heading_structure, 70);
    assert!(messages.iter().any(|m| m.contains("without any H2")));
    assert!(messages.iter().any(|m| m.contains("H1 to H3")));
}

#[test]
fn organization_schema_without_faq_scores_seventy_five() {
    let html = r#"<html><head><script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "Organization", "name": "Acme"}
        </script></head><body></body></html>"#;
    let result = analyze(html);

    assert_eq!(result.breakdown.schema, 75);
    let schema_issues: Vec<_> = result.issues_of(IssueType::Schema).collect();
    assert_eq!(schema_issues.len(), 1);
    assert_eq!(schema_issues[0].severity, Severity::Low);
    assert!(schema_issues[0].message.contains("FAQPage"));
    assert!(!schema_issues[0].message.contains("Organization"));
}

#[test]
fn six_facts_per_hundred_words_scores_ninety_five() {
    let html = page(&format!("{}{}", paragraph(120, 7), paragraph(80, 5)));
    let result = analyze(&html);

    assert_eq!(result.breakdown.fact_density, 95);
    assert_eq!(result.issues_of(IssueType::FactDensity).count(), 0);
}

#[test]
fn issues_are_sorted_by_severity() {
    let result = analyze(&page("<h3></h3><p>short</p><h2>Lonely</h2>"));

    let ranks: Vec<u8> = result.issues.iter().map(|i| i.severity.rank()).collect();
    assert!(!ranks.is_empty());
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "unsorted: {ranks:?}");
}

#[test]
fn ties_keep_check_order() {
    // Both answer placement and heading structure report a missing H1 (high).
    let result = analyze(&page("<p>No headings on this page at all.</p>"));

    let high: Vec<IssueType> = result
        .issues
        .iter()
        .filter(|i| i.severity == Severity::High)
        .map(|i| i.kind)
        .collect();
    let first_answer = high.iter().position(|k| *k == IssueType::AnswerPlacement);
    let first_heading = high.iter().position(|k| *k == IssueType::HeadingStructure);
    let first_schema = high.iter().position(|k| *k == IssueType::Schema);
    assert!(first_answer < first_heading);
    assert!(first_heading < first_schema);
}

#[test]
fn recommendations_depend_on_breakdown_only() {
    let result = analyze("");

    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("JSON-LD")));
    assert!(!result
        .recommendations
        .iter()
        .any(|r| r.contains("well optimized")));
}

#[test]
fn analysis_is_deterministic() {
    let first = analyze(WELL_OPTIMIZED_PAGE);
    let second = analyze(WELL_OPTIMIZED_PAGE);
    assert_eq!(first, second);

    let html = page("<h1></h1><h3>x</h3><p>Step 1 of 3</p>");
    assert_eq!(
        analyze(&html).to_json().expect("serializes"),
        analyze(&html).to_json().expect("serializes")
    );
}
