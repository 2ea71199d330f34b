//! Schema coverage: presence and quality of embedded JSON-LD.
//!
//! Scores are tiered: no blocks 0, only broken blocks 10, then 50/75/100
//! depending on how many of the wanted schema types appear.

use dom_query::Document;
use serde_json::Value;
use tracing::trace;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::JSON_LD_SELECTOR;
use crate::result::{Issue, IssueType, Severity};

/// A schema type whose literal marker should appear in the JSON-LD.
#[derive(Debug)]
pub struct WantedType {
    pub marker: &'static str,
    pub message: &'static str,
    pub fix: &'static str,
}

/// Schema types that lift the score above the base tier, in report order.
pub static WANTED_TYPES: [WantedType; 2] = [
    WantedType {
        marker: "FAQPage",
        message: "Missing FAQPage schema",
        fix: "Add FAQPage JSON-LD for the questions the page answers",
    },
    WantedType {
        marker: "Organization",
        message: "Missing Organization schema",
        fix: "Add Organization JSON-LD with name, url and logo",
    },
];

/// Score by number of wanted types present: none, one, both.
const COVERAGE_SCORES: [u8; 3] = [50, 75, 100];

/// Score when blocks exist but none is a valid schema object.
const BROKEN_SCORE: u8 = 10;

/// Run the schema-coverage check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let blocks: Vec<String> = dom::query_selector_all(doc, JSON_LD_SELECTOR)
        .iter()
        .map(|script| dom::text_content(script).to_string())
        .collect();

    if blocks.is_empty() {
        return CheckOutcome::with_issue(
            0,
            Issue::new(
                IssueType::Schema,
                Severity::High,
                "No JSON-LD structured data found",
                "Add a <script type=\"application/ld+json\"> block describing the page",
            ),
        );
    }

    let mut issues = Vec::new();
    let mut valid = 0usize;
    for (index, block) in blocks.iter().enumerate() {
        match serde_json::from_str::<Value>(block.trim()) {
            Ok(value) => {
                if is_schema_object(&value) {
                    valid += 1;
                }
            }
            Err(err) => {
                trace!(index, %err, "invalid JSON-LD block");
                issues.push(Issue::new(
                    IssueType::Schema,
                    Severity::Medium,
                    format!("Invalid JSON in JSON-LD block {}", index + 1),
                    "Fix the JSON syntax so the structured data can be parsed",
                ));
            }
        }
    }

    if valid == 0 {
        return CheckOutcome {
            score: BROKEN_SCORE,
            issues,
        };
    }

    let combined = blocks.concat();
    let mut present = 0usize;
    for wanted in &WANTED_TYPES {
        if combined.contains(wanted.marker) {
            present += 1;
        } else {
            issues.push(Issue::new(
                IssueType::Schema,
                Severity::Low,
                wanted.message,
                wanted.fix,
            ));
        }
    }

    CheckOutcome {
        score: COVERAGE_SCORES[present.min(COVERAGE_SCORES.len() - 1)],
        issues,
    }
}

/// A top-level JSON object carrying both `@context` and `@type`.
fn is_schema_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("@context") && map.contains_key("@type"))
}
