//! Heading structure: one H1, no skipped levels, no empty headings.
//!
//! Starts from 100 and subtracts a fixed penalty per finding, floored at 0.

use dom_query::Document;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::{HIERARCHY_HEADING_SELECTOR, NAMED_HEADING_SELECTOR};
use crate::result::{Issue, IssueType, Severity};

const MISSING_H1_PENALTY: i32 = 40;
const MULTIPLE_H1_PENALTY: i32 = 20;
const ORPHAN_H3_PENALTY: i32 = 20;
const SKIPPED_LEVEL_PENALTY: i32 = 10;
const EMPTY_HEADING_PENALTY: i32 = 10;

/// Run the heading-structure check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let mut score: i32 = 100;
    let mut issues = Vec::new();

    let h1_count = doc.select("h1").length();
    if h1_count == 0 {
        score -= MISSING_H1_PENALTY;
        issues.push(Issue::new(
            IssueType::HeadingStructure,
            Severity::High,
            "Missing H1 heading",
            "Add exactly one H1 heading that names the page's main topic",
        ));
    } else if h1_count > 1 {
        score -= MULTIPLE_H1_PENALTY;
        issues.push(Issue::new(
            IssueType::HeadingStructure,
            Severity::Medium,
            format!("Multiple H1 headings found ({h1_count})"),
            "Keep a single H1 and demote the others to H2",
        ));
    }

    if dom::exists(doc, "h3") && !dom::exists(doc, "h2") {
        score -= ORPHAN_H3_PENALTY;
        issues.push(Issue::new(
            IssueType::HeadingStructure,
            Severity::Medium,
            "H3 headings used without any H2",
            "Introduce H2 section headings before using H3 subsections",
        ));
    }

    let levels: Vec<u8> = dom::query_selector_all(doc, HIERARCHY_HEADING_SELECTOR)
        .iter()
        .filter_map(dom::heading_level)
        .collect();
    for (from, to) in skipped_levels(&levels) {
        score -= SKIPPED_LEVEL_PENALTY;
        issues.push(Issue::new(
            IssueType::HeadingStructure,
            Severity::Low,
            format!("Heading level skipped: H{from} to H{to}"),
            format!("Insert an H{} between the H{from} and the H{to}", from + 1),
        ));
    }

    for heading in dom::query_selector_all(doc, NAMED_HEADING_SELECTOR) {
        if dom::trimmed_text(&heading).is_empty() {
            let tag = dom::tag_name(&heading).unwrap_or_default().to_uppercase();
            score -= EMPTY_HEADING_PENALTY;
            issues.push(Issue::new(
                IssueType::HeadingStructure,
                Severity::Medium,
                format!("Empty {tag} heading"),
                "Give every heading descriptive text or remove it",
            ));
        }
    }

    CheckOutcome {
        score: score.clamp(0, 100) as u8,
        issues,
    }
}

/// Pairs of consecutive heading levels where the second jumps more than one
/// level deeper than the first.
///
/// Each heading is compared with its immediate predecessor, so consecutive
/// skips are reported independently. The first heading is never flagged.
fn skipped_levels(levels: &[u8]) -> Vec<(u8, u8)> {
    levels
        .windows(2)
        .filter(|pair| pair[1] > pair[0] + 1)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}
