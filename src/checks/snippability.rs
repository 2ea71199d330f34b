//! Snippability: is every section quotable on its own?
//!
//! A section heading (H2/H3) is snippable when the element right after it
//! carries at least 80 characters of text.

use dom_query::Document;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::SECTION_HEADING_SELECTOR;
use crate::result::{Issue, IssueType, Severity};

/// Minimum trimmed text length of the block following a section heading.
pub const MIN_SNIPPET_CHARS: usize = 80;

/// Run the snippability check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let headings = dom::query_selector_all(doc, SECTION_HEADING_SELECTOR);
    if headings.is_empty() {
        return CheckOutcome::with_issue(
            30,
            Issue::new(
                IssueType::Snippability,
                Severity::Medium,
                "No H2 or H3 subheadings found",
                "Break the content into sections with descriptive H2/H3 headings",
            ),
        );
    }

    let mut snippable = 0usize;
    let mut issues = Vec::new();
    for heading in &headings {
        let following = dom::next_element_sibling(heading)
            .map(|el| dom::trimmed_text(&el).chars().count())
            .unwrap_or_default();
        if following >= MIN_SNIPPET_CHARS {
            snippable += 1;
        } else {
            let title = dom::normalized_text(heading);
            issues.push(Issue::new(
                IssueType::Snippability,
                Severity::Low,
                format!("Section \"{title}\" has insufficient content below it"),
                format!(
                    "Follow the heading with a self-contained paragraph of at least {MIN_SNIPPET_CHARS} characters"
                ),
            ));
        }
    }

    CheckOutcome {
        score: percentage(snippable, headings.len()),
        issues,
    }
}

/// `round(100 * part / total)` in integer arithmetic, halves rounding up.
fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)).min(100) as u8
}
