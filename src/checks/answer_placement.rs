//! Answer placement: does the page state its core answer directly, near the top?
//!
//! A strict cascade. The first failing condition decides the score:
//!
//! | Condition                                   | Score | Severity |
//! |---------------------------------------------|-------|----------|
//! | no `<h1>`                                   | 0     | high     |
//! | no paragraph, or under 30 characters        | 20    | high     |
//! | paragraph lacks a definitional verb         | 55    | medium   |
//! | paragraph starts past the first fifth       | 65    | medium   |
//! | otherwise                                   | 95    | -        |

use dom_query::{Document, Selection};
use tracing::trace;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::{DEFINITIONAL_WORD, MAIN_PARAGRAPH_SELECTOR, MAIN_SELECTOR};
use crate::result::{Issue, IssueType, Severity};

/// Minimum trimmed length for the opening paragraph.
const MIN_PARAGRAPH_CHARS: usize = 30;

/// Largest acceptable offset of the answer, as a fraction of body text.
const MAX_POSITION_RATIO: f64 = 0.2;

/// Run the answer-placement check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let Some(h1) = dom::query_selector(doc, "h1") else {
        return CheckOutcome::with_issue(
            0,
            Issue::new(
                IssueType::AnswerPlacement,
                Severity::High,
                "No H1 heading found",
                "Add a clear H1 heading that states the main topic of the page",
            ),
        );
    };

    let paragraph = first_paragraph(doc, &h1).map(|p| dom::trimmed_text(&p));
    let text = match paragraph {
        Some(text) if text.chars().count() >= MIN_PARAGRAPH_CHARS => text,
        _ => {
            return CheckOutcome::with_issue(
                20,
                Issue::new(
                    IssueType::AnswerPlacement,
                    Severity::High,
                    "No substantive paragraph after the H1 heading",
                    "Follow the H1 with a paragraph that directly answers the page's main question",
                ),
            );
        }
    };

    if !DEFINITIONAL_WORD.is_match(&text) {
        return CheckOutcome::with_issue(
            55,
            Issue::new(
                IssueType::AnswerPlacement,
                Severity::Medium,
                "Opening paragraph does not give a direct answer",
                "Start with a direct statement such as \"X is ...\" or \"X helps you ...\"",
            ),
        );
    }

    let ratio = position_ratio(&dom::body_text(doc), &dom::normalize_whitespace(&text));
    trace!(ratio, "answer position within body text");
    if ratio > MAX_POSITION_RATIO {
        return CheckOutcome::with_issue(
            65,
            Issue::new(
                IssueType::AnswerPlacement,
                Severity::Medium,
                format!(
                    "Answer appears too far down the page ({:.0}% into the content)",
                    ratio * 100.0
                ),
                "Move the direct answer into the first 20% of the page content",
            ),
        );
    }

    CheckOutcome::clean(95)
}

/// Locate the opening paragraph.
///
/// Two explicit branches: when the page has a main content container the
/// first paragraph inside it wins; otherwise the first `<p>` among the
/// siblings following the H1.
fn first_paragraph<'a>(doc: &'a Document, h1: &Selection<'a>) -> Option<Selection<'a>> {
    if dom::exists(doc, MAIN_SELECTOR) {
        dom::query_selector(doc, MAIN_PARAGRAPH_SELECTOR)
    } else {
        dom::next_sibling_with_tag(h1, "p")
    }
}

/// Character offset of `needle` in `haystack` divided by the haystack length.
///
/// Returns 0 when the needle cannot be found or the haystack is empty.
fn position_ratio(haystack: &str, needle: &str) -> f64 {
    let total = haystack.chars().count();
    if total == 0 {
        return 0.0;
    }
    haystack.find(needle).map_or(0.0, |byte_offset| {
        let offset = haystack[..byte_offset].chars().count();
        offset as f64 / total as f64
    })
}
