//! Fact density: how many citable facts appear per 100 words of prose.
//!
//! Facts are regex matches of [`FACT_TOKEN`] in paragraph text: numbers,
//! percentages, years, magnitudes and month names. The sweet spot is 4–10
//! facts per 100 words.

use dom_query::Document;
use tracing::trace;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::FACT_TOKEN;
use crate::result::{Issue, IssueType, Severity};

/// Word and fact totals across every paragraph of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactCount {
    pub words: usize,
    pub facts: usize,
}

impl FactCount {
    /// Facts per 100 words, `None` when there are no words.
    #[must_use]
    pub fn per_hundred_words(&self) -> Option<f64> {
        (self.words > 0).then(|| self.facts as f64 / self.words as f64 * 100.0)
    }
}

/// Count words and fact tokens across all `<p>` elements.
#[must_use]
pub fn count(doc: &Document) -> FactCount {
    dom::query_selector_all(doc, "p")
        .iter()
        .map(dom::text_content)
        .fold(FactCount::default(), |acc, text| FactCount {
            words: acc.words + text.split_whitespace().count(),
            facts: acc.facts + FACT_TOKEN.find_iter(&text).count(),
        })
}

/// Run the fact-density check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let counts = count(doc);
    let Some(rate) = counts.per_hundred_words() else {
        return CheckOutcome::with_issue(
            0,
            Issue::new(
                IssueType::FactDensity,
                Severity::High,
                "No paragraph text found",
                "Add paragraphs of body text containing concrete, verifiable facts",
            ),
        );
    };
    trace!(words = counts.words, facts = counts.facts, rate, "fact density");

    if rate < 2.0 {
        CheckOutcome::with_issue(
            25,
            Issue::new(
                IssueType::FactDensity,
                Severity::High,
                format!("Very low fact density ({rate:.1} facts per 100 words)"),
                "Add statistics, dates and specific numbers. Target 4-6 facts per 100 words",
            ),
        )
    } else if rate < 4.0 {
        CheckOutcome::with_issue(
            60,
            Issue::new(
                IssueType::FactDensity,
                Severity::Medium,
                format!("Low fact density ({rate:.1} facts per 100 words)"),
                "Add more concrete data points. Target 4-6 facts per 100 words",
            ),
        )
    } else if rate > 10.0 {
        CheckOutcome::with_issue(
            75,
            Issue::new(
                IssueType::FactDensity,
                Severity::Low,
                format!("Very high fact density ({rate:.1} facts per 100 words), content may read as a list"),
                "Add explanatory prose around the numbers so each fact has context",
            ),
        )
    } else {
        CheckOutcome::clean(95)
    }
}
