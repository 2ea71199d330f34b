//! The six readability checks.
//!
//! Each check is a pure function of the parsed document returning a
//! sub-score in `0..=100` and the issues that explain it. Checks never
//! fail; missing structure drives them toward their low-score branches.

pub mod answer_placement;
pub mod eeat;
pub mod fact_density;
pub mod heading_structure;
pub mod schema;
pub mod snippability;

use dom_query::Document;

use crate::result::{Issue, IssueType};

/// Score and findings produced by one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Sub-score, `0..=100`.
    pub score: u8,
    /// Findings in the order the check produced them.
    pub issues: Vec<Issue>,
}

impl CheckOutcome {
    /// A score with no findings.
    #[must_use]
    pub fn clean(score: u8) -> Self {
        Self {
            score,
            issues: Vec::new(),
        }
    }

    /// A score explained by a single finding.
    #[must_use]
    pub fn with_issue(score: u8, issue: Issue) -> Self {
        Self {
            score,
            issues: vec![issue],
        }
    }
}

/// Run the check identified by `kind` against `doc`.
#[must_use]
pub fn run(kind: IssueType, doc: &Document) -> CheckOutcome {
    match kind {
        IssueType::AnswerPlacement => answer_placement::check(doc),
        IssueType::FactDensity => fact_density::check(doc),
        IssueType::HeadingStructure => heading_structure::check(doc),
        IssueType::Eeat => eeat::check(doc),
        IssueType::Snippability => snippability::check(doc),
        IssueType::Schema => schema::check(doc),
    }
}
