//! Weighting, issue ranking and recommendations.
//!
//! Turns per-check outcomes into the overall score, the severity-ordered
//! issue list and the recommendation strings of an [`AnalysisResult`].
//!
//! [`AnalysisResult`]: crate::AnalysisResult

use crate::result::{Breakdown, Issue, IssueType};

/// Weight of each check in the overall score, in percentage points.
///
/// The six weights sum to 100, so the weighted sum of sub-scores in
/// `0..=100` is itself in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub answer_placement: u32,
    pub fact_density: u32,
    pub heading_structure: u32,
    pub eeat: u32,
    pub snippability: u32,
    pub schema: u32,
}

impl Weights {
    /// The fixed weighting policy.
    pub const STANDARD: Weights = Weights {
        answer_placement: 25,
        fact_density: 15,
        heading_structure: 15,
        eeat: 20,
        snippability: 10,
        schema: 15,
    };

    /// Weight of one check in percentage points.
    #[must_use]
    pub fn get(&self, kind: IssueType) -> u32 {
        match kind {
            IssueType::AnswerPlacement => self.answer_placement,
            IssueType::FactDensity => self.fact_density,
            IssueType::HeadingStructure => self.heading_structure,
            IssueType::Eeat => self.eeat,
            IssueType::Snippability => self.snippability,
            IssueType::Schema => self.schema,
        }
    }

    /// Weight of one check as a fraction of 1.
    #[must_use]
    pub fn fraction(&self, kind: IssueType) -> f64 {
        f64::from(self.get(kind)) / 100.0
    }

    /// Sum of all weights in percentage points.
    #[must_use]
    pub fn total(&self) -> u32 {
        IssueType::ALL.iter().map(|kind| self.get(*kind)).sum()
    }

    /// `round(Σ breakdown[k] * weight[k])`, halves rounding up.
    ///
    /// Computed in integer hundredths so results do not depend on float
    /// rounding of the fractional weights.
    #[must_use]
    pub fn overall(&self, breakdown: &Breakdown) -> u8 {
        let total = self.total().max(1);
        let weighted: u32 = IssueType::ALL
            .iter()
            .map(|kind| u32::from(breakdown.get(*kind)) * self.get(*kind))
            .sum();
        ((2 * weighted + total) / (2 * total)).min(100) as u8
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Stable sort by severity rank: high first, production order kept within
/// a tier.
pub fn rank_issues(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| issue.severity.rank());
}

/// Recommendation rule: fires when the check's sub-score is below `below`.
struct Recommendation {
    kind: IssueType,
    below: u8,
    text: &'static str,
}

const RECOMMENDATIONS: [Recommendation; 6] = [
    Recommendation {
        kind: IssueType::AnswerPlacement,
        below: 70,
        text: "Put a direct, one-sentence answer to the page's main question immediately after the H1.",
    },
    Recommendation {
        kind: IssueType::FactDensity,
        below: 60,
        text: "Add specific statistics, dates and figures so AI systems have verifiable facts to cite.",
    },
    Recommendation {
        kind: IssueType::HeadingStructure,
        below: 80,
        text: "Fix the heading hierarchy: one H1, then H2 sections and H3 subsections without skipping levels.",
    },
    Recommendation {
        kind: IssueType::Eeat,
        below: 60,
        text: "Strengthen credibility signals: author byline, organization details, contact information and credentials.",
    },
    Recommendation {
        kind: IssueType::Snippability,
        below: 70,
        text: "Make each section self-contained with a substantial paragraph directly under its heading.",
    },
    Recommendation {
        kind: IssueType::Schema,
        below: 50,
        text: "Add valid JSON-LD structured data, ideally including FAQPage and Organization schemas.",
    },
];

/// Returned alone when no recommendation rule fires.
pub const WELL_OPTIMIZED: &str =
    "Content is well optimized for AI readability. Keep facts and structured data up to date.";

/// Recommendations derived from the breakdown alone.
#[must_use]
pub fn recommendations(breakdown: &Breakdown) -> Vec<String> {
    let fired: Vec<String> = RECOMMENDATIONS
        .iter()
        .filter(|rule| breakdown.get(rule.kind) < rule.below)
        .map(|rule| rule.text.to_string())
        .collect();

    if fired.is_empty() {
        vec![WELL_OPTIMIZED.to_string()]
    } else {
        fired
    }
}
