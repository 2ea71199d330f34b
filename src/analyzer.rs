//! The readability analyzer: one parse, six checks, one result.

use tracing::debug;

use crate::checks;
use crate::dom;
use crate::options::Options;
use crate::result::{AnalysisResult, Breakdown, IssueType};
use crate::scoring::{self, Weights};

/// Scores HTML documents for AI readability.
///
/// The options are fixed at construction; an analyzer can be shared across
/// threads and reused for any number of documents.
///
/// # Example
///
/// ```rust
/// use ai_readability::{Analyzer, IssueType, Options};
///
/// let analyzer = Analyzer::new(Options::default().without(IssueType::Schema));
/// let result = analyzer.analyze("<html><body><h1>Hi</h1></body></html>");
///
/// assert_eq!(result.breakdown.schema, 100);
/// assert!(result.overall_score <= 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: Options,
    weights: Weights,
}

impl Analyzer {
    /// Create an analyzer running the checks enabled in `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            weights: Weights::STANDARD,
        }
    }

    /// The options this analyzer was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Analyze an HTML document.
    ///
    /// Never fails: empty or malformed input yields low sub-scores and
    /// issues describing what is missing.
    #[must_use]
    pub fn analyze(&self, html: &str) -> AnalysisResult {
        debug!(html_len = html.len(), "starting readability analysis");
        let doc = dom::parse(html);

        let mut breakdown = Breakdown::default();
        let mut issues = Vec::new();
        for kind in IssueType::ALL {
            if !self.options.is_enabled(kind) {
                debug!(check = %kind, "check disabled");
                continue;
            }
            let outcome = checks::run(kind, &doc);
            debug!(
                check = %kind,
                score = outcome.score,
                issues = outcome.issues.len(),
                "check complete"
            );
            breakdown.set(kind, outcome.score);
            issues.extend(outcome.issues);
        }

        scoring::rank_issues(&mut issues);
        let overall_score = self.weights.overall(&breakdown);
        let recommendations = scoring::recommendations(&breakdown);
        debug!(overall_score, issues = issues.len(), "analysis complete");

        AnalysisResult {
            overall_score,
            breakdown,
            issues,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Severity;

    #[test]
    fn analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }

    #[test]
    fn default_analyzer_runs_everything() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.options(), &Options::default());
    }

    #[test]
    fn empty_input_is_well_formed() {
        let result = Analyzer::default().analyze("");

        assert_eq!(result.breakdown.heading_structure, 60);
        assert_eq!(result.breakdown.schema, 0);
        assert_eq!(result.breakdown.fact_density, 0);
        assert_eq!(result.issues[0].severity, Severity::High);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn disabled_checks_score_full_without_issues() {
        let analyzer = Analyzer::new(Options::only(IssueType::Schema));
        let result = analyzer.analyze("");

        assert_eq!(result.breakdown.answer_placement, 100);
        assert_eq!(result.breakdown.eeat, 100);
        assert_eq!(result.breakdown.schema, 0);
        assert!(result.issues.iter().all(|i| i.kind == IssueType::Schema));
        // 100 * 0.85 + 0 * 0.15
        assert_eq!(result.overall_score, 85);
    }
}
