//! Configuration options for readability analysis.
//!
//! The `Options` struct selects which of the six checks run. A disabled
//! check reports a perfect sub-score and contributes no issues.

use crate::result::IssueType;

/// Configuration options for readability analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// to run every check.
///
/// # Example
///
/// ```rust
/// use ai_readability::Options;
///
/// // Run everything
/// let options = Options::default();
///
/// // Skip the structured-data check
/// let options = Options {
///     check_schema: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Check that the page states its answer directly, near the top.
    ///
    /// Default: `true`
    pub check_answer_placement: bool,

    /// Check the density of numbers, dates and other citable facts.
    ///
    /// Default: `true`
    pub check_fact_density: bool,

    /// Check for a single H1 and an unbroken heading hierarchy.
    ///
    /// Default: `true`
    pub check_heading_structure: bool,

    /// Check for author, organization, contact and trust signals.
    ///
    /// Default: `true`
    pub check_eeat: bool,

    /// Check that every section carries enough text to be quoted on its own.
    ///
    /// Default: `true`
    pub check_snippability: bool,

    /// Check for valid JSON-LD with FAQPage and Organization types.
    ///
    /// Default: `true`
    pub check_schema: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            check_answer_placement: true,
            check_fact_density: true,
            check_heading_structure: true,
            check_eeat: true,
            check_snippability: true,
            check_schema: true,
        }
    }
}

impl Options {
    /// Options with every check disabled except `kind`.
    #[must_use]
    pub fn only(kind: IssueType) -> Self {
        let mut options = Self {
            check_answer_placement: false,
            check_fact_density: false,
            check_heading_structure: false,
            check_eeat: false,
            check_snippability: false,
            check_schema: false,
        };
        *options.flag_mut(kind) = true;
        options
    }

    /// These options with `kind` disabled.
    #[must_use]
    pub fn without(mut self, kind: IssueType) -> Self {
        *self.flag_mut(kind) = false;
        self
    }

    /// Whether the check for `kind` runs.
    #[must_use]
    pub fn is_enabled(&self, kind: IssueType) -> bool {
        match kind {
            IssueType::AnswerPlacement => self.check_answer_placement,
            IssueType::FactDensity => self.check_fact_density,
            IssueType::HeadingStructure => self.check_heading_structure,
            IssueType::Eeat => self.check_eeat,
            IssueType::Snippability => self.check_snippability,
            IssueType::Schema => self.check_schema,
        }
    }

    fn flag_mut(&mut self, kind: IssueType) -> &mut bool {
        match kind {
            IssueType::AnswerPlacement => &mut self.check_answer_placement,
            IssueType::FactDensity => &mut self.check_fact_density,
            IssueType::HeadingStructure => &mut self.check_heading_structure,
            IssueType::Eeat => &mut self.check_eeat,
            IssueType::Snippability => &mut self.check_snippability,
            IssueType::Schema => &mut self.check_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_enable_every_check() {
        let opts = Options::default();

        assert!(opts.check_answer_placement);
        assert!(opts.check_fact_density);
        assert!(opts.check_heading_structure);
        assert!(opts.check_eeat);
        assert!(opts.check_snippability);
        assert!(opts.check_schema);
        assert!(IssueType::ALL.iter().all(|kind| opts.is_enabled(*kind)));
    }

    #[test]
    fn test_struct_update_disables_single_check() {
        let opts = Options {
            check_eeat: false,
            ..Options::default()
        };

        assert!(!opts.is_enabled(IssueType::Eeat));
        assert!(opts.is_enabled(IssueType::Schema));
    }

    #[test]
    fn test_only_enables_exactly_one_check() {
        let opts = Options::only(IssueType::FactDensity);

        for kind in IssueType::ALL {
            assert_eq!(opts.is_enabled(kind), kind == IssueType::FactDensity);
        }
    }

    #[test]
    fn test_without_chains() {
        let opts = Options::default()
            .without(IssueType::Schema)
            .without(IssueType::Snippability);

        assert!(!opts.check_schema);
        assert!(!opts.check_snippability);
        assert!(opts.check_answer_placement);
    }
}
