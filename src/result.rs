//! Result types for analysis output.
//!
//! This module defines the structured output of an analysis run: the
//! per-check breakdown, the ranked issue list and the recommendations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifies one of the six readability checks.
///
/// Also used as the `type` of every [`Issue`] the check produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    AnswerPlacement,
    FactDensity,
    HeadingStructure,
    Eeat,
    Snippability,
    Schema,
}

impl IssueType {
    /// All checks, in the order the analyzer runs them.
    pub const ALL: [IssueType; 6] = [
        IssueType::AnswerPlacement,
        IssueType::FactDensity,
        IssueType::HeadingStructure,
        IssueType::Eeat,
        IssueType::Snippability,
        IssueType::Schema,
    ];

    /// Kebab-case name, as used in JSON output and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::AnswerPlacement => "answer-placement",
            IssueType::FactDensity => "fact-density",
            IssueType::HeadingStructure => "heading-structure",
            IssueType::Eeat => "eeat",
            IssueType::Snippability => "snippability",
            IssueType::Schema => "schema",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IssueType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCheck(s.to_string()))
    }
}

/// How urgently an issue should be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Sort rank: high sorts first.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

/// A single finding with a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The check that produced this issue.
    #[serde(rename = "type")]
    pub kind: IssueType,

    pub severity: Severity,

    /// What is wrong.
    pub message: String,

    /// What to do about it.
    pub fix: String,
}

impl Issue {
    #[must_use]
    pub fn new(
        kind: IssueType,
        severity: Severity,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            fix: fix.into(),
        }
    }
}

/// Per-check sub-scores, each in `0..=100`.
///
/// A disabled check always reports 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub answer_placement: u8,
    pub fact_density: u8,
    pub heading_structure: u8,
    pub eeat: u8,
    pub snippability: u8,
    pub schema: u8,
}

impl Default for Breakdown {
    fn default() -> Self {
        Self {
            answer_placement: 100,
            fact_density: 100,
            heading_structure: 100,
            eeat: 100,
            snippability: 100,
            schema: 100,
        }
    }
}

impl Breakdown {
    /// Sub-score for one check.
    #[must_use]
    pub fn get(&self, kind: IssueType) -> u8 {
        match kind {
            IssueType::AnswerPlacement => self.answer_placement,
            IssueType::FactDensity => self.fact_density,
            IssueType::HeadingStructure => self.heading_structure,
            IssueType::Eeat => self.eeat,
            IssueType::Snippability => self.snippability,
            IssueType::Schema => self.schema,
        }
    }

    /// Overwrite the sub-score for one check, clamped to 100.
    pub fn set(&mut self, kind: IssueType, score: u8) {
        let score = score.min(100);
        match kind {
            IssueType::AnswerPlacement => self.answer_placement = score,
            IssueType::FactDensity => self.fact_density = score,
            IssueType::HeadingStructure => self.heading_structure = score,
            IssueType::Eeat => self.eeat = score,
            IssueType::Snippability => self.snippability = score,
            IssueType::Schema => self.schema = score,
        }
    }
}

/// Output of [`Analyzer::analyze`](crate::Analyzer::analyze).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Weighted overall score, `0..=100`.
    pub overall_score: u8,

    pub breakdown: Breakdown,

    /// Issues ordered by severity (high first), stable within a tier.
    pub issues: Vec<Issue>,

    /// Fixed advice strings derived from the breakdown.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Issues produced by one check.
    pub fn issues_of(&self, kind: IssueType) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    /// Compact JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
