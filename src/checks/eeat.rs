//! E-E-A-T: experience, expertise, authoritativeness and trust signals.
//!
//! Four independent signals worth 25 points each. A signal is present when
//! any of its selectors matches, or its text pattern matches the body text.

use dom_query::Document;
use regex::Regex;
use std::sync::LazyLock;

use super::CheckOutcome;
use crate::dom;
use crate::patterns::{
    AUTHOR_SELECTOR, AUTHOR_TEXT, CONTACT_SELECTOR, ORGANIZATION_SELECTOR, TRUST_LANGUAGE,
};
use crate::result::{Issue, IssueType, Severity};

/// Points awarded per satisfied signal.
pub const SIGNAL_POINTS: u8 = 25;

/// One credibility signal and the issue raised when it is absent.
#[derive(Debug)]
pub struct Signal {
    pub name: &'static str,
    /// Markup that satisfies the signal.
    pub selector: Option<&'static str>,
    /// Body text pattern that satisfies the signal.
    pub text_pattern: Option<&'static LazyLock<Regex>>,
    pub severity: Severity,
    pub message: &'static str,
    pub fix: &'static str,
}

impl Signal {
    /// Whether the document carries this signal.
    #[must_use]
    pub fn is_present(&self, doc: &Document, body_text: &str) -> bool {
        self.selector.is_some_and(|sel| dom::exists(doc, sel))
            || self
                .text_pattern
                .is_some_and(|pattern| pattern.is_match(body_text))
    }

    fn issue(&self) -> Issue {
        Issue::new(IssueType::Eeat, self.severity, self.message, self.fix)
    }
}

/// The signal table, in evaluation order.
pub static SIGNALS: [Signal; 4] = [
    Signal {
        name: "author",
        selector: Some(AUTHOR_SELECTOR),
        text_pattern: Some(&AUTHOR_TEXT),
        severity: Severity::Medium,
        message: "No author information found",
        fix: "Add a visible byline and author markup (e.g. rel=\"author\" or itemprop=\"author\")",
    },
    Signal {
        name: "organization",
        selector: Some(ORGANIZATION_SELECTOR),
        text_pattern: None,
        severity: Severity::Low,
        message: "No organization or publisher information found",
        fix: "Add Organization markup or an og:site_name meta tag",
    },
    Signal {
        name: "contact",
        selector: Some(CONTACT_SELECTOR),
        text_pattern: None,
        severity: Severity::Medium,
        message: "No contact information found",
        fix: "Add a footer with a contact email (mailto:) or phone (tel:) link",
    },
    Signal {
        name: "trust",
        selector: None,
        text_pattern: Some(&TRUST_LANGUAGE),
        severity: Severity::Low,
        message: "No trust signals found (experience, credentials, awards, social proof)",
        fix: "Mention years of experience, certifications, awards or customer counts",
    },
];

/// Run the E-E-A-T check.
#[must_use]
pub fn check(doc: &Document) -> CheckOutcome {
    let body_text = dom::body_text(doc);
    let mut score: u8 = 0;
    let mut issues = Vec::new();

    for signal in &SIGNALS {
        if signal.is_present(doc, &body_text) {
            score = score.saturating_add(SIGNAL_POINTS);
        } else {
            issues.push(signal.issue());
        }
    }

    CheckOutcome {
        score: score.min(100),
        issues,
    }
}
