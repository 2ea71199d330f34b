//! Compiled regex patterns and CSS selectors for the readability checks.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are grouped by the check that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Answer Placement
// =============================================================================

/// Verbs and helpers that signal a definitional opening ("X is ...").
pub static DEFINITIONAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:is|are|helps|provides|enables|allows|lets|gives|makes)\b")
        .expect("DEFINITIONAL_WORD regex")
});

// =============================================================================
// Fact Density
// =============================================================================

/// Matches a single citable fact token.
///
/// Alternatives, leftmost first: percentage, four-digit year, number with an
/// optional magnitude suffix, month name. Bare numbers count ("Step 1").
pub static FACT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+(?:\.\d+)?%|\b\d{4}\b|\d+(?:[.,]\d+)*(?:\s*(?:million|billion|thousand|k|m|b)\b)?|\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\b",
    )
    .expect("FACT_TOKEN regex")
});

// =============================================================================
// E-E-A-T Signals
// =============================================================================

/// Byline phrases in body text: "written by" or "by First Last".
///
/// Only "written by" is case-insensitive; the name must be capitalised.
pub static AUTHOR_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:written by)|\b[Bb]y\s+[A-Z][a-z]+\s+[A-Z][a-z]+").expect("AUTHOR_TEXT regex")
});

/// Experience, credential, recognition and social-proof phrases.
pub static TRUST_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+\+?\s*years?\s+(?:of\s+)?experience|\bcertifi(?:ed|cation)\b|\bawards?\b|\brecogni[sz]ed\b|\b(?:published|featured)\s+in\b|\b(?:trusted|used)\s+by\b|\d[\d,]*\+?\s*(?:users|customers|companies|clients)\b",
    )
    .expect("TRUST_LANGUAGE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// CSS Selectors (as strings for use with dom_query)
// =============================================================================

/// Containers that hold the page's main content.
pub const MAIN_SELECTOR: &str = r#"main, [role="main"], article, .content, #content"#;

/// First paragraph candidates inside a main content container.
pub const MAIN_PARAGRAPH_SELECTOR: &str =
    r#"main p, [role="main"] p, article p, .content p, #content p"#;

/// Headings that take part in the hierarchy walk.
pub const HIERARCHY_HEADING_SELECTOR: &str = "h1, h2, h3, h4";

/// Headings that must not be empty.
pub const NAMED_HEADING_SELECTOR: &str = "h1, h2, h3";

/// Section headings that should be followed by a quotable block.
pub const SECTION_HEADING_SELECTOR: &str = "h2, h3";

/// Author markup, bylines and author meta.
pub const AUTHOR_SELECTOR: &str = r#"[rel="author"], .author, .byline, [class*="author"], [class*="byline"], [itemprop="author"], meta[name="author"]"#;

/// Organization microdata and site-name meta.
pub const ORGANIZATION_SELECTOR: &str = r#"[itemtype*="Organization"], meta[property="og:site_name"], meta[name="application-name"]"#;

/// Contact links and footer landmarks.
pub const CONTACT_SELECTOR: &str =
    r#"a[href^="mailto:"], a[href^="tel:"], footer, [role="contentinfo"]"#;

/// Embedded JSON-LD blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
