//! # ai-readability
//!
//! Scores HTML pages for how easily AI crawlers and answer engines can
//! extract a direct answer, verifiable facts, authorship signals and
//! structured data.
//!
//! ## Quick Start
//!
//! ```rust
//! use ai_readability::analyze;
//!
//! let html = r#"<html><body>
//!     <h1>What is Rust?</h1>
//!     <p>Rust is a systems programming language focused on safety and speed.</p>
//! </body></html>"#;
//!
//! let result = analyze(html);
//! println!("Score: {}/100", result.overall_score);
//! for issue in &result.issues {
//!     println!("[{:?}] {}: {}", issue.severity, issue.kind, issue.message);
//! }
//! ```
//!
//! ## Checks
//!
//! | Check               | Weight | Looks for                                        |
//! |---------------------|--------|--------------------------------------------------|
//! | `answer-placement`  | 25%    | a direct answer right after the H1               |
//! | `fact-density`      | 15%    | 4–10 numbers, dates or figures per 100 words     |
//! | `heading-structure` | 15%    | one H1, no skipped levels, no empty headings     |
//! | `eeat`              | 20%    | author, organization, contact and trust signals  |
//! | `snippability`      | 10%    | 80+ characters under every H2/H3                 |
//! | `schema`            | 15%    | valid JSON-LD with FAQPage and Organization      |
//!
//! Every check is a syntactic heuristic over the DOM. Nothing here fails on
//! bad input: missing structure shows up as low sub-scores and issues.

mod analyzer;
mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// The six readability checks.
pub mod checks;

/// Weighting, issue ranking and recommendations.
pub mod scoring;

/// Character encoding detection and transcoding.
pub mod encoding;

use std::io::Read;

// Public API - re-exports
pub use analyzer::Analyzer;
pub use error::{Error, Result};
pub use options::Options;
pub use result::{AnalysisResult, Breakdown, Issue, IssueType, Severity};
pub use scoring::Weights;

/// Analyzes an HTML document with every check enabled.
///
/// # Example
///
/// ```rust
/// use ai_readability::analyze;
///
/// let result = analyze("");
/// assert_eq!(result.breakdown.schema, 0);
/// assert!(result.overall_score <= 100);
/// ```
#[must_use]
pub fn analyze(html: &str) -> AnalysisResult {
    analyze_with_options(html, &Options::default())
}

/// Analyzes an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use ai_readability::{analyze_with_options, Options};
///
/// let options = Options {
///     check_eeat: false,
///     ..Options::default()
/// };
/// let result = analyze_with_options("<h1>Title</h1>", &options);
/// assert_eq!(result.breakdown.eeat, 100);
/// ```
#[must_use]
pub fn analyze_with_options(html: &str, options: &Options) -> AnalysisResult {
    Analyzer::new(*options).analyze(html)
}

/// Analyzes HTML bytes, decoding them using the charset the page declares.
///
/// Falls back to UTF-8 when no `<meta charset>` declaration is found.
/// Invalid byte sequences are replaced with U+FFFD rather than rejected.
///
/// # Example
///
/// ```rust
/// use ai_readability::analyze_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9</h1></body></html>";
/// let result = analyze_bytes(html);
/// assert_eq!(result.breakdown.heading_structure, 100);
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8]) -> AnalysisResult {
    analyze_bytes_with_options(html, &Options::default())
}

/// Analyzes HTML bytes with custom options and automatic encoding detection.
#[must_use]
pub fn analyze_bytes_with_options(html: &[u8], options: &Options) -> AnalysisResult {
    let html_str = encoding::transcode_to_utf8(html);
    analyze_with_options(&html_str, options)
}

/// Reads an entire HTML document from `reader` and analyzes it.
///
/// Only reading can fail; the failure is returned unchanged as
/// [`Error::Io`].
///
/// # Example
///
/// ```rust
/// use ai_readability::{analyze_reader, Options};
///
/// let input: &[u8] = b"<h1>Title</h1>";
/// let result = analyze_reader(input, &Options::default())?;
/// assert_eq!(result.breakdown.heading_structure, 100);
/// # Ok::<(), ai_readability::Error>(())
/// ```
pub fn analyze_reader<R: Read>(mut reader: R, options: &Options) -> Result<AnalysisResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(analyze_bytes_with_options(&bytes, options))
}
