//! Error types for ai-readability.
//!
//! Analysis itself never fails: missing structure is reported as a low
//! sub-score plus an [`Issue`](crate::Issue). These errors cover the
//! collaborators around the analyzer (reading input, rendering output,
//! parsing check names and arguments).

/// Error type for I/O and serialization around analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the HTML input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering an analysis result as JSON failed.
    #[error("failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A check name did not match any known check.
    #[error("unknown check: {0}")]
    UnknownCheck(String),

    /// A command-line argument was not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
