//! Error types for sms-analytics

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Analytics error types
///
/// Statistics that cannot be computed for an empty subset are not errors:
/// they surface as `None` in the view rows.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Corpus path does not resolve to a readable file
    #[error("Corpus not found: {path}: {source}")]
    CorpusNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus row is malformed or the file is not valid UTF-8
    #[error("Corpus format error at line {line}: {reason}")]
    CorpusFormat { line: usize, reason: String },

    /// Operation needs at least one record
    #[error("Corpus is empty")]
    EmptyCorpus,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyticsError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        AnalyticsError::CorpusFormat {
            line,
            reason: reason.into(),
        }
    }
}
