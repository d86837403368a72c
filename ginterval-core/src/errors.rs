use thiserror::Error;

/// Error type for interval construction, parsing and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomicIntervalError {
    /// Coordinates break `1 <= start <= end`.
    #[error("Invalid range {chrom}:{start}-{end}: expected 1 <= start <= end")]
    InvalidRange { chrom: String, start: i64, end: i64 },

    /// Text is not of the form `chrom:start-end` or `chrom:pos`.
    #[error("Error parsing interval {text:?}: {reason}")]
    ParseError { text: String, reason: String },

    /// Operation needs both intervals on one chromosome.
    #[error("Chromosome mismatch: {0} vs {1}")]
    ChromosomeMismatch(String, String),
}

impl GenomicIntervalError {
    pub(crate) fn parse_error(text: &str, reason: impl Into<String>) -> Self {
        GenomicIntervalError::ParseError {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for ginterval-core operations.
pub type Result<T> = std::result::Result<T, GenomicIntervalError>;
