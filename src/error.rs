//! Error types for URL normalization operations.

use thiserror::Error;

/// Errors that can occur while normalizing a URL record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The dot-segment resolver hit its retained-segment bound.
    ///
    /// This is a resource limit, not a statement about the input's meaning:
    /// retry with a higher limit or reject the input, but never assume the
    /// path was normalized.
    #[error("path exceeds the retained-segment limit of {limit}")]
    SegmentLimitExceeded {
        /// The bound that was in effect when resolution was aborted.
        limit: usize,
    },

    /// URL parsing failed at the record boundary.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for NormalizeError {
    fn from(err: url::ParseError) -> Self {
        NormalizeError::UrlParseError(err.to_string())
    }
}
