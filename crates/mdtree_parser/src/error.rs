//! Parse error types.

use thiserror::Error;

/// Errors that can occur while parsing or formatting.
///
/// These never cross the public total entry points; they are logged there
/// and converted into a degraded result.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text cannot be processed.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// 1-based line where the error occurred.
        line: Option<u32>,
    },

    /// An internal invariant was violated.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            line: None,
        }
    }

    /// Creates a new invalid source error at a line.
    pub fn invalid_source_at(message: impl Into<String>, line: u32) -> Self {
        Self::InvalidSource {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
