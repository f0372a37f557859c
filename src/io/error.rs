//! Error types for puzzle generation operations
//!
//! The taxonomy is deliberately small: puzzle generation is best-effort, so
//! exhausted placements, unfit word lengths, and non-collinear reads are all
//! sentinel `None` results rather than errors. Only malformed configuration
//! and word-list I/O fail hard.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum WordSearchError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to read a word-list file from the filesystem
    WordListRead {
        /// Path to the word-list file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WordSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WordListRead { path, source } => {
                write!(
                    f,
                    "Failed to read word list '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WordSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListRead { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, WordSearchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WordSearchError {
    WordSearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
