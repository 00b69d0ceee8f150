//! Structured error types for the druggen crates.

use thiserror::Error;

/// Unified error type for all druggen operations.
#[derive(Debug, Error)]
pub enum DruggenError {
    /// Invalid argument (negative counts, malformed ranges, unknown form values)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Parse error (malformed JSON handed across the boundary)
    #[error("parse error: {0}")]
    Parse(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl DruggenError {
    /// Stable snake_case name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Parse(_) => "parse",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience alias used throughout the druggen crates.
pub type Result<T> = std::result::Result<T, DruggenError>;
