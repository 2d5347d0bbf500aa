//! Error types for chromazone-filter

use thiserror::Error;

/// Errors that can occur while configuring boundary classification
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromazone_core::Error),

    /// Strategy name not recognized
    #[error("unknown delimiter strategy {0:?} (expected \"border\" or \"color\")")]
    UnknownStrategy(String),

    /// Tolerance outside [0, 100]
    #[error("{name} must be within 0..=100, got {value}")]
    InvalidTolerance {
        /// Which tolerance was rejected
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
