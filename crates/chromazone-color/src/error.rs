//! Error types for chromazone-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromazone_core::Error),

    /// Malformed hex color string
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
