//! Error types for chromazone-render

use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromazone_core::Error),

    /// Analysis results do not describe the same image
    #[error("inconsistent render inputs: {0}")]
    Inconsistent(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
