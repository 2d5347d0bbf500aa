//! Error types for chromazone-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromazone_core::Error),

    /// Inputs describe images of different sizes
    #[error("dimension mismatch: boundary map is {map_width}x{map_height}, image is {width}x{height}")]
    DimensionMismatch {
        map_width: u32,
        map_height: u32,
        width: u32,
        height: u32,
    },

    /// A zone references a pixel outside the image
    #[error("zone {zone} has pixel ({x}, {y}) outside the image")]
    PixelOutOfRange { zone: usize, x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
