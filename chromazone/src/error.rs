//! Error type for the chromazone pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Any error raised while converting a drawing
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] chromazone_core::Error),

    #[error(transparent)]
    Color(#[from] chromazone_color::ColorError),

    #[error(transparent)]
    Filter(#[from] chromazone_filter::FilterError),

    #[error(transparent)]
    Region(#[from] chromazone_region::RegionError),

    #[error(transparent)]
    Io(#[from] chromazone_io::IoError),

    #[error(transparent)]
    Render(#[from] chromazone_render::RenderError),

    /// Output path does not name a PNG file
    #[error("output must be a .png file: {}", .0.display())]
    OutputNotPng(PathBuf),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
