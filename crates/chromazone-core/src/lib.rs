//! chromazone Core - Basic data structures for the paint-by-number pipeline
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the pipeline:
//!
//! - [`Pix`] / [`PixMut`] - The RGBA image container (immutable / mutable)
//! - [`Rgba`] - A single 8-bit-per-channel color
//! - [`Point`] - An integer pixel coordinate
//! - [`BoundaryMap`] - Dense boundary bitmap produced by classification
//! - [`LabelGrid`] - Dense zone-id grid produced by segmentation

pub mod boundary;
pub mod error;
pub mod labels;
pub mod pix;
pub mod point;
pub mod rgba;

pub use boundary::BoundaryMap;
pub use error::{Error, Result};
pub use labels::{BOUNDARY_LABEL, LabelGrid};
pub use pix::{Pix, PixMut};
pub use point::Point;
pub use rgba::Rgba;

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }
}
