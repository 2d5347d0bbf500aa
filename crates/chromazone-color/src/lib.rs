//! chromazone-color - Color model and palette reduction
//!
//! This crate provides the color operations behind zone comparison and
//! palette construction:
//!
//! - **Color space conversion** ([`colorspace`]): sRGB -> XYZ -> CIE L*a*b*, luminance
//! - **Distances** ([`distance`]): perceptual (L*a*b*) and raw RGB Euclidean distance
//! - **Averaging** ([`mean`]): per-channel weighted mean
//! - **Hex notation** ([`hex`]): `#rgb` / `#rrggbb` parsing
//! - **Palette reduction** ([`palette`]): agglomerative merging of zone colors

pub mod colorspace;
pub mod distance;
pub mod error;
pub mod hex;
pub mod mean;
pub mod palette;

// Re-export core types
pub use chromazone_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    Lab, Xyz, is_light, relative_luminance, rgb_to_lab, rgb_to_xyz, srgb_to_linear, xyz_to_lab,
};

pub use distance::{MAX_RGB_DISTANCE, distance_lab, distance_rgb};
pub use hex::parse_hex;
pub use mean::{mean, weighted_mean};

// Re-export palette reduction
pub use palette::{ColorMap, PaletteEntry, reduce_colors};
