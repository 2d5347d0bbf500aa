//! chromazone - Paint-by-number pages from line drawings
//!
//! The pipeline classifies boundary pixels, floods the remaining pixels
//! into zones, reduces the zone colors to a small numbered palette, and
//! renders the zone numbers and a legend.
//!
//! # Example
//!
//! ```
//! use chromazone::{Options, Pix, Rgba};
//!
//! let pix = Pix::from_fn(40, 20, |x, _| {
//!     if x == 20 { Rgba::BLACK } else { Rgba::WHITE }
//! })
//! .unwrap();
//! let analysis = chromazone::analyze(&pix, &Options::default()).unwrap();
//! assert!(!analysis.segmentation.is_empty());
//! ```

mod error;
mod options;
mod pipeline;

pub use error::{Error, Result};
pub use options::{DEFAULT_MAX_COLORS, Options};
pub use pipeline::{Analysis, analyze, convert, convert_file, convert_with_font};

// Re-export core types (primary data structures used everywhere)
pub use chromazone_core::{BOUNDARY_LABEL, BoundaryMap, LabelGrid, Pix, PixMut, Point, Rgba};

// Re-export domain crates as modules to avoid name conflicts
pub use chromazone_color as color;
pub use chromazone_filter as filter;
pub use chromazone_io as io;
pub use chromazone_region as region;
pub use chromazone_render as render;
