//! chromazone-region - Zone segmentation
//!
//! This crate turns a boundary map into numbered zones:
//!
//! - **Segmentation** ([`segment`]): 4-connected flood fill of fill pixels
//! - **Zones** ([`zone`]): centroid and interior label point placement
//! - **Edge distance** ([`distance`]): per-zone distance-to-edge transform
//! - **Aggregation** ([`aggregate`]): parallel per-zone mean color and
//!   interior points

pub mod aggregate;
pub mod distance;
pub mod error;
pub mod segment;
pub mod zone;

// Re-export core types
pub use chromazone_core;

pub use error::{RegionError, RegionResult};

pub use aggregate::{interior_points, zone_colors};
pub use distance::edge_distances;
pub use segment::{Segmentation, find_zones};
pub use zone::{InteriorOptions, Zone};

use chromazone_core::{BoundaryMap, Pix};

/// Segment `pix` along `boundary`, checking that both describe the same
/// image.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the sizes differ.
pub fn segment_image(pix: &Pix, boundary: &BoundaryMap) -> RegionResult<Segmentation> {
    if boundary.width() != pix.width() || boundary.height() != pix.height() {
        return Err(RegionError::DimensionMismatch {
            map_width: boundary.width(),
            map_height: boundary.height(),
            width: pix.width(),
            height: pix.height(),
        });
    }
    let seg = find_zones(boundary);
    if seg.is_empty() && !pix.is_empty() {
        log::warn!("no fill pixels left after boundary classification");
    }
    Ok(seg)
}
