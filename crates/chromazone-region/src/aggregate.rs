//! Per-zone aggregation
//!
//! Both passes here are independent per zone and run on the rayon pool.
//! Results land in a slot indexed by zone id, so the output order never
//! depends on scheduling.

use crate::error::{RegionError, RegionResult};
use crate::zone::{InteriorOptions, Zone};
use chromazone_color::mean;
use chromazone_core::{Pix, Point, Rgba};
use rayon::prelude::*;

/// Unweighted mean source color of every zone, indexed by zone id.
///
/// # Errors
///
/// Returns [`RegionError::PixelOutOfRange`] if a zone lists a pixel
/// outside `pix`.
pub fn zone_colors(zones: &[Zone], pix: &Pix) -> RegionResult<Vec<Rgba>> {
    let mut colors = vec![Rgba::default(); zones.len()];
    colors
        .par_iter_mut()
        .zip(zones.par_iter())
        .try_for_each(|(slot, zone)| -> RegionResult<()> {
            let samples = zone
                .pixels
                .iter()
                .map(|p| {
                    pix.get_rgba(p.x, p.y).ok_or(RegionError::PixelOutOfRange {
                        zone: zone.id,
                        x: p.x,
                        y: p.y,
                    })
                })
                .collect::<RegionResult<Vec<Rgba>>>()?;
            *slot = mean(&samples);
            Ok(())
        })?;
    Ok(colors)
}

/// Interior label point of every zone, indexed by zone id.
pub fn interior_points(zones: &[Zone], options: &InteriorOptions) -> Vec<Point> {
    let mut points = vec![Point::default(); zones.len()];
    points
        .par_iter_mut()
        .zip(zones.par_iter())
        .for_each(|(slot, zone)| *slot = zone.interior_point(options));
    points
}
