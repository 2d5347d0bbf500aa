//! Row-band scheduling
//!
//! Splits an output bitmap into horizontal bands of whole rows and fills
//! them on the rayon pool. Each worker owns a disjoint `&mut` slice, so no
//! synchronization is needed beyond the final join.

use chromazone_core::BoundaryMap;
use rayon::prelude::*;

/// Number of row bands used when none is configured.
pub const DEFAULT_BAND_COUNT: usize = 8;

/// Rows per band so that `band_count` bands cover `height` rows.
pub fn rows_per_band(height: u32, band_count: usize) -> usize {
    let bands = band_count.max(1);
    (height as usize).div_ceil(bands).max(1)
}

/// Fill `map` band by band.
///
/// `fill(y0, rows)` receives the first row index of the band and the
/// band's row-major cells (`rows.len()` is a multiple of the map width).
pub fn fill_bands<F>(map: &mut BoundaryMap, band_count: usize, fill: F)
where
    F: Fn(u32, &mut [bool]) + Sync,
{
    let width = map.width() as usize;
    if width == 0 || map.height() == 0 {
        return;
    }
    let rows = rows_per_band(map.height(), band_count);

    map.as_mut_slice()
        .par_chunks_mut(rows * width)
        .enumerate()
        .for_each(|(band, cells)| fill((band * rows) as u32, cells));
}
