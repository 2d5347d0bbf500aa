//! Boundary classifiers
//!
//! A classifier turns a pixel buffer into a [`BoundaryMap`] marking the
//! pixels that belong to zone-separating lines. Two strategies exist:
//!
//! - [`BorderClassifier`]: pixels close to a known line color (e.g. the
//!   black ink of a coloring page) are boundary.
//! - [`RangeClassifier`]: pixels whose neighborhood spans a large color
//!   range are boundary. This works on drawings without explicit outlines.
//!
//! Both are total over any valid [`Pix`] and fill the output in parallel
//! row bands.

use crate::bands::{DEFAULT_BAND_COUNT, fill_bands};
use chromazone_color::{MAX_RGB_DISTANCE, distance_rgb};
use chromazone_core::{BoundaryMap, Pix, Rgba};
use rayon::prelude::*;

/// Something that decides which pixels are boundary pixels.
pub trait BoundaryClassifier: Send + Sync {
    /// Classify every pixel of `pix`. The returned map has the same
    /// dimensions as `pix`.
    fn classify(&self, pix: &Pix) -> BoundaryMap;

    /// Short strategy name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Marks pixels whose RGB distance to a reference color is within
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderClassifier {
    /// Line color
    pub color: Rgba,
    /// Tolerance as a percentage of the largest RGB distance
    pub tolerance_pct: f64,
    /// Number of parallel row bands
    pub band_count: usize,
}

impl BorderClassifier {
    /// Create a classifier for `color` with the given tolerance percentage.
    pub fn new(color: Rgba, tolerance_pct: f64) -> Self {
        Self {
            color,
            tolerance_pct,
            band_count: DEFAULT_BAND_COUNT,
        }
    }

    /// Largest RGB distance still considered a match.
    pub fn threshold(&self) -> f64 {
        self.tolerance_pct / 100.0 * MAX_RGB_DISTANCE
    }
}

impl BoundaryClassifier for BorderClassifier {
    fn classify(&self, pix: &Pix) -> BoundaryMap {
        let width = pix.width() as usize;
        let threshold = self.threshold();
        let data = pix.data();
        let mut map = BoundaryMap::new(pix.width(), pix.height());

        fill_bands(&mut map, self.band_count, |y0, cells| {
            let start = y0 as usize * width;
            let n = cells.len();
            for (cell, &px) in cells.iter_mut().zip(&data[start..start + n]) {
                *cell = distance_rgb(Rgba::from_pixel(px), self.color) <= threshold;
            }
        });
        map
    }

    fn name(&self) -> &'static str {
        "border"
    }
}

/// Local range filter.
///
/// For each pixel, looks at the square window of the given radius (clamped
/// at the image edges) and takes the largest per-channel range
/// `max - min` over R, G and B. The pixel is boundary when that range
/// exceeds `tolerance_pct` percent of 255.
///
/// A window spanning a whole anti-aliased transition sees the full color
/// step even when neighboring pixels differ only slightly, and the
/// per-channel maximum catches colors that differ in a single channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeClassifier {
    /// Tolerance as a percentage of the full channel range
    pub tolerance_pct: f64,
    /// Window radius; the window is `(2r + 1)` pixels square
    pub radius: u32,
    /// Number of parallel row bands
    pub band_count: usize,
}

impl RangeClassifier {
    /// Default window radius (5x5 window).
    pub const DEFAULT_RADIUS: u32 = 2;

    /// Create a classifier with the default 5x5 window.
    pub fn new(tolerance_pct: f64) -> Self {
        Self {
            tolerance_pct,
            radius: Self::DEFAULT_RADIUS,
            band_count: DEFAULT_BAND_COUNT,
        }
    }

    /// Per-channel range a window must exceed to be boundary.
    pub fn threshold(&self) -> i32 {
        (self.tolerance_pct / 100.0 * 255.0) as i32
    }
}

impl BoundaryClassifier for RangeClassifier {
    fn classify(&self, pix: &Pix) -> BoundaryMap {
        let w = pix.width();
        let h = pix.height();
        let width = w as usize;
        let threshold = self.threshold();
        let r = self.radius;

        // Unpack once so the window scan reads plain bytes
        let channels: Vec<[u8; 3]> = pix
            .data()
            .par_iter()
            .map(|&px| Rgba::from_pixel(px).channels())
            .collect();

        let mut map = BoundaryMap::new(w, h);
        fill_bands(&mut map, self.band_count, |y0, cells| {
            for (i, cell) in cells.iter_mut().enumerate() {
                let x = (i % width) as u32;
                let y = y0 + (i / width) as u32;

                let x0 = x.saturating_sub(r);
                let x1 = (x + r).min(w - 1);
                let y0w = y.saturating_sub(r);
                let y1 = (y + r).min(h - 1);

                let mut lo = [u8::MAX; 3];
                let mut hi = [u8::MIN; 3];
                for ny in y0w..=y1 {
                    let row = ny as usize * width;
                    for c in &channels[row + x0 as usize..=row + x1 as usize] {
                        for k in 0..3 {
                            lo[k] = lo[k].min(c[k]);
                            hi[k] = hi[k].max(c[k]);
                        }
                    }
                }

                let spread = (0..3).map(|k| (hi[k] - lo[k]) as i32).max().unwrap_or(0);
                *cell = spread > threshold;
            }
        });
        map
    }

    fn name(&self) -> &'static str {
        "color"
    }
}
