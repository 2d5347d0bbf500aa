//! Color distance metrics

use crate::colorspace::rgb_to_lab;
use chromazone_core::Rgba;

/// Largest possible Euclidean distance between two RGB colors,
/// i.e. from black to white: `sqrt(3 * 255^2)`.
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Euclidean distance between two colors in CIE L*a*b* space.
///
/// This approximates perceived difference; alpha is ignored.
pub fn distance_lab(a: Rgba, b: Rgba) -> f64 {
    let la = rgb_to_lab(a);
    let lb = rgb_to_lab(b);
    let dl = la.l - lb.l;
    let da = la.a - lb.a;
    let db = la.b - lb.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Euclidean distance between two colors in raw RGB space. Alpha is ignored.
pub fn distance_rgb(a: Rgba, b: Rgba) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}
