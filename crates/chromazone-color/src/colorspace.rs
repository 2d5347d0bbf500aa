//! Color space conversion
//!
//! Provides the sRGB -> CIE XYZ -> CIE L*a*b* chain used for perceptual
//! color comparison, plus relative luminance for contrast decisions.
//! All conversions assume the D65 illuminant.

use chromazone_core::Rgba;

/// D65 reference white.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// Breakpoint of the L*a*b* companding function.
const DELTA: f64 = 6.0 / 29.0;

/// CIE L*a*b* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// CIE XYZ color representation (D65 illuminant)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Undo the sRGB transfer curve for one channel.
///
/// Input and output are in [0.0, 1.0].
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_channels(color: Rgba) -> (f64, f64, f64) {
    (
        srgb_to_linear(color.r as f64 / 255.0),
        srgb_to_linear(color.g as f64 / 255.0),
        srgb_to_linear(color.b as f64 / 255.0),
    )
}

/// Convert an sRGB color to CIE XYZ. Alpha is ignored.
pub fn rgb_to_xyz(color: Rgba) -> Xyz {
    let (r, g, b) = linear_channels(color);
    Xyz {
        x: r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
        y: r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
        z: r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Convert CIE XYZ to CIE L*a*b* relative to D65 white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / WHITE_X);
    let fy = lab_f(xyz.y / WHITE_Y);
    let fz = lab_f(xyz.z / WHITE_Z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert an sRGB color to CIE L*a*b*. Alpha is ignored.
pub fn rgb_to_lab(color: Rgba) -> Lab {
    xyz_to_lab(rgb_to_xyz(color))
}

/// Relative luminance of an sRGB color, in [0.0, 1.0].
pub fn relative_luminance(color: Rgba) -> f64 {
    let (r, g, b) = linear_channels(color);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Whether a color reads as light, i.e. dark text on it has more contrast
/// than light text.
pub fn is_light(color: Rgba) -> bool {
    relative_luminance(color) > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_srgb_to_linear_segments() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(approx(srgb_to_linear(0.04045), 0.04045 / 12.92, 1e-12));
        assert!(approx(srgb_to_linear(1.0), 1.0, 1e-12));
    }

    #[test]
    fn test_white_and_black_lab() {
        let white = rgb_to_lab(Rgba::WHITE);
        assert!(approx(white.l, 100.0, 0.01));
        assert!(approx(white.a, 0.0, 0.01));
        assert!(approx(white.b, 0.0, 0.01));

        let black = rgb_to_lab(Rgba::BLACK);
        assert!(approx(black.l, 0.0, 1e-9));
        assert!(approx(black.a, 0.0, 1e-9));
        assert!(approx(black.b, 0.0, 1e-9));
    }

    #[test]
    fn test_red_lab() {
        let red = rgb_to_lab(Rgba::rgb(255, 0, 0));
        assert!(approx(red.l, 53.24, 0.05));
        assert!(approx(red.a, 80.09, 0.1));
        assert!(approx(red.b, 67.20, 0.1));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = rgb_to_lab(Rgba::new(10, 200, 30, 255));
        let clear = rgb_to_lab(Rgba::new(10, 200, 30, 0));
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_is_light() {
        assert!(is_light(Rgba::WHITE));
        assert!(is_light(Rgba::rgb(255, 255, 0)));
        assert!(!is_light(Rgba::BLACK));
        assert!(!is_light(Rgba::rgb(0, 0, 255)));
        assert!(approx(relative_luminance(Rgba::WHITE), 1.0, 1e-9));
    }
}
