//! RGBA color value

use crate::color;

/// A color with 8-bit red, green, blue and alpha channels.
///
/// `Rgba` is `Hash + Eq`, so bit-exact color equality can be used as a
/// grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create a new color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a `0xRRGGBBAA` pixel word.
    #[inline]
    pub fn from_pixel(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Self { r, g, b, a }
    }

    /// Pack into a `0xRRGGBBAA` pixel word.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// The red, green and blue channels as an array.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for Rgba {
    fn from(pixel: u32) -> Self {
        Self::from_pixel(pixel)
    }
}

impl From<Rgba> for u32 {
    fn from(c: Rgba) -> Self {
        c.to_pixel()
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        let c = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_pixel(c.to_pixel()), c);
        assert_eq!(u32::from(Rgba::rgb(0xff, 0, 0)), 0xff00_00ff);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Rgba::new(0, 0, 0, 128).to_string(), "#00000080");
    }
}
