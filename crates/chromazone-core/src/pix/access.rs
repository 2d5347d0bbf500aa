//! Pixel access functions
//!
//! Functions for getting and setting individual pixels of a [`Pix`] or
//! [`PixMut`].

use super::{Pix, PixMut};
use crate::error::{Error, Result};
use crate::rgba::Rgba;

impl Pix {
    /// Get a packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the image data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get the color at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::from_pixel)
    }

    /// Get the color at (x, y) without bounds checking.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_pixel(self.get_pixel_unchecked(x, y))
    }
}

impl PixMut {
    fn check_bounds(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(y as usize * self.width() as usize + x as usize)
    }

    /// Get a packed pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.check_bounds(x, y).ok().map(|i| self.data()[i])
    }

    /// Get the color at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::from_pixel)
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let i = self.check_bounds(x, y)?;
        self.data_mut()[i] = val;
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the image data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let w = self.width() as usize;
        self.data_mut()[y as usize * w + x as usize] = val;
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }

    /// Set the color at signed coordinates, silently clipping anything
    /// outside the image. Drawing primitives use this to paint shapes that
    /// may straddle the border.
    #[inline]
    pub fn put_rgba_clipped(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.set_pixel_unchecked(x as u32, y as u32, color.to_pixel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut pix = Pix::new(3, 3).unwrap().try_into_mut().unwrap();
        pix.set_rgba(2, 1, Rgba::rgb(9, 8, 7)).unwrap();
        assert_eq!(pix.get_rgba(2, 1), Some(Rgba::rgb(9, 8, 7)));
        assert!(pix.set_rgba(3, 0, Rgba::WHITE).is_err());

        let pix: Pix = pix.into();
        assert_eq!(pix.get_rgba_unchecked(2, 1), Rgba::rgb(9, 8, 7));
        assert_eq!(pix.get_rgba(0, 3), None);
    }

    #[test]
    fn test_put_clipped() {
        let mut pix = Pix::new(2, 2).unwrap().to_mut();
        pix.put_rgba_clipped(-1, 0, Rgba::WHITE);
        pix.put_rgba_clipped(2, 0, Rgba::WHITE);
        pix.put_rgba_clipped(1, 1, Rgba::WHITE);
        let pix: Pix = pix.into();
        assert_eq!(pix.data().iter().filter(|&&p| p != 0).count(), 1);
    }
}
