//! Boundary bitmap
//!
//! A dense boolean grid with the same dimensions as the [`Pix`] it was
//! classified from. `true` marks a boundary pixel, i.e. a pixel belonging
//! to a line that separates zones.
//!
//! [`Pix`]: crate::Pix

use crate::error::{Error, Result};
use crate::point::Point;

/// Dense boundary bitmap, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMap {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BoundaryMap {
    /// Create a map with no boundary pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
        let len = width as usize * height as usize;
        if data.len() != len {
            return Err(Error::IndexOutOfBounds {
                index: data.len(),
                len,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether (x, y) is a boundary pixel. Out-of-range coordinates are not.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)]
    }

    /// Whether `p` is a boundary pixel.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.get(p.x, p.y)
    }

    /// Mark or clear (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.data[i] = value;
        Ok(())
    }

    /// Row-major flat index of (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Mutable raw row-major data, for classifiers that fill whole rows.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.data
    }

    /// Number of boundary pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Fraction of pixels that are boundary, in `[0, 1]`. Empty maps
    /// report zero.
    pub fn coverage(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.count() as f64 / self.data.len() as f64
    }

    /// Check that this map matches the given image dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when sizes differ.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if self.width != width || self.height != height {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (self.width, self.height),
            });
        }
        Ok(())
    }
}
