//! Zone label grid

use crate::point::Point;

/// Label value stored for boundary pixels.
pub const BOUNDARY_LABEL: i32 = -1;

/// Dense row-major grid of zone ids.
///
/// Each cell holds the 0-based id of the zone that owns the pixel, or
/// [`BOUNDARY_LABEL`] for boundary pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl LabelGrid {
    /// Create a grid with every cell set to [`BOUNDARY_LABEL`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![BOUNDARY_LABEL; width as usize * height as usize],
        }
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

    /// Raw label at (x, y). Out-of-range coordinates read as
    /// [`BOUNDARY_LABEL`].
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> i32 {
        if x >= self.width || y >= self.height {
            return BOUNDARY_LABEL;
        }
        self.data[self.index(x, y)]
    }

    /// Zone id at `p`, or `None` for boundary and out-of-range pixels.
    #[inline]
    pub fn zone_at(&self, p: Point) -> Option<usize> {
        usize::try_from(self.get(p.x, p.y)).ok()
    }

    /// Assign a zone id to (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, label: i32) {
        let i = self.index(x, y);
        self.data[i] = label;
    }

    /// Whether (x, y) has not been given a zone id.
    #[inline]
    pub fn is_unlabeled(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == BOUNDARY_LABEL
    }

    /// Row-major flat index of (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}
