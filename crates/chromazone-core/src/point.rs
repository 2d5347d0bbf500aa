//! Integer pixel coordinates

/// A pixel coordinate, `x` to the right and `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_sq(self, other: Point) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        dx * dx + dy * dy
    }

    /// The 4-connected neighbors of this point, in left, right, up, down
    /// order. Neighbors that would fall below zero are `None`.
    #[inline]
    pub fn neighbors4(self) -> [Option<Point>; 4] {
        [
            self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            self.x.checked_add(1).map(|x| Point::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            self.y.checked_add(1).map(|y| Point::new(self.x, y)),
        ]
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
