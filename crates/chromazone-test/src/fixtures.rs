//! Synthetic test drawings
//!
//! Every fixture is generated in memory, so regression tests run without
//! any image files checked into the repository.

use crate::error::TestResult;
use chromazone_core::{Pix, Rgba};

/// Pure red.
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
/// Pure green.
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
/// Pure blue.
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

/// A single-color image.
pub fn solid(width: u32, height: u32, color: Rgba) -> TestResult<Pix> {
    Ok(Pix::new_filled(width, height, color)?)
}

/// A `size` x `size` white image with a black row and black column
/// through the center, splitting it into four quadrants.
pub fn cross(size: u32) -> TestResult<Pix> {
    let mid = size / 2;
    Ok(Pix::from_fn(size, size, |x, y| {
        if x == mid || y == mid {
            Rgba::BLACK
        } else {
            Rgba::WHITE
        }
    })?)
}

/// Vertical stripes, each `stripe_width` pixels wide, cycling through
/// `colors` from left to right.
pub fn stripes(stripe_width: u32, height: u32, colors: &[Rgba]) -> TestResult<Pix> {
    let width = stripe_width * colors.len() as u32;
    Ok(Pix::from_fn(width, height, |x, _| {
        colors[(x / stripe_width.max(1)) as usize % colors.len()]
    })?)
}

/// A coloring-book style drawing: a `cells_x` x `cells_y` grid of
/// rectangles, each `cell` pixels square, separated and framed by
/// black lines one pixel thick. Rectangle interiors cycle through `fills`.
pub fn outlined_grid(cells_x: u32, cells_y: u32, cell: u32, fills: &[Rgba]) -> TestResult<Pix> {
    let pitch = cell + 1;
    let width = cells_x * pitch + 1;
    let height = cells_y * pitch + 1;
    Ok(Pix::from_fn(width, height, |x, y| {
        if x % pitch == 0 || y % pitch == 0 || fills.is_empty() {
            Rgba::BLACK
        } else {
            let cell_index = (y / pitch) * cells_x + x / pitch;
            fills[cell_index as usize % fills.len()]
        }
    })?)
}

/// A white image with a single black diagonal from the top-left corner
/// to the bottom-right corner.
pub fn diagonal(size: u32) -> TestResult<Pix> {
    Ok(Pix::from_fn(size, size, |x, y| {
        if x == y { Rgba::BLACK } else { Rgba::WHITE }
    })?)
}
