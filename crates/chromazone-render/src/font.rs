//! Text drawing
//!
//! [`FontRenderer`] is the seam for drawing numbers onto the output. The
//! built-in [`BitmapFont`] draws 5x7 pixel digits scaled by whole pixels.

use chromazone_core::{PixMut, Rgba};

/// Draws short strings onto an image.
pub trait FontRenderer: Send + Sync {
    /// Draw `text` centered on (`cx`, `cy`) in `color`. `size` is the
    /// approximate text height in pixels. Pixels falling outside the
    /// canvas are skipped.
    fn draw_string(&self, canvas: &mut PixMut, text: &str, cx: i64, cy: i64, color: Rgba, size: u32);

    /// Width and height `text` occupies at `size`.
    fn measure_string(&self, text: &str, size: u32) -> (u32, u32);
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 bitmaps, one byte per row, most significant of the low 5 bits on
/// the left.
fn glyph(ch: char) -> Option<[u8; 7]> {
    Some(match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return None,
    })
}

/// Built-in digit font.
///
/// Glyphs are scaled by `max(1, size / 7)` and separated by one scaled
/// pixel. Characters without a glyph leave a blank of the same advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// Create the built-in font.
    pub fn new() -> Self {
        Self
    }

    fn scale(size: u32) -> u32 {
        (size / GLYPH_HEIGHT).max(1)
    }
}

impl FontRenderer for BitmapFont {
    fn draw_string(&self, canvas: &mut PixMut, text: &str, cx: i64, cy: i64, color: Rgba, size: u32) {
        let scale = Self::scale(size) as i64;
        let (total_w, total_h) = self.measure_string(text, size);
        let start_y = cy - total_h as i64 / 2;
        let mut cur_x = cx - total_w as i64 / 2;
        let advance = (GLYPH_WIDTH as i64 + 1) * scale;

        for ch in text.chars() {
            if let Some(rows) = glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        let x0 = cur_x + col as i64 * scale;
                        let y0 = start_y + row as i64 * scale;
                        for dy in 0..scale {
                            for dx in 0..scale {
                                canvas.put_rgba_clipped(x0 + dx, y0 + dy, color);
                            }
                        }
                    }
                }
            }
            cur_x += advance;
        }
    }

    fn measure_string(&self, text: &str, size: u32) -> (u32, u32) {
        let n = text.chars().count() as u32;
        if n == 0 {
            return (0, 0);
        }
        let scale = Self::scale(size);
        (n * GLYPH_WIDTH * scale + (n - 1) * scale, GLYPH_HEIGHT * scale)
    }
}
