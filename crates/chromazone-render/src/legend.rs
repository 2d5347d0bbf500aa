//! Legend layout and drawing
//!
//! The legend sits below the drawing: a thin grey separator, then rows of
//! numbered color swatches centered horizontally.

use crate::font::FontRenderer;
use crate::options::RenderOptions;
use chromazone_color::{ColorMap, is_light};
use chromazone_core::{PixMut, Rgba};

const SEPARATOR: Rgba = Rgba::rgb(200, 200, 200);
const RIM: Rgba = Rgba::rgb(100, 100, 100);

/// Horizontal layout of the legend for a given image width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendLayout {
    /// Width of one swatch plus its spacing
    pub item_width: i64,
    /// Width available between the margins
    pub available_width: i64,
    /// Swatches per row, at least 1
    pub items_per_row: usize,
    /// Number of rows needed for the palette
    pub rows: usize,
}

impl LegendLayout {
    /// Lay out `entries` swatches across an image `width` pixels wide.
    pub fn new(entries: usize, width: u32, options: &RenderOptions) -> Self {
        let item_width = (options.legend_circle_size + options.legend_spacing).max(1) as i64;
        let available_width = width as i64 - 2 * options.legend_margin as i64;
        let items_per_row = (available_width / item_width).max(1) as usize;
        Self {
            item_width,
            available_width,
            items_per_row,
            rows: entries.div_ceil(items_per_row),
        }
    }
}

/// Height of the legend band for `color_map`, 0 when the palette is empty.
pub fn legend_height(color_map: &ColorMap, width: u32, options: &RenderOptions) -> u32 {
    if color_map.is_empty() {
        return 0;
    }
    let layout = LegendLayout::new(color_map.len(), width, options);
    let row_height = options.legend_circle_size + options.legend_spacing;
    2 * options.legend_padding + layout.rows as u32 * row_height
}

/// Draw the legend onto `canvas` below a drawing `drawing_height` pixels
/// tall.
pub fn draw_legend(
    canvas: &mut PixMut,
    color_map: &ColorMap,
    font: &dyn FontRenderer,
    options: &RenderOptions,
    drawing_height: u32,
) {
    if color_map.is_empty() {
        return;
    }
    let width = canvas.width();
    let top = drawing_height as i64;
    let margin = options.legend_margin as i64;

    let separator_y = top + (options.legend_padding / 2) as i64;
    for x in margin..width as i64 - margin {
        canvas.put_rgba_clipped(x, separator_y, SEPARATOR);
    }

    let layout = LegendLayout::new(color_map.len(), width, options);
    let per_row = layout.items_per_row;
    let circle = options.legend_circle_size as i64;
    let radius = circle / 2;
    let font_size = options.legend_circle_size * 2 / 3;
    let row_pitch = circle + options.legend_spacing as i64;

    for (i, entry) in color_map.entries.iter().enumerate() {
        let row = i / per_row;
        let col = i % per_row;

        let in_row = per_row.min(color_map.len() - row * per_row) as i64;
        let row_start = margin + (layout.available_width - in_row * layout.item_width) / 2;

        let cx = row_start + col as i64 * layout.item_width + radius;
        let cy = top + options.legend_padding as i64 + row as i64 * row_pitch + radius;

        fill_circle(canvas, cx, cy, radius, entry.color);
        stroke_circle(canvas, cx, cy, radius, RIM);

        let text = if is_light(entry.color) { Rgba::BLACK } else { Rgba::WHITE };
        font.draw_string(canvas, &entry.number.to_string(), cx, cy, text, font_size);
    }
}

/// Fill every pixel within `radius` of the center.
pub fn fill_circle(canvas: &mut PixMut, cx: i64, cy: i64, radius: i64, color: Rgba) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                canvas.put_rgba_clipped(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Trace the circle outline at 0.01 radian steps.
pub fn stroke_circle(canvas: &mut PixMut, cx: i64, cy: i64, radius: i64, color: Rgba) {
    let r = radius as f64;
    let mut angle = 0.0f64;
    while angle < std::f64::consts::TAU {
        let px = cx + (r * angle.cos()).round() as i64;
        let py = cy + (r * angle.sin()).round() as i64;
        canvas.put_rgba_clipped(px, py, color);
        angle += 0.01;
    }
}
