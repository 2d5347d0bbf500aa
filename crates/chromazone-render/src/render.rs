//! Paint-by-number overlay
//!
//! Produces the final image: the boundary lines of the source drawing on a
//! white canvas, each zone's palette number at its interior point, and a
//! legend of numbered swatches below.

use crate::error::{RenderError, RenderResult};
use crate::font::FontRenderer;
use crate::legend::{draw_legend, legend_height};
use crate::options::RenderOptions;
use chromazone_color::ColorMap;
use chromazone_core::{BoundaryMap, Pix, Point, Rgba};
use chromazone_region::Zone;

/// Smallest label size in pixels.
pub const MIN_FONT_SIZE: u32 = 7;
/// Largest base font size in pixels.
pub const MAX_FONT_SIZE: u32 = 40;

/// Base font size for an image of the given size and zone count.
///
/// `min(w, h) / 30`, shrunk by 0.7 above 50 zones and by a further 0.5
/// above 200, rounded and clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
pub fn compute_font_size(width: u32, height: u32, zone_count: usize) -> u32 {
    let mut size = width.min(height) as f64 / 30.0;
    if zone_count > 50 {
        size *= 0.7;
    }
    if zone_count > 200 {
        size *= 0.5;
    }
    (size.round() as u32).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Size of the zone numbers drawn inside the picture.
pub fn label_font_size(width: u32, height: u32, zone_count: usize) -> u32 {
    (compute_font_size(width, height, zone_count) / 4).max(MIN_FONT_SIZE)
}

/// Render the paint-by-number image.
///
/// # Arguments
///
/// * `source` - The original drawing
/// * `boundary` - Boundary map of `source`
/// * `zones` - Zones indexed by id
/// * `color_map` - Reduced palette and zone assignment
/// * `interior_points` - Label position of each zone, indexed by id
/// * `font` - Text renderer for numbers
/// * `options` - Legend layout
///
/// # Errors
///
/// Returns [`RenderError::Inconsistent`] if the inputs do not describe the
/// same image and zone set.
pub fn render(
    source: &Pix,
    boundary: &BoundaryMap,
    zones: &[Zone],
    color_map: &ColorMap,
    interior_points: &[Point],
    font: &dyn FontRenderer,
    options: &RenderOptions,
) -> RenderResult<Pix> {
    let w = source.width();
    let h = source.height();
    if boundary.width() != w || boundary.height() != h {
        return Err(RenderError::Inconsistent(format!(
            "boundary map is {}x{}, image is {}x{}",
            boundary.width(),
            boundary.height(),
            w,
            h
        )));
    }
    if color_map.zone_map.len() != zones.len() {
        return Err(RenderError::Inconsistent(format!(
            "color map covers {} zones, segmentation has {}",
            color_map.zone_map.len(),
            zones.len()
        )));
    }
    if interior_points.len() != zones.len() {
        return Err(RenderError::Inconsistent(format!(
            "{} interior points for {} zones",
            interior_points.len(),
            zones.len()
        )));
    }

    let legend = legend_height(color_map, w, options);
    let mut canvas = Pix::new_filled(w, h + legend, Rgba::WHITE)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());

    let src = source.data();
    let marks = boundary.as_slice();
    let out = canvas.data_mut();
    for (i, (&px, &is_boundary)) in src.iter().zip(marks).enumerate() {
        if is_boundary {
            out[i] = px;
        }
    }

    let size = label_font_size(w, h, zones.len());
    for (zone, &p) in zones.iter().zip(interior_points) {
        let Some(entry) = color_map.entry_for_zone(zone.id) else {
            return Err(RenderError::Inconsistent(format!(
                "zone {} has no palette entry",
                zone.id
            )));
        };
        font.draw_string(
            &mut canvas,
            &entry.number.to_string(),
            p.x as i64,
            p.y as i64,
            Rgba::BLACK,
            size,
        );
    }

    draw_legend(&mut canvas, color_map, font, options, h);
    log::debug!(
        "rendered {}x{} with {} labels and a {} px legend",
        w,
        h + legend,
        zones.len(),
        legend
    );
    Ok(canvas.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromazone_color::PaletteEntry;

    #[test]
    fn test_compute_font_size() {
        assert_eq!(compute_font_size(100, 100, 1), 7);
        assert_eq!(compute_font_size(600, 900, 1), 20);
        assert_eq!(compute_font_size(600, 600, 51), 14);
        // Both factors apply above 200 zones: 20 * 0.7 * 0.5
        assert_eq!(compute_font_size(600, 600, 201), 7);
        assert_eq!(compute_font_size(3000, 3000, 201), 35);
        assert_eq!(compute_font_size(3000, 3000, 1), 40);
    }

    #[test]
    fn test_label_font_size_floor() {
        assert_eq!(label_font_size(600, 600, 1), 7);
        assert_eq!(label_font_size(3000, 3000, 1), 10);
        assert_eq!(label_font_size(3000, 3000, 201), 8);
    }

    #[test]
    fn test_empty_inputs_render_blank() {
        let pix = Pix::new_filled(8, 6, Rgba::rgb(10, 20, 30)).unwrap();
        let map = BoundaryMap::new(8, 6);
        let out = render(
            &pix,
            &map,
            &[],
            &ColorMap::default(),
            &[],
            &crate::BitmapFont::new(),
            &RenderOptions::default(),
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (8, 6));
        assert!(out.data().iter().all(|&p| p == Rgba::WHITE.to_pixel()));
    }

    #[test]
    fn test_mismatched_lengths() {
        let pix = Pix::new(4, 4).unwrap();
        let map = BoundaryMap::new(4, 4);
        let zone = Zone {
            id: 0,
            pixels: vec![Point::new(0, 0)],
        };
        let cm = ColorMap {
            entries: vec![PaletteEntry {
                number: 1,
                color: Rgba::BLACK,
            }],
            zone_map: vec![0],
        };
        let font = crate::BitmapFont::new();
        let opts = RenderOptions::default();

        let err = render(&pix, &map, &[zone.clone()], &cm, &[], &font, &opts);
        assert!(matches!(err, Err(RenderError::Inconsistent(_))));

        let err = render(&pix, &BoundaryMap::new(3, 4), &[zone], &cm, &[Point::default()], &font, &opts);
        assert!(matches!(err, Err(RenderError::Inconsistent(_))));
    }
}
