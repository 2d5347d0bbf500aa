//! Conversion pipeline
//!
//! classify -> segment -> zone colors -> palette -> interior points ->
//! render. Each stage reads the previous stage's output by reference.

use crate::error::{Error, Result};
use crate::options::Options;
use chromazone_color::{ColorMap, reduce_colors};
use chromazone_core::{BoundaryMap, Pix, Point, Rgba};
use chromazone_io::ImageFormat;
use chromazone_region::{Segmentation, interior_points, segment_image, zone_colors};
use chromazone_render::{BitmapFont, FontRenderer, RenderOptions, render};
use std::path::Path;

/// Everything the renderer needs to know about a drawing.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Boundary pixels of the source
    pub boundary: BoundaryMap,
    /// Zones and label grid
    pub segmentation: Segmentation,
    /// Mean source color of each zone, indexed by zone id
    pub zone_colors: Vec<Rgba>,
    /// Reduced palette and zone assignment
    pub color_map: ColorMap,
    /// Label position of each zone, indexed by zone id
    pub interior_points: Vec<Point>,
}

/// Run every analysis stage on `pix`.
pub fn analyze(pix: &Pix, options: &Options) -> Result<Analysis> {
    options.validate()?;

    let boundary = chromazone_filter::classify(pix, &options.boundary)?;
    log::info!(
        "boundary: {} pixels ({:.1}%) with {} strategy",
        boundary.count(),
        boundary.coverage() * 100.0,
        options.boundary.strategy
    );

    let segmentation = segment_image(pix, &boundary)?;
    log::info!("segmentation: {} zones", segmentation.len());

    let zone_colors = zone_colors(&segmentation.zones, pix)?;
    let color_map = reduce_colors(&zone_colors, options.max_colors);
    log::info!("palette: {} colors", color_map.len());

    let interior_points = interior_points(&segmentation.zones, &options.interior);

    Ok(Analysis {
        boundary,
        segmentation,
        zone_colors,
        color_map,
        interior_points,
    })
}

/// Convert a drawing into a paint-by-number page using the built-in font.
pub fn convert(pix: &Pix, options: &Options) -> Result<Pix> {
    convert_with_font(pix, options, &BitmapFont::new())
}

/// Convert a drawing, drawing numbers with `font`.
pub fn convert_with_font(pix: &Pix, options: &Options, font: &dyn FontRenderer) -> Result<Pix> {
    let analysis = analyze(pix, options)?;
    let render_options = RenderOptions::scaled_for_width(pix.width());
    let out = render(
        pix,
        &analysis.boundary,
        &analysis.segmentation.zones,
        &analysis.color_map,
        &analysis.interior_points,
        font,
        &render_options,
    )?;
    Ok(out)
}

/// Read `input`, convert it, and write the page to `output` as PNG.
///
/// # Errors
///
/// Returns [`Error::OutputNotPng`] before reading anything if `output`
/// does not end in `.png`.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &Options,
) -> Result<()> {
    let output = output.as_ref();
    if ImageFormat::from_extension(output) != Some(ImageFormat::Png) {
        return Err(Error::OutputNotPng(output.to_path_buf()));
    }

    let pix = chromazone_io::read_image(input.as_ref())?;
    log::info!(
        "loaded {} ({}x{})",
        input.as_ref().display(),
        pix.width(),
        pix.height()
    );
    let page = convert(&pix, options)?;
    chromazone_io::write_png(&page, output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}
