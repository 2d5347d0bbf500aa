//! Pipeline regression test
//!
//! Runs synthetic drawings through the full analysis and conversion, and
//! checks the end-to-end scenarios along with file handling.

use chromazone::filter::{BoundaryOptions, Strategy};
use chromazone::region::InteriorOptions;
use chromazone::{BOUNDARY_LABEL, Error, Options, Pix, Rgba, analyze, convert, convert_file};
use chromazone_test::RegParams;
use chromazone_test::fixtures::{self, BLUE, GREEN, RED};
use std::fs;
use std::path::PathBuf;

fn border_options(max_colors: usize) -> Options {
    Options {
        boundary: BoundaryOptions {
            strategy: Strategy::Border,
            ..Default::default()
        },
        max_colors,
        ..Default::default()
    }
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chromazone-pipeline-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // --- Boundary cross: 4 zones of 4 pixels ---
    let pix = fixtures::cross(5).unwrap();
    let a = analyze(&pix, &border_options(10)).unwrap();
    rp.compare_values(9.0, a.boundary.count() as f64, 0.0);
    rp.compare_values(4.0, a.segmentation.len() as f64, 0.0);
    for zone in &a.segmentation.zones {
        rp.compare_values(4.0, zone.len() as f64, 0.0);
    }
    for i in 0..5 {
        rp.check(a.segmentation.labels.get(2, i) == BOUNDARY_LABEL, "cross column is boundary");
        rp.check(a.segmentation.labels.get(i, 2) == BOUNDARY_LABEL, "cross row is boundary");
    }
    // Every quadrant is white
    rp.compare_values(1.0, a.color_map.len() as f64, 0.0);

    // --- Near-duplicate colors merge first ---
    let fills = [RED, Rgba::rgb(250, 0, 0), BLUE, Rgba::rgb(0, 0, 250), GREEN];
    let pix = fixtures::outlined_grid(5, 1, 12, &fills).unwrap();
    let a = analyze(&pix, &border_options(3)).unwrap();
    rp.compare_values(5.0, a.segmentation.len() as f64, 0.0);
    rp.compare_values(5.0, a.zone_colors.len() as f64, 0.0);
    for (color, fill) in a.zone_colors.iter().zip(&fills) {
        rp.check(color == fill, "zone color is its fill");
    }
    let zm = &a.color_map.zone_map;
    rp.compare_values(3.0, a.color_map.len() as f64, 0.0);
    rp.check(zm[0] == zm[1], "red and near red merged");
    rp.check(zm[2] == zm[3], "blue and near blue merged");
    rp.check(zm[4] != zm[0] && zm[4] != zm[2], "green alone");

    // --- Unlimited palette keeps every distinct color ---
    let a = analyze(&pix, &border_options(0)).unwrap();
    rp.compare_values(5.0, a.color_map.len() as f64, 0.0);

    // --- Single color when max_colors = 1 ---
    let pix3 = fixtures::outlined_grid(3, 1, 12, &[RED, GREEN, BLUE]).unwrap();
    let a = analyze(&pix3, &border_options(1)).unwrap();
    rp.check(a.color_map.zone_map.iter().all(|&i| i == 0), "all zones map to entry 0");

    // --- Interior points are members of their zones ---
    let opts = Options {
        interior: InteriorOptions {
            margin: 4,
            small_margin: 2,
            small_zone_pixels: 50,
        },
        ..border_options(10)
    };
    let a = analyze(&pix, &opts).unwrap();
    for (zone, p) in a.segmentation.zones.iter().zip(&a.interior_points) {
        rp.check(zone.pixels.contains(p), "interior point inside zone");
    }

    // --- Uniform image with the color strategy: a single zone ---
    let uniform = fixtures::solid(60, 40, Rgba::rgb(80, 160, 240)).unwrap();
    let a = analyze(&uniform, &Options::default()).unwrap();
    rp.compare_values(0.0, a.boundary.count() as f64, 0.0);
    rp.compare_values(1.0, a.segmentation.len() as f64, 0.0);
    rp.compare_values(1.0, a.color_map.len() as f64, 0.0);

    // --- Full conversion adds a legend below the drawing ---
    let page = convert(&pix, &border_options(3)).unwrap();
    rp.compare_values(pix.width() as f64, page.width() as f64, 0.0);
    rp.check(page.height() > pix.height(), "legend appended");
    rp.check(page.get_rgba(0, 0) == Some(Rgba::BLACK), "outline kept");
    rp.write_pix(&page).unwrap();

    // --- Empty image is a valid, empty result ---
    let empty = Pix::new(0, 0).unwrap();
    let a = analyze(&empty, &Options::default()).unwrap();
    rp.check(a.segmentation.is_empty() && a.color_map.is_empty(), "empty analysis");
    let page = convert(&empty, &Options::default()).unwrap();
    rp.check(page.is_empty(), "empty page");

    // --- Invalid options are rejected before any work ---
    let mut bad = Options::default();
    bad.boundary.color_tolerance_pct = 150.0;
    rp.check(matches!(analyze(&uniform, &bad), Err(Error::Filter(_))), "tolerance range");

    // --- Files ---
    let input = scratch("grid.png");
    chromazone::io::write_png(&pix, &input).unwrap();
    let output = scratch("grid-out.png");
    convert_file(&input, &output, &border_options(3)).unwrap();
    let written = chromazone::io::read_image(&output).unwrap();
    let expected = convert(&pix, &border_options(3)).unwrap();
    rp.compare_pix(&expected, &written);

    // Extension check ignores case
    let upper = scratch("grid-out.PNG");
    rp.check(convert_file(&input, &upper, &border_options(3)).is_ok(), "upper-case .PNG accepted");
    rp.compare_pix(&expected, &chromazone::io::read_image(&upper).unwrap());

    let not_png = scratch("grid-out.jpg");
    rp.check(
        matches!(convert_file(&input, &not_png, &Options::default()), Err(Error::OutputNotPng(_))),
        "non-png output rejected",
    );
    rp.check(!not_png.exists(), "nothing written for rejected output");
    rp.check(
        matches!(
            convert_file(scratch("missing.png"), &output, &Options::default()),
            Err(Error::Io(_))
        ),
        "missing input reported",
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}
