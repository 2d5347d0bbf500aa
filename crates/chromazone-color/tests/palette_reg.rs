//! Palette reduction regression test
//!
//! Reduces zone colors drawn from synthetic drawings and checks palette
//! size, grouping, and numbering.

use chromazone_color::{ColorMap, distance_lab, reduce_colors};
use chromazone_core::Rgba;
use chromazone_test::RegParams;
use chromazone_test::fixtures::{BLUE, GREEN, RED};

fn check_total(rp: &mut RegParams, cm: &ColorMap, zones: usize) {
    rp.compare_values(zones as f64, cm.zone_map.len() as f64, 0.0);
    rp.check(
        cm.zone_map.iter().all(|&i| i < cm.entries.len()),
        "every zone maps to an entry",
    );
    for (i, e) in cm.entries.iter().enumerate() {
        rp.compare_values((i + 1) as f64, e.number as f64, 0.0);
        rp.check(cm.zone_map.contains(&i), "entry is referenced by a zone");
    }
}

#[test]
fn palette_reg() {
    let mut rp = RegParams::new("palette");

    // --- Near-duplicates merge pairwise ---
    let near_red = Rgba::rgb(250, 0, 0);
    let near_blue = Rgba::rgb(0, 0, 250);
    let colors = [RED, near_red, BLUE, near_blue, GREEN];
    let cm = reduce_colors(&colors, 3);
    rp.compare_values(3.0, cm.len() as f64, 0.0);
    rp.check(cm.zone_map[0] == cm.zone_map[1], "red + near red");
    rp.check(cm.zone_map[2] == cm.zone_map[3], "blue + near blue");
    rp.check(
        cm.zone_map[4] != cm.zone_map[0] && cm.zone_map[4] != cm.zone_map[2],
        "green stays alone",
    );
    check_total(&mut rp, &cm, colors.len());

    // --- Everything collapses to one entry ---
    let cm = reduce_colors(&[RED, GREEN, BLUE], 1);
    rp.compare_values(1.0, cm.len() as f64, 0.0);
    rp.check(cm.zone_map.iter().all(|&i| i == 0), "single surviving index");

    // --- Unlimited: one entry per distinct color, mapped by equality ---
    let colors = [GREEN, RED, GREEN, BLUE, RED, RED];
    let cm = reduce_colors(&colors, 0);
    rp.compare_values(3.0, cm.len() as f64, 0.0);
    for (z, &c) in colors.iter().enumerate() {
        rp.check(cm.entries[cm.zone_map[z]].color == c, "zone keeps exact color");
    }
    check_total(&mut rp, &cm, colors.len());

    // --- Gradient bounded by max_colors ---
    let gradient: Vec<Rgba> = (0..=255u8).step_by(5).map(|v| Rgba::rgb(v, v, v)).collect();
    for max in [2usize, 5, 12] {
        let cm = reduce_colors(&gradient, max);
        rp.compare_values(max as f64, cm.len() as f64, 0.0);
        check_total(&mut rp, &cm, gradient.len());
        // Representative colors of a grey ramp stay grey
        rp.check(
            cm.entries.iter().all(|e| e.color.r == e.color.g && e.color.g == e.color.b),
            "merged greys stay neutral",
        );
    }

    // --- Merging never brings two far-apart colors together first ---
    let cm = reduce_colors(&[Rgba::BLACK, Rgba::rgb(5, 5, 5), Rgba::WHITE], 2);
    rp.check(cm.zone_map[0] == cm.zone_map[1], "dark pair merges");
    rp.check(
        distance_lab(cm.entries[cm.zone_map[2]].color, Rgba::WHITE) == 0.0,
        "white untouched",
    );

    assert!(rp.cleanup());
}
