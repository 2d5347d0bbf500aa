//! Colorspace regression test
//!
//! Checks L*a*b* conversion against published reference values and the
//! metric properties of the color distances.

use chromazone_color::{
    MAX_RGB_DISTANCE, distance_lab, distance_rgb, is_light, mean, parse_hex, rgb_to_lab,
    weighted_mean,
};
use chromazone_core::Rgba;
use chromazone_test::RegParams;

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Reference L*a*b* values (D65) ---
    let refs = [
        ((255, 0, 0), (53.24, 80.09, 67.20)),
        ((0, 255, 0), (87.73, -86.18, 83.18)),
        ((0, 0, 255), (32.30, 79.19, -107.86)),
        ((128, 128, 128), (53.59, 0.0, 0.0)),
    ];
    for ((r, g, b), (l, a, bb)) in refs {
        let lab = rgb_to_lab(Rgba::rgb(r, g, b));
        rp.compare_values(l, lab.l, 0.05);
        rp.compare_values(a, lab.a, 0.1);
        rp.compare_values(bb, lab.b, 0.1);
    }

    // --- Distance properties ---
    let samples: Vec<Rgba> = (0..=255u8)
        .step_by(51)
        .flat_map(|v| [Rgba::rgb(v, 0, 255 - v), Rgba::rgb(v, v, v)])
        .collect();
    for &a in &samples {
        rp.compare_values(0.0, distance_lab(a, a), 0.0);
        for &b in &samples {
            rp.compare_values(distance_lab(a, b), distance_lab(b, a), 0.0);
            rp.check(distance_rgb(a, b) <= MAX_RGB_DISTANCE + 1e-9, "rgb distance bounded");
        }
    }

    // --- Means ---
    rp.check(mean(&[]) == Rgba::default(), "empty mean is zero");
    rp.check(
        weighted_mean(&[Rgba::WHITE, Rgba::BLACK], Some(&[1, 3])) == Rgba::rgb(64, 64, 64),
        "weighted mean rounds",
    );

    // --- Contrast and hex ---
    rp.check(is_light(Rgba::WHITE) && !is_light(Rgba::BLACK), "light/dark");
    rp.check(parse_hex("#000").ok() == Some(Rgba::BLACK), "short hex");
    rp.check(parse_hex("#00ff7f").ok() == Some(Rgba::rgb(0, 255, 127)), "long hex");
    rp.check(parse_hex("#00ff7").is_err(), "bad hex length");

    assert!(rp.cleanup());
}
