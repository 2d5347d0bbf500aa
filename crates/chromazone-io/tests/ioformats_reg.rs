//! Image I/O regression test
//!
//! Writes synthetic drawings as PNG, reads them back through format
//! detection, and checks error handling for unknown inputs.

use chromazone_core::Rgba;
use chromazone_io::{ImageFormat, IoError, read_image, read_image_mem, write_png, write_png_to};
use chromazone_test::RegParams;
use chromazone_test::fixtures::{self, BLUE, GREEN, RED};
use std::fs;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chromazone-io-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    // --- PNG file round trip ---
    let pix = fixtures::outlined_grid(3, 3, 5, &[RED, GREEN, BLUE, Rgba::new(1, 2, 3, 4)]).unwrap();
    let path = scratch("grid.png");
    write_png(&pix, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_pix(&pix, &back);

    // --- Magic bytes win over a misleading extension ---
    let misnamed = scratch("grid.jpg");
    fs::copy(&path, &misnamed).unwrap();
    let back = read_image(&misnamed).unwrap();
    rp.compare_pix(&pix, &back);

    // --- In-memory encode and decode ---
    let mut bytes = Vec::new();
    write_png_to(&pix, &mut bytes).unwrap();
    let back = read_image_mem(&bytes, ImageFormat::Png).unwrap();
    rp.compare_pix(&pix, &back);

    // --- Unknown content and missing files are errors ---
    let junk = scratch("junk.bin");
    fs::write(&junk, b"definitely not an image").unwrap();
    rp.check(
        matches!(read_image(&junk), Err(IoError::UnsupportedFormat(_))),
        "unknown format rejected",
    );
    rp.check(
        matches!(read_image(scratch("missing.png")), Err(IoError::Io(_))),
        "missing file reported",
    );
    rp.check(
        read_image_mem(b"garbage", ImageFormat::Png).is_err(),
        "corrupt png rejected",
    );

    // --- Empty images cannot be encoded ---
    let empty = fixtures::solid(0, 0, Rgba::WHITE).unwrap();
    let mut bytes = Vec::new();
    rp.check(
        matches!(write_png_to(&empty, &mut bytes), Err(IoError::InvalidData(_))),
        "png cannot store 0x0",
    );

    rp.write_pix(&pix).unwrap();
    let _ = fs::remove_dir_all(path.parent().unwrap());
    assert!(rp.cleanup());
}
