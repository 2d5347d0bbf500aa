//! chromazone-io - Image I/O
//!
//! Reads PNG, JPEG and WebP drawings into RGBA [`Pix`] images and writes
//! PNG output.
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | always  |
//! | JPEG   | yes  | no    | `jpeg`  |
//! | WebP   | yes  | no    | `webp-format` |
//!
//! The input format is detected from the file's magic bytes, falling back
//! to its extension. Paths go through [`expand_path`] first.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
pub mod path;
pub mod png;
#[cfg(feature = "webp-format")]
pub mod webp;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};
pub use path::expand_path;

use chromazone_core::Pix;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The path is expanded with [`expand_path`]. The result is always RGBA.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = expand_path(path);
    let bytes = fs::read(&path)?;
    let format = detect_format_from_bytes(&bytes)
        .or_else(|| ImageFormat::from_extension(&path))
        .ok_or_else(|| {
            IoError::UnsupportedFormat(format!("cannot determine format of {}", path.display()))
        })?;
    log::debug!("reading {} as {}", path.display(), format);
    read_image_mem(&bytes, format)
}

/// Decode an in-memory image of a known format.
pub fn read_image_mem(bytes: &[u8], format: ImageFormat) -> IoResult<Pix> {
    match format {
        ImageFormat::Png => png::read_png(Cursor::new(bytes)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(bytes),
        #[cfg(feature = "webp-format")]
        ImageFormat::WebP => webp::read_webp(Cursor::new(bytes)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support not enabled",
            other
        ))),
    }
}

/// Write an image as PNG to a file path.
///
/// The path is expanded with [`expand_path`].
pub fn write_png<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = expand_path(path);
    let mut writer = BufWriter::new(File::create(&path)?);
    png::write_png(pix, &mut writer)?;
    writer.flush()?;
    log::debug!("wrote {}x{} PNG to {}", pix.width(), pix.height(), path.display());
    Ok(())
}

/// Write an image as PNG to any writer.
pub fn write_png_to<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    png::write_png(pix, writer)
}
