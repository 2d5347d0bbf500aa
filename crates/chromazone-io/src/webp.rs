//! WebP image format support
//!
//! Reads still WebP images, lossy or lossless. Animated WebP images are
//! rejected.

use crate::{IoError, IoResult};
use chromazone_core::{Pix, color};
use image_webp::WebPDecoder;
use std::io::{BufRead, Seek};

/// Read a WebP image
///
/// Images without an alpha channel decode as opaque.
pub fn read_webp<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = WebPDecoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("WebP decode error: {}", e)))?;

    if decoder.is_animated() {
        return Err(IoError::UnsupportedFormat(
            "animated WebP not supported".to_string(),
        ));
    }

    let (width, height) = decoder.dimensions();
    let has_alpha = decoder.has_alpha();

    let buffer_size = decoder.output_buffer_size().ok_or_else(|| {
        IoError::DecodeError("failed to determine output buffer size".to_string())
    })?;
    let mut buffer = vec![0u8; buffer_size];
    decoder
        .read_image(&mut buffer)
        .map_err(|e| IoError::DecodeError(format!("WebP read error: {}", e)))?;

    let pixels: Vec<u32> = if has_alpha {
        buffer
            .chunks_exact(4)
            .map(|c| color::compose_rgba(c[0], c[1], c[2], c[3]))
            .collect()
    } else {
        buffer
            .chunks_exact(3)
            .map(|c| color::compose_rgb(c[0], c[1], c[2]))
            .collect()
    };

    Ok(Pix::from_pixels(width, height, pixels)?)
}
