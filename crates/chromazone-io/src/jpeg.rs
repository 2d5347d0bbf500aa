//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK streams are all decoded to opaque RGBA.

use crate::{IoError, IoResult};
use chromazone_core::{Pix, color};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let pixels: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| color::compose_rgb(g, g, g)).collect(),
        // Big-endian samples; keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|c| color::compose_rgb(c[0], c[0], c[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| color::compose_rgb(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => data.chunks_exact(4).map(cmyk_to_pixel).collect(),
    };

    Ok(Pix::from_pixels(width, height, pixels)?)
}

fn cmyk_to_pixel(c: &[u8]) -> u32 {
    let k = 255 - c[3] as u32;
    let channel = |v: u8| ((255 - v as u32) * k / 255) as u8;
    color::compose_rgb(channel(c[0]), channel(c[1]), channel(c[2]))
}
