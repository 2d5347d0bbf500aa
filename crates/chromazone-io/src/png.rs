//! PNG image format support
//!
//! Every PNG variant is read into an RGBA [`Pix`]: palettes, `tRNS`
//! transparency, and sub-byte gray depths are expanded by the decoder,
//! and 16-bit samples keep their high byte. Output is always 8-bit RGBA.

use crate::{IoError, IoResult};
use chromazone_core::{Pix, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;
    let bytes_per_row = info.line_size;
    let data = &buf[..info.buffer_size()];

    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let stride = match info.bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output depth: {:?}",
                other
            )));
        }
    };

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            // For 16-bit samples the big-endian high byte comes first
            let s = |k: usize| row[(x * samples + k) * stride];
            let pixel = match info.color_type {
                ColorType::Grayscale => color::compose_rgb(s(0), s(0), s(0)),
                ColorType::GrayscaleAlpha => color::compose_rgba(s(0), s(0), s(0), s(1)),
                ColorType::Rgb => color::compose_rgb(s(0), s(1), s(2)),
                _ => color::compose_rgba(s(0), s(1), s(2), s(3)),
            };
            pixels.push(pixel);
        }
    }

    Ok(Pix::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
///
/// PNG cannot store an image with a zero dimension; such images are
/// rejected with [`IoError::InvalidData`].
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    if pix.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode {}x{} image as PNG",
            pix.width(),
            pix.height()
        )));
    }
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&pix.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromazone_core::Rgba;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, ct: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut enc = Encoder::new(&mut out, width, height);
            enc.set_color(ct);
            enc.set_depth(depth);
            if ct == ColorType::Indexed {
                enc.set_palette(vec![255, 0, 0, 0, 0, 255]);
                enc.set_trns(vec![255, 0]);
            }
            let mut w = enc.write_header().unwrap();
            w.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let pix = Pix::from_fn(5, 3, |x, y| Rgba::new(x as u8 * 50, y as u8 * 80, 7, 200)).unwrap();
        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();
        let pix2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.width(), 5);
        assert_eq!(pix2.height(), 3);
        assert_eq!(pix2.data(), pix.data());
    }

    #[test]
    fn test_read_gray8() {
        let bytes = encode(2, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 200]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(1, 0), Some(Rgba::rgb(200, 200, 200)));
    }

    #[test]
    fn test_read_rgb16_keeps_high_byte() {
        let bytes = encode(1, 1, ColorType::Rgb, BitDepth::Sixteen, &[0x12, 0x34, 0xAB, 0xCD, 0xFF, 0x00]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some(Rgba::rgb(0x12, 0xAB, 0xFF)));
    }

    #[test]
    fn test_read_indexed_with_transparency() {
        let bytes = encode(2, 1, ColorType::Indexed, BitDepth::Eight, &[0, 1]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some(Rgba::new(255, 0, 0, 255)));
        assert_eq!(pix.get_rgba(1, 0), Some(Rgba::new(0, 0, 255, 0)));
    }

    #[test]
    fn test_read_garbage_fails() {
        assert!(read_png(Cursor::new(b"not a png".to_vec())).is_err());
    }
}
