//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! falling back to the file extension.

use std::fmt;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";
}

/// Image formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Format implied by a file extension (case-insensitive).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
        })
    }
}

/// Detect image format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Option<ImageFormat> {
    if data.starts_with(magic::PNG) {
        return Some(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Some(ImageFormat::Jpeg);
    }
    if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        return Some(ImageFormat::WebP);
    }
    None
}
