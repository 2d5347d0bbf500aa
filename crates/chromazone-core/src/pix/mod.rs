//! PIX - The RGBA image container
//!
//! The `Pix` structure is the pixel buffer every pipeline stage reads from.
//!
//! # Pixel layout
//!
//! - Image data is stored as one 32-bit word per pixel, row-major
//! - Color order within a word is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership), so a
//! decoded image can be handed to several stages and worker threads
//! without copying. To modify pixel data, convert to `PixMut` via
//! [`Pix::try_into_mut`] or [`Pix::to_mut`], then convert back with
//! `Into<Pix>`.

mod access;

use crate::error::{Error, Result};
use crate::rgba::Rgba;
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (one packed RGBA word per pixel)
    data: Vec<u32>,
}

impl PixData {
    fn new(width: u32, height: u32, data: Vec<u32>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// PIX - RGBA image container
///
/// # Examples
///
/// ```
/// use chromazone_core::{Pix, Rgba};
///
/// let pix = Pix::new(64, 48).unwrap();
/// assert_eq!(pix.width(), 64);
/// assert_eq!(pix.get_rgba(0, 0), Some(Rgba::new(0, 0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to zero (transparent black). A zero
    /// width or height yields a valid empty image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` does not fit
    /// in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, vec![0u32; size])),
        })
    }

    /// Create a PIX filled with a single color.
    pub fn new_filled(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, vec![fill.to_pixel(); size])),
        })
    }

    /// Create a PIX from tightly packed 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        let expected = size * 4;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]).to_pixel())
            .collect();
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, data)),
        })
    }

    /// Create a PIX from a row-major slice of colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `colors.len() != width * height`.
    pub fn from_colors(width: u32, height: u32, colors: &[Rgba]) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        if colors.len() != size {
            return Err(Error::BufferLength {
                expected: size,
                actual: colors.len(),
            });
        }
        let data = colors.iter().map(|c| c.to_pixel()).collect();
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, data)),
        })
    }

    /// Take ownership of row-major packed pixels (`0xRRGGBBAA`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        if pixels.len() != size {
            return Err(Error::BufferLength {
                expected: size,
                actual: pixels.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, pixels)),
        })
    }

    /// Create a PIX by evaluating `f` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let size = Self::pixel_count(width, height)?;
        let mut data = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y).to_pixel());
            }
        }
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, data)),
        })
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(4).is_some())
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get a slice covering one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Decode every pixel into a flat, row-major color buffer.
    pub fn to_rgba_vec(&self) -> Vec<Rgba> {
        self.inner.data.iter().map(|&p| Rgba::from_pixel(p)).collect()
    }

    /// Flatten into tightly packed 8-bit RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() * 4);
        for &p in &self.inner.data {
            let c = Rgba::from_pixel(p);
            bytes.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        bytes
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to this PIX.
    ///
    /// Succeeds only when this is the sole reference; otherwise the
    /// original `Pix` is handed back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData::new(
                self.inner.width,
                self.inner.height,
                self.inner.data.clone(),
            ),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.inner.data.fill(color.to_pixel());
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
