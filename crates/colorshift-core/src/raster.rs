//! Row-major raster of [`Rgba8`] pixels.
//!
//! # Memory Layout
//!
//! ```text
//! pixels: [p(0,0) p(1,0) ... p(w-1,0)]  <- row 0
//!         [p(0,1) p(1,1) ... p(w-1,1)]  <- row 1
//!         ...
//! ```
//!
//! A raster is produced once (by decode or by a transform) and never
//! mutated afterwards by the pipeline; transforms allocate a new one.

use crate::{Error, Result, Rgba8};

/// Owned `width x height` grid of 8-bit RGBA pixels.
///
/// # Example
///
/// ```rust
/// use colorshift_core::{Raster, Rgba8};
///
/// let bytes = vec![10, 20, 30, 255, 40, 50, 60, 128];
/// let raster = Raster::from_rgba_bytes(2, 1, bytes.clone()).unwrap();
/// assert_eq!(raster.get(1, 0).unwrap(), Rgba8::new(40, 50, 60, 128));
/// assert_eq!(raster.to_rgba_bytes(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    /// Creates a raster filled with [`Rgba8::TRANSPARENT`].
    ///
    /// # Panics
    ///
    /// Same as [`Raster::filled`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Creates a raster with every pixel set to `px`.
    ///
    /// # Panics
    ///
    /// If the pixel buffer cannot be allocated. Use [`Raster::from_pixels`]
    /// for dimensions that come from untrusted input.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        // overflow saturates, so the allocation fails rather than wrapping
        let count = pixel_count(width, height).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            pixels: vec![px; count],
        }
    }

    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a raster from interleaved RGBA bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(4)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "byte count overflows"))?;
        if bytes.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} RGBA bytes, got {}", expected, bytes.len()),
            ));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the raster has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate is outside the raster.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgba8> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Interleaved RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.0).collect()
    }

    /// Interleaved RGB bytes, alpha dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.rgb()).collect()
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}
