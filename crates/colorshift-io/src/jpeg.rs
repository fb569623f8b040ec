//! JPEG support.
//!
//! Decoding handles RGB, 8/16-bit luminance and CMYK sources; all of them
//! come out as opaque RGBA. Encoding drops alpha and writes baseline RGB.

use crate::{IoError, IoResult, RasterReader, RasterWriter};
use colorshift_core::Raster;
use std::io::Cursor;
use tracing::{debug, trace};

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 100;

/// JPEG decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegReader;

impl RasterReader for JpegReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster> {
        trace!(bytes = data.len(), "JpegReader::read_from_memory");

        let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;
        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        debug!(
            width = info.width,
            height = info.height,
            pixel_format = ?info.pixel_format,
            "JPEG decoded"
        );

        let rgba: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels
                .chunks_exact(3)
                .flat_map(|c| [c[0], c[1], c[2], 255])
                .collect(),
            jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
            jpeg_decoder::PixelFormat::L16 => pixels
                .chunks_exact(2)
                .flat_map(|l| [l[0], l[0], l[0], 255])
                .collect(),
            jpeg_decoder::PixelFormat::CMYK32 => {
                pixels.chunks_exact(4).flat_map(cmyk_to_rgba).collect()
            }
        };

        Ok(Raster::from_rgba_bytes(
            info.width as u32,
            info.height as u32,
            rgba,
        )?)
    }
}

/// Naive CMYK -> RGB, no color management.
fn cmyk_to_rgba(cmyk: &[u8]) -> [u8; 4] {
    let k = 1.0 - cmyk[3] as f32 / 255.0;
    let ch = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
    [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2]), 255]
}

/// JPEG encoder.
#[derive(Debug, Clone, Copy)]
pub struct JpegWriter {
    quality: u8,
}

impl JpegWriter {
    /// Writer at [`DEFAULT_QUALITY`].
    pub fn new() -> Self {
        Self::with_quality(DEFAULT_QUALITY)
    }

    /// Writer at `quality` (1-100, clamped).
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Configured quality.
    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterWriter for JpegWriter {
    fn write_to_memory(&self, raster: &Raster) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType, Encoder};

        trace!(
            width = raster.width(),
            height = raster.height(),
            quality = self.quality,
            "JpegWriter::write_to_memory"
        );

        let (width, height) = raster.dimensions();
        let too_large = |d: u32| u16::try_from(d).map_err(|_| {
            IoError::EncodeError(format!("{width}x{height} exceeds the JPEG size limit"))
        });
        let (w, h) = (too_large(width)?, too_large(height)?);

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, self.quality);
        encoder
            .encode(&raster.to_rgb_bytes(), w, h, ColorType::Rgb)
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorshift_core::Rgba8;

    #[test]
    fn test_roundtrip_dimensions_and_opaque() {
        let raster = Raster::filled(17, 9, Rgba8::new(200, 40, 90, 12));
        let bytes = JpegWriter::new().write_to_memory(&raster).unwrap();
        let loaded = JpegReader.read_from_memory(&bytes).unwrap();
        assert_eq!(loaded.dimensions(), (17, 9));
        for px in loaded.pixels() {
            assert_eq!(px.alpha(), 255);
            assert!(px.max_channel_diff(Rgba8::opaque(200, 40, 90)) <= 8, "{px:?}");
        }
    }

    #[test]
    fn test_oversized_raster_rejected() {
        let raster = Raster::new(70_000, 0);
        assert!(matches!(
            JpegWriter::new().write_to_memory(&raster),
            Err(IoError::EncodeError(_))
        ));
    }

    #[test]
    fn test_cmyk_conversion() {
        assert_eq!(cmyk_to_rgba(&[0, 0, 0, 0]), [255, 255, 255, 255]);
        assert_eq!(cmyk_to_rgba(&[0, 0, 0, 255]), [0, 0, 0, 255]);
        assert_eq!(cmyk_to_rgba(&[255, 0, 255, 0]), [0, 255, 0, 255]);
    }

    #[test]
    fn test_quality_clamped() {
        assert_eq!(JpegWriter::with_quality(0).quality(), 1);
        assert_eq!(JpegWriter::with_quality(250).quality(), 100);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(
            JpegReader.read_from_memory(&[0xFF, 0xD8, 0xFF, 0x00, 0x01]),
            Err(IoError::DecodeError(_))
        ));
    }
}
