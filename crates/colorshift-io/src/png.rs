//! PNG support.
//!
//! Palette and sub-byte images are expanded by the decoder. Gray, gray+alpha
//! and RGB are widened to RGBA with alpha 255; 16-bit samples keep their
//! high byte. Output is always 8-bit RGBA.

use crate::{IoError, IoResult, RasterReader, RasterWriter};
use colorshift_core::Raster;
use std::io::Cursor;
use tracing::{debug, trace};

/// PNG decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngReader;

impl RasterReader for PngReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster> {
        trace!(bytes = data.len(), "PngReader::read_from_memory");

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
        let samples = &buf[..info.buffer_size()];

        debug!(
            width = info.width,
            height = info.height,
            color_type = ?info.color_type,
            bit_depth = ?info.bit_depth,
            "PNG decoded"
        );

        let rgba = to_rgba(samples, info.color_type, info.bit_depth)?;
        Ok(Raster::from_rgba_bytes(info.width, info.height, rgba)?)
    }
}

/// Widens decoded samples to 8-bit RGBA.
fn to_rgba(samples: &[u8], color: png::ColorType, depth: png::BitDepth) -> IoResult<Vec<u8>> {
    let step = match depth {
        png::BitDepth::Eight => 1,
        // big-endian: first byte of each sample is the high byte
        png::BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::DecodeError(format!(
                "unexpected bit depth after expansion: {other:?}"
            )));
        }
    };
    let high: Vec<u8> = samples.iter().step_by(step).copied().collect();

    let rgba = match color {
        png::ColorType::Rgba => high,
        png::ColorType::Rgb => high.chunks_exact(3).flat_map(|c| [c[0], c[1], c[2], 255]).collect(),
        png::ColorType::GrayscaleAlpha => {
            high.chunks_exact(2).flat_map(|c| [c[0], c[0], c[0], c[1]]).collect()
        }
        png::ColorType::Grayscale => high.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(IoError::DecodeError("palette was not expanded".into()));
        }
    };
    Ok(rgba)
}

/// PNG encoder (lossless 8-bit RGBA).
#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter;

impl RasterWriter for PngWriter {
    fn write_to_memory(&self, raster: &Raster) -> IoResult<Vec<u8>> {
        trace!(width = raster.width(), height = raster.height(), "PngWriter::write_to_memory");

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, raster.width(), raster.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::default());

            let mut writer = encoder
                .write_header()
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&raster.to_rgba_bytes())
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
        }
        Ok(buffer)
    }
}
