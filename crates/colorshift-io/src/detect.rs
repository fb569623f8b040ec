//! Container detection and output format selection.
//!
//! Input containers are recognized by their magic bytes, with the file
//! extension as a fallback. Output encoders are chosen by extension only.

use crate::{IoError, IoResult};
use std::path::Path;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Input container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG.
    Png,
    /// JPEG.
    Jpeg,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Format from the (case-insensitive) file extension.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            _ => Format::Unknown,
        }
    }

    /// Format from a byte prefix.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&PNG_MAGIC) {
            Format::Png
        } else if bytes.starts_with(&JPEG_MAGIC) {
            Format::Jpeg
        } else {
            Format::Unknown
        }
    }
}

/// Encoder selected for an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless RGBA PNG.
    Png,
    /// Baseline JPEG at quality 100, alpha discarded.
    Jpeg,
}

impl OutputFormat {
    /// Output format for `path`'s extension.
    ///
    /// # Errors
    ///
    /// [`IoError::UnsupportedFormat`] for anything but `png`, `jpg` and `jpeg`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        match Format::from_extension(path) {
            Format::Png => Ok(OutputFormat::Png),
            Format::Jpeg => Ok(OutputFormat::Jpeg),
            Format::Unknown => Err(IoError::UnsupportedFormat(format!(
                "no encoder for {}",
                path.display()
            ))),
        }
    }
}
