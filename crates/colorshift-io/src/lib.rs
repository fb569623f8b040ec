//! # colorshift-io
//!
//! Reads JPEG and PNG files into [`Raster`]s and writes rasters back.
//!
//! - [`decode`] - read a file, detecting the container from its magic bytes
//!   and falling back to the extension
//! - [`encode`] - write a raster in an explicit [`OutputFormat`]
//! - [`output_path`] - derive `<dir>/<stem>_<suffix><ext>` from an input
//!
//! Every decoded raster is RGBA. Writes go through a temporary file in the
//! destination directory, so a failed encode never leaves a partial output.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use colorshift_io::{decode, encode, output_path, OutputFormat};
//!
//! let raster = decode("photo.jpg")?;
//! let out = output_path("photo.jpg", "HSV");
//! encode(&raster, &out, OutputFormat::from_path(&out)?)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Notes |
//! |--------|------|-------|-------|
//! | PNG | 1-16 bit, gray/RGB/palette, alpha | 8-bit RGBA | lossless |
//! | JPEG | L8, L16, RGB, CMYK | 8-bit RGB | quality 100, alpha dropped |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]

mod atomic;
mod detect;
mod error;
mod traits;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::{Format, OutputFormat};
pub use error::{IoError, IoResult};
pub use traits::{RasterReader, RasterWriter};

use colorshift_core::Raster;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Reads a raster from a file.
///
/// # Errors
///
/// - [`IoError::DecodeError`] if the file does not exist
/// - [`IoError::Io`] if an existing file cannot be read
/// - [`IoError::UnsupportedFormat`] if neither magic bytes nor extension
///   name a supported container
/// - [`IoError::DecodeError`] for corrupt data
pub fn decode<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    trace!(path = %path.display(), "decode");

    let data = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::DecodeError(format!("{}: no such file", path.display())),
        _ => IoError::Io(e),
    })?;
    let format = match Format::from_bytes(&data) {
        Format::Unknown => Format::from_extension(path),
        known => known,
    };
    debug!(path = %path.display(), format = ?format, "container detected");

    let raster = decode_bytes(&data, format)?;
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "decoded"
    );
    Ok(raster)
}

/// Decodes in-memory bytes, detecting the container from magic bytes.
pub fn decode_from_memory(data: &[u8]) -> IoResult<Raster> {
    decode_bytes(data, Format::from_bytes(data))
}

fn decode_bytes(data: &[u8], format: Format) -> IoResult<Raster> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::PngReader.read_from_memory(data),
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegReader.read_from_memory(data),
        other => Err(IoError::UnsupportedFormat(format!("{other:?}"))),
    }
}

/// Encodes `raster` to `format` bytes.
pub fn encode_to_memory(raster: &Raster, format: OutputFormat) -> IoResult<Vec<u8>> {
    match format {
        #[cfg(feature = "png")]
        OutputFormat::Png => png::PngWriter.write_to_memory(raster),
        #[cfg(feature = "jpeg")]
        OutputFormat::Jpeg => jpeg::JpegWriter::new().write_to_memory(raster),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!("{other:?} support not compiled in"))),
    }
}

/// Writes `raster` to `path` as `format`.
///
/// The target is created (or replaced) only once the encoder has produced
/// the complete file.
pub fn encode<P: AsRef<Path>>(raster: &Raster, path: P, format: OutputFormat) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), format = ?format, "encode");

    let data = encode_to_memory(raster, format)?;
    atomic::write(path, &data)?;
    info!(path = %path.display(), bytes = data.len(), "encoded");
    Ok(())
}

/// Output path for a transformed copy of `input`:
/// `<input-dir>/<input-stem>_<suffix><input-extension>`.
///
/// ```rust
/// use colorshift_io::output_path;
/// use std::path::Path;
///
/// assert_eq!(output_path("img/cat.png", "HSV"), Path::new("img/cat_HSV.png"));
/// assert_eq!(output_path("raw", "gray"), Path::new("raw_gray"));
/// ```
pub fn output_path<P: AsRef<Path>>(input: P, suffix: &str) -> PathBuf {
    let input = input.as_ref();
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("_");
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_dir_and_ext() {
        assert_eq!(
            output_path("/data/in/photo.JPG", "YCbCr"),
            PathBuf::from("/data/in/photo_YCbCr.JPG")
        );
        assert_eq!(output_path("a.b.png", "gray"), PathBuf::from("a.b_gray.png"));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(dir.path().join("none.png")).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(ref msg) if msg.contains("none.png")), "{err}");
    }

    #[test]
    fn test_decode_unknown_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.bmp");
        std::fs::write(&path, b"BM not a png").unwrap();
        assert!(matches!(decode(&path), Err(IoError::UnsupportedFormat(_))));
    }
}
