//! Error types for raster I/O.

use std::io;
use thiserror::Error;

/// Raster I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unknown extension or container.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Corrupt or undecodable input.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoder failure.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data did not form a valid raster.
    #[error(transparent)]
    Core(#[from] colorshift_core::Error),
}

/// Result type for raster I/O.
pub type IoResult<T> = Result<T, IoError>;
