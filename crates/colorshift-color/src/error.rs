//! Error types for color operations.

use thiserror::Error;

/// Color transform error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A transform produced NaN or infinity for a channel.
    ///
    /// The built-in transforms guard every division, so hitting this means a
    /// guard is missing; the value is rejected instead of stored.
    #[error("{transform} produced non-finite value {value} in channel {channel}")]
    Computation {
        /// Transform name.
        transform: &'static str,
        /// Channel index (0..3).
        channel: usize,
        /// Offending value.
        value: f64,
    },

    /// Transform name not recognized.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// Inverse requested for a one-way transform.
    #[error("{0} has no inverse")]
    NoInverse(&'static str),

    /// Raster construction failed.
    #[error(transparent)]
    Core(#[from] colorshift_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
