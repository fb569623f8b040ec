//! Reader and writer traits implemented by each codec.

use crate::IoResult;
use colorshift_core::Raster;

/// Decodes a container into an RGBA [`Raster`].
pub trait RasterReader {
    /// Reads a raster from encoded bytes.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Raster>;
}

/// Encodes a [`Raster`] into a container.
pub trait RasterWriter {
    /// Encodes to a byte vector.
    fn write_to_memory(&self, raster: &Raster) -> IoResult<Vec<u8>>;
}
