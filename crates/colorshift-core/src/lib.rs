//! # colorshift-core
//!
//! Core types shared by every colorshift crate.
//!
//! - [`Rgba8`] - four 8-bit channels, the unit every transform maps
//! - [`Raster`] - row-major grid of [`Rgba8`] pixels
//! - [`Quantization`] - policy turning computed channel values into bytes
//! - [`Error`] - failures of raster construction and access
//!
//! ## Channel Semantics
//!
//! A pixel does not know which colorspace it is in. The first three
//! channels hold R,G,B for an RGB raster, Y,Cb,Cr after an RGB->YCbCr
//! transform, H,L,S after RGB->HLS, and so on. The fourth channel is always
//! alpha and is never touched by a transform.
//!
//! ```rust
//! use colorshift_core::{Raster, Rgba8};
//!
//! let raster = Raster::filled(4, 2, Rgba8::new(255, 0, 0, 255));
//! assert_eq!(raster.width(), 4);
//! assert_eq!(raster.get(3, 1).unwrap().rgb(), [255, 0, 0]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! colorshift-core (this crate)
//!    ^
//!    +-- colorshift-transfer (OETF/EOTF curves)
//!    +-- colorshift-color (transform engine)
//!    +-- colorshift-io (PNG/JPEG decode and encode)
//!    +-- colorshift-cli (job configuration and binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - (de)serialize [`Quantization`] by name

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod quantize;
pub mod raster;

pub use error::{Error, Result};
pub use pixel::{Rgba8, REC601_LUMA, REC709_LUMA};
pub use quantize::Quantization;
pub use raster::Raster;
