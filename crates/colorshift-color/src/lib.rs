//! # colorshift-color
//!
//! Per-pixel colorspace transforms and the engine that maps them over a
//! [`Raster`](colorshift_core::Raster).
//!
//! # Architecture
//!
//! ```text
//!                 colorshift-color
//!                        |
//!          +-------------+-------------+
//!          |                           |
//!   colorshift-transfer          colorshift-core
//!   (sRGB, Rec.709 curves)   (Rgba8, Raster, Quantization)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use colorshift_color::{Engine, TransformKind};
//! use colorshift_core::{Quantization, Raster, Rgba8};
//!
//! let src = Raster::filled(2, 2, Rgba8::new(255, 0, 0, 255));
//! let engine = Engine::new(Quantization::Nearest);
//! let hsv = engine.apply(TransformKind::RgbToHsv, &src).unwrap();
//! assert_eq!(hsv.get(0, 0).unwrap().rgb(), [0, 255, 255]);
//! ```
//!
//! # Transforms
//!
//! | Forward | Inverse | Suffix |
//! |---------|---------|--------|
//! | `gray` | - | `gray` |
//! | `nl-gray` | - | `nl_gray` |
//! | `rgb-to-ycbcr` | `ycbcr-to-rgb` | `YCbCr` |
//! | `rgb-to-yuv` | `yuv-to-rgb` | `YUV` |
//! | `rgb-to-xyz` | `xyz-to-rgb` | `XYZ` |
//! | `rgb-to-hls` | `hls-to-rgb` | `HLS` |
//! | `rgb-to-hsv` | `hsv-to-rgb` | `HSV` |
//! | `rgb-to-ycocg` | `ycocg-to-rgb` | `YCoCg` |
//! | `gamma` | `inverse-gamma` | `GC` |
//!
//! The channel math lives in one module per colorspace and works on `f64`
//! triples on the 0..255 scale. [`Engine`] quantizes the result and keeps
//! alpha.
//!
//! # Feature Flags
//!
//! - `serde` - (de)serialize [`TransformKind`] by its kebab-case name

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod gamma;
pub mod gray;
pub mod hls;
pub mod hsv;
pub mod hue;
pub mod transform;
pub mod xyz;
pub mod ycbcr;
pub mod ycocg;
pub mod yuv;

pub use engine::{convert, Engine};
pub use error::{ColorError, ColorResult};
pub use hue::Sextant;
pub use transform::TransformKind;
