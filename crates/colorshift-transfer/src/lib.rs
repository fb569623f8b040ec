//! # colorshift-transfer
//!
//! Transfer functions (OETF/EOTF) used by the colorshift transforms.
//!
//! - **OETF** (Opto-Electronic Transfer Function): linear -> encoded
//! - **EOTF** (Electro-Optical Transfer Function): encoded -> linear, Rec.709 only
//!
//! | Function | Used by | Range |
//! |----------|---------|-------|
//! | [`srgb`] | perceptual grayscale | [0, 1] |
//! | [`rec709`] | gamma correction and its inverse | [0, 1] |
//!
//! ```rust
//! use colorshift_transfer::{rec709, srgb};
//!
//! let encoded = srgb::oetf(0.214);
//! assert!((encoded - 0.5).abs() < 0.01);
//! assert_eq!(rec709::oetf(0.0), 0.0);
//! ```
//!
//! All curves work on `f64`; the transforms feeding them are computed in
//! double precision end to end.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod rec709;
pub mod srgb;
