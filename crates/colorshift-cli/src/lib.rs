//! # colorshift-cli
//!
//! Conversion jobs tying [`colorshift_io`] and [`colorshift_color`]
//! together, plus the `colorshift` binary.
//!
//! ```rust,ignore
//! use colorshift_cli::{run, ConvertConfig};
//! use colorshift_color::TransformKind;
//!
//! let out = run(&ConvertConfig::new("plate.png", TransformKind::RgbToHsv))?;
//! assert!(out.ends_with("plate_HSV.png"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::ConvertConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::run;
