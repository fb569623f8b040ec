//! Channel quantization policy.
//!
//! Transforms compute channel values as `f64` on the 0..255 scale. The
//! [`Quantization`] policy clamps a value into [0, 255] and picks the byte
//! that is stored.
//!
//! # Truncation slack
//!
//! `Truncate` adds [`TRUNCATE_SLACK`] before flooring. A value such as
//! `(x / 255.0) * 255.0` can land one ulp below `x`; without the slack it
//! would silently lose a level.

use std::fmt;
use std::str::FromStr;

/// Values this close below an integer truncate to that integer.
pub const TRUNCATE_SLACK: f64 = 1e-6;

/// How a computed channel value becomes a stored byte.
///
/// # Example
///
/// ```
/// use colorshift_core::Quantization;
///
/// assert_eq!(Quantization::Truncate.quantize(76.9), 76);
/// assert_eq!(Quantization::Nearest.quantize(76.9), 77);
/// assert_eq!(Quantization::Truncate.quantize(-3.0), 0);
/// assert_eq!(Quantization::Nearest.quantize(300.0), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Quantization {
    /// Clamp, then round toward zero.
    #[default]
    Truncate,
    /// Clamp, then round half away from zero.
    Nearest,
}

impl Quantization {
    /// All policies, in declaration order.
    pub const ALL: [Quantization; 2] = [Quantization::Truncate, Quantization::Nearest];

    /// Quantizes a finite value on the 0..255 scale.
    ///
    /// Callers are expected to reject non-finite values first; `NaN` maps to 0.
    #[inline]
    pub fn quantize(self, v: f64) -> u8 {
        let v = v.clamp(0.0, 255.0);
        let q = match self {
            Self::Truncate => (v + TRUNCATE_SLACK).floor(),
            Self::Nearest => v.round(),
        };
        q.min(255.0) as u8
    }

    /// Policy name as used in job files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" | "trunc" => Ok(Self::Truncate),
            "nearest" | "round" => Ok(Self::Nearest),
            other => Err(format!("unknown quantization '{other}' (expected truncate or nearest)")),
        }
    }
}
