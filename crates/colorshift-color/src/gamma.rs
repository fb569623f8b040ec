//! Rec.709 gamma correction and its inverse.
//!
//! Applied per channel: each of R, G and B goes through the curve on its
//! own, normalized to [0, 1].

use colorshift_transfer::rec709;

/// Linear RGB -> Rec.709 encoded.
#[inline]
pub fn encode(rgb: [f64; 3]) -> [f64; 3] {
    rec709::oetf_rgb(rgb.map(|c| c / 255.0)).map(|v| v * 255.0)
}

/// Rec.709 encoded -> linear RGB.
#[inline]
pub fn decode(rgb: [f64; 3]) -> [f64; 3] {
    rec709::eotf_rgb(rgb.map(|c| c / 255.0)).map(|v| v * 255.0)
}
