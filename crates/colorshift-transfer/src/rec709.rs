//! Rec.709 (BT.709) transfer function.
//!
//! The gamma-correction transform is this OETF. Its inverse here is the
//! exact inverse of the OETF, not the BT.1886 display EOTF.
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Linear-light breakpoint.
pub const LINEAR_BREAK: f64 = 0.018;

/// Encoded breakpoint (`4.5 * 0.018`).
pub const ENCODED_BREAK: f64 = 0.081;

/// Rec.709 OETF.
///
/// ```text
/// if L < 0.018:  V = 4.5 * L
/// else:          V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < LINEAR_BREAK {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Inverse of [`oetf`].
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < ENCODED_BREAK {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Applies [`oetf`] to each channel independently.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

/// Applies [`eotf`] to each channel independently.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}
