//! sRGB transfer function (IEC 61966-2-1).
//!
//! Piecewise: a linear toe near black, then a 1/2.4 power segment. Only the
//! encoding direction is needed; perceptual gray has no inverse.

/// Linear-light breakpoint of the encoding curve.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// sRGB OETF: encodes linear light in [0, 1].
///
/// ```text
/// if L <= 0.0031308:  V = 12.92 * L
/// else:               V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
