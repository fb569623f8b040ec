//! BT.601 YCbCr, digital (studio) range.
//!
//! Y occupies 16..235 and the chroma channels 16..240, centred on 128.

/// RGB -> YCbCr.
///
/// ```text
/// Y  =  0.257R + 0.504G + 0.098B + 16
/// Cb = -0.148R - 0.291G + 0.439B + 128
/// Cr =  0.439R - 0.368G - 0.071B + 128
/// ```
#[inline]
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    [
        0.257 * r + 0.504 * g + 0.098 * b + 16.0,
        -0.148 * r - 0.291 * g + 0.439 * b + 128.0,
        0.439 * r - 0.368 * g - 0.071 * b + 128.0,
    ]
}

/// YCbCr -> RGB.
///
/// ```text
/// R = 1.164(Y-16) + 1.596(Cr-128)
/// G = 1.164(Y-16) - 0.813(Cr-128) - 0.392(Cb-128)
/// B = 1.164(Y-16) + 2.017(Cb-128)
/// ```
#[inline]
pub fn to_rgb(ycc: [f64; 3]) -> [f64; 3] {
    let [y, cb, cr] = ycc;
    [
        1.164 * (y - 16.0) + 1.596 * (cr - 128.0),
        1.164 * (y - 16.0) - 0.813 * (cr - 128.0) - 0.392 * (cb - 128.0),
        1.164 * (y - 16.0) + 2.017 * (cb - 128.0),
    ]
}
