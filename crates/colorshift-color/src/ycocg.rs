//! YCoCg.
//!
//! ```text
//! Y  =  R/4 + G/2 + B/4
//! Co = (R - B)/2        + 128
//! Cg = (-R + 2G - B)/4  + 128
//! ```
//!
//! The inverse removes the same 128 offset from both chroma channels before
//! reconstructing, so the pair round-trips to within one code value.

/// Chroma offset applied to Co and Cg.
pub const CHROMA_OFFSET: f64 = 128.0;

/// RGB -> YCoCg.
#[inline]
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    [
        r / 4.0 + g / 2.0 + b / 4.0,
        (r - b) / 2.0 + CHROMA_OFFSET,
        (-r + 2.0 * g - b) / 4.0 + CHROMA_OFFSET,
    ]
}

/// YCoCg -> RGB.
#[inline]
pub fn to_rgb(ycocg: [f64; 3]) -> [f64; 3] {
    let y = ycocg[0];
    let co = ycocg[1] - CHROMA_OFFSET;
    let cg = ycocg[2] - CHROMA_OFFSET;
    [y + co - cg, y + cg, y - co - cg]
}
