//! Analog YUV (BT.601 weights), stored with offsets 16/128/128.

use colorshift_core::pixel::{weighted_sum, REC601_LUMA};

/// Offsets added to Y, U, V before storage.
pub const OFFSETS: [f64; 3] = [16.0, 128.0, 128.0];

/// RGB -> YUV: `U = 0.492(B - Y)`, `V = 0.877(R - Y)`, then offsets.
#[inline]
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, _, b] = rgb;
    let y = weighted_sum(REC601_LUMA, rgb);
    let u = 0.492 * (b - y);
    let v = 0.877 * (r - y);
    [y + OFFSETS[0], u + OFFSETS[1], v + OFFSETS[2]]
}

/// YUV -> RGB after removing the offsets.
///
/// ```text
/// R = Y + 1.140V
/// G = Y - 0.394U - 0.581V
/// B = Y + 2.032U
/// ```
#[inline]
pub fn to_rgb(yuv: [f64; 3]) -> [f64; 3] {
    let y = yuv[0] - OFFSETS[0];
    let u = yuv[1] - OFFSETS[1];
    let v = yuv[2] - OFFSETS[2];
    [y + 1.140 * v, y - 0.394 * u - 0.581 * v, y + 2.032 * u]
}
