//! HLS (hue, lightness, saturation).
//!
//! All three stored channels are fractions of 255: hue as a fraction of a
//! full turn, lightness and saturation as fractions of 1. Both directions
//! use that encoding.

use crate::hue::{degrees_to_channel, hue_degrees};

/// RGB -> HLS.
///
/// Achromatic pixels (`max == min`) get hue 0 and saturation 0 without any
/// division by `max - min`.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let unit = rgb.map(|c| c / 255.0);
    let [r, g, b] = unit;
    let m1 = r.max(g).max(b);
    let m2 = r.min(g).min(b);
    let l = (m1 + m2) / 2.0;

    if m1 == m2 {
        return [0.0, l * 255.0, 0.0];
    }

    let s = if l <= 0.5 {
        (m1 - m2) / (m1 + m2)
    } else {
        (m1 - m2) / (2.0 - m1 - m2)
    };
    let h = hue_degrees(unit, m1, m2);
    [degrees_to_channel(h), l * 255.0, s * 255.0]
}

/// HLS -> RGB.
pub fn to_rgb(hls: [f64; 3]) -> [f64; 3] {
    let [h, l, s] = hls.map(|c| c / 255.0);

    if s == 0.0 {
        return [l * 255.0; 3];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    ]
}

/// One channel of the HLS reconstruction. `t` is hue in turns, offset by the
/// channel's third; it is wrapped into [0, 1) first.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t >= 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
