//! HSV (hue, saturation, value).
//!
//! Stored channels: hue as a fraction of a full turn times 255, saturation
//! and value as fractions of 1 times 255.

use crate::hue::{degrees_to_channel, hue_degrees, Sextant, FULL_TURN};

/// RGB -> HSV.
///
/// Black maps to `(0, 0, 0)` and other achromatic pixels to `(0, 0, V)`,
/// so neither `max` nor `max - min` is ever a zero divisor.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let unit = rgb.map(|c| c / 255.0);
    let [r, g, b] = unit;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == 0.0 {
        return [0.0; 3];
    }
    let s = (max - min) / max;
    if max == min {
        return [0.0, 0.0, max * 255.0];
    }

    let h = hue_degrees(unit, max, min);
    [degrees_to_channel(h), s * 255.0, max * 255.0]
}

/// HSV -> RGB.
pub fn to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let mut h = hsv[0] / 255.0 * FULL_TURN;
    let s = hsv[1] / 255.0;
    let v = hsv[2] / 255.0;

    if s == 0.0 {
        return [v * 255.0; 3];
    }
    if h >= FULL_TURN {
        h = 0.0;
    }

    let h = h / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let rgb = match Sextant::from_index(i as usize) {
        Sextant::RedYellow => [v, t, p],
        Sextant::YellowGreen => [q, v, p],
        Sextant::GreenCyan => [p, v, t],
        Sextant::CyanBlue => [p, q, v],
        Sextant::BlueMagenta => [t, p, v],
        Sextant::MagentaRed => [v, p, q],
    };
    rgb.map(|c| c * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_gray() {
        assert_eq!(from_rgb([0.0; 3]), [0.0; 3]);
        assert_eq!(from_rgb([128.0; 3]), [0.0, 0.0, 128.0]);
    }

    #[test]
    fn test_pure_red() {
        assert_eq!(from_rgb([255.0, 0.0, 0.0]), [0.0, 255.0, 255.0]);
    }

    #[test]
    fn test_blue_hue() {
        let [h, s, v] = from_rgb([0.0, 0.0, 255.0]);
        assert!((h - 170.0).abs() < 1e-9);
        assert_eq!(s, 255.0);
        assert_eq!(v, 255.0);
    }

    #[test]
    fn test_inverse_zero_saturation() {
        assert_eq!(to_rgb([200.0, 0.0, 40.0]), [40.0; 3]);
    }

    #[test]
    fn test_inverse_each_sextant() {
        // hue 30, 90, ... 330 degrees at full saturation and value
        let expected = [
            [255.0, 127.5, 0.0],
            [127.5, 255.0, 0.0],
            [0.0, 255.0, 127.5],
            [0.0, 127.5, 255.0],
            [127.5, 0.0, 255.0],
            [255.0, 0.0, 127.5],
        ];
        for (k, want) in expected.iter().enumerate() {
            let deg = 30.0 + 60.0 * k as f64;
            let got = to_rgb([degrees_to_channel(deg), 255.0, 255.0]);
            for c in 0..3 {
                assert!((got[c] - want[c]).abs() < 1e-6, "{deg}: {got:?}");
            }
        }
    }

    #[test]
    fn test_inverse_full_turn_wraps() {
        let rgb = to_rgb([255.0, 255.0, 255.0]);
        assert!((rgb[0] - 255.0).abs() < 1e-9);
        assert!(rgb[1].abs() < 1e-9);
        assert!(rgb[2].abs() < 1e-9);
    }
}
