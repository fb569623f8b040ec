//! Grayscale conversions.
//!
//! Both write the same value to all three channels.

use colorshift_core::pixel::{weighted_sum, REC601_LUMA, REC709_LUMA};
use colorshift_transfer::srgb;

/// BT.601 luma: `Y = 0.299R + 0.587G + 0.114B`, replicated to R, G, B.
#[inline]
pub fn luma(rgb: [f64; 3]) -> [f64; 3] {
    let y = weighted_sum(REC601_LUMA, rgb);
    [y, y, y]
}

/// Perceptual gray: Rec.709 luminance of the normalized channels, encoded
/// with the sRGB OETF and scaled back to 0..255.
#[inline]
pub fn perceptual(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let linear = weighted_sum(REC709_LUMA, [r / 255.0, g / 255.0, b / 255.0]);
    let c = srgb::oetf(linear) * 255.0;
    [c, c, c]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_red() {
        let [y, g, b] = luma([255.0, 0.0, 0.0]);
        assert!((y - 76.245).abs() < 1e-9);
        assert_eq!(y, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_luma_white_black() {
        assert!((luma([255.0; 3])[0] - 255.0).abs() < 1e-9);
        assert_eq!(luma([0.0; 3])[0], 0.0);
    }

    #[test]
    fn test_perceptual_endpoints() {
        assert_eq!(perceptual([0.0; 3])[0], 0.0);
        assert!((perceptual([255.0; 3])[0] - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_perceptual_linear_toe() {
        // L = 0.2126 / 255 sits below the 0.0031308 break
        let c = perceptual([1.0, 0.0, 0.0])[0];
        assert!((c - 12.92 * 0.2126).abs() < 1e-9);
    }

    #[test]
    fn test_perceptual_is_brighter_than_linear() {
        let c = perceptual([128.0; 3])[0];
        assert!(c > 128.0);
    }
}
