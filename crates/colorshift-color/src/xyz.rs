//! Linear sRGB (Rec.709 primaries, D65) <-> CIE XYZ.
//!
//! Channels are normalized to [0, 1] before the matrix and scaled back by
//! 255 after it. Values outside [0, 1] are clamped by the quantizer, which
//! clips the few bright blues whose Z exceeds 1.

/// sRGB -> XYZ.
pub const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// XYZ -> sRGB.
pub const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
fn apply(m: &[[f64; 3]; 3], c: [f64; 3]) -> [f64; 3] {
    mul(m, c.map(|v| v / 255.0)).map(|v| v * 255.0)
}

/// RGB -> XYZ.
#[inline]
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    apply(&RGB_TO_XYZ, rgb)
}

/// XYZ -> RGB.
#[inline]
pub fn to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    apply(&XYZ_TO_RGB, xyz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_point() {
        let [x, y, z] = from_rgb([255.0; 3]);
        assert!((x / 255.0 - 0.950456).abs() < 1e-6);
        assert!((y / 255.0 - 1.0).abs() < 1e-6);
        assert!(z > 255.0, "D65 Z is above 1 and gets clipped");
    }

    #[test]
    fn test_matrices_are_inverse() {
        for (i, row) in XYZ_TO_RGB.iter().enumerate() {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| row[k] * RGB_TO_XYZ[k][j]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-4, "({i},{j}) = {dot}");
            }
        }
    }

    #[test]
    fn test_black() {
        assert_eq!(from_rgb([0.0; 3]), [0.0; 3]);
        assert_eq!(to_rgb([0.0; 3]), [0.0; 3]);
    }
}
