//! 8-bit RGBA pixel and luma weights.
//!
//! [`Rgba8`] is a plain `[u8; 4]` wrapper. The first three channels carry
//! whatever the raster currently encodes; the fourth is alpha.

use std::fmt;

// ============================================================================
// Luma Weights
// ============================================================================

/// BT.601 luma weights `[R, G, B]`.
///
/// Used for gray conversion and as the Y of the YUV transform:
/// `Y = 0.299*R + 0.587*G + 0.114*B`
pub const REC601_LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Rec.709 luminance weights `[R, G, B]`, applied to normalized values.
///
/// `L = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Weighted sum of three channels.
///
/// # Example
/// ```
/// use colorshift_core::pixel::{weighted_sum, REC601_LUMA};
/// let y = weighted_sum(REC601_LUMA, [255.0, 0.0, 0.0]);
/// assert!((y - 76.245).abs() < 1e-9);
/// ```
#[inline]
pub fn weighted_sum(weights: [f64; 3], c: [f64; 3]) -> f64 {
    weights[0] * c[0] + weights[1] * c[1] + weights[2] * c[2]
}

// ============================================================================
// Rgba8
// ============================================================================

/// Four 8-bit channels `(C1, C2, C3, Alpha)`.
///
/// # Example
///
/// ```
/// use colorshift_core::Rgba8;
///
/// let px = Rgba8::new(10, 20, 30, 128);
/// assert_eq!(px.rgb(), [10, 20, 30]);
/// assert_eq!(px.alpha(), 128);
/// assert_eq!(px.with_rgb([1, 2, 3]), Rgba8::new(1, 2, 3, 128));
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(c1: u8, c2: u8, c3: u8, alpha: u8) -> Self {
        Self([c1, c2, c3, alpha])
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn opaque(c1: u8, c2: u8, c3: u8) -> Self {
        Self([c1, c2, c3, 255])
    }

    /// The three color channels.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// The alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    /// Replaces the color channels, keeping alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        Self([rgb[0], rgb[1], rgb[2], self.0[3]])
    }

    /// Color channels widened to `f64` on the 0..255 scale.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.0[0] as f64, self.0[1] as f64, self.0[2] as f64]
    }

    /// Largest absolute per-channel difference of the color channels.
    #[inline]
    pub fn max_channel_diff(self, other: Self) -> u8 {
        (0..3)
            .map(|i| self.0[i].abs_diff(other.0[i]))
            .max()
            .unwrap_or(0)
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Self(c)
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(px: Rgba8) -> Self {
        px.0
    }
}

impl fmt::Debug for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, alpha] = self.0;
        write!(f, "Rgba8({a}, {b}, {c}, {alpha})")
    }
}
