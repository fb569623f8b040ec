//! Hue sextants shared by the HLS and HSV transforms.
//!
//! The hue circle is cut into six 60 degree sextants. Within a sextant the
//! ordering of R, G and B is fixed, so the sextant is found by looking the
//! channel ordering up in a table, and hue is `60 * (index + fraction)`.
//!
//! ```text
//!   sextant       order      hue range
//!   RedYellow     R >= G >= B    0..60
//!   YellowGreen   G >= R >= B   60..120
//!   GreenCyan     G >= B >= R  120..180
//!   CyanBlue      B >= G >= R  180..240
//!   BlueMagenta   B >= R >= G  240..300
//!   MagentaRed    R >= B >= G  300..360
//! ```

/// Full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// One of the six 60 degree hue ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sextant {
    /// 0..60 degrees.
    RedYellow,
    /// 60..120 degrees.
    YellowGreen,
    /// 120..180 degrees.
    GreenCyan,
    /// 180..240 degrees.
    CyanBlue,
    /// 240..300 degrees.
    BlueMagenta,
    /// 300..360 degrees.
    MagentaRed,
}

/// Channel ordering -> sextant.
///
/// Indexed by `(r >= g) << 2 | (g >= b) << 1 | (b >= r)`. Index 7 means all
/// channels are equal (achromatic) and index 0 cannot occur; both map to
/// `RedYellow` so hue comes out as 0.
const ORDER_TABLE: [Sextant; 8] = [
    Sextant::RedYellow,   // 000
    Sextant::CyanBlue,    // 001
    Sextant::YellowGreen, // 010
    Sextant::GreenCyan,   // 011
    Sextant::MagentaRed,  // 100
    Sextant::BlueMagenta, // 101
    Sextant::RedYellow,   // 110
    Sextant::RedYellow,   // 111
];

impl Sextant {
    /// Sextants in hue order.
    pub const ALL: [Sextant; 6] = [
        Sextant::RedYellow,
        Sextant::YellowGreen,
        Sextant::GreenCyan,
        Sextant::CyanBlue,
        Sextant::BlueMagenta,
        Sextant::MagentaRed,
    ];

    /// Sextant at position `i` on the hue circle, wrapping modulo 6.
    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 6]
    }

    /// Position on the hue circle (0..6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sextant containing `rgb`, found from the channel ordering.
    #[inline]
    pub fn of(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb;
        let key = ((r >= g) as usize) << 2 | ((g >= b) as usize) << 1 | (b >= r) as usize;
        ORDER_TABLE[key]
    }

    /// Channel indices `(max, mid, min)` for this sextant.
    #[inline]
    pub fn order(self) -> (usize, usize, usize) {
        match self {
            Self::RedYellow => (0, 1, 2),
            Self::YellowGreen => (1, 0, 2),
            Self::GreenCyan => (1, 2, 0),
            Self::CyanBlue => (2, 1, 0),
            Self::BlueMagenta => (2, 0, 1),
            Self::MagentaRed => (0, 2, 1),
        }
    }

    /// Hue rises through even sextants and falls through odd ones.
    #[inline]
    fn rising(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Hue in degrees [0, 360) of a chromatic triple.
///
/// `max` and `min` are the extreme channel values; the caller guarantees
/// `max > min` (achromatic pixels take their own branch and never get here).
pub fn hue_degrees(rgb: [f64; 3], max: f64, min: f64) -> f64 {
    let sextant = Sextant::of(rgb);
    let (_, mid, _) = sextant.order();
    let delta = max - min;
    let fraction = if sextant.rising() {
        (rgb[mid] - min) / delta
    } else {
        (max - rgb[mid]) / delta
    };
    let h = 60.0 * (sextant.index() as f64 + fraction);
    if h >= FULL_TURN { h - FULL_TURN } else { h }
}

/// Degrees -> channel value on the 0..255 scale.
#[inline]
pub fn degrees_to_channel(h: f64) -> f64 {
    h / FULL_TURN * 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue(r: f64, g: f64, b: f64) -> f64 {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        hue_degrees([r, g, b], max, min)
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_eq!(hue(1.0, 0.0, 0.0), 0.0);
        assert_eq!(hue(1.0, 1.0, 0.0), 60.0);
        assert_eq!(hue(0.0, 1.0, 0.0), 120.0);
        assert_eq!(hue(0.0, 1.0, 1.0), 180.0);
        assert_eq!(hue(0.0, 0.0, 1.0), 240.0);
        assert_eq!(hue(1.0, 0.0, 1.0), 300.0);
    }

    #[test]
    fn test_inside_sextants() {
        assert!((hue(1.0, 0.5, 0.0) - 30.0).abs() < 1e-12);
        assert!((hue(0.5, 1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((hue(0.0, 1.0, 0.5) - 150.0).abs() < 1e-12);
        assert!((hue(0.0, 0.5, 1.0) - 210.0).abs() < 1e-12);
        assert!((hue(0.5, 0.0, 1.0) - 270.0).abs() < 1e-12);
        assert!((hue(1.0, 0.0, 0.5) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_lookup() {
        assert_eq!(Sextant::of([3.0, 2.0, 1.0]), Sextant::RedYellow);
        assert_eq!(Sextant::of([2.0, 3.0, 1.0]), Sextant::YellowGreen);
        assert_eq!(Sextant::of([1.0, 3.0, 2.0]), Sextant::GreenCyan);
        assert_eq!(Sextant::of([1.0, 2.0, 3.0]), Sextant::CyanBlue);
        assert_eq!(Sextant::of([2.0, 1.0, 3.0]), Sextant::BlueMagenta);
        assert_eq!(Sextant::of([3.0, 1.0, 2.0]), Sextant::MagentaRed);
        assert_eq!(Sextant::of([5.0, 5.0, 5.0]), Sextant::RedYellow);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, s) in Sextant::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Sextant::from_index(i), *s);
        }
        assert_eq!(Sextant::from_index(6), Sextant::RedYellow);
    }

    #[test]
    fn test_degrees_to_channel() {
        assert_eq!(degrees_to_channel(0.0), 0.0);
        assert_eq!(degrees_to_channel(180.0), 127.5);
    }
}
