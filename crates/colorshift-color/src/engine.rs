//! Raster-wide transform driver.
//!
//! Every output pixel depends only on the input pixel at the same
//! coordinates, so rows are mapped in parallel with rayon. Each worker owns
//! a disjoint slice of output rows; the join is the only synchronization.

use colorshift_core::{Quantization, Raster, Rgba8};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{ColorError, ColorResult};
use crate::transform::TransformKind;

/// Applies transforms to rasters under a quantization policy.
///
/// # Example
///
/// ```rust
/// use colorshift_color::{Engine, TransformKind};
/// use colorshift_core::{Raster, Rgba8};
///
/// let src = Raster::filled(8, 8, Rgba8::new(255, 0, 0, 200));
/// let gray = Engine::default().apply(TransformKind::Gray, &src).unwrap();
/// assert_eq!(gray.get(7, 7).unwrap(), Rgba8::new(76, 76, 76, 200));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    quantization: Quantization,
}

impl Engine {
    /// Engine storing channels with `quantization`.
    pub fn new(quantization: Quantization) -> Self {
        Self { quantization }
    }

    /// Active quantization policy.
    pub fn quantization(&self) -> Quantization {
        self.quantization
    }

    /// Maps one pixel. Alpha is copied unchanged.
    ///
    /// # Errors
    ///
    /// [`ColorError::Computation`] if the transform yields NaN or infinity.
    pub fn apply_pixel(&self, kind: TransformKind, px: Rgba8) -> ColorResult<Rgba8> {
        let mapped = kind.map_channels(px.to_f64());
        let mut out = [0u8; 3];
        for (channel, (slot, value)) in out.iter_mut().zip(mapped).enumerate() {
            if !value.is_finite() {
                return Err(ColorError::Computation {
                    transform: kind.name(),
                    channel,
                    value,
                });
            }
            *slot = self.quantization.quantize(value);
        }
        Ok(px.with_rgb(out))
    }

    /// Maps every pixel of `src` into a new raster of the same dimensions.
    pub fn apply(&self, kind: TransformKind, src: &Raster) -> ColorResult<Raster> {
        trace!(transform = %kind, width = src.width(), height = src.height(), "Engine::apply");

        let (width, height) = src.dimensions();
        if src.is_empty() {
            debug!(transform = %kind, "empty raster, nothing to map");
            return Ok(Raster::from_pixels(width, height, Vec::new())?);
        }

        let row = width as usize;
        let mut out = vec![Rgba8::TRANSPARENT; src.len()];
        out.par_chunks_mut(row)
            .zip(src.pixels().par_chunks(row))
            .try_for_each(|(dst, row)| {
                for (d, s) in dst.iter_mut().zip(row) {
                    *d = self.apply_pixel(kind, *s)?;
                }
                Ok::<(), ColorError>(())
            })?;

        debug!(
            transform = %kind,
            pixels = out.len(),
            quantization = %self.quantization,
            "raster mapped"
        );
        Ok(Raster::from_pixels(width, height, out)?)
    }

    /// Applies `kind` and then its inverse.
    ///
    /// # Errors
    ///
    /// [`ColorError::NoInverse`] for one-way transforms.
    pub fn round_trip(&self, kind: TransformKind, src: &Raster) -> ColorResult<Raster> {
        let inverse = kind.try_inverse()?;
        let encoded = self.apply(kind, src)?;
        self.apply(inverse, &encoded)
    }
}

/// Applies `kind` with the default [`Quantization`].
pub fn convert(kind: TransformKind, src: &Raster) -> ColorResult<Raster> {
    Engine::default().apply(kind, src)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every RGB triple on a step-5 grid, one pixel each, alpha varying.
    fn grid() -> Raster {
        let levels: Vec<u8> = (0..=255u8).step_by(5).collect();
        let n = levels.len();
        let mut pixels = Vec::with_capacity(n * n * n);
        for &r in &levels {
            for &g in &levels {
                for &b in &levels {
                    pixels.push(Rgba8::new(r, g, b, r.wrapping_add(b)));
                }
            }
        }
        Raster::from_pixels((n * n) as u32, n as u32, pixels).unwrap()
    }

    fn clipped(px: Rgba8) -> bool {
        px.rgb().iter().any(|&c| c == 0 || c == 255)
    }

    /// Largest round-trip error over the grid, optionally skipping pixels
    /// whose forward encoding clipped.
    fn worst_round_trip(engine: Engine, kind: TransformKind, skip_clipped: bool) -> u8 {
        let src = grid();
        let encoded = engine.apply(kind, &src).unwrap();
        let decoded = engine.apply(kind.inverse().unwrap(), &encoded).unwrap();
        src.pixels()
            .iter()
            .zip(encoded.pixels())
            .zip(decoded.pixels())
            .filter(|((_, e), _)| !(skip_clipped && clipped(**e)))
            .map(|((s, _), d)| s.max_channel_diff(*d))
            .max()
            .unwrap_or(0)
    }

    fn one(kind: TransformKind, px: Rgba8) -> Rgba8 {
        Engine::default().apply_pixel(kind, px).unwrap()
    }

    #[test]
    fn test_alpha_and_dimensions_preserved() {
        let src = grid();
        for kind in TransformKind::ALL {
            let out = convert(kind, &src).unwrap();
            assert_eq!(out.dimensions(), src.dimensions(), "{kind}");
            for (a, b) in src.pixels().iter().zip(out.pixels()) {
                assert_eq!(a.alpha(), b.alpha(), "{kind}");
            }
        }
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        // YCbCr of saturated primaries and XYZ of bright blue overshoot
        // before clamping; none of it may panic or wrap.
        let extremes = [
            Rgba8::opaque(255, 255, 255),
            Rgba8::opaque(0, 0, 255),
            Rgba8::opaque(255, 0, 255),
            Rgba8::opaque(0, 255, 0),
        ];
        let raster = Raster::from_pixels(4, 1, extremes.to_vec()).unwrap();
        for kind in TransformKind::ALL {
            for q in Quantization::ALL {
                Engine::new(q).apply(kind, &raster).unwrap();
            }
        }
        assert_eq!(one(TransformKind::YcbcrToRgb, Rgba8::opaque(255, 255, 255)).rgb()[0], 255);
        let black = one(TransformKind::YcbcrToRgb, Rgba8::opaque(0, 0, 0)).rgb();
        assert_eq!((black[0], black[2]), (0, 0));
    }

    #[test]
    fn test_round_trip_truncate() {
        let e = Engine::new(Quantization::Truncate);
        assert!(worst_round_trip(e, TransformKind::RgbToYcbcr, false) <= 4);
        assert!(worst_round_trip(e, TransformKind::RgbToYuv, true) <= 4);
        assert!(worst_round_trip(e, TransformKind::RgbToXyz, true) <= 4);
        assert!(worst_round_trip(e, TransformKind::RgbToHls, false) <= 8);
        assert!(worst_round_trip(e, TransformKind::RgbToHsv, false) <= 6);
        assert!(worst_round_trip(e, TransformKind::RgbToYcocg, false) <= 1);
    }

    #[test]
    fn test_hls_truncate_worst_case() {
        // off the step-5 grid
        let e = Engine::new(Quantization::Truncate);
        let enc = e.apply_pixel(TransformKind::RgbToHls, Rgba8::opaque(1, 246, 243)).unwrap();
        assert_eq!(enc.rgb(), [126, 123, 252]);
        let back = e.apply_pixel(TransformKind::HlsToRgb, enc).unwrap();
        assert_eq!(back.rgb(), [1, 244, 235]);

        // every green/blue pair for red in 0..=2
        let pixels: Vec<Rgba8> = (0..=2u8)
            .flat_map(|r| {
                (0..=255u8).flat_map(move |g| (0..=255u8).map(move |b| Rgba8::opaque(r, g, b)))
            })
            .collect();
        let src = Raster::from_pixels(256, 3 * 256, pixels).unwrap();
        let back = e.round_trip(TransformKind::RgbToHls, &src).unwrap();
        let worst = src
            .pixels()
            .iter()
            .zip(back.pixels())
            .map(|(a, b)| a.max_channel_diff(*b))
            .max()
            .unwrap();
        assert_eq!(worst, 8);
    }

    #[test]
    fn test_round_trip_nearest() {
        let e = Engine::new(Quantization::Nearest);
        assert!(worst_round_trip(e, TransformKind::RgbToYcbcr, false) <= 2);
        assert!(worst_round_trip(e, TransformKind::RgbToYuv, true) <= 2);
        assert!(worst_round_trip(e, TransformKind::RgbToXyz, true) <= 3);
        assert!(worst_round_trip(e, TransformKind::RgbToHls, false) <= 4);
        assert!(worst_round_trip(e, TransformKind::RgbToHsv, false) <= 3);
    }

    #[test]
    fn test_round_trip_helper() {
        let src = Raster::filled(3, 3, Rgba8::new(200, 100, 50, 9));
        let back = Engine::default().round_trip(TransformKind::RgbToYcocg, &src).unwrap();
        for (a, b) in src.pixels().iter().zip(back.pixels()) {
            assert!(a.max_channel_diff(*b) <= 1);
        }
        assert!(matches!(
            Engine::default().round_trip(TransformKind::NonLinearGray, &src),
            Err(ColorError::NoInverse("nl-gray"))
        ));
    }

    #[test]
    fn test_scenarios() {
        let red = Rgba8::opaque(255, 0, 0);
        assert_eq!(one(TransformKind::Gray, red), Rgba8::opaque(76, 76, 76));
        assert_eq!(one(TransformKind::RgbToHsv, red), Rgba8::opaque(0, 255, 255));
        assert_eq!(one(TransformKind::RgbToHls, red), Rgba8::opaque(0, 127, 255));
        assert_eq!(one(TransformKind::Gamma, Rgba8::opaque(0, 0, 0)), Rgba8::opaque(0, 0, 0));
        assert_eq!(
            one(TransformKind::NonLinearGray, Rgba8::opaque(255, 255, 255)),
            Rgba8::opaque(255, 255, 255)
        );
    }

    #[test]
    fn test_achromatic() {
        let mid = Rgba8::opaque(128, 128, 128);
        assert_eq!(one(TransformKind::RgbToHls, mid), Rgba8::opaque(0, 128, 0));
        assert_eq!(one(TransformKind::RgbToHsv, mid), Rgba8::opaque(0, 0, 128));
        assert_eq!(one(TransformKind::RgbToHsv, Rgba8::opaque(0, 0, 0)).rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_ycocg_red_survives() {
        let red = Rgba8::opaque(255, 0, 0);
        let enc = one(TransformKind::RgbToYcocg, red);
        assert_eq!(enc.rgb(), [63, 255, 64]);
        assert_eq!(one(TransformKind::YcocgToRgb, enc), Rgba8::opaque(254, 0, 0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let src = grid();
        let engine = Engine::new(Quantization::Nearest);
        for kind in [TransformKind::RgbToHls, TransformKind::NonLinearGray] {
            let par = engine.apply(kind, &src).unwrap();
            let seq: Vec<Rgba8> = src
                .pixels()
                .iter()
                .map(|p| engine.apply_pixel(kind, *p).unwrap())
                .collect();
            assert_eq!(par.pixels(), seq.as_slice());
        }
    }

    #[test]
    fn test_empty_raster() {
        let out = convert(TransformKind::RgbToXyz, &Raster::new(0, 4)).unwrap();
        assert_eq!(out.dimensions(), (0, 4));
        assert!(out.is_empty());
    }
}
