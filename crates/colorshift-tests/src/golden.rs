//! Reference outputs for a fixed palette.
//!
//! Each row lists what one transform stores for every palette entry under
//! the default (truncating) quantization. The palette is fed to every
//! transform as raw channel values, including the inverse ones, so the
//! tables also pin down the clamping behavior of out-of-gamut decodes.

use colorshift_color::{Engine, TransformKind};
use colorshift_core::{Raster, Rgba8};

/// Input palette; alpha is set per entry to check it is carried through.
pub const PALETTE: [[u8; 3]; 9] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 255],
    [0, 0, 0],
    [128, 128, 128],
    [255, 128, 0],
    [90, 140, 200],
    [17, 200, 33],
];

/// Expected color channels per transform, in [`PALETTE`] order.
pub const EXPECTED: [(TransformKind, [[u8; 3]; 9]); 16] = [
    (
        TransformKind::Gray,
        [
            [76, 76, 76],
            [149, 149, 149],
            [29, 29, 29],
            [255, 255, 255],
            [0, 0, 0],
            [128, 128, 128],
            [151, 151, 151],
            [131, 131, 131],
            [126, 126, 126],
        ],
    ),
    (
        TransformKind::NonLinearGray,
        [
            [127, 127, 127],
            [219, 219, 219],
            [75, 75, 75],
            [255, 255, 255],
            [0, 0, 0],
            [187, 187, 187],
            [199, 199, 199],
            [191, 191, 191],
            [201, 201, 201],
        ],
    ),
    (
        TransformKind::RgbToYcbcr,
        [
            [81, 90, 239],
            [144, 53, 34],
            [40, 239, 109],
            [235, 128, 128],
            [16, 128, 128],
            [125, 128, 128],
            [146, 53, 192],
            [129, 161, 101],
            [124, 81, 59],
        ],
    ),
    (
        TransformKind::YcbcrToRgb,
        [
            [73, 255, 20],
            [0, 35, 237],
            [184, 0, 0],
            [255, 125, 255],
            [0, 135, 0],
            [130, 130, 130],
            [73, 255, 255],
            [201, 22, 110],
            [0, 50, 146],
        ],
    ),
    (
        TransformKind::RgbToYuv,
        [
            [92, 90, 255],
            [165, 54, 0],
            [45, 239, 102],
            [255, 128, 128],
            [16, 128, 128],
            [144, 128, 128],
            [167, 53, 218],
            [147, 161, 91],
            [142, 82, 32],
        ],
    ),
    (
        TransformKind::YuvToRgb,
        [
            [93, 255, 0],
            [0, 8, 242],
            [128, 0, 0],
            [255, 115, 255],
            [0, 108, 0],
            [112, 112, 112],
            [93, 255, 239],
            [156, 27, 98],
            [0, 27, 147],
        ],
    ),
    (
        TransformKind::RgbToXyz,
        [
            [105, 54, 4],
            [91, 182, 30],
            [46, 18, 242],
            [242, 255, 255],
            [0, 0, 0],
            [121, 128, 139],
            [150, 145, 20],
            [123, 133, 208],
            [84, 149, 55],
        ],
    ),
    (
        TransformKind::XyzToRgb,
        [
            [255, 0, 14],
            [0, 255, 0],
            [0, 10, 255],
            [255, 241, 231],
            [0, 0, 0],
            [154, 121, 116],
            [255, 0, 0],
            [0, 183, 187],
            [0, 255, 0],
        ],
    ),
    (
        TransformKind::RgbToHls,
        [
            [0, 127, 255],
            [85, 127, 255],
            [170, 127, 255],
            [0, 255, 0],
            [0, 0, 0],
            [0, 128, 0],
            [21, 127, 255],
            [150, 145, 127],
            [88, 108, 215],
        ],
    ),
    (
        TransformKind::HlsToRgb,
        [
            [0, 0, 0],
            [255, 255, 255],
            [0, 0, 0],
            [255, 255, 255],
            [0, 0, 0],
            [64, 190, 191],
            [128, 128, 128],
            [49, 230, 71],
            [207, 198, 192],
        ],
    ),
    (
        TransformKind::RgbToHsv,
        [
            [0, 255, 255],
            [85, 255, 255],
            [170, 255, 255],
            [0, 0, 255],
            [0, 0, 0],
            [0, 0, 128],
            [21, 255, 255],
            [150, 140, 200],
            [88, 233, 200],
        ],
    ),
    (
        TransformKind::HsvToRgb,
        [
            [0, 0, 0],
            [0, 0, 0],
            [255, 255, 255],
            [255, 0, 0],
            [0, 0, 0],
            [63, 127, 128],
            [0, 0, 0],
            [90, 200, 103],
            [33, 17, 7],
        ],
    ),
    (
        TransformKind::RgbToYcocg,
        [
            [63, 255, 64],
            [127, 128, 255],
            [63, 0, 64],
            [255, 128, 128],
            [0, 128, 128],
            [128, 128, 128],
            [127, 255, 128],
            [142, 73, 125],
            [112, 120, 215],
        ],
    ),
    (
        TransformKind::YcocgToRgb,
        [
            [255, 127, 255],
            [255, 0, 1],
            [0, 127, 1],
            [255, 255, 1],
            [0, 0, 255],
            [128, 128, 128],
            [255, 127, 255],
            [30, 162, 6],
            [184, 0, 40],
        ],
    ),
    (
        TransformKind::Gamma,
        [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 255],
            [0, 0, 0],
            [180, 180, 180],
            [255, 180, 0],
            [150, 188, 225],
            [57, 225, 86],
        ],
    ),
    (
        TransformKind::InverseGamma,
        [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 255],
            [0, 0, 0],
            [66, 66, 66],
            [255, 66, 0],
            [35, 78, 156],
            [3, 156, 7],
        ],
    ),
];

/// The palette as a one-row raster.
pub fn palette_raster() -> Raster {
    let pixels = PALETTE
        .iter()
        .enumerate()
        .map(|(i, c)| Rgba8::new(c[0], c[1], c[2], 30 * i as u8))
        .collect();
    Raster::from_pixels(PALETTE.len() as u32, 1, pixels).expect("palette dimensions")
}

/// Runs `kind` over the palette with the default engine.
pub fn run_palette(kind: TransformKind) -> Vec<[u8; 3]> {
    let out = Engine::default()
        .apply(kind, &palette_raster())
        .expect("palette transform");
    out.pixels().iter().map(|p| p.rgb()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_covers_every_transform() {
        let kinds: Vec<_> = EXPECTED.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, TransformKind::ALL.to_vec());
    }

    #[test]
    fn golden_palette_outputs() {
        for (kind, expected) in EXPECTED {
            let got = run_palette(kind);
            for (i, (g, e)) in got.iter().zip(expected.iter()).enumerate() {
                assert_eq!(g, e, "{kind} on {:?}", PALETTE[i]);
            }
        }
    }
}
