//! The sixteen per-pixel transforms.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, ColorResult};
use crate::{gamma, gray, hls, hsv, xyz, ycbcr, ycocg, yuv};

/// A per-pixel colorspace mapping.
///
/// Each variant maps the three color channels of a pixel (on the 0..255
/// scale) to three new channel values; alpha is handled by the engine.
///
/// # Example
///
/// ```rust
/// use colorshift_color::TransformKind;
///
/// let kind: TransformKind = "rgb-to-hsv".parse().unwrap();
/// assert_eq!(kind.suffix(), "HSV");
/// assert_eq!(kind.inverse(), Some(TransformKind::HsvToRgb));
/// assert_eq!("YCbCr".parse::<TransformKind>().unwrap(), TransformKind::RgbToYcbcr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TransformKind {
    /// BT.601 luma grayscale.
    Gray,
    /// Rec.709 luminance, sRGB encoded.
    #[cfg_attr(feature = "serde", serde(rename = "nl-gray"))]
    NonLinearGray,
    /// RGB -> YCbCr (BT.601 studio range).
    RgbToYcbcr,
    /// YCbCr -> RGB.
    YcbcrToRgb,
    /// RGB -> YUV.
    RgbToYuv,
    /// YUV -> RGB.
    YuvToRgb,
    /// RGB -> CIE XYZ.
    RgbToXyz,
    /// CIE XYZ -> RGB.
    XyzToRgb,
    /// RGB -> HLS.
    RgbToHls,
    /// HLS -> RGB.
    HlsToRgb,
    /// RGB -> HSV.
    RgbToHsv,
    /// HSV -> RGB.
    HsvToRgb,
    /// RGB -> YCoCg.
    RgbToYcocg,
    /// YCoCg -> RGB.
    YcocgToRgb,
    /// Rec.709 OETF per channel.
    Gamma,
    /// Inverse Rec.709 OETF per channel.
    InverseGamma,
}

impl TransformKind {
    /// Every transform, in listing order.
    pub const ALL: [TransformKind; 16] = [
        Self::Gray,
        Self::NonLinearGray,
        Self::RgbToYcbcr,
        Self::YcbcrToRgb,
        Self::RgbToYuv,
        Self::YuvToRgb,
        Self::RgbToXyz,
        Self::XyzToRgb,
        Self::RgbToHls,
        Self::HlsToRgb,
        Self::RgbToHsv,
        Self::HsvToRgb,
        Self::RgbToYcocg,
        Self::YcocgToRgb,
        Self::Gamma,
        Self::InverseGamma,
    ];

    /// Name used in job files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::NonLinearGray => "nl-gray",
            Self::RgbToYcbcr => "rgb-to-ycbcr",
            Self::YcbcrToRgb => "ycbcr-to-rgb",
            Self::RgbToYuv => "rgb-to-yuv",
            Self::YuvToRgb => "yuv-to-rgb",
            Self::RgbToXyz => "rgb-to-xyz",
            Self::XyzToRgb => "xyz-to-rgb",
            Self::RgbToHls => "rgb-to-hls",
            Self::HlsToRgb => "hls-to-rgb",
            Self::RgbToHsv => "rgb-to-hsv",
            Self::HsvToRgb => "hsv-to-rgb",
            Self::RgbToYcocg => "rgb-to-ycocg",
            Self::YcocgToRgb => "ycocg-to-rgb",
            Self::Gamma => "gamma",
            Self::InverseGamma => "inverse-gamma",
        }
    }

    /// Default output filename suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::NonLinearGray => "nl_gray",
            Self::RgbToYcbcr => "YCbCr",
            Self::YcbcrToRgb => "RGBfromYCbCr",
            Self::RgbToYuv => "YUV",
            Self::YuvToRgb => "RGBfromYUV",
            Self::RgbToXyz => "XYZ",
            Self::XyzToRgb => "RGBfromXYZ",
            Self::RgbToHls => "HLS",
            Self::HlsToRgb => "RGBfromHLS",
            Self::RgbToHsv => "HSV",
            Self::HsvToRgb => "RGBfromHSV",
            Self::RgbToYcocg => "YCoCg",
            Self::YcocgToRgb => "RGBfromYCoCg",
            Self::Gamma => "GC",
            Self::InverseGamma => "RGBfromGC",
        }
    }

    /// The transform undoing this one, if any. Grayscale is one-way.
    pub fn inverse(self) -> Option<Self> {
        match self {
            Self::Gray | Self::NonLinearGray => None,
            Self::RgbToYcbcr => Some(Self::YcbcrToRgb),
            Self::YcbcrToRgb => Some(Self::RgbToYcbcr),
            Self::RgbToYuv => Some(Self::YuvToRgb),
            Self::YuvToRgb => Some(Self::RgbToYuv),
            Self::RgbToXyz => Some(Self::XyzToRgb),
            Self::XyzToRgb => Some(Self::RgbToXyz),
            Self::RgbToHls => Some(Self::HlsToRgb),
            Self::HlsToRgb => Some(Self::RgbToHls),
            Self::RgbToHsv => Some(Self::HsvToRgb),
            Self::HsvToRgb => Some(Self::RgbToHsv),
            Self::RgbToYcocg => Some(Self::YcocgToRgb),
            Self::YcocgToRgb => Some(Self::RgbToYcocg),
            Self::Gamma => Some(Self::InverseGamma),
            Self::InverseGamma => Some(Self::Gamma),
        }
    }

    /// Like [`inverse`](Self::inverse), failing with
    /// [`ColorError::NoInverse`] for one-way transforms.
    pub fn try_inverse(self) -> ColorResult<Self> {
        self.inverse().ok_or(ColorError::NoInverse(self.name()))
    }

    /// Maps three channel values. The result is unquantized and may fall
    /// outside 0..255.
    #[inline]
    pub fn map_channels(self, c: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Gray => gray::luma(c),
            Self::NonLinearGray => gray::perceptual(c),
            Self::RgbToYcbcr => ycbcr::from_rgb(c),
            Self::YcbcrToRgb => ycbcr::to_rgb(c),
            Self::RgbToYuv => yuv::from_rgb(c),
            Self::YuvToRgb => yuv::to_rgb(c),
            Self::RgbToXyz => xyz::from_rgb(c),
            Self::XyzToRgb => xyz::to_rgb(c),
            Self::RgbToHls => hls::from_rgb(c),
            Self::HlsToRgb => hls::to_rgb(c),
            Self::RgbToHsv => hsv::from_rgb(c),
            Self::HsvToRgb => hsv::to_rgb(c),
            Self::RgbToYcocg => ycocg::from_rgb(c),
            Self::YcocgToRgb => ycocg::to_rgb(c),
            Self::Gamma => gamma::encode(c),
            Self::InverseGamma => gamma::decode(c),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = ColorError;

    /// Accepts a transform name or its suffix, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s) || k.suffix().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownTransform(s.to_string()))
    }
}
