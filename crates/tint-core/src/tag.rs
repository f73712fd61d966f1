//! Runtime identifiers for the supported color models.
//!
//! [`SpaceTag`] names every model the engine can convert to, and carries
//! each model's default text template. Parsing an unknown tag is an
//! invalid-argument failure ([`crate::Error::UnknownSpace`]).

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Identifier for a color model.
///
/// # Example
///
/// ```rust
/// use tint_core::SpaceTag;
///
/// let tag: SpaceTag = "hsl".parse().unwrap();
/// assert_eq!(tag, SpaceTag::Hsl);
/// assert!("plaid".parse::<SpaceTag>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceTag {
    /// Device sRGB bytes.
    Rgb,
    /// Hue / saturation / lightness.
    Hsl,
    /// Hue / saturation / value.
    Hsv,
    /// Hue / saturation / intensity.
    Hsi,
    /// Hue / whiteness / blackness.
    Hwb,
    /// Cyan / magenta / yellow / key.
    Cmyk,
    /// Linear-light sRGB.
    LinearSrgb,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// ProPhoto (ROMM) RGB.
    ProPhotoRgb,
    /// Display P3.
    DisplayP3,
    /// ITU-R BT.2020 RGB.
    Rec2020,
    /// ACEScg (AP1 primaries, linear).
    AcesCg,
    /// CIE XYZ, D65 white.
    XyzD65,
    /// CIE XYZ, D50 white.
    XyzD50,
    /// CIE xyY chromaticity + luminance.
    Xyy,
    /// CIE L*a*b*.
    Lab,
    /// CIE L*u*v*.
    Luv,
    /// Cylindrical Lab.
    LchAb,
    /// Cylindrical Luv.
    LchUv,
    /// Oklab perceptual space.
    Oklab,
    /// Cylindrical Oklab.
    Oklch,
    /// NTSC YIQ.
    Yiq,
    /// BT.470 YUV.
    Yuv,
    /// Analog component YPbPr.
    YPbPr,
    /// Digital YCbCr, BT.601 studio range.
    YCbCr601,
    /// Digital YCbCr, BT.709 studio range.
    YCbCr709,
    /// Digital YCbCr, BT.2020 studio range.
    YCbCr2020,
    /// Full-range JPEG YCbCr.
    YCbCrJpeg,
    /// BT.2020 constant-luminance YcCbcCrc.
    YcCbcCrc,
    /// YCgCo (exact lifting transform).
    YCgCo,
    /// SECAM YDbDr.
    YDbDr,
    /// Xerox YES.
    Yes,
    /// Natural color (hue word + whiteness/blackness).
    Ncol,
    /// CIE 1960 UCS (U, V, W).
    Ucs,
    /// CIE 1964 U*V*W*.
    Uvw,
    /// Correlated color temperature + Duv.
    Cct,
}

/// Every tag, in declaration order.
pub const ALL_TAGS: &[SpaceTag] = &[
    SpaceTag::Rgb,
    SpaceTag::Hsl,
    SpaceTag::Hsv,
    SpaceTag::Hsi,
    SpaceTag::Hwb,
    SpaceTag::Cmyk,
    SpaceTag::LinearSrgb,
    SpaceTag::AdobeRgb,
    SpaceTag::ProPhotoRgb,
    SpaceTag::DisplayP3,
    SpaceTag::Rec2020,
    SpaceTag::AcesCg,
    SpaceTag::XyzD65,
    SpaceTag::XyzD50,
    SpaceTag::Xyy,
    SpaceTag::Lab,
    SpaceTag::Luv,
    SpaceTag::LchAb,
    SpaceTag::LchUv,
    SpaceTag::Oklab,
    SpaceTag::Oklch,
    SpaceTag::Yiq,
    SpaceTag::Yuv,
    SpaceTag::YPbPr,
    SpaceTag::YCbCr601,
    SpaceTag::YCbCr709,
    SpaceTag::YCbCr2020,
    SpaceTag::YCbCrJpeg,
    SpaceTag::YcCbcCrc,
    SpaceTag::YCgCo,
    SpaceTag::YDbDr,
    SpaceTag::Yes,
    SpaceTag::Ncol,
    SpaceTag::Ucs,
    SpaceTag::Uvw,
    SpaceTag::Cct,
];

impl SpaceTag {
    /// Canonical lowercase name, accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Hsi => "hsi",
            Self::Hwb => "hwb",
            Self::Cmyk => "cmyk",
            Self::LinearSrgb => "linear-srgb",
            Self::AdobeRgb => "adobe-rgb",
            Self::ProPhotoRgb => "prophoto-rgb",
            Self::DisplayP3 => "display-p3",
            Self::Rec2020 => "rec2020",
            Self::AcesCg => "acescg",
            Self::XyzD65 => "xyz-d65",
            Self::XyzD50 => "xyz-d50",
            Self::Xyy => "xyy",
            Self::Lab => "lab",
            Self::Luv => "luv",
            Self::LchAb => "lch",
            Self::LchUv => "lchuv",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Yiq => "yiq",
            Self::Yuv => "yuv",
            Self::YPbPr => "ypbpr",
            Self::YCbCr601 => "ycbcr601",
            Self::YCbCr709 => "ycbcr709",
            Self::YCbCr2020 => "ycbcr2020",
            Self::YCbCrJpeg => "ycbcr-jpeg",
            Self::YcCbcCrc => "yccbccrc",
            Self::YCgCo => "ycgco",
            Self::YDbDr => "ydbdr",
            Self::Yes => "yes",
            Self::Ncol => "ncol",
            Self::Ucs => "ucs",
            Self::Uvw => "uvw",
            Self::Cct => "cct",
        }
    }

    /// Default text template for this model.
    ///
    /// Templates use `{COMPONENT}` / `{COMPONENT:precision}` placeholders
    /// resolved by the renderer in `tint-spaces`. A static per-tag mapping,
    /// not a string lookup.
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::Rgb => "rgba({R:0}, {G:0}, {B:0}, {A:0})",
            Self::Hsl => "hsl({H:0}, {S:0}%, {L:0}%)",
            Self::Hsv => "hsv({H:0}, {S:0}%, {V:0}%)",
            Self::Hsi => "hsi({H:0}, {S:0}%, {I:0}%)",
            Self::Hwb => "hwb({H:0}, {W:0}%, {B:0}%)",
            Self::Cmyk => "cmyk({C:0}%, {M:0}%, {Y:0}%, {K:0}%)",
            Self::LinearSrgb => "linear-srgb({R:4}, {G:4}, {B:4})",
            Self::AdobeRgb => "adobe-rgb({R:4}, {G:4}, {B:4})",
            Self::ProPhotoRgb => "prophoto-rgb({R:4}, {G:4}, {B:4})",
            Self::DisplayP3 => "display-p3({R:4}, {G:4}, {B:4})",
            Self::Rec2020 => "rec2020({R:4}, {G:4}, {B:4})",
            Self::AcesCg => "acescg({R:4}, {G:4}, {B:4})",
            Self::XyzD65 => "xyz-d65({X:4}, {Y:4}, {Z:4})",
            Self::XyzD50 => "xyz-d50({X:4}, {Y:4}, {Z:4})",
            Self::Xyy => "xyy({X:4}, {Y:4}, {YY:4})",
            Self::Lab => "lab({L:2}, {A:2}, {B:2})",
            Self::Luv => "luv({L:2}, {U:2}, {V:2})",
            Self::LchAb => "lch({L:2}, {C:2}, {H:1})",
            Self::LchUv => "lchuv({L:2}, {C:2}, {H:1})",
            Self::Oklab => "oklab({L:4}, {A:4}, {B:4})",
            Self::Oklch => "oklch({L:4}, {C:4}, {H:1})",
            Self::Yiq => "yiq({Y:4}, {I:4}, {Q:4})",
            Self::Yuv => "yuv({Y:4}, {U:4}, {V:4})",
            Self::YPbPr => "ypbpr({Y:4}, {PB:4}, {PR:4})",
            Self::YCbCr601 => "ycbcr601({Y:1}, {CB:1}, {CR:1})",
            Self::YCbCr709 => "ycbcr709({Y:1}, {CB:1}, {CR:1})",
            Self::YCbCr2020 => "ycbcr2020({Y:1}, {CB:1}, {CR:1})",
            Self::YCbCrJpeg => "ycbcr-jpeg({Y:1}, {CB:1}, {CR:1})",
            Self::YcCbcCrc => "yccbccrc({Y:4}, {CB:4}, {CR:4})",
            Self::YCgCo => "ycgco({Y:4}, {CG:4}, {CO:4})",
            Self::YDbDr => "ydbdr({Y:4}, {DB:4}, {DR:4})",
            Self::Yes => "yes({Y:4}, {E:4}, {S:4})",
            Self::Ncol => "ncol({H}, {W:0}%, {B:0}%)",
            Self::Ucs => "ucs({U:4}, {V:4}, {W:4})",
            Self::Uvw => "uvw({U:2}, {V:2}, {W:2})",
            Self::Cct => "cct({K:0}K, {DUV:4})",
        }
    }
}

impl fmt::Display for SpaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpaceTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let needle = s.trim().to_ascii_lowercase();
        ALL_TAGS
            .iter()
            .copied()
            .find(|t| t.name() == needle)
            .ok_or_else(|| Error::UnknownSpace { tag: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip_all() {
        for &tag in ALL_TAGS {
            assert_eq!(tag.name().parse::<SpaceTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("YCbCr709".parse::<SpaceTag>().unwrap(), SpaceTag::YCbCr709);
    }

    #[test]
    fn test_unknown_tag_errors() {
        let err = "chartreuse-space".parse::<SpaceTag>().unwrap_err();
        assert!(err.to_string().contains("chartreuse-space"));
    }

    #[test]
    fn test_every_tag_has_template() {
        for &tag in ALL_TAGS {
            assert!(tag.default_template().contains('{'));
        }
    }
}
