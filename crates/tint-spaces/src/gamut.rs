//! Wide-gamut RGB working spaces.
//!
//! Each space is defined by xy chromaticities for its primaries and white
//! point; the RGB-XYZ matrices are derived from those, never transcribed,
//! so every space goes through the identical pipeline:
//!
//! ```text
//! device sRGB -> linear -> XYZ(D65) -> [Bradford] -> linear space RGB -> encode
//! ```
//!
//! # Spaces
//!
//! - [`AdobeRgb`] - Adobe RGB (1998), gamma 563/256, D65
//! - [`ProPhotoRgb`] - ROMM, 1.8 piecewise curve, D50
//! - [`DisplayP3`] - P3 primaries with the sRGB curve, D65
//! - [`Rec2020`] - ITU-R BT.2020, D65
//! - [`AcesCg`] - ACES AP1 primaries, linear, D60

use crate::mat3::Mat3;
use crate::srgb;
use crate::xyz::{D65, SRGB_TO_XYZ, XYZ_TO_SRGB, adapt_matrix, xy_to_xyz};
use tint_core::Color;

/// RGB primaries and white point as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y).
    pub r: (f32, f32),
    /// Green primary (x, y).
    pub g: (f32, f32),
    /// Blue primary (x, y).
    pub b: (f32, f32),
    /// White point (x, y).
    pub w: (f32, f32),
}

/// Adobe RGB (1998) primaries, D65.
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: (0.31270, 0.32900),
};

/// ProPhoto (ROMM) primaries, D50.
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: (0.34567, 0.35850),
};

/// Display P3 primaries, D65.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: (0.31270, 0.32900),
};

/// Rec.2020 primaries, D65.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: (0.31270, 0.32900),
};

/// ACES AP1 primaries, D60.
pub const ACES_AP1: Primaries = Primaries {
    r: (0.7130, 0.2930),
    g: (0.1650, 0.8300),
    b: (0.1280, 0.0440),
    w: (0.32168, 0.33767),
};

/// Derives the RGB-to-XYZ matrix for a set of primaries.
///
/// Columns are the primaries' XYZ, scaled so that RGB (1,1,1) lands on
/// the white point.
pub fn rgb_to_xyz_matrix(p: &Primaries) -> Mat3 {
    let r = xy_to_xyz(p.r.0, p.r.1);
    let g = xy_to_xyz(p.g.0, p.g.1);
    let b = xy_to_xyz(p.b.0, p.b.1);
    let w = xy_to_xyz(p.w.0, p.w.1);

    let m = Mat3::from_cols([r, g, b]);
    let s = m.inverse_or_identity().transform(w);

    Mat3::from_cols([
        [r[0] * s[0], r[1] * s[0], r[2] * s[0]],
        [g[0] * s[1], g[1] * s[1], g[2] * s[1]],
        [b[0] * s[2], b[1] * s[2], b[2] * s[2]],
    ])
}

/// Derives the XYZ-to-RGB matrix for a set of primaries.
#[inline]
pub fn xyz_to_rgb_matrix(p: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(p).inverse_or_identity()
}

/// White point of a primaries set as XYZ.
#[inline]
fn white_xyz(p: &Primaries) -> [f32; 3] {
    xy_to_xyz(p.w.0, p.w.1)
}

// Shared pipeline: device color -> linear RGB in the target space.
fn linear_in_space(c: Color, p: &Primaries) -> [f32; 3] {
    let mut v = SRGB_TO_XYZ.transform(srgb::eotf_rgb(c.to_unit_rgb()));
    let w = white_xyz(p);
    if (w[0] - D65[0]).abs() > 1e-4 || (w[2] - D65[2]).abs() > 1e-4 {
        v = adapt_matrix(D65, w).transform(v);
    }
    xyz_to_rgb_matrix(p).transform(v)
}

// Shared pipeline: linear RGB in the source space -> device color.
fn color_from_linear(v: [f32; 3], p: &Primaries, alpha: u8) -> Color {
    let mut xyz = rgb_to_xyz_matrix(p).transform(v);
    let w = white_xyz(p);
    if (w[0] - D65[0]).abs() > 1e-4 || (w[2] - D65[2]).abs() > 1e-4 {
        xyz = adapt_matrix(w, D65).transform(xyz);
    }
    Color::from_unit_rgb(srgb::oetf_rgb(XYZ_TO_SRGB.transform(xyz)), alpha)
}

// ============================================================================
// Transfer curves
// ============================================================================

/// Adobe RGB gamma exponent, exactly 563/256.
pub const ADOBE_GAMMA: f32 = 563.0 / 256.0;

#[inline]
fn adobe_encode(v: f32) -> f32 {
    v.max(0.0).powf(1.0 / ADOBE_GAMMA)
}

#[inline]
fn adobe_decode(v: f32) -> f32 {
    v.max(0.0).powf(ADOBE_GAMMA)
}

// ROMM threshold E_t = 1/512.
const ROMM_ET: f32 = 1.0 / 512.0;

#[inline]
fn romm_encode(v: f32) -> f32 {
    let v = v.max(0.0);
    if v < ROMM_ET { 16.0 * v } else { v.powf(1.0 / 1.8) }
}

#[inline]
fn romm_decode(v: f32) -> f32 {
    let v = v.max(0.0);
    if v < 16.0 * ROMM_ET { v / 16.0 } else { v.powf(1.8) }
}

/// BT.2020 curve constant alpha.
pub const REC2020_ALPHA: f32 = 1.09929682680944;
/// BT.2020 curve constant beta.
pub const REC2020_BETA: f32 = 0.018053968510807;

#[inline]
pub(crate) fn rec2020_encode(v: f32) -> f32 {
    let v = v.max(0.0);
    if v < REC2020_BETA {
        4.5 * v
    } else {
        REC2020_ALPHA * v.powf(0.45) - (REC2020_ALPHA - 1.0)
    }
}

#[inline]
pub(crate) fn rec2020_decode(v: f32) -> f32 {
    let v = v.max(0.0);
    if v < 4.5 * REC2020_BETA {
        v / 4.5
    } else {
        ((v + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
    }
}

// ============================================================================
// Models
// ============================================================================

macro_rules! gamut_space {
    ($(#[$doc:meta])* $name:ident, $prims:expr, $encode:expr, $decode:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            /// Encoded red in [0, 1].
            pub r: f32,
            /// Encoded green in [0, 1].
            pub g: f32,
            /// Encoded blue in [0, 1].
            pub b: f32,
        }

        impl $name {
            /// Converts a device color into this space.
            pub fn from_color(c: Color) -> Self {
                let lin = linear_in_space(c, &$prims);
                let enc: fn(f32) -> f32 = $encode;
                Self { r: enc(lin[0]), g: enc(lin[1]), b: enc(lin[2]) }
            }

            /// Converts back to a device color.
            pub fn to_color(self, alpha: u8) -> Color {
                let dec: fn(f32) -> f32 = $decode;
                color_from_linear([dec(self.r), dec(self.g), dec(self.b)], &$prims, alpha)
            }

            /// Components as an array.
            #[inline]
            pub fn to_array(self) -> [f32; 3] {
                [self.r, self.g, self.b]
            }
        }
    };
}

gamut_space!(
    /// Adobe RGB (1998): gamma 563/256, D65 white.
    AdobeRgb,
    ADOBE_RGB,
    adobe_encode,
    adobe_decode
);

gamut_space!(
    /// ProPhoto (ROMM) RGB: 1.8 piecewise curve, D50 white.
    ProPhotoRgb,
    PROPHOTO_RGB,
    romm_encode,
    romm_decode
);

gamut_space!(
    /// Display P3: DCI-P3 primaries with the sRGB curve, D65 white.
    DisplayP3,
    DISPLAY_P3,
    srgb::oetf,
    srgb::eotf
);

gamut_space!(
    /// ITU-R BT.2020 RGB with the BT.2020 curve, D65 white.
    Rec2020,
    REC2020,
    rec2020_encode,
    rec2020_decode
);

gamut_space!(
    /// ACEScg: linear AP1 primaries, D60 white.
    AcesCg,
    ACES_AP1,
    |v| v,
    |v| v
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roundtrip(c: Color) {
        macro_rules! check {
            ($space:ident) => {
                let back = $space::from_color(c).to_color(c.a);
                assert!(
                    (back.r as i32 - c.r as i32).abs() <= 1
                        && (back.g as i32 - c.g as i32).abs() <= 1
                        && (back.b as i32 - c.b as i32).abs() <= 1,
                    "{} roundtrip {:?} -> {:?}",
                    stringify!($space),
                    c,
                    back
                );
            };
        }
        check!(AdobeRgb);
        check!(ProPhotoRgb);
        check!(DisplayP3);
        check!(Rec2020);
        check!(AcesCg);
    }

    #[test]
    fn test_roundtrips() {
        for c in [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
            Color::rgb(18, 52, 86),
            Color::WHITE,
            Color::BLACK,
            Color::gray(128),
        ] {
            assert_roundtrip(c);
        }
    }

    #[test]
    fn test_white_is_ones_everywhere() {
        // Chromatic adaptation must carry D65 white onto each space's white.
        let w = AcesCg::from_color(Color::WHITE);
        assert!((w.r - 1.0).abs() < 0.02 && (w.g - 1.0).abs() < 0.02 && (w.b - 1.0).abs() < 0.02);
        let p = ProPhotoRgb::from_color(Color::WHITE);
        assert!((p.r - 1.0).abs() < 0.02 && (p.g - 1.0).abs() < 0.02 && (p.b - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_srgb_red_inside_wide_gamut() {
        // sRGB red is in-gamut for Rec.2020, so channels stay in [0, 1].
        let r = Rec2020::from_color(Color::rgb(255, 0, 0));
        assert!(r.r > 0.0 && r.r <= 1.0);
        assert!(r.g >= 0.0 && r.b >= 0.0);
    }

    #[test]
    fn test_derived_matrix_maps_white() {
        let m = rgb_to_xyz_matrix(&REC2020);
        let w = m.transform([1.0, 1.0, 1.0]);
        assert!((w[1] - 1.0).abs() < 1e-3);
    }
}
