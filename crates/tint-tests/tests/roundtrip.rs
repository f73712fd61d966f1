//! Full round-trip sweep: every color model must reproduce an 8x8x8 RGB
//! cube within one 8-bit step per channel.
//!
//! Correlated color temperature is excluded: it projects onto the
//! Planckian locus chromaticity and discards luminance, so it is not a
//! bijective model.

use tint_core::Color;
use tint_spaces::prelude::*;
use tint_tests::{assert_close, rgb_cube};

macro_rules! sweep {
    ($name:ident, $space:ident) => {
        #[test]
        fn $name() {
            for c in rgb_cube(8) {
                let back = $space::from_color(c).to_color(c.a);
                assert_close(c, back, 1, stringify!($space));
            }
        }
    };
}

sweep!(roundtrip_hsl, Hsl);
sweep!(roundtrip_hsv, Hsv);
sweep!(roundtrip_hsi, Hsi);
sweep!(roundtrip_hwb, Hwb);
sweep!(roundtrip_cmyk, Cmyk);
sweep!(roundtrip_linear_srgb, LinearSrgb);
sweep!(roundtrip_adobe_rgb, AdobeRgb);
sweep!(roundtrip_prophoto, ProPhotoRgb);
sweep!(roundtrip_display_p3, DisplayP3);
sweep!(roundtrip_rec2020, Rec2020);
sweep!(roundtrip_acescg, AcesCg);
sweep!(roundtrip_xyz, Xyz);
sweep!(roundtrip_xyz_d50, XyzD50);
sweep!(roundtrip_xyy, Xyy);
sweep!(roundtrip_lab, Lab);
sweep!(roundtrip_luv, Luv);
sweep!(roundtrip_oklab, Oklab);
sweep!(roundtrip_oklch, Oklch);
sweep!(roundtrip_yiq, Yiq);
sweep!(roundtrip_yuv, Yuv);
sweep!(roundtrip_ypbpr, YPbPr);
sweep!(roundtrip_ycgco, YCgCo);
sweep!(roundtrip_ydbdr, YDbDr);
sweep!(roundtrip_yes, Yes);
sweep!(roundtrip_yccbccrc, YcCbcCrc);
sweep!(roundtrip_ncol, Ncol);
sweep!(roundtrip_ucs, Ucs);
sweep!(roundtrip_uvw, Uvw);

#[test]
fn roundtrip_lch_both_axes() {
    for c in rgb_cube(8) {
        assert_close(c, Lch::ab_from_color(c).ab_to_color(c.a), 1, "LchAb");
        assert_close(c, Lch::uv_from_color(c).uv_to_color(c.a), 1, "LchUv");
    }
}

#[test]
fn roundtrip_ycbcr_all_standards() {
    for std in [
        YCbCrStandard::Bt601,
        YCbCrStandard::Bt709,
        YCbCrStandard::Bt2020,
        YCbCrStandard::Jpeg,
    ] {
        for c in rgb_cube(8) {
            let back = YCbCr::from_color(c, std).to_color(std, c.a);
            assert_close(c, back, 1, "YCbCr");
        }
    }
}

#[test]
fn alpha_passes_through_untouched() {
    let c = Color::new(120, 40, 220, 77);
    assert_eq!(Hsl::from_color(c).to_color(c.a).a, 77);
    assert_eq!(Lab::from_color(c).to_color(c.a).a, 77);
    assert_eq!(YCbCr::from_color(c, YCbCrStandard::Bt709).to_color(YCbCrStandard::Bt709, c.a).a, 77);
}

#[test]
fn known_values_hsl() {
    let red = Hsl::from_color(Color::rgb(255, 0, 0));
    assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));
    assert_eq!(
        Hsl { h: 120.0, s: 100.0, l: 50.0 }.to_color(255),
        Color::rgb(0, 255, 0)
    );
}

#[test]
fn packed_form_matches_channels() {
    assert_eq!(Color::new(0x12, 0x34, 0x56, 0xFF).to_argb(), 0xFF123456);
}
