//! Oklab and Oklch perceptual spaces.
//!
//! Uses the published LMS matrices from Ottosson's reference
//! implementation; input is linearized sRGB.
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing" (2020).

use crate::srgb;
use tint_core::Color;

/// Oklab rectangular components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness [0, 1].
    pub l: f32,
    /// Green-red axis.
    pub a: f32,
    /// Blue-yellow axis.
    pub b: f32,
}

impl Oklab {
    /// Converts a device color to Oklab.
    pub fn from_color(c: Color) -> Self {
        let [r, g, b] = srgb::eotf_rgb(c.to_unit_rgb());

        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let l_ = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m_ = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s_ = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let rgb = [
            4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        ];
        Color::from_unit_rgb(srgb::oetf_rgb(rgb), alpha)
    }
}

/// Oklch cylindrical components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Perceptual lightness [0, 1].
    pub l: f32,
    /// Chroma.
    pub c: f32,
    /// Hue angle in degrees [0, 360).
    pub h: f32,
}

impl Oklch {
    /// Converts a device color to Oklch.
    pub fn from_color(color: Color) -> Self {
        let lab = Oklab::from_color(color);
        Self {
            l: lab.l,
            c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
            h: lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0),
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let hr = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * hr.cos(),
            b: self.c * hr.sin(),
        }
        .to_color(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white() {
        let w = Oklab::from_color(Color::WHITE);
        assert!((w.l - 1.0).abs() < 1e-3);
        assert!(w.a.abs() < 1e-3 && w.b.abs() < 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        for c in [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(31, 64, 200),
            Color::gray(100),
        ] {
            let back = Oklab::from_color(c).to_color(255);
            assert!((back.r as i32 - c.r as i32).abs() <= 1, "{c:?} -> {back:?}");
            assert!((back.g as i32 - c.g as i32).abs() <= 1);
            assert!((back.b as i32 - c.b as i32).abs() <= 1);

            let back = Oklch::from_color(c).to_color(255);
            assert!((back.r as i32 - c.r as i32).abs() <= 1);
        }
    }
}
