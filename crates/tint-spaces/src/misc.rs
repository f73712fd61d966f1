//! Natural color (NCol) and the CIE 1960/1964 uniform spaces.

use crate::hue::Hwb;
use crate::xyz::{D65, Xyz};
use std::fmt;
use tint_core::Color;

/// NCol hue families, 60 degrees of hexcone hue each.
const NCOL_FAMILIES: [char; 6] = ['R', 'Y', 'G', 'C', 'B', 'M'];

/// Natural color: a hue word plus whiteness and blackness percentages.
///
/// The hue word is a family letter and a 0-100 distance toward the next
/// family, e.g. `Y30` is 30% of the way from yellow to green.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ncol {
    /// Hue family letter (R, Y, G, C, B or M).
    pub letter: char,
    /// Distance into the family, [0, 100).
    pub number: f32,
    /// Whiteness percent.
    pub w: f32,
    /// Blackness percent.
    pub b: f32,
}

impl Ncol {
    /// Converts a device color to natural color notation.
    pub fn from_color(c: Color) -> Self {
        let hwb = Hwb::from_color(c);
        let h = hwb.h.rem_euclid(360.0);
        let family = (h / 60.0) as usize % 6;
        Self {
            letter: NCOL_FAMILIES[family],
            number: (h % 60.0) / 60.0 * 100.0,
            w: hwb.w,
            b: hwb.b,
        }
    }

    /// Converts back to a device color.
    ///
    /// An unknown family letter falls back to red.
    pub fn to_color(self, alpha: u8) -> Color {
        let family = NCOL_FAMILIES
            .iter()
            .position(|&f| f == self.letter.to_ascii_uppercase())
            .unwrap_or(0);
        let h = family as f32 * 60.0 + self.number.clamp(0.0, 100.0) * 0.6;
        Hwb { h, w: self.w, b: self.b }.to_color(alpha)
    }

    /// The hue word alone, e.g. `"Y30"`.
    pub fn hue_word(&self) -> String {
        format!("{}{}", self.letter, self.number.round() as i32)
    }
}

impl fmt::Display for Ncol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}%, {}%",
            self.hue_word(),
            self.w.round() as i32,
            self.b.round() as i32
        )
    }
}

/// CIE 1960 UCS tristimulus (U, V, W).
///
/// `U = 2X/3`, `V = Y`, `W = (-X + 3Y + Z)/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ucs {
    /// U component.
    pub u: f32,
    /// V component (luminance).
    pub v: f32,
    /// W component.
    pub w: f32,
}

impl Ucs {
    /// Converts a device color to UCS.
    pub fn from_color(c: Color) -> Self {
        let xyz = Xyz::from_color(c);
        Self {
            u: 2.0 * xyz.x / 3.0,
            v: xyz.y,
            w: 0.5 * (-xyz.x + 3.0 * xyz.y + xyz.z),
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let x = 1.5 * self.u;
        let y = self.v;
        let z = 2.0 * self.w + x - 3.0 * y;
        Xyz { x, y, z }.to_color(alpha)
    }
}

/// CIE 1960 u, v chromaticity of an XYZ triple.
#[inline]
pub fn uv60(xyz: [f32; 3]) -> (f32, f32) {
    let d = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if d.abs() < 1e-9 {
        return uv60(D65);
    }
    (4.0 * xyz[0] / d, 6.0 * xyz[1] / d)
}

/// CIE 1964 U\*V\*W\* against the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uvw {
    /// U* component.
    pub u: f32,
    /// V* component.
    pub v: f32,
    /// W* lightness index.
    pub w: f32,
}

impl Uvw {
    /// Converts a device color to U\*V\*W\*.
    pub fn from_color(c: Color) -> Self {
        let xyz = Xyz::from_color(c);
        let w = 25.0 * (xyz.y * 100.0).powf(1.0 / 3.0) - 17.0;
        let (u, v) = uv60(xyz.to_array());
        let (u0, v0) = uv60(D65);
        Self {
            u: 13.0 * w * (u - u0),
            v: 13.0 * w * (v - v0),
            w,
        }
    }

    /// Converts back to a device color.
    ///
    /// When W* is zero the chroma terms carry no information and the
    /// white-point chromaticity is used.
    pub fn to_color(self, alpha: u8) -> Color {
        let y = ((self.w + 17.0) / 25.0).powi(3) / 100.0;
        let (u0, v0) = uv60(D65);
        let (u, v) = if self.w.abs() < 1e-6 {
            (u0, v0)
        } else {
            (
                self.u / (13.0 * self.w) + u0,
                self.v / (13.0 * self.w) + v0,
            )
        };
        if v.abs() < 1e-9 {
            return Color::new(0, 0, 0, alpha);
        }
        let x = 1.5 * u * y / v;
        let d = 6.0 * y / v;
        let z = (d - x - 15.0 * y) / 3.0;
        Xyz { x, y, z }.to_color(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(c: Color, d: Color) -> bool {
        (c.r as i32 - d.r as i32).abs() <= 1
            && (c.g as i32 - d.g as i32).abs() <= 1
            && (c.b as i32 - d.b as i32).abs() <= 1
    }

    #[test]
    fn test_ncol_red() {
        let n = Ncol::from_color(Color::rgb(255, 0, 0));
        assert_eq!(n.letter, 'R');
        assert!(n.number < 0.5);
        assert_eq!(n.hue_word(), "R0");
    }

    #[test]
    fn test_ncol_roundtrip() {
        for c in [
            Color::rgb(255, 128, 0),
            Color::rgb(30, 70, 200),
            Color::rgb(200, 200, 100),
        ] {
            assert!(close(c, Ncol::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_ucs_roundtrip() {
        for c in [Color::rgb(255, 0, 0), Color::rgb(40, 99, 180), Color::WHITE] {
            assert!(close(c, Ucs::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_uvw_roundtrip() {
        for c in [Color::rgb(255, 0, 0), Color::rgb(40, 99, 180), Color::gray(120)] {
            assert!(close(c, Uvw::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_uvw_black_is_stable() {
        let b = Uvw::from_color(Color::BLACK);
        assert_eq!(b.to_color(255), Color::BLACK);
    }

    #[test]
    fn test_uvw_white_has_zero_chroma() {
        let w = Uvw::from_color(Color::WHITE);
        assert!(w.u.abs() < 0.5 && w.v.abs() < 0.5);
    }
}
