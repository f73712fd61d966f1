//! CIE L\*a\*b\*, L\*u\*v\*, and their cylindrical LCh forms.
//!
//! Reference white is D65 throughout, matching the XYZ route; the CIE
//! constants are the exact rationals eps = 216/24389 and kappa = 24389/27.

use crate::xyz::{D65, Xyz};
use tint_core::Color;

const EPS: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPS { t.cbrt() } else { (KAPPA * t + 16.0) / 116.0 }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > EPS { t3 } else { (116.0 * t - 16.0) / KAPPA }
}

/// CIE L\*a\*b\* (D65).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness [0, 100].
    pub l: f32,
    /// Green-red opponent axis.
    pub a: f32,
    /// Blue-yellow opponent axis.
    pub b: f32,
}

impl Lab {
    /// Converts a device color to Lab.
    pub fn from_color(c: Color) -> Self {
        let xyz = Xyz::from_color(c);
        let fx = lab_f(xyz.x / D65[0]);
        let fy = lab_f(xyz.y / D65[1]);
        let fz = lab_f(xyz.z / D65[2]);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        Xyz {
            x: lab_f_inv(fx) * D65[0],
            y: lab_f_inv(fy) * D65[1],
            z: lab_f_inv(fz) * D65[2],
        }
        .to_color(alpha)
    }
}

/// CIE L\*u\*v\* (D65).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    /// Lightness [0, 100].
    pub l: f32,
    /// u* axis.
    pub u: f32,
    /// v* axis.
    pub v: f32,
}

#[inline]
fn uv_prime(xyz: [f32; 3]) -> (f32, f32) {
    let denom = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if denom.abs() < 1e-9 {
        // Achromatic zero: report the white point's u'v'.
        return uv_prime(D65);
    }
    (4.0 * xyz[0] / denom, 9.0 * xyz[1] / denom)
}

impl Luv {
    /// Converts a device color to Luv.
    pub fn from_color(c: Color) -> Self {
        let xyz = Xyz::from_color(c);
        let y_rel = xyz.y / D65[1];
        let l = if y_rel > EPS {
            116.0 * y_rel.cbrt() - 16.0
        } else {
            KAPPA * y_rel
        };
        let (up, vp) = uv_prime(xyz.to_array());
        let (un, vn) = uv_prime(D65);
        Self {
            l,
            u: 13.0 * l * (up - un),
            v: 13.0 * l * (vp - vn),
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        if self.l < 1e-6 {
            return Color::new(0, 0, 0, alpha);
        }
        let (un, vn) = uv_prime(D65);
        let up = self.u / (13.0 * self.l) + un;
        let vp = self.v / (13.0 * self.l) + vn;

        let y = if self.l > KAPPA * EPS {
            let t = (self.l + 16.0) / 116.0;
            t * t * t
        } else {
            self.l / KAPPA
        } * D65[1];

        let x = y * 9.0 * up / (4.0 * vp);
        let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
        Xyz { x, y, z }.to_color(alpha)
    }
}

/// Cylindrical form of a lightness/opponent pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness [0, 100].
    pub l: f32,
    /// Chroma (radial distance).
    pub c: f32,
    /// Hue angle in degrees [0, 360).
    pub h: f32,
}

impl Lch {
    /// Wraps a rectangular (l, a, b)-style triple into cylindrical form.
    pub fn from_rect(l: f32, a: f32, b: f32) -> Self {
        Self {
            l,
            c: (a * a + b * b).sqrt(),
            h: b.atan2(a).to_degrees().rem_euclid(360.0),
        }
    }

    /// Unwraps back to the rectangular components.
    pub fn to_rect(self) -> (f32, f32, f32) {
        let hr = self.h.to_radians();
        (self.l, self.c * hr.cos(), self.c * hr.sin())
    }

    /// Cylindrical Lab from a device color.
    pub fn ab_from_color(c: Color) -> Self {
        let lab = Lab::from_color(c);
        Self::from_rect(lab.l, lab.a, lab.b)
    }

    /// Cylindrical Lab back to a device color.
    pub fn ab_to_color(self, alpha: u8) -> Color {
        let (l, a, b) = self.to_rect();
        Lab { l, a, b }.to_color(alpha)
    }

    /// Cylindrical Luv from a device color.
    pub fn uv_from_color(c: Color) -> Self {
        let luv = Luv::from_color(c);
        Self::from_rect(luv.l, luv.u, luv.v)
    }

    /// Cylindrical Luv back to a device color.
    pub fn uv_to_color(self, alpha: u8) -> Color {
        let (l, u, v) = self.to_rect();
        Luv { l, u, v }.to_color(alpha)
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
    fn test_white_lab() {
        let w = Lab::from_color(Color::WHITE);
        assert!((w.l - 100.0).abs() < 0.1);
        assert!(w.a.abs() < 0.2 && w.b.abs() < 0.2);
    }

    #[test]
    fn test_lab_roundtrip() {
        for c in [
            Color::rgb(255, 0, 0),
            Color::rgb(10, 128, 254),
            Color::gray(40),
            Color::BLACK,
        ] {
            assert!(close(c, Lab::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_luv_roundtrip() {
        for c in [
            Color::rgb(255, 0, 0),
            Color::rgb(10, 128, 254),
            Color::gray(40),
            Color::BLACK,
        ] {
            assert!(close(c, Luv::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_lch_roundtrip() {
        let c = Color::rgb(200, 60, 30);
        assert!(close(c, Lch::ab_from_color(c).ab_to_color(255)));
        assert!(close(c, Lch::uv_from_color(c).uv_to_color(255)));
    }

    #[test]
    fn test_lch_hue_of_red_is_positive() {
        let lch = Lch::ab_from_color(Color::rgb(255, 0, 0));
        assert!(lch.h > 0.0 && lch.h < 60.0);
        assert!(lch.c > 50.0);
    }
}
