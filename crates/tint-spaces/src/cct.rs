//! Correlated color temperature and Duv.
//!
//! Forward: McCamy's cubic approximation from xy chromaticity, with Duv
//! measured as the signed CIE 1960 uv distance to the Krystek Planckian
//! locus. Backward: re-project from the locus point along its normal.
//!
//! Valid for roughly 1000 K - 40000 K; inputs are clamped to that range.
//!
//! # Reference
//!
//! McCamy, C.S. (1992). Correlated color temperature as an explicit
//! function of chromaticity coordinates. Krystek, M. (1985). An algorithm
//! to calculate correlated colour temperature.

use crate::misc::uv60;
use crate::xyz::Xyz;
use tint_core::Color;

/// Lowest temperature the approximations are trusted for.
pub const MIN_KELVIN: f32 = 1000.0;
/// Highest temperature the approximations are trusted for.
pub const MAX_KELVIN: f32 = 40000.0;

/// A correlated color temperature with its distance from the locus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cct {
    /// Temperature in Kelvin.
    pub kelvin: f32,
    /// Signed uv distance from the Planckian locus (positive = above,
    /// toward green).
    pub duv: f32,
}

/// Planckian locus point in CIE 1960 uv for a temperature (Krystek 1985).
pub fn planckian_uv(kelvin: f32) -> (f32, f32) {
    let t = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
    let t2 = t * t;
    let u = (0.860117757 + 1.54118254e-4 * t + 1.28641212e-7 * t2)
        / (1.0 + 8.42420235e-4 * t + 7.08145163e-7 * t2);
    let v = (0.317398726 + 4.22806245e-5 * t + 4.20481691e-8 * t2)
        / (1.0 + 2.89741816e-5 * t + 1.61456053e-7 * t2);
    (u, v)
}

impl Cct {
    /// Estimates the CCT and Duv of a device color.
    pub fn from_color(c: Color) -> Self {
        let xyz = Xyz::from_color(c);
        let sum = xyz.x + xyz.y + xyz.z;
        let (x, y) = if sum.abs() < 1e-9 {
            (0.3127, 0.3290)
        } else {
            (xyz.x / sum, xyz.y / sum)
        };

        // McCamy's cubic.
        let n = (x - 0.3320) / (0.1858 - y);
        let kelvin = (449.0 * n * n * n + 3525.0 * n * n + 6823.3 * n + 5520.33)
            .clamp(MIN_KELVIN, MAX_KELVIN);

        let (u, v) = uv60(xyz.to_array());
        let (up, vp) = planckian_uv(kelvin);
        let dist = ((u - up) * (u - up) + (v - vp) * (v - vp)).sqrt();
        let duv = if v >= vp { dist } else { -dist };

        Self { kelvin, duv }
    }

    /// Reconstructs a color from a temperature and Duv offset.
    ///
    /// The result is the chromaticity at full luminance (Y = 1), encoded
    /// back to device sRGB and clamped to gamut.
    pub fn to_color(self, alpha: u8) -> Color {
        let kelvin = self.kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
        let (u0, v0) = planckian_uv(kelvin);

        // Normal to the locus from a small tangent step.
        let (u1, v1) = planckian_uv((kelvin + 10.0).min(MAX_KELVIN));
        let (u2, v2) = planckian_uv((kelvin - 10.0).max(MIN_KELVIN));
        let (du, dv) = (u1 - u2, v1 - v2);
        let len = (du * du + dv * dv).sqrt().max(1e-12);
        // (-dv, du)/len points toward increasing v: the +Duv side.
        let u = u0 + self.duv * (-dv / len);
        let v = v0 + self.duv * (du / len);

        // uv (1960) back to xy chromaticity.
        let denom = 2.0 * u - 8.0 * v + 4.0;
        let x = 3.0 * u / denom;
        let y = 2.0 * v / denom;

        let xyz = Xyz {
            x: x / y,
            y: 1.0,
            z: (1.0 - x - y) / y,
        };
        xyz.to_color(alpha)
    }
}
