//! The [`Color`] value type: a single 8-bit RGBA sample.
//!
//! # Packed Form
//!
//! A color packs losslessly into one `u32` with **alpha in the high byte**:
//!
//! ```text
//! 0xAARRGGBB
//!   ^^        alpha
//!     ^^      red
//!       ^^    green
//!         ^^  blue
//! ```
//!
//! The packed form is always computed on demand from the four channel
//! bytes, so the struct and the integer can never disagree (and no
//! endianness assumption leaks into the representation).
//!
//! # Arithmetic
//!
//! - `+` / `-` are channel-wise and saturate to [0, 255]
//! - `* f32` scales all channels, clamped
//! - `* Color` is the multiply blend: per-channel product / 255
//! - `* ColorMatrix` applies a 5x5 affine transform in normalized space
//! - `/` keeps a channel unchanged when the divisor channel is zero
//!
//! The 50/50 averaging blend is a named method ([`Color::mix`]), not an
//! operator.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//!
//! let c = Color::new(0x12, 0x34, 0x56, 0xFF);
//! assert_eq!(c.to_argb(), 0xFF123456);
//! assert_eq!(Color::from_argb(0xFF123456), c);
//! ```

use crate::matrix::ColorMatrix;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A single RGBA color sample with 8-bit channels.
///
/// Pure value type: every operation returns a new `Color`; nothing is
/// shared or mutated in place.
///
/// # Example
///
/// ```rust
/// use tint_core::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// let dim = red * 0.5;
/// assert_eq!(dim.r, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from four channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from three channel bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates an opaque gray with all RGB channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Unpacks a color from `0xAARRGGBB`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Color;
    ///
    /// let c = Color::from_argb(0x80FF0000);
    /// assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 128));
    /// ```
    #[inline]
    pub const fn from_argb(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Packs the color into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Returns a uniformly random color.
    ///
    /// `seed` pins the generator for deterministic output; `None` seeds
    /// from OS entropy. Alpha is always 255.
    pub fn random(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels normalized to [0, 1] as `[r, g, b, a]`.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Builds a color from normalized [0, 1] channels, clamping.
    #[inline]
    pub fn from_f32_array(v: [f32; 4]) -> Self {
        Self::new(
            unit_to_byte(v[0]),
            unit_to_byte(v[1]),
            unit_to_byte(v[2]),
            unit_to_byte(v[3]),
        )
    }

    /// RGB channels normalized to [0, 1].
    #[inline]
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Builds a color from normalized RGB plus an alpha byte, clamping.
    #[inline]
    pub fn from_unit_rgb(rgb: [f32; 3], a: u8) -> Self {
        Self::new(
            unit_to_byte(rgb[0]),
            unit_to_byte(rgb[1]),
            unit_to_byte(rgb[2]),
            a,
        )
    }

    /// Applies a function to the three color channels, keeping alpha.
    #[inline]
    pub fn map_rgb<F: Fn(u8) -> u8>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// True when the pixel is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Fixed 50/50 blend with another color, all four channels averaged.
    ///
    /// This is the engine's deliberate half-mix primitive (the historical
    /// surface exposed it through an operator; here it is named).
    #[inline]
    pub fn mix(self, other: Self) -> Self {
        Self::new(
            half_avg(self.r, other.r),
            half_avg(self.g, other.g),
            half_avg(self.b, other.b),
            half_avg(self.a, other.a),
        )
    }

    /// Fixed 50/50 blend toward a gray level, alpha preserved.
    #[inline]
    pub fn mix_level(self, level: u8) -> Self {
        Self::new(
            half_avg(self.r, level),
            half_avg(self.g, level),
            half_avg(self.b, level),
            self.a,
        )
    }

    /// Per-channel inversion of the RGB channels.
    #[inline]
    pub fn invert(self) -> Self {
        self.map_rgb(|c| 255 - c)
    }

    /// Alpha-composites `self` over `under` with an extra opacity factor.
    ///
    /// Straight (non-premultiplied) alpha. `opacity` in [0, 1] scales the
    /// source alpha before blending.
    pub fn over(self, under: Self, opacity: f32) -> Self {
        let sa = self.a as f32 / 255.0 * opacity.clamp(0.0, 1.0);
        let da = under.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= f32::EPSILON {
            return Self::TRANSPARENT;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            blend(self.r, under.r),
            blend(self.g, under.g),
            blend(self.b, under.b),
            (out_a * 255.0).round() as u8,
        )
    }
}

#[inline]
fn half_avg(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

#[inline]
fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(packed: u32) -> Self {
        Self::from_argb(packed)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_argb()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
            self.a.saturating_add(rhs.a),
        )
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
            self.a.saturating_sub(rhs.a),
        )
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let scale = |c: u8| (c as f32 * rhs).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), scale(self.a))
    }
}

/// Multiply blend: per-channel product normalized by 255.
impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mul = |a: u8, b: u8| ((a as u32 * b as u32) / 255) as u8;
        Self::new(
            mul(self.r, rhs.r),
            mul(self.g, rhs.g),
            mul(self.b, rhs.b),
            mul(self.a, rhs.a),
        )
    }
}

/// Inverse of the multiply blend. A zero divisor channel leaves the
/// corresponding channel unchanged.
impl Div for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let div = |a: u8, b: u8| {
            if b == 0 {
                a
            } else {
                ((a as u32 * 255) / b as u32).min(255) as u8
            }
        };
        Self::new(
            div(self.r, rhs.r),
            div(self.g, rhs.g),
            div(self.b, rhs.b),
            div(self.a, rhs.a),
        )
    }
}

/// Scalar division. Division by zero leaves the color unchanged.
impl Div<f32> for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        if rhs == 0.0 { self } else { self * (1.0 / rhs) }
    }
}

/// Applies a 5x5 affine transform in normalized [0, 1] channel space.
///
/// Channels are ordered R, G, B, A with row/column 4 holding the
/// homogeneous constant: `out[o] = sum_k M[o][k] * in[k] + M[o][4]`.
impl Mul<ColorMatrix> for Color {
    type Output = Self;

    fn mul(self, m: ColorMatrix) -> Self {
        let input = self.to_f32_array();
        let mut out = [0.0f32; 4];
        for (o, slot) in out.iter_mut().enumerate() {
            let row = m.row(o);
            *slot = row[0] * input[0] + row[1] * input[1] + row[2] * input[2] + row[3] * input[3]
                + row[4];
        }
        Self::from_f32_array(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let c = Color::new(0x12, 0x34, 0x56, 0xFF);
        assert_eq!(c.to_argb(), 0xFF123456);
        assert_eq!(Color::from_argb(c.to_argb()), c);
    }

    #[test]
    fn test_add_saturates() {
        let c = Color::rgb(200, 200, 200) + Color::rgb(100, 10, 0);
        assert_eq!((c.r, c.g, c.b), (255, 210, 200));
    }

    #[test]
    fn test_sub_saturates() {
        let c = Color::rgb(10, 100, 0) - Color::rgb(20, 50, 5);
        assert_eq!((c.r, c.g, c.b), (0, 50, 0));
    }

    #[test]
    fn test_scalar_mul_clamps() {
        let c = Color::rgb(200, 100, 0) * 2.0;
        assert_eq!((c.r, c.g, c.b), (255, 200, 0));
    }

    #[test]
    fn test_multiply_blend() {
        let c = Color::rgb(255, 128, 0) * Color::rgb(255, 255, 128);
        assert_eq!((c.r, c.g, c.b), (255, 128, 0));
        let half = Color::gray(128) * Color::gray(128);
        assert_eq!(half.r, 64);
    }

    #[test]
    fn test_divide_by_zero_keeps_channel() {
        let c = Color::rgb(100, 100, 100) / Color::rgb(0, 200, 50);
        assert_eq!(c.r, 100);
        assert_eq!(c.g, 127);
        assert_eq!(c.b, 255);
    }

    #[test]
    fn test_mix_is_average() {
        let c = Color::rgb(0, 100, 255).mix(Color::rgb(255, 100, 0));
        assert_eq!((c.r, c.g, c.b), (127, 100, 127));
        // Commutative up to the shared floor.
        let d = Color::rgb(255, 100, 0).mix(Color::rgb(0, 100, 255));
        assert_eq!(c, d);
    }

    #[test]
    fn test_mix_level_keeps_alpha() {
        let c = Color::new(0, 0, 0, 42).mix_level(200);
        assert_eq!((c.r, c.g, c.b, c.a), (100, 100, 100, 42));
    }

    #[test]
    fn test_matrix_identity() {
        let c = Color::new(12, 200, 56, 250);
        assert_eq!(c * ColorMatrix::IDENTITY, c);
    }

    #[test]
    fn test_matrix_offset_row() {
        // +0.5 on red through the homogeneous column.
        let mut m = ColorMatrix::IDENTITY;
        m.set(0, 4, 0.5);
        let c = Color::rgb(0, 0, 0) * m;
        assert_eq!(c.r, 128);
    }

    #[test]
    fn test_over_opaque() {
        let c = Color::rgb(255, 0, 0).over(Color::rgb(0, 0, 255), 1.0);
        assert_eq!(c, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_over_half() {
        let c = Color::rgb(255, 0, 0).over(Color::rgb(0, 0, 255), 0.5);
        assert_eq!(c.a, 255);
        assert!(c.r > 100 && c.b > 100);
    }

    #[test]
    fn test_random_seeded_deterministic() {
        assert_eq!(Color::random(Some(7)), Color::random(Some(7)));
    }
}
