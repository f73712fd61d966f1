//! Named photographic filters as fixed 5x5 matrices.
//!
//! Each filter is one baked [`ColorMatrix`] applied through the standard
//! matrix-multiply path; a few add a fixed post-adjustment. The constants
//! are the effect: change them and you change the look.

use crate::adjust::{shift_blue, shift_value};
use tint_core::{Color, ColorMatrix};

/// Luminance-weighted grayscale (NTSC weights on all three rows).
pub const GRAYSCALE: ColorMatrix = ColorMatrix::from_rows([
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Classic sepia tone.
pub const SEPIA: ColorMatrix = ColorMatrix::from_rows([
    [0.393, 0.769, 0.189, 0.0, 0.0],
    [0.349, 0.686, 0.168, 0.0, 0.0],
    [0.272, 0.534, 0.131, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Cross-processed film: green-shifted mids, lifted shadows, cyan blacks.
pub const CROSS_PROCESS: ColorMatrix = ColorMatrix::from_rows([
    [1.00, 0.15, -0.05, 0.0, 0.05],
    [-0.05, 1.10, 0.05, 0.0, 0.00],
    [0.05, -0.10, 0.80, 0.0, 0.05],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Cool desaturated night look; finished by a value drop and blue lift.
pub const MOONLIGHT: ColorMatrix = ColorMatrix::from_rows([
    [0.70, 0.10, 0.10, 0.0, 0.0],
    [0.10, 0.80, 0.10, 0.0, 0.0],
    [0.10, 0.10, 1.10, 0.0, 0.02],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Faded stock: compressed range, warm lift, muted blues.
pub const VINTAGE_FILM: ColorMatrix = ColorMatrix::from_rows([
    [0.90, 0.07, 0.03, 0.0, 0.04],
    [0.05, 0.85, 0.05, 0.0, 0.04],
    [0.05, 0.10, 0.75, 0.0, 0.02],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Two-strip Technicolor emulation: hard channel separation.
pub const TECHNICOLOR: ColorMatrix = ColorMatrix::from_rows([
    [1.60, -0.40, -0.20, 0.0, 0.0],
    [-0.20, 1.40, -0.20, 0.0, 0.0],
    [-0.20, -0.40, 1.60, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Polaroid instant-film response.
pub const POLAROID: ColorMatrix = ColorMatrix::from_rows([
    [1.438, -0.062, -0.062, 0.0, -0.03],
    [-0.122, 1.378, -0.122, 0.0, 0.05],
    [-0.016, -0.016, 1.483, 0.0, -0.02],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
]);

/// Applies the grayscale matrix.
#[inline]
pub fn grayscale(c: Color) -> Color {
    c * GRAYSCALE
}

/// Applies the sepia matrix.
#[inline]
pub fn sepia(c: Color) -> Color {
    c * SEPIA
}

/// Applies the cross-process matrix.
#[inline]
pub fn cross_process(c: Color) -> Color {
    c * CROSS_PROCESS
}

/// Applies the moonlight matrix, then drops value by 10 and lifts blue
/// by 20 (the post-steps are part of the look).
pub fn moonlight(c: Color) -> Color {
    shift_blue(shift_value(c * MOONLIGHT, -10.0), 20)
}

/// Applies the vintage-film matrix.
#[inline]
pub fn vintage_film(c: Color) -> Color {
    c * VINTAGE_FILM
}

/// Applies the Technicolor matrix.
#[inline]
pub fn technicolor(c: Color) -> Color {
    c * TECHNICOLOR
}

/// Applies the Polaroid matrix.
#[inline]
pub fn polaroid(c: Color) -> Color {
    c * POLAROID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_equalizes_channels() {
        let g = grayscale(Color::rgb(200, 30, 90));
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
        assert_eq!(g.a, 255);
    }

    #[test]
    fn test_grayscale_weights() {
        // Pure green carries the 0.587 weight.
        let g = grayscale(Color::rgb(0, 255, 0));
        assert_eq!(g.r, (0.587f32 * 255.0).round() as u8);
    }

    #[test]
    fn test_sepia_white() {
        // Sepia rows sum > 1, so white clips warm.
        let s = sepia(Color::WHITE);
        assert_eq!(s.r, 255);
        assert!(s.b < s.g && s.g <= s.r);
    }

    #[test]
    fn test_moonlight_cools() {
        let m = moonlight(Color::gray(128));
        assert!(m.b > m.r, "{m:?}");
    }

    #[test]
    fn test_technicolor_saturates() {
        let c = Color::rgb(180, 80, 80);
        let t = technicolor(c);
        assert!(t.r > c.r);
        assert!(t.g < c.g);
    }

    #[test]
    fn test_presets_preserve_alpha() {
        let c = Color::new(10, 20, 30, 99);
        for f in [grayscale, sepia, cross_process, vintage_film, technicolor, polaroid] {
            assert_eq!(f(c).a, 99);
        }
        assert_eq!(moonlight(c).a, 99);
    }
}
