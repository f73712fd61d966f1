//! HSL-based color scheme generation.
//!
//! All schemes hold saturation, lightness, and alpha fixed unless stated
//! otherwise and derive siblings purely from the input color.

use crate::hue::Hsl;
use tint_core::Color;

/// Lightness steps spanning +/-40 around the input, clamped to [0, 100].
///
/// # Example
///
/// ```rust
/// use tint_core::Color;
/// use tint_spaces::scheme::monochromatic;
///
/// let shades = monochromatic(Color::rgb(30, 90, 200), 5);
/// assert_eq!(shades.len(), 5);
/// ```
pub fn monochromatic(c: Color, count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    let base = Hsl::from_color(c);
    if count == 1 {
        return vec![c];
    }
    (0..count)
        .map(|i| {
            let l = (base.l - 40.0 + 80.0 * i as f32 / (count - 1) as f32).clamp(0.0, 100.0);
            Hsl { l, ..base }.to_color(c.a)
        })
        .collect()
}

/// Hues spread symmetrically about the input in `angle` increments.
///
/// With `count = 3, angle = 30` the hues are at -30, 0, +30 degrees.
pub fn analogous(c: Color, count: usize, angle: f32) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    let base = Hsl::from_color(c);
    let half = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let h = (base.h + (i as f32 - half) * angle).rem_euclid(360.0);
            Hsl { h, ..base }.to_color(c.a)
        })
        .collect()
}

/// The input plus hues at `angle` and `2*angle` (mod 360).
///
/// The classic triad uses `angle = 120`.
pub fn triadic(c: Color, angle: f32) -> [Color; 3] {
    let base = Hsl::from_color(c);
    let rotate = |k: f32| {
        Hsl {
            h: (base.h + k * angle).rem_euclid(360.0),
            ..base
        }
        .to_color(c.a)
    };
    [c, rotate(1.0), rotate(2.0)]
}

/// The input plus hues at `angle`, `2*angle`, and `3*angle` (mod 360).
///
/// The classic tetrad uses `angle = 90`.
pub fn tetradic(c: Color, angle: f32) -> [Color; 4] {
    let base = Hsl::from_color(c);
    let rotate = |k: f32| {
        Hsl {
            h: (base.h + k * angle).rem_euclid(360.0),
            ..base
        }
        .to_color(c.a)
    };
    [c, rotate(1.0), rotate(2.0), rotate(3.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochromatic_count_and_order() {
        let shades = monochromatic(Color::gray(128), 5);
        assert_eq!(shades.len(), 5);
        // Lightness is non-decreasing across the run.
        for pair in shades.windows(2) {
            assert!(Hsl::from_color(pair[0]).l <= Hsl::from_color(pair[1]).l + 0.5);
        }
    }

    #[test]
    fn test_monochromatic_clamps_at_extremes() {
        let shades = monochromatic(Color::rgb(250, 250, 250), 3);
        // Top of the span clamps to white rather than wrapping.
        assert_eq!(*shades.last().unwrap(), Color::WHITE);
    }

    #[test]
    fn test_analogous_symmetry() {
        let scheme = analogous(Color::rgb(255, 0, 0), 3, 30.0);
        assert_eq!(scheme.len(), 3);
        assert_eq!(scheme[1], Color::rgb(255, 0, 0));
        let left = Hsl::from_color(scheme[0]);
        let right = Hsl::from_color(scheme[2]);
        assert!((left.h - 330.0).abs() < 1.0);
        assert!((right.h - 30.0).abs() < 1.0);
    }

    #[test]
    fn test_triadic_primaries() {
        let [a, b, c] = triadic(Color::rgb(255, 0, 0), 120.0);
        assert_eq!(a, Color::rgb(255, 0, 0));
        assert_eq!(b, Color::rgb(0, 255, 0));
        assert_eq!(c, Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_tetradic_wraps() {
        let colors = tetradic(Color::rgb(255, 0, 0), 90.0);
        let hues: Vec<f32> = colors.iter().map(|&c| Hsl::from_color(c).h).collect();
        assert!((hues[3] - 270.0).abs() < 1.0);
    }

    #[test]
    fn test_empty_count() {
        assert!(monochromatic(Color::WHITE, 0).is_empty());
        assert!(analogous(Color::WHITE, 0, 30.0).is_empty());
    }
}
