//! Single-component color adjustments.
//!
//! Every shift follows the same shape: decompose into a cylindrical or
//! percentage model, move exactly one component, recompose. The axis
//! table below bundles the decompose/recompose pair with the component
//! index and its wrap-vs-clamp behavior, so adding an axis is one row.
//!
//! Angular components wrap mod 360; percentage components clamp to
//! [0, 100]. Alpha always passes through untouched.

use crate::hue::{Hsi, Hsl, Hsv, Hwb};
use tint_core::Color;

/// The component a shift operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftAxis {
    /// HSL hue, degrees, wraps.
    Hue,
    /// HSL saturation percent.
    Saturation,
    /// HSL lightness percent.
    Lightness,
    /// HSV value percent.
    Value,
    /// HSI intensity percent.
    Intensity,
    /// HWB whiteness percent.
    Whiteness,
    /// HWB blackness percent.
    Blackness,
    /// Lightness spread about mid-gray (see [`shift_contrast`]).
    Contrast,
}

/// Wrap-vs-clamp behavior for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisKind {
    /// Degrees, wrapped mod 360.
    Angular,
    /// Percent, clamped to [0, 100].
    Percent,
}

/// Strategy value: how to take a color apart and put it back together
/// around one mutable component.
struct AxisSpec {
    decompose: fn(Color) -> [f32; 3],
    recompose: fn([f32; 3], u8) -> Color,
    component: usize,
    kind: AxisKind,
}

fn axis_spec(axis: ShiftAxis) -> AxisSpec {
    use AxisKind::*;
    match axis {
        ShiftAxis::Hue => AxisSpec {
            decompose: |c| {
                let v = Hsl::from_color(c);
                [v.h, v.s, v.l]
            },
            recompose: |[h, s, l], a| Hsl { h, s, l }.to_color(a),
            component: 0,
            kind: Angular,
        },
        ShiftAxis::Saturation | ShiftAxis::Lightness | ShiftAxis::Contrast => AxisSpec {
            decompose: |c| {
                let v = Hsl::from_color(c);
                [v.h, v.s, v.l]
            },
            recompose: |[h, s, l], a| Hsl { h, s, l }.to_color(a),
            component: if matches!(axis, ShiftAxis::Saturation) { 1 } else { 2 },
            kind: Percent,
        },
        ShiftAxis::Value => AxisSpec {
            decompose: |c| {
                let v = Hsv::from_color(c);
                [v.h, v.s, v.v]
            },
            recompose: |[h, s, v], a| Hsv { h, s, v }.to_color(a),
            component: 2,
            kind: Percent,
        },
        ShiftAxis::Intensity => AxisSpec {
            decompose: |c| {
                let v = Hsi::from_color(c);
                [v.h, v.s, v.i]
            },
            recompose: |[h, s, i], a| Hsi { h, s, i }.to_color(a),
            component: 2,
            kind: Percent,
        },
        ShiftAxis::Whiteness | ShiftAxis::Blackness => AxisSpec {
            decompose: |c| {
                let v = Hwb::from_color(c);
                [v.h, v.w, v.b]
            },
            recompose: |[h, w, b], a| Hwb { h, w, b }.to_color(a),
            component: if matches!(axis, ShiftAxis::Whiteness) { 1 } else { 2 },
            kind: Percent,
        },
    }
}

/// Shifts one component of a color by `delta`.
///
/// # Example
///
/// ```rust
/// use tint_core::Color;
/// use tint_spaces::adjust::{shift, ShiftAxis};
///
/// let green = shift(Color::rgb(255, 0, 0), ShiftAxis::Hue, 120.0);
/// assert_eq!(green, Color::rgb(0, 255, 0));
/// ```
pub fn shift(c: Color, axis: ShiftAxis, delta: f32) -> Color {
    if axis == ShiftAxis::Contrast {
        return shift_contrast(c, delta);
    }
    let spec = axis_spec(axis);
    let mut comps = (spec.decompose)(c);
    let v = &mut comps[spec.component];
    *v = match spec.kind {
        AxisKind::Angular => (*v + delta).rem_euclid(360.0),
        AxisKind::Percent => (*v + delta).clamp(0.0, 100.0),
    };
    (spec.recompose)(comps, c.a)
}

/// Rotates the hue by `degrees` (wraps).
#[inline]
pub fn shift_hue(c: Color, degrees: f32) -> Color {
    shift(c, ShiftAxis::Hue, degrees)
}

/// Shifts HSL saturation by a percentage delta.
#[inline]
pub fn shift_saturation(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Saturation, delta)
}

/// Shifts HSL lightness by a percentage delta.
#[inline]
pub fn shift_lightness(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Lightness, delta)
}

/// Shifts HSV value by a percentage delta.
#[inline]
pub fn shift_value(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Value, delta)
}

/// Shifts HSI intensity by a percentage delta.
#[inline]
pub fn shift_intensity(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Intensity, delta)
}

/// Shifts the HWB white level by a percentage delta.
#[inline]
pub fn shift_white_level(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Whiteness, delta)
}

/// Shifts the HWB black level by a percentage delta.
#[inline]
pub fn shift_black_level(c: Color, delta: f32) -> Color {
    shift(c, ShiftAxis::Blackness, delta)
}

/// Spreads HSL lightness away from (or toward) 50%.
///
/// `delta` is a percentage: +100 doubles the distance from mid, -100
/// collapses the color to mid lightness. The result clamps to [0, 100].
pub fn shift_contrast(c: Color, delta: f32) -> Color {
    let hsl = Hsl::from_color(c);
    let l = (50.0 + (hsl.l - 50.0) * (1.0 + delta / 100.0)).clamp(0.0, 100.0);
    Hsl { l, ..hsl }.to_color(c.a)
}

/// Adds a signed amount to the red channel, saturating.
#[inline]
pub fn shift_red(c: Color, delta: i16) -> Color {
    Color::new(byte_shift(c.r, delta), c.g, c.b, c.a)
}

/// Adds a signed amount to the green channel, saturating.
#[inline]
pub fn shift_green(c: Color, delta: i16) -> Color {
    Color::new(c.r, byte_shift(c.g, delta), c.b, c.a)
}

/// Adds a signed amount to the blue channel, saturating.
#[inline]
pub fn shift_blue(c: Color, delta: i16) -> Color {
    Color::new(c.r, c.g, byte_shift(c.b, delta), c.a)
}

/// Adds a signed amount to the alpha channel, saturating.
#[inline]
pub fn shift_alpha(c: Color, delta: i16) -> Color {
    Color::new(c.r, c.g, c.b, byte_shift(c.a, delta))
}

/// The hue complement (180 degrees away).
#[inline]
pub fn complement(c: Color) -> Color {
    shift_hue(c, 180.0)
}

#[inline]
fn byte_shift(v: u8, delta: i16) -> u8 {
    (v as i16 + delta).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_wraps() {
        let c = Color::rgb(255, 0, 0);
        assert_eq!(shift_hue(c, 360.0), c);
        assert_eq!(shift_hue(c, 480.0), shift_hue(c, 120.0));
        assert_eq!(shift_hue(c, -240.0), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_percent_clamps() {
        let c = Color::rgb(200, 100, 100);
        let lifted = shift_lightness(c, 500.0);
        assert_eq!(lifted, Color::WHITE);
        let dropped = shift_lightness(c, -500.0);
        assert_eq!(dropped, Color::BLACK);
    }

    #[test]
    fn test_white_survives_hue_shift() {
        // Hue is undefined at zero saturation; shifting must not error or
        // change the color.
        let w = Color::WHITE;
        assert_eq!(shift_hue(w, 90.0), w);
    }

    #[test]
    fn test_value_shift_darkens() {
        let c = Color::rgb(200, 100, 50);
        let darker = shift_value(c, -20.0);
        assert!(darker.r < c.r);
    }

    #[test]
    fn test_saturation_shift_to_gray() {
        let c = shift_saturation(Color::rgb(200, 100, 100), -100.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_contrast_collapse() {
        let c = shift_contrast(Color::rgb(220, 220, 220), -100.0);
        let hsl = Hsl::from_color(c);
        assert!((hsl.l - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_contrast_spread() {
        let bright = shift_contrast(Color::gray(180), 50.0);
        assert!(bright.r > 180);
        let dark = shift_contrast(Color::gray(80), 50.0);
        assert!(dark.r < 80);
    }

    #[test]
    fn test_channel_shifts_saturate() {
        assert_eq!(shift_blue(Color::rgb(0, 0, 250), 20).b, 255);
        assert_eq!(shift_red(Color::rgb(5, 0, 0), -20).r, 0);
        assert_eq!(shift_alpha(Color::new(0, 0, 0, 250), 20).a, 255);
    }

    #[test]
    fn test_complement_is_involution() {
        let c = Color::rgb(10, 200, 150);
        let back = complement(complement(c));
        assert!((back.r as i32 - c.r as i32).abs() <= 2);
        assert!((back.g as i32 - c.g as i32).abs() <= 2);
        assert!((back.b as i32 - c.b as i32).abs() <= 2);
    }
}
