//! WCAG relative luminance and contrast checks.
//!
//! # Reference
//!
//! WCAG 2.1, section 1.4.3 (contrast minimum) and the relative luminance
//! definition.

use crate::srgb;
use tint_core::Color;

/// Minimum contrast ratio for WCAG AA normal text.
pub const AA_MIN_CONTRAST: f32 = 4.5;

/// Minimum contrast ratio for WCAG AAA normal text.
pub const AAA_MIN_CONTRAST: f32 = 7.0;

/// Relative luminance of a color, [0, 1].
///
/// Channels are linearized with the sRGB curve and weighted
/// 0.2126 / 0.7152 / 0.0722.
///
/// # Example
///
/// ```rust
/// use tint_core::Color;
/// use tint_spaces::wcag::relative_luminance;
///
/// assert!(relative_luminance(Color::WHITE) > 0.99);
/// assert!(relative_luminance(Color::BLACK) < 0.01);
/// ```
pub fn relative_luminance(c: Color) -> f32 {
    let [r, g, b] = srgb::eotf_rgb(c.to_unit_rgb());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, from 1 (equal) to 21 (black/white).
///
/// `(L_max + 0.05) / (L_min + 0.05)`
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Whether the pair passes WCAG AA for normal text (ratio >= 4.5).
#[inline]
pub fn passes_aa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= AA_MIN_CONTRAST
}

/// Whether the pair passes WCAG AAA for normal text (ratio >= 7.0).
#[inline]
pub fn passes_aaa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= AAA_MIN_CONTRAST
}
