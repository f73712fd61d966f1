//! # tint-spaces
//!
//! Colorimetric conversions and color-level operations for the tint
//! engine.
//!
//! Every supported model is a bidirectional pair: `X::from_color(Color)`
//! and `X::to_color(alpha)`. All routes share one set of reference
//! constants (the sRGB piecewise curve, the fixed sRGB/XYZ D65 matrices,
//! Bradford adaptation), so for in-gamut input `from -> to` reproduces the
//! original within one 8-bit step per channel.
//!
//! # Modules
//!
//! - [`srgb`], [`xyz`], [`gamut`] - transfer curves, XYZ, wide-gamut RGB
//! - [`hue`], [`cmyk`] - cylindrical and print-like device models
//! - [`lab`], [`oklab`], [`misc`] - perceptual and historical CIE spaces
//! - [`luma`] - broadcast luma/chroma families
//! - [`cct`] - correlated color temperature
//! - [`adjust`], [`scheme`], [`wcag`], [`preset`] - single-color operations
//! - [`fmt`] - template-based text rendering
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//! use tint_spaces::hue::Hsl;
//!
//! let hsl = Hsl::from_color(Color::rgb(255, 0, 0));
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod cct;
pub mod cmyk;
pub mod fmt;
pub mod gamut;
pub mod hue;
pub mod lab;
pub mod luma;
pub mod mat3;
pub mod misc;
pub mod oklab;
pub mod preset;
pub mod scheme;
pub mod srgb;
pub mod wcag;
pub mod xyz;

pub use adjust::{ShiftAxis, complement, shift, shift_hue};
pub use fmt::{render, render_default};
pub use mat3::Mat3;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adjust::{
        ShiftAxis, complement, shift, shift_black_level, shift_contrast, shift_hue,
        shift_intensity, shift_lightness, shift_saturation, shift_value, shift_white_level,
    };
    pub use crate::cct::Cct;
    pub use crate::cmyk::Cmyk;
    pub use crate::fmt::{render, render_default};
    pub use crate::gamut::{AcesCg, AdobeRgb, DisplayP3, ProPhotoRgb, Rec2020};
    pub use crate::hue::{Hsi, Hsl, Hsv, Hwb};
    pub use crate::lab::{Lab, Lch, Luv};
    pub use crate::luma::{YCbCr, YCbCrStandard, YCgCo, YDbDr, YPbPr, YcCbcCrc, Yes, Yiq, Yuv};
    pub use crate::misc::{Ncol, Ucs, Uvw};
    pub use crate::oklab::{Oklab, Oklch};
    pub use crate::srgb::LinearSrgb;
    pub use crate::wcag::{contrast_ratio, passes_aa, passes_aaa, relative_luminance};
    pub use crate::xyz::{Xyy, Xyz, XyzD50};
}
