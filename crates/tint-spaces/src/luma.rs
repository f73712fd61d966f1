//! Luma/chroma transmission models.
//!
//! Everything here operates on the gamma-encoded channel values the way
//! broadcast signals do, except the constant-luminance [`YcCbcCrc`] which
//! computes its luma from linear light per BT.2020.
//!
//! Plain matrix models (YIQ, YUV, YDbDr, YES, YCgCo, YPbPr) publish only a
//! forward matrix; the backward transform is the runtime inverse, so both
//! directions agree by construction.

use crate::gamut::{rec2020_decode, rec2020_encode};
use crate::mat3::Mat3;
use tint_core::Color;

// ============================================================================
// Forward matrices
// ============================================================================

/// NTSC YIQ (FCC).
pub const YIQ: Mat3 = Mat3::from_rows([
    [0.299, 0.587, 0.114],
    [0.595716, -0.274453, -0.321263],
    [0.211456, -0.522591, 0.311135],
]);

/// BT.470 YUV.
pub const YUV: Mat3 = Mat3::from_rows([
    [0.299, 0.587, 0.114],
    [-0.14713, -0.28886, 0.436],
    [0.615, -0.51499, -0.10001],
]);

/// SECAM YDbDr.
pub const YDBDR: Mat3 = Mat3::from_rows([
    [0.299, 0.587, 0.114],
    [-0.450, -0.883, 1.333],
    [-1.333, 1.116, 0.217],
]);

/// Xerox YES.
pub const YES: Mat3 = Mat3::from_rows([
    [0.253, 0.684, 0.063],
    [0.500, -0.500, 0.000],
    [0.250, 0.250, -0.500],
]);

/// YCgCo lifting transform (exactly invertible).
pub const YCGCO: Mat3 = Mat3::from_rows([
    [0.25, 0.50, 0.25],
    [-0.25, 0.50, -0.25],
    [0.50, 0.00, -0.50],
]);

macro_rules! matrix_model {
    ($(#[$doc:meta])* $name:ident, $matrix:expr, $c0:ident, $c1:ident, $c2:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            #[allow(missing_docs)]
            pub $c0: f32,
            #[allow(missing_docs)]
            pub $c1: f32,
            #[allow(missing_docs)]
            pub $c2: f32,
        }

        impl $name {
            /// Converts a device color into this model.
            pub fn from_color(c: Color) -> Self {
                let [$c0, $c1, $c2] = $matrix.transform(c.to_unit_rgb());
                Self { $c0, $c1, $c2 }
            }

            /// Converts back to a device color.
            pub fn to_color(self, alpha: u8) -> Color {
                let rgb = $matrix
                    .inverse_or_identity()
                    .transform([self.$c0, self.$c1, self.$c2]);
                Color::from_unit_rgb(rgb, alpha)
            }
        }
    };
}

matrix_model!(
    /// NTSC luma + in-phase/quadrature chroma.
    Yiq, YIQ, y, i, q
);
matrix_model!(
    /// BT.470 luma + U/V chroma.
    Yuv, YUV, y, u, v
);
matrix_model!(
    /// SECAM luma + Db/Dr chroma.
    YDbDr, YDBDR, y, db, dr
);
matrix_model!(
    /// Xerox luma + chromatic E/S axes.
    Yes, YES, y, e, s
);
matrix_model!(
    /// Luma + green/orange chroma, exactly invertible.
    YCgCo, YCGCO, y, cg, co
);

// ============================================================================
// Analog YPbPr
// ============================================================================

/// Analog component video, BT.601 coefficients.
///
/// `y` in [0, 1]; `pb`/`pr` in [-0.5, 0.5].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YPbPr {
    /// Luma.
    pub y: f32,
    /// Blue-difference chroma.
    pub pb: f32,
    /// Red-difference chroma.
    pub pr: f32,
}

const KR_601: f32 = 0.299;
const KB_601: f32 = 0.114;
const KR_709: f32 = 0.2126;
const KB_709: f32 = 0.0722;
const KR_2020: f32 = 0.2627;
const KB_2020: f32 = 0.0593;

#[inline]
fn ypbpr_forward(rgb: [f32; 3], kr: f32, kb: f32) -> [f32; 3] {
    let [r, g, b] = rgb;
    let y = kr * r + (1.0 - kr - kb) * g + kb * b;
    [y, 0.5 * (b - y) / (1.0 - kb), 0.5 * (r - y) / (1.0 - kr)]
}

#[inline]
fn ypbpr_backward(ypp: [f32; 3], kr: f32, kb: f32) -> [f32; 3] {
    let [y, pb, pr] = ypp;
    let r = y + 2.0 * (1.0 - kr) * pr;
    let b = y + 2.0 * (1.0 - kb) * pb;
    let g = (y - kr * r - kb * b) / (1.0 - kr - kb);
    [r, g, b]
}

impl YPbPr {
    /// Converts a device color to YPbPr.
    pub fn from_color(c: Color) -> Self {
        let [y, pb, pr] = ypbpr_forward(c.to_unit_rgb(), KR_601, KB_601);
        Self { y, pb, pr }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        Color::from_unit_rgb(ypbpr_backward([self.y, self.pb, self.pr], KR_601, KB_601), alpha)
    }
}

// ============================================================================
// Digital YCbCr
// ============================================================================

/// Which YCbCr quantization/coefficient set to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YCbCrStandard {
    /// BT.601 coefficients, studio range (Y 16-235, C 16-240).
    Bt601,
    /// BT.709 coefficients, studio range.
    Bt709,
    /// BT.2020 coefficients, studio range.
    Bt2020,
    /// BT.601 coefficients, full range (JPEG/JFIF).
    Jpeg,
}

impl YCbCrStandard {
    #[inline]
    fn coefficients(self) -> (f32, f32) {
        match self {
            Self::Bt601 | Self::Jpeg => (KR_601, KB_601),
            Self::Bt709 => (KR_709, KB_709),
            Self::Bt2020 => (KR_2020, KB_2020),
        }
    }

    #[inline]
    fn is_full_range(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// Digital luma/chroma in 8-bit code values (kept as `f32` to stay
/// lossless across the round trip).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    /// Luma code value.
    pub y: f32,
    /// Blue-difference code value.
    pub cb: f32,
    /// Red-difference code value.
    pub cr: f32,
}

impl YCbCr {
    /// Converts a device color for the given standard.
    pub fn from_color(c: Color, standard: YCbCrStandard) -> Self {
        let (kr, kb) = standard.coefficients();
        let [y, pb, pr] = ypbpr_forward(c.to_unit_rgb(), kr, kb);
        if standard.is_full_range() {
            Self {
                y: y * 255.0,
                cb: 128.0 + pb * 255.0,
                cr: 128.0 + pr * 255.0,
            }
        } else {
            Self {
                y: 16.0 + 219.0 * y,
                cb: 128.0 + 224.0 * pb,
                cr: 128.0 + 224.0 * pr,
            }
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, standard: YCbCrStandard, alpha: u8) -> Color {
        let (kr, kb) = standard.coefficients();
        let ypp = if standard.is_full_range() {
            [
                self.y / 255.0,
                (self.cb - 128.0) / 255.0,
                (self.cr - 128.0) / 255.0,
            ]
        } else {
            [
                (self.y - 16.0) / 219.0,
                (self.cb - 128.0) / 224.0,
                (self.cr - 128.0) / 224.0,
            ]
        };
        Color::from_unit_rgb(ypbpr_backward(ypp, kr, kb), alpha)
    }
}

// ============================================================================
// BT.2020 constant luminance
// ============================================================================

/// BT.2020 constant-luminance YcCbcCrc.
///
/// Luma is computed from **linear** light, then encoded; chroma
/// differences use the split scale factors from the standard
/// (1.9404/1.5816 for Cbc, 1.7184/0.9936 for Crc). The device channels
/// are interpreted as the BT.2020 signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YcCbcCrc {
    /// Constant-luminance luma, encoded, [0, 1].
    pub y: f32,
    /// Blue-difference chroma.
    pub cb: f32,
    /// Red-difference chroma.
    pub cr: f32,
}

impl YcCbcCrc {
    /// Converts a device color to constant-luminance form.
    pub fn from_color(c: Color) -> Self {
        let [rp, gp, bp] = c.to_unit_rgb();
        let (rl, gl, bl) = (rec2020_decode(rp), rec2020_decode(gp), rec2020_decode(bp));
        let yc = rec2020_encode(KR_2020 * rl + (1.0 - KR_2020 - KB_2020) * gl + KB_2020 * bl);

        let db = bp - yc;
        let cb = if db <= 0.0 { db / 1.9404 } else { db / 1.5816 };
        let dr = rp - yc;
        let cr = if dr <= 0.0 { dr / 1.7184 } else { dr / 0.9936 };

        Self { y: yc, cb, cr }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let bp = self.y + if self.cb <= 0.0 { self.cb * 1.9404 } else { self.cb * 1.5816 };
        let rp = self.y + if self.cr <= 0.0 { self.cr * 1.7184 } else { self.cr * 0.9936 };

        let yl = rec2020_decode(self.y.clamp(0.0, 1.0));
        let rl = rec2020_decode(rp.clamp(0.0, 1.0));
        let bl = rec2020_decode(bp.clamp(0.0, 1.0));
        let gl = ((yl - KR_2020 * rl - KB_2020 * bl) / (1.0 - KR_2020 - KB_2020)).max(0.0);

        Color::from_unit_rgb([rp, rec2020_encode(gl), bp], alpha)
    }
}
