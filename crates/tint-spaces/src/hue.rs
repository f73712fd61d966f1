//! Cylindrical hue-based models: HSL, HSV, HSI, HWB.
//!
//! Hue is in degrees [0, 360); every other component is a percentage in
//! [0, 100]. Achromatic input (r = g = b) has an undefined hue, reported
//! as 0 and accepted as any value on the way back.

use tint_core::Color;

/// Hexcone hue in degrees for normalized RGB, with max/min/delta.
fn hue_max_min(rgb: [f32; 3]) -> (f32, f32, f32, f32) {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta < 1e-9 {
        0.0
    } else if (max - r).abs() < 1e-9 {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if (max - g).abs() < 1e-9 {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (h, max, min, delta)
}

/// Reconstructs normalized RGB from hue plus chroma/offset.
fn rgb_from_hcm(h: f32, c: f32, m: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

/// Hue / saturation / lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees [0, 360).
    pub h: f32,
    /// Saturation percent [0, 100].
    pub s: f32,
    /// Lightness percent [0, 100].
    pub l: f32,
}

impl Hsl {
    /// Converts a device color to HSL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Color;
    /// use tint_spaces::hue::Hsl;
    ///
    /// let hsl = Hsl::from_color(Color::rgb(255, 0, 0));
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
    /// ```
    pub fn from_color(c: Color) -> Self {
        let (h, max, min, delta) = hue_max_min(c.to_unit_rgb());
        let l = (max + min) / 2.0;
        let s = if delta < 1e-9 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self { h, s: s * 100.0, l: l * 100.0 }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let m = l - c / 2.0;
        Color::from_unit_rgb(rgb_from_hcm(self.h, c, m), alpha)
    }
}

/// Hue / saturation / value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees [0, 360).
    pub h: f32,
    /// Saturation percent [0, 100].
    pub s: f32,
    /// Value percent [0, 100].
    pub v: f32,
}

impl Hsv {
    /// Converts a device color to HSV.
    pub fn from_color(c: Color) -> Self {
        let (h, max, _min, delta) = hue_max_min(c.to_unit_rgb());
        let s = if max < 1e-9 { 0.0 } else { delta / max };
        Self { h, s: s * 100.0, v: max * 100.0 }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let m = v - c;
        Color::from_unit_rgb(rgb_from_hcm(self.h, c, m), alpha)
    }
}

/// Hue / saturation / intensity (Gonzalez-Woods formulation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsi {
    /// Hue in degrees [0, 360).
    pub h: f32,
    /// Saturation percent [0, 100].
    pub s: f32,
    /// Intensity percent [0, 100].
    pub i: f32,
}

impl Hsi {
    /// Converts a device color to HSI.
    pub fn from_color(c: Color) -> Self {
        let [r, g, b] = c.to_unit_rgb();
        let i = (r + g + b) / 3.0;
        let min = r.min(g).min(b);
        let s = if i < 1e-9 { 0.0 } else { 1.0 - min / i };

        let num = 0.5 * ((r - g) + (r - b));
        let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
        let h = if den < 1e-9 {
            0.0
        } else {
            let theta = (num / den).clamp(-1.0, 1.0).acos().to_degrees();
            if b > g { 360.0 - theta } else { theta }
        };

        Self { h, s: s * 100.0, i: i * 100.0 }
    }

    /// Converts back to a device color via the three 120-degree sectors.
    pub fn to_color(self, alpha: u8) -> Color {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let i = (self.i / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0);

        let sector = |h: f32| {
            let hr = h.to_radians();
            let x = i * (1.0 - s);
            let y = i * (1.0 + s * hr.cos() / (60.0f32.to_radians() - hr).cos());
            let z = 3.0 * i - (x + y);
            (x, y, z)
        };

        let rgb = if h < 120.0 {
            let (b, r, g) = sector(h);
            [r, g, b]
        } else if h < 240.0 {
            let (r, g, b) = sector(h - 120.0);
            [r, g, b]
        } else {
            let (g, b, r) = sector(h - 240.0);
            [r, g, b]
        };
        Color::from_unit_rgb(rgb, alpha)
    }
}

/// Hue / whiteness / blackness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    /// Hue in degrees [0, 360).
    pub h: f32,
    /// Whiteness percent [0, 100].
    pub w: f32,
    /// Blackness percent [0, 100].
    pub b: f32,
}

impl Hwb {
    /// Converts a device color to HWB.
    pub fn from_color(c: Color) -> Self {
        let (h, max, min, _delta) = hue_max_min(c.to_unit_rgb());
        Self { h, w: min * 100.0, b: (1.0 - max) * 100.0 }
    }

    /// Converts back to a device color.
    ///
    /// When whiteness + blackness reach 100% the result is the gray
    /// `w / (w + b)` regardless of hue.
    pub fn to_color(self, alpha: u8) -> Color {
        let w = (self.w / 100.0).clamp(0.0, 1.0);
        let b = (self.b / 100.0).clamp(0.0, 1.0);
        if w + b >= 1.0 {
            let gray = w / (w + b);
            return Color::from_unit_rgb([gray, gray, gray], alpha);
        }
        let v = 1.0 - b;
        let s = 1.0 - w / v;
        Hsv { h: self.h, s: s * 100.0, v: v * 100.0 }.to_color(alpha)
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

    const SAMPLES: [Color; 8] = [
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255),
        Color::rgb(255, 255, 0),
        Color::rgb(18, 52, 86),
        Color::rgb(240, 240, 240),
        Color::BLACK,
        Color::WHITE,
    ];

    #[test]
    fn test_hsl_known_values() {
        let red = Hsl::from_color(Color::rgb(255, 0, 0));
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));
        assert_eq!(
            Hsl { h: 120.0, s: 100.0, l: 50.0 }.to_color(255),
            Color::rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_hsl_roundtrip() {
        for c in SAMPLES {
            assert!(close(c, Hsl::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_hsv_roundtrip() {
        for c in SAMPLES {
            assert!(close(c, Hsv::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_hsi_roundtrip() {
        for c in SAMPLES {
            assert!(close(c, Hsi::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_hwb_roundtrip() {
        for c in SAMPLES {
            assert!(close(c, Hwb::from_color(c).to_color(255)), "{c:?}");
        }
    }

    #[test]
    fn test_hwb_overcommitted_is_gray() {
        let c = Hwb { h: 200.0, w: 80.0, b: 40.0 }.to_color(255);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        assert_eq!(Hsl::from_color(Color::gray(99)).h, 0.0);
        assert_eq!(Hsv::from_color(Color::gray(99)).s, 0.0);
    }
}
