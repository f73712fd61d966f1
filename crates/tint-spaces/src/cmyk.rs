//! Naive CMYK (no ink profile), percentages in [0, 100].

use tint_core::Color;

/// Cyan / magenta / yellow / key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan percent.
    pub c: f32,
    /// Magenta percent.
    pub m: f32,
    /// Yellow percent.
    pub y: f32,
    /// Key (black) percent.
    pub k: f32,
}

impl Cmyk {
    /// Converts a device color to CMYK.
    pub fn from_color(color: Color) -> Self {
        let [r, g, b] = color.to_unit_rgb();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 - 1e-9 {
            return Self { c: 0.0, m: 0.0, y: 0.0, k: 100.0 };
        }
        let d = 1.0 - k;
        Self {
            c: (1.0 - r - k) / d * 100.0,
            m: (1.0 - g - k) / d * 100.0,
            y: (1.0 - b - k) / d * 100.0,
            k: k * 100.0,
        }
    }

    /// Converts back to a device color.
    pub fn to_color(self, alpha: u8) -> Color {
        let c = (self.c / 100.0).clamp(0.0, 1.0);
        let m = (self.m / 100.0).clamp(0.0, 1.0);
        let y = (self.y / 100.0).clamp(0.0, 1.0);
        let k = (self.k / 100.0).clamp(0.0, 1.0);
        Color::from_unit_rgb(
            [
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            ],
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let cyan = Cmyk::from_color(Color::rgb(0, 255, 255));
        assert!((cyan.c - 100.0).abs() < 0.1 && cyan.m < 0.1 && cyan.y < 0.1 && cyan.k < 0.1);
    }

    #[test]
    fn test_black_is_pure_key() {
        let k = Cmyk::from_color(Color::BLACK);
        assert_eq!((k.c, k.m, k.y, k.k), (0.0, 0.0, 0.0, 100.0));
        assert_eq!(k.to_color(255), Color::BLACK);
    }

    #[test]
    fn test_roundtrip() {
        for c in [Color::rgb(12, 200, 33), Color::rgb(130, 60, 90), Color::WHITE] {
            let back = Cmyk::from_color(c).to_color(255);
            assert!((back.r as i32 - c.r as i32).abs() <= 1);
            assert!((back.g as i32 - c.g as i32).abs() <= 1);
            assert!((back.b as i32 - c.b as i32).abs() <= 1);
        }
    }
}
