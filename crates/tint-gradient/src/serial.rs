//! Flat text serialization of gradients.
//!
//! The wire form is a single whitespace-separated token stream:
//!
//! ```text
//! kind angle total_steps vertices focus_x focus_y edge_sharpness
//! wavelength amplitude repetitions stop_count (packed_argb position)*
//! ```
//!
//! `kind` is `linear` / `radial` / `conical`; packed colors are
//! hexadecimal `AARRGGBB`. The parser accepts arbitrary whitespace
//! (spaces, tabs, newlines) between tokens. Malformed input is a
//! [`GradientError::Malformed`]; [`Gradient::parse_lenient`] flattens
//! that to `None` for boundaries that want a null instead of an error.

use crate::error::{GradientError, Result};
use crate::gradient::{ColorStop, Gradient, GradientKind};
use std::fmt;
use std::str::FromStr;
use tint_core::Color;

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {}",
            self.kind.name(),
            self.angle,
            self.total_steps,
            self.vertices,
            self.focus_x,
            self.focus_y,
            self.edge_sharpness,
            self.wavelength,
            self.amplitude,
            self.repetitions,
            self.stops().len(),
        )?;
        for stop in self.stops() {
            write!(f, " {:08X} {}", stop.color.to_argb(), stop.position)?;
        }
        Ok(())
    }
}

impl FromStr for Gradient {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        fn take<'a>(tokens: &[&'a str], cursor: &mut usize, what: &str) -> Result<&'a str> {
            let tok = tokens.get(*cursor).ok_or_else(|| GradientError::Malformed {
                detail: format!("missing {what}"),
            })?;
            *cursor += 1;
            Ok(tok)
        }

        fn num<T: FromStr>(tok: &str, what: &str) -> Result<T> {
            tok.parse().map_err(|_| GradientError::Malformed {
                detail: format!("bad {what}: {tok:?}"),
            })
        }

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let mut cursor = 0usize;

        let kind_tok = take(&tokens, &mut cursor, "kind")?;
        let kind = GradientKind::parse(kind_tok).ok_or_else(|| GradientError::Malformed {
            detail: format!("unknown kind {kind_tok:?}"),
        })?;

        let angle: f32 = num(take(&tokens, &mut cursor, "angle")?, "angle")?;
        let total_steps: u32 = num(take(&tokens, &mut cursor, "total_steps")?, "total_steps")?;
        let vertices: u32 = num(take(&tokens, &mut cursor, "vertices")?, "vertices")?;
        let focus_x: f32 = num(take(&tokens, &mut cursor, "focus_x")?, "focus_x")?;
        let focus_y: f32 = num(take(&tokens, &mut cursor, "focus_y")?, "focus_y")?;
        let edge_sharpness: f32 =
            num(take(&tokens, &mut cursor, "edge_sharpness")?, "edge_sharpness")?;
        let wavelength: f32 = num(take(&tokens, &mut cursor, "wavelength")?, "wavelength")?;
        let amplitude: f32 = num(take(&tokens, &mut cursor, "amplitude")?, "amplitude")?;
        let repetitions: f32 = num(take(&tokens, &mut cursor, "repetitions")?, "repetitions")?;
        let stop_count: usize = num(take(&tokens, &mut cursor, "stop_count")?, "stop_count")?;

        let mut stops = Vec::with_capacity(stop_count);
        for i in 0..stop_count {
            let packed_tok = take(&tokens, &mut cursor, "stop color")?;
            let packed = u32::from_str_radix(packed_tok, 16).map_err(|_| {
                GradientError::Malformed {
                    detail: format!("bad stop color {packed_tok:?} at index {i}"),
                }
            })?;
            let position: f32 = num(take(&tokens, &mut cursor, "stop position")?, "stop position")?;
            if !(0.0..=1.0).contains(&position) {
                return Err(GradientError::Malformed {
                    detail: format!("stop position {position} out of [0, 1]"),
                });
            }
            stops.push(ColorStop {
                position,
                color: Color::from_argb(packed),
            });
        }

        if cursor != tokens.len() {
            return Err(GradientError::Malformed {
                detail: "trailing tokens".into(),
            });
        }

        let mut g = Gradient::from_stops(kind, stops)?;
        g.angle = angle;
        g.total_steps = total_steps;
        g.vertices = vertices;
        g.focus_x = focus_x;
        g.focus_y = focus_y;
        g.edge_sharpness = edge_sharpness;
        g.wavelength = wavelength;
        g.amplitude = amplitude;
        g.repetitions = repetitions;
        Ok(g)
    }
}

impl Gradient {
    /// Parses the text form, returning `None` for anything malformed.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gradient {
        let mut g = Gradient::new(
            GradientKind::Radial,
            Color::rgb(255, 0, 0),
            Color::rgb(0, 0, 255),
        );
        g.angle = 45.0;
        g.total_steps = 64;
        g.vertices = 5;
        g.focus_x = 0.25;
        g.edge_sharpness = 2.0;
        g.wavelength = 12.0;
        g.amplitude = 0.1;
        g.repetitions = 3.0;
        g.add_stop(0.5, Color::new(0, 255, 0, 128));
        g
    }

    #[test]
    fn test_roundtrip() {
        let g = sample();
        let text = g.to_string();
        let parsed: Gradient = text.parse().unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_arbitrary_whitespace() {
        let g = sample();
        let text = g.to_string().replace(' ', "\n\t  ");
        let parsed: Gradient = text.parse().unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_malformed_is_error_not_panic() {
        for bad in [
            "",
            "spiral 0 10 0 0 0 1 0 0 1 0",
            "linear 0 10 0 0 0 1 0 0 1 2 FF000000 0.0",
            "linear 0 10 0 0 0 1 0 0 1 1 GARBAGE 0.0",
            "linear 0 10 0 0 0 1 0 0 1 2 FF000000 0.0 FF0000FF 1.5",
            "linear 0 10 0 0 0 1 0 0 1 2 FF000000 0.0 FF0000FF 1.0 extra",
        ] {
            assert!(bad.parse::<Gradient>().is_err(), "{bad:?}");
            assert!(Gradient::parse_lenient(bad).is_none());
        }
    }

    #[test]
    fn test_lenient_accepts_valid() {
        let g = sample();
        assert_eq!(Gradient::parse_lenient(&g.to_string()), Some(g));
    }

    #[test]
    fn test_packed_colors_hex() {
        let g = Gradient::new(
            GradientKind::Linear,
            Color::from_argb(0xFF123456),
            Color::from_argb(0x80ABCDEF),
        );
        let text = g.to_string();
        assert!(text.contains("FF123456"));
        assert!(text.contains("80ABCDEF"));
    }
}
