//! The [`Gradient`] type: sorted color stops plus sampling.
//!
//! A gradient is an ordered list of `(position, color)` stops over [0, 1]
//! and the shape parameters that drive the geometry-aware position
//! function in [`crate::position`]. The stop list is re-sorted after every
//! mutation; callers can rely on it being ordered at all times.
//!
//! Sampling is deliberately banded: positions snap to `total_steps`
//! discrete levels before lookup (`floor(p * steps) / (steps - 1)`). That
//! quantization is part of the visual contract, not rounding noise.

use crate::error::{GradientError, Result};
use tint_core::Color;
use tint_spaces::{adjust, preset};

/// Geometry family of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    /// Straight ramp along the angle direction.
    #[default]
    Linear,
    /// Distance-from-center falloff (optionally polygonal).
    Radial,
    /// Angle-around-center sweep.
    Conical,
}

impl GradientKind {
    /// Canonical lowercase name used by the text format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conical => "conical",
        }
    }

    /// Parses a kind name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(Self::Linear),
            "radial" => Some(Self::Radial),
            "conical" => Some(Self::Conical),
            _ => None,
        }
    }
}

/// One `(position, color)` anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1].
    pub position: f32,
    /// Color at this position.
    pub color: Color,
}

/// Positions within this distance count as "the same stop" for removal.
pub const STOP_EPSILON: f32 = 1e-6;

/// A color ramp with geometry parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Geometry family.
    pub kind: GradientKind,
    /// Number of discrete sampling levels.
    pub total_steps: u32,
    /// Frame rotation in degrees.
    pub angle: f32,
    /// Radial focus offset, fraction of max radius, [-1, 1].
    pub focus_x: f32,
    /// Radial focus offset, fraction of max radius, [-1, 1].
    pub focus_y: f32,
    /// Polygon vertex count for radial falloff (< 3 means circular).
    pub vertices: u32,
    /// Exponent shaping the polygon edge falloff.
    pub edge_sharpness: f32,
    /// Ripple wavelength in pixels (0 disables the ripple).
    pub wavelength: f32,
    /// Ripple amplitude as a position offset.
    pub amplitude: f32,
    /// How many times the ramp repeats across its span.
    pub repetitions: f32,
    /// Sorted stop list.
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Default number of sampling levels.
    pub const DEFAULT_STEPS: u32 = 256;

    /// Two-stop gradient from `start` at 0 to `end` at 1.
    pub fn new(kind: GradientKind, start: Color, end: Color) -> Self {
        Self {
            kind,
            total_steps: Self::DEFAULT_STEPS,
            angle: 0.0,
            focus_x: 0.0,
            focus_y: 0.0,
            vertices: 0,
            edge_sharpness: 1.0,
            wavelength: 0.0,
            amplitude: 0.0,
            repetitions: 1.0,
            stops: vec![
                ColorStop { position: 0.0, color: start },
                ColorStop { position: 1.0, color: end },
            ],
        }
    }

    /// Gradient with `colors` spaced evenly over [0, 1].
    ///
    /// # Errors
    ///
    /// [`GradientError::TooFewStops`] when fewer than two colors are given.
    pub fn evenly_spaced(kind: GradientKind, colors: &[Color]) -> Result<Self> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewStops { got: colors.len() });
        }
        let mut g = Self::new(kind, colors[0], colors[colors.len() - 1]);
        g.stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                position: i as f32 / (colors.len() - 1) as f32,
                color,
            })
            .collect();
        Ok(g)
    }

    /// Gradient from explicit stops (sorted on entry).
    ///
    /// # Errors
    ///
    /// [`GradientError::TooFewStops`] when fewer than two stops are given.
    pub fn from_stops(kind: GradientKind, stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops { got: stops.len() });
        }
        let mut g = Self::new(kind, stops[0].color, stops[stops.len() - 1].color);
        g.stops = stops;
        g.sort_stops();
        Ok(g)
    }

    /// The sorted stop list.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    fn sort_stops(&mut self) {
        self.stops
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    // ------------------------------------------------------------------
    // Sampling
    // ------------------------------------------------------------------

    /// Snaps a continuous position onto the `total_steps` grid.
    ///
    /// `floor(p * steps) / (steps - 1)`, clamped to [0, 1]. With fewer
    /// than two steps the position only gets clamped.
    #[inline]
    pub fn quantize(&self, position: f32) -> f32 {
        let p = position.clamp(0.0, 1.0);
        if self.total_steps < 2 {
            return p;
        }
        let steps = self.total_steps as f32;
        ((p * steps).floor() / (steps - 1.0)).clamp(0.0, 1.0)
    }

    /// Interpolated color at a continuous position.
    ///
    /// Positions before the first stop or after the last return that
    /// boundary stop's color; between stops, channels blend linearly.
    pub fn color_at(&self, position: f32) -> Color {
        let first = match self.stops.first() {
            Some(s) => s,
            None => return Color::TRANSPARENT,
        };
        let last = self.stops[self.stops.len() - 1];
        if position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }

        // Index of the first stop strictly above `position`.
        let upper = self
            .stops
            .partition_point(|s| s.position <= position)
            .min(self.stops.len() - 1);
        let lo = self.stops[upper - 1];
        let hi = self.stops[upper];

        let span = hi.position - lo.position;
        if span <= STOP_EPSILON {
            return lo.color;
        }
        let t = (position - lo.position) / span;
        lerp_color(lo.color, hi.color, t)
    }

    /// Color at the i-th discrete level of the step grid.
    pub fn color_at_step(&self, step: u32) -> Color {
        if self.total_steps < 2 {
            return self.color_at(0.0);
        }
        let pos = step.min(self.total_steps - 1) as f32 / (self.total_steps - 1) as f32;
        self.color_at(pos)
    }

    // ------------------------------------------------------------------
    // Mutators (stops stay sorted)
    // ------------------------------------------------------------------

    /// Inserts a stop and re-sorts.
    pub fn add_stop(&mut self, position: f32, color: Color) {
        self.stops.push(ColorStop {
            position: position.clamp(0.0, 1.0),
            color,
        });
        self.sort_stops();
    }

    /// Removes every stop within [`STOP_EPSILON`] of `position`.
    ///
    /// Returns how many stops were removed.
    pub fn remove_stops_at(&mut self, position: f32) -> usize {
        let before = self.stops.len();
        self.stops
            .retain(|s| (s.position - position).abs() > STOP_EPSILON);
        before - self.stops.len()
    }

    /// Moves every stop by a normalized offset, wrapping mod 1.
    pub fn rotate_stops(&mut self, offset: f32) {
        for s in &mut self.stops {
            s.position = (s.position + offset).rem_euclid(1.0);
        }
        self.sort_stops();
    }

    /// Mirrors the ramp: every position becomes `1 - position`.
    pub fn reverse(&mut self) {
        for s in &mut self.stops {
            s.position = 1.0 - s.position;
        }
        self.stops.reverse();
    }

    // ------------------------------------------------------------------
    // Photographic filters over all stops
    // ------------------------------------------------------------------

    /// Applies a color function to every stop.
    pub fn map_colors<F: Fn(Color) -> Color>(&mut self, f: F) {
        for s in &mut self.stops {
            s.color = f(s.color);
        }
    }

    /// Rotates every stop's hue.
    pub fn shift_hue(&mut self, degrees: f32) {
        self.map_colors(|c| adjust::shift_hue(c, degrees));
    }

    /// Converts every stop to grayscale.
    pub fn grayscale(&mut self) {
        self.map_colors(preset::grayscale);
    }

    /// Applies the sepia matrix to every stop.
    pub fn sepia(&mut self) {
        self.map_colors(preset::sepia);
    }

    /// Inverts every stop's RGB channels.
    pub fn invert(&mut self) {
        self.map_colors(Color::invert);
    }

    /// Replaces every stop with its hue complement.
    pub fn complement(&mut self) {
        self.map_colors(adjust::complement);
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GradientKind::Linear, Color::BLACK, Color::WHITE)
    }
}

/// Per-channel linear interpolation between two colors.
#[inline]
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color::new(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(a.a, b.a),
    )
}
