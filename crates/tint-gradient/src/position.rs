//! Geometry-aware gradient position function.
//!
//! Maps a pixel coordinate to a ramp position in [0, 1] for each
//! [`GradientKind`]. The shared front half rotates the frame by the
//! gradient angle; each kind then applies its own falloff, optional
//! sinusoidal modulation, and repetition wrap. The result is finally
//! quantized onto the step grid by [`Gradient::quantize`].

use crate::gradient::{Gradient, GradientKind};
use std::f32::consts::{PI, TAU};
use tint_core::Color;

impl Gradient {
    /// Ramp position for a pixel at `(x, y)`.
    ///
    /// `(cx, cy)` is the gradient center and `max_radius` the normalizing
    /// radius (for a buffer, half its diagonal). The result is quantized
    /// to the step grid.
    pub fn position(&self, x: f32, y: f32, cx: f32, cy: f32, max_radius: f32) -> f32 {
        let max_radius = max_radius.max(1e-6);

        // Rotate the frame so the gradient axis is the local +x.
        let (sin_a, cos_a) = self.angle.to_radians().sin_cos();
        let dx = x - cx;
        let dy = y - cy;
        let rx = dx * cos_a + dy * sin_a;
        let ry = -dx * sin_a + dy * cos_a;

        let raw = match self.kind {
            GradientKind::Linear => self.linear_position(rx, ry, max_radius),
            GradientKind::Radial => self.radial_position(rx, ry, max_radius),
            GradientKind::Conical => self.conical_position(rx, ry),
        };
        self.quantize(raw)
    }

    /// Samples the gradient color for a pixel directly.
    #[inline]
    pub fn color_at_point(&self, x: f32, y: f32, cx: f32, cy: f32, max_radius: f32) -> Color {
        self.color_at(self.position(x, y, cx, cy, max_radius))
    }

    fn linear_position(&self, rx: f32, ry: f32, max_radius: f32) -> f32 {
        // Project onto the axis, normalized across the full span.
        let mut pos = (rx + max_radius) / (2.0 * max_radius);

        // Perpendicular sinusoidal ripple.
        if self.wavelength > 0.0 && self.amplitude != 0.0 {
            pos += self.amplitude * (ry / self.wavelength * TAU).sin();
        }

        if self.repetitions > 1.0 {
            (pos * self.repetitions).rem_euclid(1.0)
        } else {
            pos
        }
    }

    fn radial_position(&self, rx: f32, ry: f32, max_radius: f32) -> f32 {
        // Focus offset moves the effective center.
        let fx = rx - self.focus_x * max_radius;
        let fy = ry - self.focus_y * max_radius;
        let radius = (fx * fx + fy * fy).sqrt();
        let mut pos = radius / max_radius;

        if self.vertices >= 3 {
            // Polygonal falloff: scale by the edge profile of the sector.
            let sector = TAU / self.vertices as f32;
            let theta = fy.atan2(fx).rem_euclid(TAU);
            let edge = (theta.rem_euclid(sector) - sector / 2.0).cos();
            pos *= edge.max(0.0).powf(self.edge_sharpness.max(0.0));

            // Burst modulation around the rim.
            if self.wavelength > 0.0 && self.amplitude != 0.0 {
                pos *= 1.0 + self.amplitude * (theta * self.wavelength).sin();
            }
        } else if self.wavelength > 0.0 && self.amplitude != 0.0 {
            // Circular falloff with a radial wave.
            pos += self.amplitude * (radius / self.wavelength * TAU).sin();
        }

        if self.repetitions > 1.0 {
            (pos * self.repetitions).rem_euclid(1.0)
        } else {
            pos.clamp(0.0, 1.0)
        }
    }

    fn conical_position(&self, rx: f32, ry: f32) -> f32 {
        // Angle from center mapped onto one full turn.
        let theta = ry.atan2(rx);
        let mut pos = (theta + PI) / TAU;

        // Radius-dependent swirl.
        if self.wavelength > 0.0 && self.amplitude != 0.0 {
            let radius = (rx * rx + ry * ry).sqrt();
            pos += self.amplitude * (radius / self.wavelength * TAU).sin();
        }

        (pos * self.repetitions.max(1.0)).rem_euclid(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(kind: GradientKind) -> Gradient {
        let mut g = Gradient::new(kind, Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
        g.total_steps = 1001;
        g
    }

    #[test]
    fn test_linear_spans_zero_to_one() {
        let g = base(GradientKind::Linear);
        let left = g.position(0.0, 50.0, 50.0, 50.0, 50.0);
        let right = g.position(100.0, 50.0, 50.0, 50.0, 50.0);
        assert!(left < 0.01, "left = {left}");
        assert!(right > 0.99, "right = {right}");
    }

    #[test]
    fn test_linear_angle_rotates_axis() {
        let mut g = base(GradientKind::Linear);
        g.angle = 90.0;
        // With a 90-degree frame, movement along y drives the ramp.
        let top = g.position(50.0, 0.0, 50.0, 50.0, 50.0);
        let bottom = g.position(50.0, 100.0, 50.0, 50.0, 50.0);
        assert!((bottom - top).abs() > 0.9);
    }

    #[test]
    fn test_radial_center_is_zero() {
        let g = base(GradientKind::Radial);
        assert_eq!(g.position(50.0, 50.0, 50.0, 50.0, 50.0), 0.0);
        let rim = g.position(100.0, 50.0, 50.0, 50.0, 50.0);
        assert!(rim > 0.99);
    }

    #[test]
    fn test_radial_focus_moves_center() {
        let mut g = base(GradientKind::Radial);
        g.focus_x = 0.5;
        // The zero point moved to the focus.
        let at_focus = g.position(75.0, 50.0, 50.0, 50.0, 50.0);
        assert!(at_focus < 0.01);
    }

    #[test]
    fn test_radial_polygon_pulls_edges_in() {
        let mut g = base(GradientKind::Radial);
        g.vertices = 4;
        g.edge_sharpness = 1.0;
        // At a sector boundary the cos profile is cos(-sector/2) < 1, so
        // the polygonal position falls below the circular one.
        let circular = base(GradientKind::Radial).position(85.0, 50.0, 50.0, 50.0, 50.0);
        let square = g.position(85.0, 50.0, 50.0, 50.0, 50.0);
        assert!(square < circular);
    }

    #[test]
    fn test_conical_wraps_once_around() {
        let g = base(GradientKind::Conical);
        let west = g.position(0.0, 50.0, 50.0, 50.0, 50.0);
        let east = g.position(100.0, 50.0, 50.0, 50.0, 50.0);
        // atan2 is +/-pi at west, 0 at east: west maps near the seam.
        assert!(west < 0.01 || west > 0.99);
        assert!((east - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_repetitions_wrap() {
        let mut g = base(GradientKind::Linear);
        g.repetitions = 4.0;
        let p = g.position(90.0, 50.0, 50.0, 50.0, 50.0);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_quantization_bands() {
        use approx::assert_abs_diff_eq;

        let mut g = base(GradientKind::Linear);
        g.total_steps = 4;
        // Every sampled position lands on the 4-level grid.
        for x in 0..=100 {
            let p = g.position(x as f32, 50.0, 50.0, 50.0, 50.0);
            let snapped = (p * 3.0).round() / 3.0;
            assert_abs_diff_eq!(p, snapped, epsilon = 1e-5);
        }
    }
}
