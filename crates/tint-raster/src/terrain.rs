//! Diamond-square terrain generation.
//!
//! Midpoint displacement over a `2^n + 1` heightmap: corners are seeded,
//! then diamond and square passes alternate with a random offset whose
//! scale decays as the step shrinks. The finished map is floored at the
//! water level, histogram-stretched with a power-1.5 remap, pushed
//! through a fixed terrain color ramp, and resampled onto the buffer.

use crate::buffer::PixelBuffer;
use crate::noise::rng_from;
use rand::Rng;
use tint_core::Color;
use tracing::debug;

/// Fixed ordered terrain ramp: deep water up to snow.
const TERRAIN_RAMP: [(f32, Color); 7] = [
    (0.00, Color::rgb(0x1A, 0x3C, 0x8C)),
    (0.35, Color::rgb(0x2E, 0x64, 0xC8)),
    (0.45, Color::rgb(0xD8, 0xC8, 0x90)),
    (0.55, Color::rgb(0x50, 0xA0, 0x30)),
    (0.70, Color::rgb(0x2A, 0x6E, 0x1E)),
    (0.85, Color::rgb(0x80, 0x80, 0x80)),
    (1.00, Color::rgb(0xFF, 0xFF, 0xFF)),
];

impl PixelBuffer {
    /// Fills the buffer with diamond-square terrain.
    ///
    /// - `roughness` scales the random midpoint offsets
    /// - `water_level` floors the raw heights (flat oceans)
    /// - `levels_per_stop` quantizes each ramp segment into that many
    ///   bands (terraced shading); 0 behaves as 1
    /// - `seed` pins the generator for reproducible terrain
    pub fn diamond_square(
        &mut self,
        roughness: f32,
        water_level: f32,
        levels_per_stop: u32,
        seed: Option<u64>,
    ) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let longest = self.width().max(self.height());
        let size = grid_size(longest);
        debug!(roughness, water_level, size, "diamond-square");

        let mut rng = rng_from(seed);
        let mut map = vec![0.0f32; size * size];

        // Seed the four corners.
        let last = size - 1;
        for &(x, y) in &[(0, 0), (last, 0), (0, last), (last, last)] {
            map[y * size + x] = rng.r#gen::<f32>();
        }

        let mut step = last;
        while step > 1 {
            let half = step / 2;
            let scale = roughness * (step as f32 / size as f32)
                * (1.0 - (size - step) as f32 / size as f32);

            // Diamond pass: center of each square from its corners.
            for y in (half..size).step_by(step) {
                for x in (half..size).step_by(step) {
                    let avg = (map[(y - half) * size + (x - half)]
                        + map[(y - half) * size + (x + half)]
                        + map[(y + half) * size + (x - half)]
                        + map[(y + half) * size + (x + half)])
                        / 4.0;
                    map[y * size + x] = avg + rng.gen_range(-1.0..1.0) * scale;
                }
            }

            // Square pass: edge midpoints from their diamond neighbors.
            for y in (0..size).step_by(half) {
                let x_start = if (y / half) % 2 == 0 { half } else { 0 };
                for x in (x_start..size).step_by(step) {
                    let mut sum = 0.0;
                    let mut count = 0.0;
                    if y >= half {
                        sum += map[(y - half) * size + x];
                        count += 1.0;
                    }
                    if y + half < size {
                        sum += map[(y + half) * size + x];
                        count += 1.0;
                    }
                    if x >= half {
                        sum += map[y * size + (x - half)];
                        count += 1.0;
                    }
                    if x + half < size {
                        sum += map[y * size + (x + half)];
                        count += 1.0;
                    }
                    map[y * size + x] = sum / count + rng.gen_range(-1.0..1.0) * scale;
                }
            }

            step = half;
        }

        // Flat oceans: floor at the water level.
        for v in &mut map {
            *v = v.max(water_level);
        }

        // Histogram stretch with a power-1.5 remap.
        let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
        for &v in &map {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let span = (hi - lo).max(1e-9);
        for v in &mut map {
            *v = ((*v - lo) / span).powf(1.5);
        }

        // Resample the map onto the buffer and color it.
        let levels = levels_per_stop.max(1);
        let w = self.width();
        let h = self.height();
        self.for_each_row(|y, row| {
            let my = y as f32 / h as f32 * (size - 1) as f32;
            for (x, px) in row.iter_mut().enumerate() {
                let mx = x as f32 / w as f32 * (size - 1) as f32;
                let height = sample_bilinear(&map, size, mx, my);
                *px = ramp_color(height, levels);
            }
        });
    }
}

/// Smallest `2^n + 1` grid covering `longest` pixels.
fn grid_size(longest: usize) -> usize {
    let needed = longest.max(2) - 1;
    let mut n = 1usize;
    while n < needed {
        n <<= 1;
    }
    n + 1
}

fn sample_bilinear(map: &[f32], size: usize, x: f32, y: f32) -> f32 {
    let x0 = x as usize;
    let y0 = y as usize;
    let x1 = (x0 + 1).min(size - 1);
    let y1 = (y0 + 1).min(size - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let top = map[y0 * size + x0] * (1.0 - fx) + map[y0 * size + x1] * fx;
    let bottom = map[y1 * size + x0] * (1.0 - fx) + map[y1 * size + x1] * fx;
    top * (1.0 - fy) + bottom * fy
}

/// Maps a height in [0, 1] through the terrain ramp, quantized to
/// `levels` bands per segment.
fn ramp_color(height: f32, levels: u32) -> Color {
    let t = height.clamp(0.0, 1.0);
    let seg = TERRAIN_RAMP
        .windows(2)
        .find(|w| t <= w[1].0)
        .unwrap_or(&TERRAIN_RAMP[TERRAIN_RAMP.len() - 2..]);
    let (p0, c0) = seg[0];
    let (p1, c1) = seg[1];

    let span = (p1 - p0).max(1e-9);
    let ts = ((t - p0) / span).clamp(0.0, 1.0);
    let banded = (ts * levels as f32).floor() / levels as f32;

    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * banded).round() as u8;
    Color::rgb(mix(c0.r, c1.r), mix(c0.g, c1.g), mix(c0.b, c1.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(2), 2);
        assert_eq!(grid_size(3), 3);
        assert_eq!(grid_size(5), 5);
        assert_eq!(grid_size(6), 9);
        assert_eq!(grid_size(100), 129);
        assert_eq!(grid_size(129), 129);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = PixelBuffer::new(32, 24);
        let mut b = PixelBuffer::new(32, 24);
        a.diamond_square(0.8, 0.2, 4, Some(1234));
        b.diamond_square(0.8, 0.2, 4, Some(1234));
        assert_eq!(a, b);
        assert_eq!(a.pixel_count(), 32 * 24);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = PixelBuffer::new(32, 32);
        let mut b = PixelBuffer::new(32, 32);
        a.diamond_square(0.8, 0.2, 4, Some(1));
        b.diamond_square(0.8, 0.2, 4, Some(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_colors_come_from_ramp_hull() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.diamond_square(1.0, 0.0, 2, Some(99));
        // Everything is opaque and inside the ramp's channel hull.
        for &p in buf.pixels() {
            assert_eq!(p.a, 255);
        }
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp_color(0.0, 1), TERRAIN_RAMP[0].1);
        // Full height with one band per stop lands on the segment floor.
        let snow_seg = ramp_color(1.0, 1);
        assert_eq!(snow_seg, TERRAIN_RAMP[6].1);
    }

    #[test]
    fn test_banding_quantizes() {
        // With 2 bands, the first half of a segment is flat.
        let a = ramp_color(0.01, 2);
        let b = ramp_color(0.10, 2);
        assert_eq!(a, b);
    }
}
