//! Procedural noise generators.
//!
//! Perlin and fBm share one permutation-table primitive ([`PermTable`]);
//! simplex keeps its own gradient set. Perlin and simplex write by adding
//! into the color channels; fBm, Voronoi, and plasma composite through
//! the fixed 50/50 [`Color::mix`] regardless of their scalar parameters.
//!
//! Every generator takes an optional `u64` seed; `None` seeds from OS
//! entropy, a fixed seed reproduces the field exactly.

use crate::buffer::PixelBuffer;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f32::consts::TAU;
use tint_core::Color;
use tracing::debug;

pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

// ============================================================================
// Permutation-table gradient noise (Perlin / fBm)
// ============================================================================

/// A shuffled 256-entry permutation table, duplicated to 512 entries so
/// lookups never wrap explicitly.
pub struct PermTable {
    p: [u8; 512],
}

impl PermTable {
    /// Builds a table from the given generator.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut base: Vec<u8> = (0..=255).collect();
        base.shuffle(rng);
        let mut p = [0u8; 512];
        for i in 0..512 {
            p[i] = base[i & 255];
        }
        Self { p }
    }

    #[inline]
    fn at(&self, i: i32) -> u8 {
        self.p[(i & 511) as usize]
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hash-selected gradient dot product (eight diagonal/axial directions).
#[inline]
fn grad(hash: u8, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => x - y,
        2 => -x + y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Classic 2-D Perlin noise, roughly in [-1, 1].
pub fn perlin2(table: &PermTable, x: f32, y: f32) -> f32 {
    let xi = x.floor() as i32;
    let yi = y.floor() as i32;
    let xf = x - x.floor();
    let yf = y - y.floor();

    let u = fade(xf);
    let v = fade(yf);

    let aa = table.at(table.at(xi) as i32 + yi);
    let ab = table.at(table.at(xi) as i32 + yi + 1);
    let ba = table.at(table.at(xi + 1) as i32 + yi);
    let bb = table.at(table.at(xi + 1) as i32 + yi + 1);

    let x1 = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
    let x2 = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
    lerp(x1, x2, v)
}

/// Octave sum of [`perlin2`], renormalized to [-1, 1].
pub fn fbm2(
    table: &PermTable,
    x: f32,
    y: f32,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_amplitude = 0.0;
    for _ in 0..octaves.max(1) {
        total += perlin2(table, x * frequency, y * frequency) * amplitude;
        max_amplitude += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }
    total / max_amplitude
}

// ============================================================================
// Simplex noise (its own gradient set)
// ============================================================================

const SIMPLEX_GRAD: [(f32, f32); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// 2-D simplex noise, roughly in [-1, 1].
pub fn simplex2(table: &PermTable, x: f32, y: f32) -> f32 {
    // Skew factors for 2 dimensions.
    const F2: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
    const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();
    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    // Which triangle of the unit cell.
    let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

    let x1 = x0 - i1 + G2;
    let y1 = y0 - j1 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = i as i32;
    let jj = j as i32;

    let mut total = 0.0;
    for ((gx, gy), (dx, dy)) in [
        (table.at(ii + table.at(jj) as i32), (x0, y0)),
        (
            table.at(ii + i1 as i32 + table.at(jj + j1 as i32) as i32),
            (x1, y1),
        ),
        (table.at(ii + 1 + table.at(jj + 1) as i32), (x2, y2)),
    ]
    .map(|(h, d)| (SIMPLEX_GRAD[(h & 7) as usize], d))
    {
        let falloff = 0.5 - dx * dx - dy * dy;
        if falloff > 0.0 {
            let f4 = falloff * falloff * falloff * falloff;
            total += f4 * (gx * dx + gy * dy);
        }
    }
    // Scale to roughly [-1, 1].
    70.0 * total
}

// ============================================================================
// Buffer generators
// ============================================================================

impl PixelBuffer {
    /// Adds a Perlin octave field into the R/G/B channels.
    ///
    /// `scale` is the feature size in pixels (larger = smoother).
    pub fn perlin_noise(
        &mut self,
        scale: f32,
        octaves: u32,
        persistence: f32,
        lacunarity: f32,
        seed: Option<u64>,
    ) {
        if scale <= 0.0 {
            return;
        }
        debug!(scale, octaves, "perlin noise");
        let table = PermTable::new(&mut rng_from(seed));
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let n = fbm2(
                    &table,
                    x as f32 / scale,
                    y as f32 / scale,
                    octaves,
                    persistence,
                    lacunarity,
                );
                let level = (((n + 1.0) / 2.0).clamp(0.0, 1.0) * 255.0) as u8;
                *px = *px + Color::new(level, level, level, 0);
            }
        });
    }

    /// Adds a simplex octave field into the R/G/B channels.
    pub fn simplex_noise(
        &mut self,
        scale: f32,
        octaves: u32,
        persistence: f32,
        lacunarity: f32,
        seed: Option<u64>,
    ) {
        if scale <= 0.0 {
            return;
        }
        debug!(scale, octaves, "simplex noise");
        let table = PermTable::new(&mut rng_from(seed));
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let mut total = 0.0;
                let mut amplitude = 1.0;
                let mut frequency = 1.0;
                let mut max_amplitude = 0.0;
                for _ in 0..octaves.max(1) {
                    total += simplex2(
                        &table,
                        x as f32 / scale * frequency,
                        y as f32 / scale * frequency,
                    ) * amplitude;
                    max_amplitude += amplitude;
                    amplitude *= persistence;
                    frequency *= lacunarity;
                }
                let n = total / max_amplitude;
                let level = (((n + 1.0) / 2.0).clamp(0.0, 1.0) * 255.0) as u8;
                *px = *px + Color::new(level, level, level, 0);
            }
        });
    }

    /// Blends a fractal Brownian motion field in with the 50/50 mix.
    pub fn fbm_noise(
        &mut self,
        scale: f32,
        octaves: u32,
        persistence: f32,
        lacunarity: f32,
        seed: Option<u64>,
    ) {
        if scale <= 0.0 {
            return;
        }
        debug!(scale, octaves, "fbm noise");
        let table = PermTable::new(&mut rng_from(seed));
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let n = fbm2(
                    &table,
                    x as f32 / scale,
                    y as f32 / scale,
                    octaves,
                    persistence,
                    lacunarity,
                );
                let level = (((n + 1.0) / 2.0).clamp(0.0, 1.0) * 255.0) as u8;
                *px = px.mix_level(level);
            }
        });
    }

    /// Blends a Voronoi cell field in with the 50/50 mix.
    ///
    /// `num_points` random seeds land in the unit square; each pixel's
    /// value is `min_distance^falloff * strength`, clamped to [0, 1].
    /// `num_points == 0` is a no-op.
    pub fn voronoi(&mut self, num_points: usize, falloff: f32, strength: f32, seed: Option<u64>) {
        if num_points == 0 || self.width() == 0 || self.height() == 0 {
            return;
        }
        debug!(num_points, falloff, strength, "voronoi");
        let mut rng = rng_from(seed);
        let points: Vec<(f32, f32)> = (0..num_points)
            .map(|_| (rng.r#gen::<f32>(), rng.r#gen::<f32>()))
            .collect();

        let w = self.width() as f32;
        let h = self.height() as f32;
        self.for_each_row(|y, row| {
            let ny = y as f32 / h;
            for (x, px) in row.iter_mut().enumerate() {
                let nx = x as f32 / w;
                let min_dist = points
                    .iter()
                    .map(|&(sx, sy)| {
                        let dx = nx - sx;
                        let dy = ny - sy;
                        dx * dx + dy * dy
                    })
                    .fold(f32::INFINITY, f32::min)
                    .sqrt();
                let v = (min_dist.powf(falloff) * strength).clamp(0.0, 1.0);
                *px = px.mix_level((v * 255.0) as u8);
            }
        });
    }

    /// Blends a plasma interference pattern in with the 50/50 mix.
    ///
    /// Four phase-shifted sine waves of the normalized coordinates; the
    /// three channels run at phase offsets 0, 2pi/3, 4pi/3.
    pub fn plasma(&mut self) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let w = self.width() as f32;
        let h = self.height() as f32;
        self.for_each_row(|y, row| {
            let ny = y as f32 / h;
            for (x, px) in row.iter_mut().enumerate() {
                let nx = x as f32 / w;
                let mut channels = [0u8; 3];
                for (k, ch) in channels.iter_mut().enumerate() {
                    let phase = k as f32 * TAU / 3.0;
                    let v = ((nx * TAU + phase).sin()
                        + (ny * TAU + phase).sin()
                        + ((nx + ny) * TAU + phase).sin()
                        + ((nx * nx + ny * ny).sqrt() * TAU + phase).sin())
                        / 4.0;
                    *ch = (((v + 1.0) / 2.0).clamp(0.0, 1.0) * 255.0) as u8;
                }
                *px = px.mix(Color::rgb(channels[0], channels[1], channels[2]));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_is_seed_deterministic() {
        let mut a = PixelBuffer::filled(16, 16, Color::BLACK);
        let mut b = PixelBuffer::filled(16, 16, Color::BLACK);
        a.perlin_noise(8.0, 4, 0.5, 2.0, Some(7));
        b.perlin_noise(8.0, 4, 0.5, 2.0, Some(7));
        assert_eq!(a, b);
        let mut c = PixelBuffer::filled(16, 16, Color::BLACK);
        c.perlin_noise(8.0, 4, 0.5, 2.0, Some(8));
        assert_ne!(a, c);
    }

    #[test]
    fn test_perlin_range() {
        let table = PermTable::new(&mut rng_from(Some(1)));
        for y in 0..32 {
            for x in 0..32 {
                let n = perlin2(&table, x as f32 / 7.3, y as f32 / 7.3);
                assert!((-1.5..=1.5).contains(&n), "n = {n}");
            }
        }
    }

    #[test]
    fn test_simplex_range() {
        let table = PermTable::new(&mut rng_from(Some(2)));
        for y in 0..32 {
            for x in 0..32 {
                let n = simplex2(&table, x as f32 / 5.1, y as f32 / 5.1);
                assert!((-1.5..=1.5).contains(&n), "n = {n}");
            }
        }
    }

    #[test]
    fn test_fbm_blends_via_mix() {
        let mut buf = PixelBuffer::filled(8, 8, Color::WHITE);
        buf.fbm_noise(4.0, 3, 0.5, 2.0, Some(3));
        // A 50/50 mix against white can never fall below 127.
        for &p in buf.pixels() {
            assert!(p.r >= 127);
        }
    }

    #[test]
    fn test_voronoi_zero_points_is_noop() {
        let mut buf = PixelBuffer::filled(8, 8, Color::gray(10));
        let original = buf.clone();
        buf.voronoi(0, 2.0, 1.0, Some(1));
        assert_eq!(buf, original);
    }

    #[test]
    fn test_voronoi_deterministic() {
        let mut a = PixelBuffer::filled(16, 16, Color::gray(128));
        let mut b = PixelBuffer::filled(16, 16, Color::gray(128));
        a.voronoi(5, 1.0, 2.0, Some(9));
        b.voronoi(5, 1.0, 2.0, Some(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_plasma_varies_channels() {
        let mut buf = PixelBuffer::filled(32, 32, Color::gray(128));
        buf.plasma();
        assert!(buf.unique_colors() > 8);
        assert_eq!(buf.pixel_count(), 1024);
    }

    #[test]
    fn test_noise_preserves_alpha() {
        let mut buf = PixelBuffer::filled(8, 8, Color::new(0, 0, 0, 200));
        buf.perlin_noise(4.0, 2, 0.5, 2.0, Some(5));
        assert!(buf.pixels().iter().all(|p| p.a == 200));
    }

    #[test]
    fn test_zero_scale_is_noop() {
        let mut buf = PixelBuffer::filled(8, 8, Color::gray(50));
        let original = buf.clone();
        buf.perlin_noise(0.0, 4, 0.5, 2.0, Some(1));
        buf.fbm_noise(-1.0, 4, 0.5, 2.0, Some(1));
        assert_eq!(buf, original);
    }
}
