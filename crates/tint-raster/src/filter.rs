//! Convolution and quantization filters.
//!
//! The box blur is separable with rolling window sums, so its cost is
//! O(w*h) regardless of radius. The Gaussian runs two passes of a 1-D
//! kernel of radius `ceil(3*sigma)`. Degenerate parameters (zero or
//! negative radius/sigma/size) are defined as no-ops.

use crate::buffer::PixelBuffer;
use tint_core::Color;
use tracing::debug;

impl PixelBuffer {
    /// Separable box blur with the given radius.
    ///
    /// `radius <= 0` is a no-op. Edges clamp (the border pixel is
    /// repeated outside the buffer).
    pub fn blur(&mut self, radius: i32) {
        if radius <= 0 || self.width() == 0 || self.height() == 0 {
            return;
        }
        let radius = radius as usize;
        debug!(radius, "box blur");

        let horizontal = blur_rows(self.pixels(), self.width(), self.height(), radius);
        let transposed = transpose(&horizontal, self.width(), self.height());
        let vertical = blur_rows(&transposed, self.height(), self.width(), radius);
        let data = transpose(&vertical, self.height(), self.width());
        let (w, h) = (self.width(), self.height());
        self.replace(w, h, data);
    }

    /// Gaussian blur with standard deviation `sigma`.
    ///
    /// The 1-D kernel has radius `ceil(3*sigma)` and is normalized to
    /// sum 1; it runs horizontally then vertically. `sigma <= 0` is a
    /// no-op.
    pub fn gaussian_blur(&mut self, sigma: f32) {
        if sigma <= 0.0 || self.width() == 0 || self.height() == 0 {
            return;
        }
        let radius = (3.0 * sigma).ceil() as usize;
        let mut kernel = Vec::with_capacity(2 * radius + 1);
        let denom = 2.0 * sigma * sigma;
        for i in -(radius as i32)..=(radius as i32) {
            kernel.push((-(i * i) as f32 / denom).exp());
        }
        let sum: f32 = kernel.iter().sum();
        for w in &mut kernel {
            *w /= sum;
        }
        debug!(sigma, radius, "gaussian blur");

        let horizontal = convolve_rows(self.pixels(), self.width(), self.height(), &kernel);
        let transposed = transpose(&horizontal, self.width(), self.height());
        let vertical = convolve_rows(&transposed, self.height(), self.width(), &kernel);
        let data = transpose(&vertical, self.height(), self.width());
        let (w, h) = (self.width(), self.height());
        self.replace(w, h, data);
    }

    /// Unsharp-mask sharpen.
    ///
    /// `out = center * (4*amount + 1) - sum(4 neighbors) * amount`,
    /// clamped per channel. `amount <= 0` is a no-op.
    pub fn sharpen(&mut self, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        let src = self.clone();
        let w = src.width();
        let h = src.height();
        let center_weight = 4.0 * amount + 1.0;
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let center = src.pixels()[y * w + x].to_f32_array();
                let mut acc = [0.0f32; 4];
                for (nx, ny) in neighbors4(x, y, w, h) {
                    let p = src.pixels()[ny * w + nx].to_f32_array();
                    for c in 0..4 {
                        acc[c] += p[c];
                    }
                }
                let mut out = [0.0f32; 4];
                for c in 0..4 {
                    out[c] = center[c] * center_weight - acc[c] * amount;
                }
                out[3] = center[3];
                *px = Color::from_f32_array(out);
            }
        });
    }

    /// Emboss: diagonal difference plus a mid-gray offset.
    ///
    /// Border pixels are forced to opaque mid-gray.
    pub fn emboss(&mut self) {
        let src = self.clone();
        let w = src.width();
        let h = src.height();
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    *px = Color::gray(128);
                    continue;
                }
                let a = src.pixels()[(y + 1) * w + (x + 1)].to_f32_array();
                let b = src.pixels()[(y - 1) * w + (x - 1)].to_f32_array();
                let mut out = [0.0f32; 4];
                for c in 0..3 {
                    out[c] = a[c] - b[c] + 0.5;
                }
                out[3] = 1.0;
                *px = Color::from_f32_array(out);
            }
        });
    }

    /// Laplacian edge detection (`8`-center kernel).
    ///
    /// Border pixels are forced to opaque black.
    pub fn edge_detect(&mut self) {
        let src = self.clone();
        let w = src.width();
        let h = src.height();
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    *px = Color::BLACK;
                    continue;
                }
                let mut out = [0.0f32; 4];
                let center = src.pixels()[y * w + x].to_f32_array();
                for c in 0..3 {
                    out[c] = center[c] * 8.0;
                }
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let p = src.pixels()
                            [((y as i32 + dy) as usize) * w + (x as i32 + dx) as usize]
                            .to_f32_array();
                        for c in 0..3 {
                            out[c] -= p[c];
                        }
                    }
                }
                out[3] = 1.0;
                *px = Color::from_f32_array(out);
            }
        });
    }

    /// Quantizes each channel to `levels` evenly spaced values.
    ///
    /// `levels` clamps to [2, 256]. The quantizer is
    /// `round(round(c / step) * step)` with `step = 255 / (levels - 1)`.
    pub fn posterize(&mut self, levels: u32) {
        let levels = levels.clamp(2, 256);
        let step = 255.0 / (levels - 1) as f32;
        self.map_pixels(|c| {
            c.map_rgb(|v| ((v as f32 / step).round() * step).round().clamp(0.0, 255.0) as u8)
        });
    }

    /// Replaces each `size x size` block with its average color.
    ///
    /// `size <= 1` is a no-op.
    pub fn pixelate(&mut self, size: usize) {
        if size <= 1 || self.width() == 0 || self.height() == 0 {
            return;
        }
        let w = self.width();
        let h = self.height();
        for by in (0..h).step_by(size) {
            for bx in (0..w).step_by(size) {
                let bw = size.min(w - bx);
                let bh = size.min(h - by);
                // check_region cannot fail here: the block is clipped.
                let avg = match self.average_color(bx, by, bw, bh) {
                    Ok(c) => c,
                    Err(_) => continue,
                };
                for y in by..by + bh {
                    for x in bx..bx + bw {
                        self.set(x, y, avg);
                    }
                }
            }
        }
    }
}

/// Clamped 4-neighborhood of a pixel.
fn neighbors4(x: usize, y: usize, w: usize, h: usize) -> [(usize, usize); 4] {
    [
        (x.saturating_sub(1), y),
        ((x + 1).min(w - 1), y),
        (x, y.saturating_sub(1)),
        (x, (y + 1).min(h - 1)),
    ]
}

/// Rolling-sum box blur over each row; cost independent of radius.
fn blur_rows(src: &[Color], width: usize, height: usize, radius: usize) -> Vec<Color> {
    let mut dst = vec![Color::TRANSPARENT; src.len()];
    let window = (2 * radius + 1) as f32;

    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];

        // Prime the window with the clamped left edge.
        let mut sum = [0.0f32; 4];
        for k in 0..=radius {
            let p = row[k.min(width - 1)].to_f32_array();
            for c in 0..4 {
                sum[c] += p[c];
            }
        }
        let edge = row[0].to_f32_array();
        for c in 0..4 {
            sum[c] += edge[c] * radius as f32;
        }

        for x in 0..width {
            let mut avg = [0.0f32; 4];
            for c in 0..4 {
                avg[c] = sum[c] / window;
            }
            out[x] = Color::from_f32_array(avg);

            let leaving = row[x.saturating_sub(radius)].to_f32_array();
            let entering = row[(x + radius + 1).min(width - 1)].to_f32_array();
            for c in 0..4 {
                sum[c] += entering[c] - leaving[c];
            }
        }
    }
    dst
}

/// 1-D convolution of each row with a normalized kernel.
fn convolve_rows(src: &[Color], width: usize, height: usize, kernel: &[f32]) -> Vec<Color> {
    let radius = kernel.len() / 2;
    let mut dst = vec![Color::TRANSPARENT; src.len()];

    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];
        for x in 0..width {
            let mut acc = [0.0f32; 4];
            for (k, &kw) in kernel.iter().enumerate() {
                let sx = (x + k).saturating_sub(radius).min(width - 1);
                let p = row[sx].to_f32_array();
                for c in 0..4 {
                    acc[c] += p[c] * kw;
                }
            }
            out[x] = Color::from_f32_array(acc);
        }
    }
    dst
}

/// Transposes a row-major grid so columns become rows.
fn transpose(src: &[Color], width: usize, height: usize) -> Vec<Color> {
    let mut dst = vec![Color::TRANSPARENT; src.len()];
    for y in 0..height {
        for x in 0..width {
            dst[x * height + y] = src[y * width + x];
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_zero_is_noop() {
        let mut buf = PixelBuffer::filled(4, 4, Color::rgb(10, 20, 30));
        let original = buf.clone();
        buf.blur(0);
        buf.blur(-3);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_gaussian_zero_is_noop() {
        let mut buf = PixelBuffer::filled(4, 4, Color::rgb(10, 20, 30));
        let original = buf.clone();
        buf.gaussian_blur(0.0);
        buf.gaussian_blur(-1.0);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_blur_preserves_constant() {
        let mut buf = PixelBuffer::filled(16, 16, Color::rgb(100, 150, 200));
        buf.blur(3);
        for &p in buf.pixels() {
            assert!((p.r as i32 - 100).abs() <= 1);
            assert!((p.g as i32 - 150).abs() <= 1);
            assert!((p.b as i32 - 200).abs() <= 1);
        }
    }

    #[test]
    fn test_blur_spreads_spike() {
        let mut buf = PixelBuffer::filled(9, 9, Color::BLACK);
        buf.set(4, 4, Color::WHITE);
        buf.blur(1);
        // The spike leaks into its neighborhood.
        assert!(buf.get(3, 4).unwrap().r > 0);
        assert!(buf.get(4, 4).unwrap().r < 255);
        assert_eq!(buf.get(0, 0).unwrap().r, 0);
    }

    #[test]
    fn test_gaussian_preserves_constant() {
        let mut buf = PixelBuffer::filled(12, 12, Color::gray(77));
        buf.gaussian_blur(1.5);
        for &p in buf.pixels() {
            assert!((p.r as i32 - 77).abs() <= 1);
        }
    }

    #[test]
    fn test_sharpen_boosts_contrast() {
        let mut buf = PixelBuffer::filled(8, 8, Color::gray(100));
        buf.set(4, 4, Color::gray(200));
        buf.sharpen(1.0);
        // The bright pixel gets brighter against its neighbors.
        assert!(buf.get(4, 4).unwrap().r > 200);
        let mut noop = PixelBuffer::filled(4, 4, Color::gray(10));
        let original = noop.clone();
        noop.sharpen(0.0);
        assert_eq!(noop, original);
    }

    #[test]
    fn test_emboss_flat_is_mid_gray() {
        let mut buf = PixelBuffer::filled(6, 6, Color::rgb(90, 120, 30));
        buf.emboss();
        // Flat interior embosses to mid-gray; border is forced there too.
        for &p in buf.pixels() {
            assert_eq!(p, Color::gray(128));
        }
    }

    #[test]
    fn test_edge_detect_flat_is_black() {
        let mut buf = PixelBuffer::filled(6, 6, Color::gray(200));
        buf.edge_detect();
        for &p in buf.pixels() {
            assert_eq!(p, Color::BLACK);
        }
    }

    #[test]
    fn test_edge_detect_finds_spike() {
        let mut buf = PixelBuffer::filled(5, 5, Color::BLACK);
        buf.set(2, 2, Color::WHITE);
        buf.edge_detect();
        assert_eq!(buf.get(2, 2).unwrap().r, 255);
    }

    #[test]
    fn test_posterize_two_levels() {
        let mut buf = PixelBuffer::filled(4, 4, Color::gray(100));
        buf.set(0, 0, Color::gray(200));
        buf.posterize(2);
        for &p in buf.pixels() {
            assert!(p.r == 0 || p.r == 255, "{p:?}");
        }
        assert_eq!(buf.get(0, 0).unwrap().r, 255);
        assert_eq!(buf.get(1, 1).unwrap().r, 0);
    }

    #[test]
    fn test_posterize_clamps_levels() {
        let mut buf = PixelBuffer::filled(2, 2, Color::gray(100));
        // 0 and 1 clamp to 2 levels.
        buf.posterize(0);
        assert!(buf.pixels().iter().all(|p| p.r == 0 || p.r == 255));
    }

    #[test]
    fn test_posterize_256_is_identity() {
        let mut buf = PixelBuffer::filled(2, 2, Color::rgb(3, 130, 251));
        let original = buf.clone();
        buf.posterize(256);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_pixelate_averages_blocks() {
        let mut buf = PixelBuffer::filled(4, 4, Color::BLACK);
        buf.set(0, 0, Color::WHITE);
        buf.pixelate(2);
        // Top-left block averages one white and three black pixels.
        let avg = buf.get(0, 0).unwrap();
        assert_eq!(avg, buf.get(1, 1).unwrap());
        assert!(avg.r > 0 && avg.r < 255);
        // Other blocks stay black.
        assert_eq!(buf.get(3, 3).unwrap().r, 0);
    }

    #[test]
    fn test_pixelate_one_is_noop() {
        let mut buf = PixelBuffer::filled(4, 4, Color::gray(42));
        let original = buf.clone();
        buf.pixelate(1);
        buf.pixelate(0);
        assert_eq!(buf, original);
    }
}
