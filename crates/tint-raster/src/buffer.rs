//! The [`PixelBuffer`]: a row-major grid of [`Color`].
//!
//! Pixels are stored in one flat `Vec<Color>` with
//! `index = y * width + x`. The buffer is exclusively owned by its
//! holder; every operation leaves `data.len() == width * height`.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//! use tint_raster::PixelBuffer;
//!
//! let mut buf = PixelBuffer::filled(4, 4, Color::WHITE);
//! buf.set(1, 2, Color::rgb(255, 0, 0));
//! assert_eq!(buf.get(1, 2), Some(Color::rgb(255, 0, 0)));
//! assert_eq!(buf.pixel_count(), 16);
//! ```

use crate::error::{RasterError, Result};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::cmp::Ordering;
use std::collections::HashSet;
use tint_core::Color;
use tint_gradient::Gradient;

/// Pixel count above which per-pixel loops go data-parallel.
#[cfg(feature = "parallel")]
pub(crate) const PARALLEL_THRESHOLD: usize = 64 * 64;

/// A row-major grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelBuffer {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// A fully transparent buffer.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Builds from packed `0xAARRGGBB` values in row-major order.
    ///
    /// # Errors
    ///
    /// [`RasterError::DataSize`] when the slice length is not
    /// `width * height`.
    pub fn from_argb(width: usize, height: usize, packed: &[u32]) -> Result<Self> {
        if packed.len() != width * height {
            return Err(RasterError::DataSize {
                expected: width * height,
                got: packed.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data: packed.iter().map(|&p| Color::from_argb(p)).collect(),
        })
    }

    /// Builds from rows of colors.
    ///
    /// # Errors
    ///
    /// [`RasterError::RaggedRows`] when rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(RasterError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: width,
                });
            }
        }
        Ok(Self {
            width,
            height,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// Rasterizes a gradient over the buffer geometry.
    ///
    /// The gradient center is the buffer midpoint and the normalizing
    /// radius is half the diagonal.
    pub fn from_gradient(width: usize, height: usize, gradient: &Gradient) -> Self {
        let mut buf = Self::new(width, height);
        buf.fill_gradient(gradient);
        buf
    }

    /// Overwrites every pixel from a gradient.
    pub fn fill_gradient(&mut self, gradient: &Gradient) {
        let cx = (self.width.saturating_sub(1)) as f32 / 2.0;
        let cy = (self.height.saturating_sub(1)) as f32 / 2.0;
        let max_radius =
            ((self.width * self.width + self.height * self.height) as f32).sqrt() / 2.0;
        self.for_each_row(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = gradient.color_at_point(x as f32, y as f32, cx, cy, max_radius);
            }
        });
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`, always `data.len()`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Flat index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes a pixel; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: Color) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = c;
        }
    }

    /// The flat pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// The flat pixel slice, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    /// Replaces the backing store. Internal: callers must keep
    /// `data.len() == width * height`.
    pub(crate) fn replace(&mut self, width: usize, height: usize, data: Vec<Color>) {
        debug_assert_eq!(data.len(), width * height);
        self.width = width;
        self.height = height;
        self.data = data;
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Packed `0xAARRGGBB` values in row-major order.
    pub fn to_argb_vec(&self) -> Vec<u32> {
        self.data.iter().map(|c| c.to_argb()).collect()
    }

    /// Row-major bytes (alpha, red, green, blue per pixel) at an
    /// arbitrary target size.
    ///
    /// When the target differs from the native size the buffer is
    /// resampled nearest-neighbor; no filtering is applied.
    pub fn to_argb_bytes(&self, target_w: usize, target_h: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(target_w * target_h * 4);
        if self.width == 0 || self.height == 0 {
            out.resize(target_w * target_h * 4, 0);
            return out;
        }
        for ty in 0..target_h {
            let sy = ty * self.height / target_h.max(1);
            for tx in 0..target_w {
                let sx = tx * self.width / target_w.max(1);
                let c = self.data[sy * self.width + sx];
                out.extend_from_slice(&[c.a, c.r, c.g, c.b]);
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Per-pixel iteration (parallel above the size threshold)
    // ------------------------------------------------------------------

    /// Runs `f` over every row, in parallel for large buffers.
    ///
    /// `f` receives the row index and the mutable row slice. Callers
    /// observe only the finished buffer.
    pub(crate) fn for_each_row<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [Color]) + Sync + Send,
    {
        if self.width == 0 {
            return;
        }
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if self.data.len() >= PARALLEL_THRESHOLD {
                self.data
                    .par_chunks_mut(self.width)
                    .enumerate()
                    .for_each(|(y, row)| f(y, row));
                return;
            }
        }
        for (y, row) in self.data.chunks_mut(self.width).enumerate() {
            f(y, row);
        }
    }

    /// Applies a color function to every pixel.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Color) -> Color + Sync + Send,
    {
        self.for_each_row(|_, row| {
            for px in row {
                *px = f(*px);
            }
        });
    }

    // ------------------------------------------------------------------
    // Sequence operations over the flat pixel list
    // ------------------------------------------------------------------

    /// Flat index of the first pixel equal to `c`.
    pub fn find(&self, c: Color) -> Option<usize> {
        self.data.iter().position(|&p| p == c)
    }

    /// Flat index of the last pixel equal to `c`.
    pub fn find_last(&self, c: Color) -> Option<usize> {
        self.data.iter().rposition(|&p| p == c)
    }

    /// Flat indices of every pixel equal to `c`.
    pub fn find_all(&self, c: Color) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == c)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of pixels equal to `c`.
    pub fn count(&self, c: Color) -> usize {
        self.data.iter().filter(|&&p| p == c).count()
    }

    /// Swaps two pixels by flat index; out-of-bounds indices are ignored.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i < self.data.len() && j < self.data.len() {
            self.data.swap(i, j);
        }
    }

    /// Sorts the flat pixel list by a comparator.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&Color, &Color) -> Ordering,
    {
        self.data.sort_by(cmp);
    }

    /// Shuffles the flat pixel list.
    ///
    /// `seed` pins the permutation; `None` draws from OS entropy.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        self.data.shuffle(&mut rng);
    }

    /// Number of distinct colors, keyed by packed ARGB.
    pub fn unique_colors(&self) -> usize {
        self.data
            .iter()
            .map(|c| c.to_argb())
            .collect::<HashSet<u32>>()
            .len()
    }

    // ------------------------------------------------------------------
    // Concatenation
    // ------------------------------------------------------------------

    /// Appends `other` to the right, padding the shorter buffer with
    /// transparent pixels.
    pub fn append_right(&mut self, other: &PixelBuffer) {
        let height = self.height.max(other.height);
        let width = self.width + other.width;
        let mut data = vec![Color::TRANSPARENT; width * height];
        for y in 0..height {
            for x in 0..self.width {
                if let Some(c) = self.get(x, y) {
                    data[y * width + x] = c;
                }
            }
            for x in 0..other.width {
                if let Some(c) = other.get(x, y) {
                    data[y * width + self.width + x] = c;
                }
            }
        }
        self.replace(width, height, data);
    }

    /// Appends `other` below, padding the narrower buffer with
    /// transparent pixels.
    pub fn append_bottom(&mut self, other: &PixelBuffer) {
        let width = self.width.max(other.width);
        let height = self.height + other.height;
        let mut data = vec![Color::TRANSPARENT; width * height];
        for y in 0..self.height {
            for x in 0..self.width {
                data[y * width + x] = self.data[y * self.width + x];
            }
        }
        for y in 0..other.height {
            for x in 0..other.width {
                data[(self.height + y) * width + x] = other.data[y * other.width + x];
            }
        }
        self.replace(width, height, data);
    }

    /// Validates a region against the buffer bounds.
    pub(crate) fn check_region(&self, rx: usize, ry: usize, rw: usize, rh: usize) -> Result<()> {
        if rx + rw > self.width || ry + rh > self.height {
            return Err(RasterError::Region {
                rx,
                ry,
                rw,
                rh,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_gradient::GradientKind;

    #[test]
    fn test_filled() {
        let buf = PixelBuffer::filled(3, 2, Color::rgb(1, 2, 3));
        assert_eq!(buf.pixel_count(), 6);
        assert_eq!(buf.get(2, 1), Some(Color::rgb(1, 2, 3)));
        assert_eq!(buf.get(3, 0), None);
    }

    #[test]
    fn test_from_argb_size_check() {
        assert!(PixelBuffer::from_argb(2, 2, &[0; 3]).is_err());
        let buf = PixelBuffer::from_argb(2, 1, &[0xFF123456, 0x00000000]).unwrap();
        assert_eq!(buf.get(0, 0), Some(Color::from_argb(0xFF123456)));
        assert!(buf.get(1, 0).unwrap().is_transparent());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![Color::BLACK; 2], vec![Color::BLACK; 3]];
        assert!(matches!(
            PixelBuffer::from_rows(&rows),
            Err(RasterError::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn test_index_layout() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(2, 1, Color::WHITE);
        assert_eq!(buf.index(2, 1), 6);
        assert_eq!(buf.pixels()[6], Color::WHITE);
    }

    #[test]
    fn test_argb_bytes_native() {
        let buf = PixelBuffer::filled(1, 1, Color::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(buf.to_argb_bytes(1, 1), vec![0x44, 0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_argb_bytes_resampled() {
        let mut buf = PixelBuffer::filled(2, 1, Color::BLACK);
        buf.set(1, 0, Color::WHITE);
        let bytes = buf.to_argb_bytes(4, 1);
        assert_eq!(bytes.len(), 16);
        // Left half black, right half white.
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[13], 255);
    }

    #[test]
    fn test_sequence_ops() {
        let mut buf = PixelBuffer::filled(2, 2, Color::BLACK);
        buf.set(1, 0, Color::WHITE);
        buf.set(0, 1, Color::WHITE);
        assert_eq!(buf.find(Color::WHITE), Some(1));
        assert_eq!(buf.find_last(Color::WHITE), Some(2));
        assert_eq!(buf.find_all(Color::WHITE), vec![1, 2]);
        assert_eq!(buf.count(Color::BLACK), 2);
        assert_eq!(buf.unique_colors(), 2);

        buf.swap(0, 1);
        assert_eq!(buf.get(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = PixelBuffer::from_gradient(
            8,
            8,
            &Gradient::new(GradientKind::Linear, Color::BLACK, Color::WHITE),
        );
        let mut b = a.clone();
        a.shuffle(Some(42));
        b.shuffle(Some(42));
        assert_eq!(a, b);
        assert_eq!(a.pixel_count(), 64);
    }

    #[test]
    fn test_sort_by_packed() {
        let mut buf = PixelBuffer::filled(2, 1, Color::WHITE);
        buf.set(0, 0, Color::BLACK);
        buf.swap(0, 1);
        buf.sort_by(|a, b| a.to_argb().cmp(&b.to_argb()));
        assert_eq!(buf.get(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_append_right_pads() {
        let mut a = PixelBuffer::filled(2, 1, Color::WHITE);
        let b = PixelBuffer::filled(1, 3, Color::BLACK);
        a.append_right(&b);
        assert_eq!((a.width(), a.height()), (3, 3));
        assert_eq!(a.pixel_count(), 9);
        // Padding below the short buffer is transparent.
        assert!(a.get(0, 2).unwrap().is_transparent());
        assert_eq!(a.get(2, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_append_bottom_pads() {
        let mut a = PixelBuffer::filled(1, 1, Color::WHITE);
        let b = PixelBuffer::filled(3, 1, Color::BLACK);
        a.append_bottom(&b);
        assert_eq!((a.width(), a.height()), (3, 2));
        assert!(a.get(2, 0).unwrap().is_transparent());
        assert_eq!(a.get(2, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_gradient_fill_spans() {
        let g = Gradient::new(GradientKind::Linear, Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
        let buf = PixelBuffer::from_gradient(32, 4, &g);
        let left = buf.get(0, 2).unwrap();
        let right = buf.get(31, 2).unwrap();
        assert!(left.r > left.b);
        assert!(right.b > right.r);
    }

    #[test]
    fn test_map_pixels() {
        let mut buf = PixelBuffer::filled(130, 130, Color::gray(100));
        buf.map_pixels(|c| c * 2.0);
        assert_eq!(buf.get(64, 64), Some(Color::new(200, 200, 200, 255)));
    }
}
