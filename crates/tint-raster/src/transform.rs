//! Geometric transforms: rotate, resize, scale, flip, crop.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use tint_core::Color;
use tracing::debug;

impl PixelBuffer {
    /// Rotates the buffer by an arbitrary angle in degrees.
    ///
    /// The result grows to the rotated bounding box
    /// `(|w cos| + |h sin|, |w sin| + |h cos|)`; every destination pixel
    /// is inverse-mapped through the rotation about the center and
    /// sampled nearest-neighbor. Pixels that fall outside the source are
    /// transparent.
    pub fn rotate(&mut self, degrees: f32) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let theta = degrees.to_radians();
        let (sin_t, cos_t) = theta.sin_cos();

        let w = self.width() as f32;
        let h = self.height() as f32;
        let new_w = (w * cos_t.abs() + h * sin_t.abs()).round().max(1.0) as usize;
        let new_h = (w * sin_t.abs() + h * cos_t.abs()).round().max(1.0) as usize;
        debug!(degrees, new_w, new_h, "rotate");

        let src_cx = (w - 1.0) / 2.0;
        let src_cy = (h - 1.0) / 2.0;
        let dst_cx = (new_w as f32 - 1.0) / 2.0;
        let dst_cy = (new_h as f32 - 1.0) / 2.0;

        let mut data = vec![Color::TRANSPARENT; new_w * new_h];
        for y in 0..new_h {
            for x in 0..new_w {
                // Inverse rotation of the destination coordinate.
                let dx = x as f32 - dst_cx;
                let dy = y as f32 - dst_cy;
                let sx = (dx * cos_t + dy * sin_t + src_cx).round();
                let sy = (-dx * sin_t + dy * cos_t + src_cy).round();
                if sx >= 0.0 && sy >= 0.0 {
                    if let Some(c) = self.get(sx as usize, sy as usize) {
                        data[y * new_w + x] = c;
                    }
                }
            }
        }
        self.replace(new_w, new_h, data);
    }

    /// Resizes the buffer.
    ///
    /// With `resize_image` the content is rescaled by bilinear
    /// interpolation from the four nearest source pixels; otherwise the
    /// canvas is padded/cropped without scaling and any new area takes
    /// `fill`. A `None` target dimension is inferred from the other via
    /// the aspect ratio. A non-positive inferred target makes the whole
    /// call a no-op.
    pub fn resize(
        &mut self,
        target_w: Option<usize>,
        target_h: Option<usize>,
        resize_image: bool,
        fill: Color,
    ) {
        let (new_w, new_h) = match self.infer_target(target_w, target_h) {
            Some(dims) => dims,
            None => return,
        };
        if new_w == self.width() && new_h == self.height() {
            return;
        }
        debug!(new_w, new_h, resize_image, "resize");

        let data = if resize_image && self.pixel_count() > 0 {
            self.bilinear_resample(new_w, new_h)
        } else {
            // Pad or crop, anchored at the top-left.
            let mut data = vec![fill; new_w * new_h];
            for y in 0..new_h.min(self.height()) {
                for x in 0..new_w.min(self.width()) {
                    data[y * new_w + x] = self.pixels()[self.index(x, y)];
                }
            }
            data
        };
        self.replace(new_w, new_h, data);
    }

    /// Uniformly scales both dimensions, rescaling the content.
    pub fn scale(&mut self, factor: f32) {
        if factor <= 0.0 {
            return;
        }
        let w = (self.width() as f32 * factor).round() as usize;
        let h = (self.height() as f32 * factor).round() as usize;
        self.resize(Some(w), Some(h), true, Color::TRANSPARENT);
    }

    fn infer_target(
        &self,
        target_w: Option<usize>,
        target_h: Option<usize>,
    ) -> Option<(usize, usize)> {
        let aspect = if self.height() == 0 {
            1.0
        } else {
            self.width() as f32 / self.height() as f32
        };
        let (w, h) = match (target_w, target_h) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, (w as f32 / aspect).round() as usize),
            (None, Some(h)) => ((h as f32 * aspect).round() as usize, h),
            (None, None) => return None,
        };
        if w == 0 || h == 0 {
            return None;
        }
        Some((w, h))
    }

    fn bilinear_resample(&self, new_w: usize, new_h: usize) -> Vec<Color> {
        let sx_scale = self.width() as f32 / new_w as f32;
        let sy_scale = self.height() as f32 / new_h as f32;
        let mut data = vec![Color::TRANSPARENT; new_w * new_h];

        for y in 0..new_h {
            let sy = ((y as f32 + 0.5) * sy_scale - 0.5).max(0.0);
            let y0 = sy as usize;
            let y1 = (y0 + 1).min(self.height() - 1);
            let fy = sy - y0 as f32;

            for x in 0..new_w {
                let sx = ((x as f32 + 0.5) * sx_scale - 0.5).max(0.0);
                let x0 = sx as usize;
                let x1 = (x0 + 1).min(self.width() - 1);
                let fx = sx - x0 as f32;

                let p00 = self.pixels()[self.index(x0, y0)].to_f32_array();
                let p10 = self.pixels()[self.index(x1, y0)].to_f32_array();
                let p01 = self.pixels()[self.index(x0, y1)].to_f32_array();
                let p11 = self.pixels()[self.index(x1, y1)].to_f32_array();

                let mut out = [0.0f32; 4];
                for c in 0..4 {
                    let top = p00[c] + (p10[c] - p00[c]) * fx;
                    let bottom = p01[c] + (p11[c] - p01[c]) * fx;
                    out[c] = top + (bottom - top) * fy;
                }
                data[y * new_w + x] = Color::from_f32_array(out);
            }
        }
        data
    }

    /// Mirrors the buffer left-right in place.
    pub fn flip_horizontal(&mut self) {
        let width = self.width();
        self.for_each_row(|_, row| {
            debug_assert_eq!(row.len(), width);
            row.reverse();
        });
    }

    /// Mirrors the buffer top-bottom in place.
    pub fn flip_vertical(&mut self) {
        let width = self.width();
        let height = self.height();
        for y in 0..height / 2 {
            let (top, rest) = self.pixels_mut().split_at_mut((height - 1 - y) * width);
            let top_row = &mut top[y * width..(y + 1) * width];
            let bottom_row = &mut rest[..width];
            top_row.swap_with_slice(bottom_row);
        }
    }

    /// Extracts a sub-rectangle, replacing the buffer contents.
    ///
    /// # Errors
    ///
    /// [`crate::RasterError::Region`] when the region exceeds bounds.
    pub fn crop(&mut self, x: usize, y: usize, w: usize, h: usize) -> Result<()> {
        self.check_region(x, y, w, h)?;
        let mut data = Vec::with_capacity(w * h);
        for row in y..y + h {
            let start = self.index(x, row);
            data.extend_from_slice(&self.pixels()[start..start + w]);
        }
        self.replace(w, h, data);
        Ok(())
    }
}
