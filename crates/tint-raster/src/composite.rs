//! Compositing and reduction: overlay, average color.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use tint_core::Color;
use tracing::debug;

impl PixelBuffer {
    /// Alpha-blends `src` onto this buffer with its top-left corner at
    /// `(x, y)` (may be negative) and a global `opacity` in [0, 1].
    ///
    /// Fully transparent source pixels are skipped, leaving the
    /// destination untouched.
    pub fn overlay(&mut self, src: &PixelBuffer, x: isize, y: isize, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity == 0.0 {
            return;
        }
        debug!(x, y, opacity, src_w = src.width(), src_h = src.height(), "overlay");

        for sy in 0..src.height() {
            let dy = y + sy as isize;
            if dy < 0 || dy as usize >= self.height() {
                continue;
            }
            for sx in 0..src.width() {
                let dx = x + sx as isize;
                if dx < 0 || dx as usize >= self.width() {
                    continue;
                }
                let top = src.pixels()[sy * src.width() + sx];
                if top.is_transparent() {
                    continue;
                }
                let idx = self.index(dx as usize, dy as usize);
                let under = self.pixels()[idx];
                self.pixels_mut()[idx] = top.over(under, opacity);
            }
        }
    }

    /// Mean channel values over a sub-rectangle.
    ///
    /// # Errors
    ///
    /// [`crate::RasterError::Region`] when the rectangle exceeds bounds.
    pub fn average_color(&self, x: usize, y: usize, w: usize, h: usize) -> Result<Color> {
        self.check_region(x, y, w, h)?;
        if w == 0 || h == 0 {
            return Ok(Color::TRANSPARENT);
        }
        let mut acc = [0u64; 4];
        for row in y..y + h {
            for col in x..x + w {
                let c = self.pixels()[self.index(col, row)];
                acc[0] += c.r as u64;
                acc[1] += c.g as u64;
                acc[2] += c.b as u64;
                acc[3] += c.a as u64;
            }
        }
        let n = (w * h) as u64;
        Ok(Color::new(
            (acc[0] / n) as u8,
            (acc[1] / n) as u8,
            (acc[2] / n) as u8,
            (acc[3] / n) as u8,
        ))
    }

    /// Mean channel values over the whole buffer.
    pub fn average_color_all(&self) -> Color {
        self.average_color(0, 0, self.width(), self.height())
            .unwrap_or(Color::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_opaque_replaces() {
        let mut dst = PixelBuffer::filled(4, 4, Color::rgb(0, 0, 255));
        let src = PixelBuffer::filled(2, 2, Color::rgb(255, 0, 0));
        dst.overlay(&src, 1, 1, 1.0);
        assert_eq!(dst.get(1, 1), Some(Color::rgb(255, 0, 0)));
        assert_eq!(dst.get(0, 0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(dst.pixel_count(), 16);
    }

    #[test]
    fn test_overlay_skips_transparent_source() {
        let mut dst = PixelBuffer::filled(2, 2, Color::rgb(0, 0, 255));
        let src = PixelBuffer::new(2, 2);
        dst.overlay(&src, 0, 0, 1.0);
        assert_eq!(dst.get(0, 0), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn test_overlay_negative_origin_clips() {
        let mut dst = PixelBuffer::filled(2, 2, Color::BLACK);
        let src = PixelBuffer::filled(2, 2, Color::WHITE);
        dst.overlay(&src, -1, -1, 1.0);
        assert_eq!(dst.get(0, 0), Some(Color::WHITE));
        assert_eq!(dst.get(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_overlay_half_opacity() {
        let mut dst = PixelBuffer::filled(1, 1, Color::BLACK);
        let src = PixelBuffer::filled(1, 1, Color::WHITE);
        dst.overlay(&src, 0, 0, 0.5);
        let c = dst.get(0, 0).unwrap();
        assert!(c.r > 100 && c.r < 160);
    }

    #[test]
    fn test_average_color_region() {
        let mut buf = PixelBuffer::filled(2, 2, Color::BLACK);
        buf.set(0, 0, Color::WHITE);
        let avg = buf.average_color(0, 0, 2, 1).unwrap();
        assert_eq!(avg.r, 127);
        assert!(buf.average_color(1, 1, 2, 2).is_err());
    }

    #[test]
    fn test_average_color_all() {
        let buf = PixelBuffer::filled(3, 3, Color::rgb(60, 90, 120));
        assert_eq!(buf.average_color_all(), Color::rgb(60, 90, 120));
    }
}
