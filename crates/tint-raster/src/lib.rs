//! # tint-raster
//!
//! Pixel buffers and raster operations for the tint engine.
//!
//! [`PixelBuffer`] is a row-major grid of [`tint_core::Color`] with
//! geometric transforms, separable convolution filters, procedural
//! generators (Perlin/simplex/fBm, Voronoi, plasma, diamond-square
//! terrain), compositing, and flat sequence operations.
//!
//! Large buffers process rows in parallel through `rayon` (the
//! `parallel` feature, on by default); callers only ever observe the
//! finished buffer. Buffers are exclusively owned: no internal locking,
//! one writer at a time.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//! use tint_raster::PixelBuffer;
//!
//! let mut buf = PixelBuffer::filled(64, 64, Color::gray(128));
//! buf.gaussian_blur(1.5);
//! buf.posterize(4);
//! assert_eq!(buf.pixel_count(), 64 * 64);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod composite;
pub mod error;
pub mod filter;
pub mod noise;
pub mod terrain;
pub mod transform;

pub use buffer::PixelBuffer;
pub use error::{RasterError, Result};
pub use noise::{PermTable, fbm2, perlin2, simplex2};
