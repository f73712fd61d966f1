//! # tint-gradient
//!
//! Color ramps for the tint engine: sorted stops, geometry-aware position
//! mapping (linear / radial / conical), deliberate step banding, and a
//! flat text wire format.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//! use tint_gradient::{Gradient, GradientKind};
//!
//! let mut g = Gradient::new(GradientKind::Linear, Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
//! g.total_steps = 11;
//! assert_eq!(g.color_at_step(0), Color::rgb(255, 0, 0));
//! assert_eq!(g.color_at_step(10), Color::rgb(0, 0, 255));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod gradient;
pub mod position;
mod serial;

pub use error::{GradientError, Result};
pub use gradient::{ColorStop, Gradient, GradientKind, STOP_EPSILON};
