//! Error types for gradient construction and parsing.

use thiserror::Error;

/// Result type alias using [`GradientError`].
pub type Result<T> = std::result::Result<T, GradientError>;

/// Errors raised by gradient construction and the text format.
#[derive(Debug, Error)]
pub enum GradientError {
    /// A multi-stop constructor needs at least two colors.
    #[error("gradient needs at least 2 colors, got {got}")]
    TooFewStops {
        /// Number of colors supplied.
        got: usize,
    },

    /// The serialized form could not be parsed.
    #[error("malformed gradient text: {detail}")]
    Malformed {
        /// What was wrong.
        detail: String,
    },
}
