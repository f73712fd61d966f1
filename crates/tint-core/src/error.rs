//! Error types for core color operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the core color types.
#[derive(Debug, Error)]
pub enum Error {
    /// A color-space tag that no supported model answers to.
    #[error("unknown color space tag: {tag:?}")]
    UnknownSpace {
        /// The tag as given by the caller.
        tag: String,
    },

    /// A text template referenced a component the model does not have,
    /// or was syntactically broken.
    #[error("bad format template: {detail}")]
    BadTemplate {
        /// What was wrong.
        detail: String,
    },
}
