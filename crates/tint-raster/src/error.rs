//! Error types for pixel buffer operations.

use thiserror::Error;

/// Result type alias using [`RasterError`].
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors raised by buffer construction and region operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Raw pixel data does not match the stated dimensions.
    #[error("expected {expected} pixels for {width}x{height}, got {got}")]
    DataSize {
        /// Expected pixel count (`width * height`).
        expected: usize,
        /// Actual element count supplied.
        got: usize,
        /// Buffer width.
        width: usize,
        /// Buffer height.
        height: usize,
    },

    /// Rows of a 2-D constructor have unequal lengths.
    #[error("ragged rows: row {row} has {got} pixels, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        got: usize,
        /// Expected row length.
        expected: usize,
    },

    /// A region exceeds the buffer bounds.
    #[error("region {rw}x{rh} at ({rx}, {ry}) exceeds buffer {width}x{height}")]
    Region {
        /// Region X origin.
        rx: usize,
        /// Region Y origin.
        ry: usize,
        /// Region width.
        rw: usize,
        /// Region height.
        rh: usize,
        /// Buffer width.
        width: usize,
        /// Buffer height.
        height: usize,
    },
}
