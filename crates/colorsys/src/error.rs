//! Error types for buffer conversion.
//!
//! The scalar conversions are total and never fail. Only the batch layer
//! can reject input, and only because of the buffer's shape.

use thiserror::Error;

/// Buffer conversion error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Fewer than three channels per pixel.
    #[error("invalid channel count: {0} (need at least 3)")]
    InvalidChannels(usize),

    /// Buffer length is not a whole number of pixels.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    LengthMismatch {
        /// Number of samples in the buffer.
        len: usize,
        /// Samples per pixel.
        channels: usize,
    },
}

/// Result type for buffer conversion.
pub type ColorResult<T> = Result<T, ColorError>;
