//! Conversion of interleaved pixel buffers.
//!
//! Buffers hold `channels` samples per pixel. The first three samples of
//! each pixel are converted, any further ones (alpha, masks) are left
//! alone. With the `parallel` feature (on by default) the buffer is split
//! into blocks of [`PIXELS_PER_TASK`] pixels and processed on rayon's pool.
//!
//! # Example
//!
//! ```rust
//! use colorsys::batch::convert_in_place;
//! use colorsys::ColorSystem;
//!
//! // Two RGBA pixels
//! let mut px = vec![1.0f32, 0.0, 0.0, 0.5, 0.0, 0.0, 1.0, 1.0];
//! convert_in_place(&mut px, 4, ColorSystem::Rgb, ColorSystem::Hsv).unwrap();
//! assert_eq!(px[..4], [0.0f32, 1.0, 1.0, 0.5]);
//! ```

use crate::{ColorError, ColorResult, ColorSystem, convert};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Pixels handed to one worker at a time.
pub const PIXELS_PER_TASK: usize = 4096;

/// A sample type that can be widened to `f64` for conversion.
pub trait Sample: Copy + Send + Sync {
    /// Widens to `f64`.
    fn to_f64(self) -> f64;
    /// Narrows from `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

fn validate(len: usize, channels: usize) -> ColorResult<()> {
    if channels < 3 {
        return Err(ColorError::InvalidChannels(channels));
    }
    if len % channels != 0 {
        return Err(ColorError::LengthMismatch { len, channels });
    }
    Ok(())
}

/// Converts every pixel of `data` from `from` to `to`, in place.
///
/// Each pixel gets exactly what [`convert`] would return for it, so the
/// result does not depend on the `parallel` feature.
///
/// # Errors
///
/// - [`ColorError::InvalidChannels`] if `channels < 3`
/// - [`ColorError::LengthMismatch`] if `data` is not a whole number of pixels
pub fn convert_in_place<T: Sample>(
    data: &mut [T],
    channels: usize,
    from: ColorSystem,
    to: ColorSystem,
) -> ColorResult<()> {
    validate(data.len(), channels)?;
    if from == to || data.is_empty() {
        trace!(%from, %to, len = data.len(), "nothing to convert");
        return Ok(());
    }

    debug!(%from, %to, pixels = data.len() / channels, channels, "converting buffer");

    let block = channels * PIXELS_PER_TASK;

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(block)
        .for_each(|chunk| convert_block(chunk, channels, from, to));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(block)
        .for_each(|chunk| convert_block(chunk, channels, from, to));

    Ok(())
}

/// Converts a copy of `src` and returns it.
///
/// # Example
///
/// ```rust
/// use colorsys::batch::convert_buffer;
/// use colorsys::ColorSystem;
///
/// let gray = [0.5f64, 0.5, 0.5];
/// let hls = convert_buffer(&gray, 3, ColorSystem::Rgb, ColorSystem::Hls).unwrap();
/// assert_eq!(hls, vec![0.0, 0.5, 0.0]);
/// ```
///
/// # Errors
///
/// Same as [`convert_in_place`].
pub fn convert_buffer<T: Sample>(
    src: &[T],
    channels: usize,
    from: ColorSystem,
    to: ColorSystem,
) -> ColorResult<Vec<T>> {
    validate(src.len(), channels)?;
    let mut out = src.to_vec();
    convert_in_place(&mut out, channels, from, to)?;
    Ok(out)
}

fn convert_block<T: Sample>(block: &mut [T], channels: usize, from: ColorSystem, to: ColorSystem) {
    for px in block.chunks_exact_mut(channels) {
        let (a, b, c) = convert(from, to, (px[0].to_f64(), px[1].to_f64(), px[2].to_f64()));
        px[0] = T::from_f64(a);
        px[1] = T::from_f64(b);
        px[2] = T::from_f64(c);
    }
}
