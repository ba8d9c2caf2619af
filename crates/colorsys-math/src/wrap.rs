//! Float modulo with truncating division.
//!
//! Hue arithmetic in this workspace wraps with `x - trunc(x / d) * d`.
//! The result keeps the sign of `x`, so a negative hue stays negative
//! and callers that need `[0, 1)` add one themselves.

/// Wraps `value` by `divisor` using truncation toward zero.
///
/// # Formula
///
/// `value - trunc(value / divisor) * divisor`
///
/// This differs from [`f64::rem_euclid`] for negative inputs:
/// `wrap_mod(-0.25, 1.0)` is `-0.25`, not `0.75`.
///
/// # Example
///
/// ```rust
/// use colorsys_math::wrap_mod;
///
/// assert_eq!(wrap_mod(7.0, 6.0), 1.0);
/// assert_eq!(wrap_mod(-7.0, 6.0), -1.0);
/// assert_eq!(wrap_mod(0.5, 1.0), 0.5);
/// ```
#[inline]
pub fn wrap_mod(value: f64, divisor: f64) -> f64 {
    let quotient = (value / divisor).trunc();
    value - quotient * divisor
}
