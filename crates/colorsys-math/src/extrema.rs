//! Channel extrema.
//!
//! Unlike [`f64::max`] and [`f64::min`], a NaN channel makes the result
//! NaN instead of being skipped.

/// Largest of three channel values, or NaN if any channel is NaN.
///
/// ```rust
/// use colorsys_math::max3;
///
/// assert_eq!(max3(0.2, 0.9, 0.4), 0.9);
/// assert!(max3(f64::NAN, 0.9, 0.4).is_nan());
/// ```
#[inline]
pub fn max3(a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return f64::NAN;
    }
    a.max(b).max(c)
}

/// Smallest of three channel values, or NaN if any channel is NaN.
///
/// ```rust
/// use colorsys_math::min3;
///
/// assert_eq!(min3(0.2, 0.9, 0.4), 0.2);
/// assert!(min3(0.2, 0.9, f64::NAN).is_nan());
/// ```
#[inline]
pub fn min3(a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return f64::NAN;
    }
    a.min(b).min(c)
}
