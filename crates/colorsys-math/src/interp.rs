//! Interpolation and clamping utilities for hue-based color models.
//!
//! - Trapezoidal hue profile ([`hue_ramp`])
//! - Range clamps that let NaN through ([`clamp`], [`saturate`])

use crate::{ONE_SIXTH, TWO_THIRDS};

/// Evaluates the trapezoidal hue profile between two lightness anchors.
///
/// `m1` is the low anchor, `m2` the high anchor. The hue `h` is first
/// brought into `[0, 1]` by a single add or subtract of one, then:
///
/// | hue range | result |
/// |-----------|--------|
/// | `h < 1/6` | ramp `m1 -> m2` |
/// | `1/6 <= h < 1/2` | `m2` |
/// | `1/2 <= h < 2/3` | ramp `m2 -> m1` |
/// | `h >= 2/3` | `m1` |
///
/// Evaluated at `h + 1/3`, `h` and `h - 1/3` it yields the red, green
/// and blue channels of an HLS color.
///
/// # Example
///
/// ```rust
/// use colorsys_math::hue_ramp;
///
/// assert_eq!(hue_ramp(0.0, 1.0, 0.0), 0.0);
/// assert_eq!(hue_ramp(0.0, 1.0, 0.25), 1.0);
/// assert_eq!(hue_ramp(0.0, 1.0, 0.9), 0.0);
/// // Negative hue wraps once
/// assert_eq!(hue_ramp(0.0, 1.0, -0.75), 1.0);
/// ```
#[inline]
pub fn hue_ramp(m1: f64, m2: f64, h: f64) -> f64 {
    let mut h = h;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if h < ONE_SIXTH {
        m1 + (m2 - m1) * 6.0 * h
    } else if h < 0.5 {
        m2
    } else if h < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - h) * 6.0
    } else {
        m1
    }
}

/// Clamps a value to the range [min, max].
///
/// NaN is returned unchanged.
///
/// # Example
///
/// ```rust
/// use colorsys_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn saturate(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ramp_segments() {
        let (m1, m2) = (0.2, 0.8);
        assert_eq!(hue_ramp(m1, m2, 0.0), m1);
        assert_abs_diff_eq!(hue_ramp(m1, m2, 1.0 / 12.0), 0.5, epsilon = 1e-12);
        assert_eq!(hue_ramp(m1, m2, ONE_SIXTH), m2);
        assert_eq!(hue_ramp(m1, m2, 0.4), m2);
        assert_abs_diff_eq!(hue_ramp(m1, m2, 0.5), m2, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_ramp(m1, m2, 7.0 / 12.0), 0.5, epsilon = 1e-12);
        assert_eq!(hue_ramp(m1, m2, TWO_THIRDS), m1);
        assert_eq!(hue_ramp(m1, m2, 0.99), m1);
    }

    #[test]
    fn test_ramp_wraps_once() {
        let (m1, m2) = (0.0, 1.0);
        assert_abs_diff_eq!(hue_ramp(m1, m2, -0.9), hue_ramp(m1, m2, 0.1), epsilon = 1e-12);
        assert_abs_diff_eq!(hue_ramp(m1, m2, 1.1), hue_ramp(m1, m2, 0.1), epsilon = 1e-12);
        // Exactly 1.0 is not wrapped and lands on the low plateau
        assert_eq!(hue_ramp(m1, m2, 1.0), m1);
    }

    #[test]
    fn test_ramp_continuous_at_edges() {
        let (m1, m2) = (0.1, 0.7);
        let eps = 1e-9;
        for edge in [ONE_SIXTH, 0.5, TWO_THIRDS] {
            let below = hue_ramp(m1, m2, edge - eps);
            let above = hue_ramp(m1, m2, edge + eps);
            assert_abs_diff_eq!(below, above, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.5), 0.5);
        assert_eq!(saturate(1.5), 1.0);
        assert!(saturate(f64::NAN).is_nan());
    }
}
