//! HLS color system: Hue, Lightness, Saturation.
//!
//! A double-cone model. Lightness is the midpoint of the largest and
//! smallest channels; saturation is measured relative to the distance
//! from the nearer of black or white.
//!
//! # Range
//!
//! - H: hue as a fraction of the circle. Colors whose red channel is the
//!   maximum and whose blue exceeds green report a hue in (-1/6, 0);
//!   [`hls_to_rgb`] accepts those as-is.
//! - L, S: [0, 1]
//!
//! # Reference
//!
//! <https://en.wikipedia.org/wiki/HSL_and_HSV>

use crate::hue;
use colorsys_math::{ONE_THIRD, hue_ramp, max3, min3, wrap_mod};

/// Converts RGB to HLS.
///
/// Achromatic input (all channels equal) returns hue 0 and saturation 0.
///
/// # Example
///
/// ```rust
/// use colorsys::hls::rgb_to_hls;
///
/// assert_eq!(rgb_to_hls(1.0, 1.0, 1.0), (0.0, 1.0, 0.0));
/// assert_eq!(rgb_to_hls(1.0, 0.0, 0.0), (0.0, 0.5, 1.0));
/// ```
#[inline]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = max3(r, g, b);
    let minc = min3(r, g, b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;
    if minc == maxc {
        return (0.0, l, 0.0);
    }

    // Upper half uses 2 - maxc - minc rather than 2 - sumc; they round differently.
    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };

    let h = hue::from_extrema(r, g, b, maxc, rangec);
    (wrap_mod(h / 6.0, 1.0), l, s)
}

/// Converts HLS to RGB.
///
/// Zero saturation returns the gray `(l, l, l)` regardless of hue.
///
/// # Example
///
/// ```rust
/// use colorsys::hls::hls_to_rgb;
///
/// assert_eq!(hls_to_rgb(0.7, 0.25, 0.0), (0.25, 0.25, 0.25));
/// ```
#[inline]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - (l * s)
    };
    let m1 = 2.0 * l - m2;
    (
        hue_ramp(m1, m2, h + ONE_THIRD),
        hue_ramp(m1, m2, h),
        hue_ramp(m1, m2, h - ONE_THIRD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_triple(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_abs_diff_eq!(actual.0, expected.0, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.1, expected.1, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.2, expected.2, epsilon = 1e-6);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hls(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hls(1.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(rgb_to_hls(0.5, 0.5, 0.5), (0.0, 0.5, 0.0));
    }

    #[test]
    fn test_primaries() {
        assert_triple(rgb_to_hls(1.0, 0.0, 0.0), (0.0, 0.5, 1.0));
        assert_triple(rgb_to_hls(0.0, 1.0, 0.0), (1.0 / 3.0, 0.5, 1.0));
        assert_triple(rgb_to_hls(0.0, 0.0, 1.0), (2.0 / 3.0, 0.5, 1.0));
    }

    #[test]
    fn test_light_saturation_branch() {
        // l > 0.5 uses the 2 - max - min denominator
        let (h, l, s) = rgb_to_hls(1.0, 0.6, 0.6);
        assert_abs_diff_eq!(h, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_light_saturation_denominator_form() {
        // 2 - sumc rounds differently here; the result must use 2 - maxc - minc
        let (maxc, minc) = (0.57, 0.44);
        let (_, l, s) = rgb_to_hls(maxc, minc, 0.5);
        assert!(l > 0.5);
        let explicit = (maxc - minc) / (2.0 - maxc - minc);
        let via_sum = (maxc - minc) / (2.0 - (maxc + minc));
        assert_ne!(explicit, via_sum);
        assert_eq!(s, explicit);
    }

    #[test]
    fn test_nan_propagates() {
        let nan = f64::NAN;
        for (r, g, b) in [(nan, 0.5, 0.5), (0.5, nan, 0.2), (0.1, 0.5, nan)] {
            let (h, l, s) = rgb_to_hls(r, g, b);
            assert!(
                h.is_nan() && l.is_nan() && s.is_nan(),
                "rgb_to_hls({}, {}, {}) = ({}, {}, {})",
                r,
                g,
                b,
                h,
                l,
                s
            );
        }
    }

    #[test]
    fn test_negative_hue_is_kept() {
        // Red max, blue above green: truncating wrap leaves the hue negative
        let (h, l, s) = rgb_to_hls(1.0, 0.0, 0.5);
        assert_abs_diff_eq!(h, -1.0 / 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
        assert_triple(hls_to_rgb(h, l, s), (1.0, 0.0, 0.5));
    }

    #[test]
    fn test_inverse_primaries() {
        assert_triple(hls_to_rgb(0.0, 0.5, 1.0), (1.0, 0.0, 0.0));
        assert_triple(hls_to_rgb(1.0 / 3.0, 0.5, 1.0), (0.0, 1.0, 0.0));
        assert_triple(hls_to_rgb(2.0 / 3.0, 0.5, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(hls_to_rgb(0.0, 1.0, 0.0), (1.0, 1.0, 1.0));
        assert_eq!(hls_to_rgb(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_roundtrip_mid() {
        let (h, l, s) = rgb_to_hls(0.2, 0.4, 0.6);
        assert_abs_diff_eq!(h, 7.0 / 12.0, epsilon = 1e-12);
        assert_triple(hls_to_rgb(h, l, s), (0.2, 0.4, 0.6));
    }
}
