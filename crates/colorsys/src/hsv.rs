//! HSV color system: Hue, Saturation, Value.
//!
//! A single-cone model. Value is the largest channel, saturation is the
//! channel range relative to it. The inverse splits the hue circle into
//! six 60 degree sectors.
//!
//! # Range
//!
//! - H: [0, 1)
//! - S, V: [0, 1]
//!
//! # Reference
//!
//! <https://en.wikipedia.org/wiki/HSL_and_HSV>

use crate::hue;
use colorsys_math::{max3, min3, wrap_mod};

/// Converts RGB to HSV.
///
/// Achromatic input returns `(0, 0, v)`.
///
/// # Example
///
/// ```rust
/// use colorsys::hsv::rgb_to_hsv;
///
/// assert_eq!(rgb_to_hsv(1.0, 0.0, 0.0), (0.0, 1.0, 1.0));
/// assert_eq!(rgb_to_hsv(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
/// ```
#[inline]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = max3(r, g, b);
    let minc = min3(r, g, b);
    let rangec = maxc - minc;
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let s = rangec / maxc;

    let h = hue::from_extrema(r, g, b, maxc, rangec);
    let mut h = wrap_mod(h / 6.0, 1.0);
    if h < 0.0 {
        h += 1.0;
    }
    (h, s, v)
}

/// Converts HSV to RGB.
///
/// Zero saturation returns the gray `(v, v, v)` regardless of hue.
///
/// The sector index is `trunc(h * 6)` wrapped with [`wrap_mod`]. Both
/// truncate toward zero, so `h = 1.0` lands back in sector 0 while a
/// negative hue below `-1/6` yields a negative sector and black.
///
/// | sector | hue | output |
/// |--------|-----|--------|
/// | 0 | red -> yellow | `(v, t, p)` |
/// | 1 | yellow -> green | `(q, v, p)` |
/// | 2 | green -> cyan | `(p, v, t)` |
/// | 3 | cyan -> blue | `(p, q, v)` |
/// | 4 | blue -> magenta | `(t, p, v)` |
/// | 5 | magenta -> red | `(v, p, q)` |
///
/// # Example
///
/// ```rust
/// use colorsys::hsv::hsv_to_rgb;
///
/// let (r, g, b) = hsv_to_rgb(5.0 / 6.0, 1.0, 0.5);
/// assert!((r - 0.5).abs() < 1e-6 && g.abs() < 1e-6 && (b - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let i = (h * 6.0).trunc();
    let f = (h * 6.0) - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match wrap_mod(i, 6.0) as i64 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => (0.0, 0.0, 0.0),
    }
}
