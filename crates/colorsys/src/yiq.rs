//! YIQ color system.
//!
//! YIQ separates luma (Y) from two chrominance axes (I, Q) and is the
//! encoding used by NTSC composite video. The constants are the FCC NTSC
//! ones.
//!
//! # Range
//!
//! - Y: [0, 1]
//! - I, Q: signed, roughly [-0.6, 0.6]
//!
//! # Reference
//!
//! <https://en.wikipedia.org/wiki/YIQ>

use colorsys_math::saturate;

/// Converts RGB to YIQ.
///
/// Pure linear map: no branches, no clamping. I and Q may be negative.
///
/// # Formula
///
/// ```text
/// y = 0.30*r + 0.59*g + 0.11*b
/// i = 0.74*(r - y) - 0.27*(b - y)
/// q = 0.48*(r - y) + 0.41*(b - y)
/// ```
///
/// # Example
///
/// ```rust
/// use colorsys::yiq::rgb_to_yiq;
///
/// let (y, i, q) = rgb_to_yiq(1.0, 1.0, 1.0);
/// assert!((y - 1.0).abs() < 1e-12);
/// assert!(i.abs() < 1e-12 && q.abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);
    (y, i, q)
}

/// Converts YIQ to RGB, clamping each channel to [0, 1].
///
/// Arbitrary `(y, i, q)` triples can land outside the RGB cube; the
/// violated channels saturate at exactly 0.0 or 1.0.
///
/// # Formula
///
/// The coefficients are the inverse of [`rgb_to_yiq`]:
///
/// ```text
/// r = y + (0.27*q + 0.41*i) / (0.74*0.41 + 0.27*0.48)
/// b = y + (0.74*q - 0.48*i) / (0.74*0.41 + 0.27*0.48)
/// g = y - (0.30*(r - y) + 0.11*(b - y)) / 0.59
/// ```
///
/// # Example
///
/// ```rust
/// use colorsys::yiq::yiq_to_rgb;
///
/// // Far outside the cube
/// assert_eq!(yiq_to_rgb(1.0, 1.0, 1.0).0, 1.0);
/// assert_eq!(yiq_to_rgb(0.0, -1.0, 0.0).0, 0.0);
/// ```
#[inline]
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> (f64, f64, f64) {
    let r = y + 0.9468822170900693 * i + 0.6235565819861433 * q;
    let g = y - 0.27478764629897834 * i - 0.6356910791873801 * q;
    let b = y - 1.1085450346420322 * i + 1.7090069284064666 * q;
    (saturate(r), saturate(g), saturate(b))
}
