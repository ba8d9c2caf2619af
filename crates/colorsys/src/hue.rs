//! Hue extraction shared by the HLS and HSV forward transforms.

/// Raw hue in sixths of the circle, in roughly `[-1, 5]`.
///
/// `maxc` must be the largest channel and `rangec` the non-zero
/// distance between the largest and smallest channel. Ties are broken
/// red first, then green.
#[inline]
pub(crate) fn from_extrema(r: f64, g: f64, b: f64, maxc: f64, rangec: f64) -> f64 {
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    }
}
