//! Runtime color system tag and RGB-hub dispatch.
//!
//! The per-system functions are what callers normally use. [`ColorSystem`]
//! exists for code that picks the conversion at runtime, such as the
//! buffer routines in [`crate::batch`].

use std::fmt;

use crate::{hls, hsv, yiq};

/// A three-component color system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSystem {
    /// Red, Green, Blue.
    #[default]
    Rgb,
    /// Luma and two chrominance axes (NTSC).
    Yiq,
    /// Hue, Lightness, Saturation.
    Hls,
    /// Hue, Saturation, Value.
    Hsv,
}

impl ColorSystem {
    /// All supported systems.
    pub const ALL: [ColorSystem; 4] = [Self::Rgb, Self::Yiq, Self::Hls, Self::Hsv];

    /// Short upper-case name, e.g. `"HLS"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Yiq => "YIQ",
            Self::Hls => "HLS",
            Self::Hsv => "HSV",
        }
    }

    /// Converts an RGB triple into this system (RGB is the identity).
    #[inline]
    pub fn encode(self, (r, g, b): (f64, f64, f64)) -> (f64, f64, f64) {
        match self {
            Self::Rgb => (r, g, b),
            Self::Yiq => yiq::rgb_to_yiq(r, g, b),
            Self::Hls => hls::rgb_to_hls(r, g, b),
            Self::Hsv => hsv::rgb_to_hsv(r, g, b),
        }
    }

    /// Converts a triple in this system to RGB.
    #[inline]
    pub fn decode(self, (a, b, c): (f64, f64, f64)) -> (f64, f64, f64) {
        match self {
            Self::Rgb => (a, b, c),
            Self::Yiq => yiq::yiq_to_rgb(a, b, c),
            Self::Hls => hls::hls_to_rgb(a, b, c),
            Self::Hsv => hsv::hsv_to_rgb(a, b, c),
        }
    }
}

impl fmt::Display for ColorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts a triple between two systems, going through RGB.
///
/// Returns the input unchanged when `from == to`.
///
/// # Example
///
/// ```rust
/// use colorsys::{convert, ColorSystem};
///
/// let hsv = convert(ColorSystem::Hls, ColorSystem::Hsv, (0.0, 0.5, 1.0));
/// assert!((hsv.0 - 0.0).abs() < 1e-9);
/// assert!((hsv.1 - 1.0).abs() < 1e-9);
/// assert!((hsv.2 - 1.0).abs() < 1e-9);
/// ```
#[inline]
pub fn convert(from: ColorSystem, to: ColorSystem, color: (f64, f64, f64)) -> (f64, f64, f64) {
    if from == to {
        return color;
    }
    to.encode(from.decode(color))
}
