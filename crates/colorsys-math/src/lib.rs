//! # colorsys-math
//!
//! Numeric helpers shared by the `colorsys` conversion functions.
//!
//! - [`wrap_mod`] - float modulo with truncating (not flooring) division
//! - [`hue_ramp`] - trapezoidal hue profile used by the HLS inverse
//! - [`max3`], [`min3`] - channel extrema of an RGB triple
//! - [`clamp`], [`saturate`] - NaN-preserving range clamps
//!
//! # Design
//!
//! Everything here is `#[inline]`, allocation-free and stateless, so it can
//! run inside per-pixel loops on any number of threads.
//!
//! ```rust
//! use colorsys_math::{wrap_mod, hue_ramp};
//!
//! // Truncating modulo keeps the sign of the dividend
//! assert_eq!(wrap_mod(1.25, 1.0), 0.25);
//! assert_eq!(wrap_mod(-0.25, 1.0), -0.25);
//!
//! // Flat top of the hue profile
//! assert_eq!(hue_ramp(0.2, 0.8, 0.3), 0.8);
//! ```
//!
//! # Used By
//!
//! - `colorsys` - YIQ, HLS and HSV conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod extrema;
mod interp;
mod wrap;

pub use extrema::*;
pub use interp::*;
pub use wrap::*;

/// One third of the hue circle (120 degrees).
pub const ONE_THIRD: f64 = 1.0 / 3.0;

/// One sixth of the hue circle (60 degrees), the width of a hue sector.
pub const ONE_SIXTH: f64 = 1.0 / 6.0;

/// Two thirds of the hue circle (240 degrees).
pub const TWO_THIRDS: f64 = 2.0 / 3.0;
