//! # colorsys
//!
//! Conversions between RGB and three other color systems.
//!
//! Every function takes a triple of `f64` and returns a triple. They are
//! pure: no allocation, no shared state, no configuration, so they can be
//! called from any number of threads inside per-pixel loops.
//!
//! # Supported Systems
//!
//! | System | Components | Forward | Inverse |
//! |--------|------------|---------|---------|
//! | [`yiq`] | Luma, In-phase, Quadrature | [`rgb_to_yiq`] | [`yiq_to_rgb`] (clamped) |
//! | [`hls`] | Hue, Lightness, Saturation | [`rgb_to_hls`] | [`hls_to_rgb`] |
//! | [`hsv`] | Hue, Saturation, Value | [`rgb_to_hsv`] | [`hsv_to_rgb`] |
//!
//! RGB, L, S, V and H are nominally in [0, 1]. I and Q are signed.
//! Inputs are not validated: out-of-range values and NaN flow through the
//! formulas as ordinary IEEE arithmetic. The only clamp is in
//! [`yiq_to_rgb`].
//!
//! # Usage
//!
//! ```rust
//! use colorsys::{rgb_to_hsv, hsv_to_rgb};
//!
//! let (h, s, v) = rgb_to_hsv(0.2, 0.4, 0.6);
//! let (r, g, b) = hsv_to_rgb(h, s, v);
//! assert!((r - 0.2).abs() < 1e-9);
//! assert!((g - 0.4).abs() < 1e-9);
//! assert!((b - 0.6).abs() < 1e-9);
//! ```
//!
//! # Buffers
//!
//! [`batch`] converts interleaved RGB/RGBA buffers between any two
//! systems, picked at runtime with [`ColorSystem`]. It runs on rayon when
//! the `parallel` feature is enabled (the default) and reports through
//! `tracing`.
//!
//! # Dependencies
//!
//! - [`colorsys_math`] - Hue wrapping and interpolation helpers
//!
//! # Reference
//!
//! CPython's `colorsys` module.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod error;
pub mod hls;
pub mod hsv;
pub mod system;
pub mod yiq;

mod hue;

pub use batch::{Sample, convert_buffer, convert_in_place};
pub use error::{ColorError, ColorResult};
pub use hls::{hls_to_rgb, rgb_to_hls};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use system::{ColorSystem, convert};
pub use yiq::{rgb_to_yiq, yiq_to_rgb};
