//! # tonekit-ops
//!
//! Tone curve application for 16-bit RGB pixels.
//!
//! A curve (any [`CurveEval`](tonekit_curve::CurveEval), usually a
//! [`CurveModel`](tonekit_curve::CurveModel)) is sampled once into a
//! 65536-entry [`ToneCurve`]. A [`HuePreservingToneMapper`] then applies that
//! table per pixel, mapping the largest and smallest channel through the
//! curve and placing the middle channel proportionally between them.
//!
//! # Modules
//!
//! - [`tone_curve`] - 16-bit tone LUT building
//! - [`hue_preserving`] - Hue-preserving RGB mapping
//! - [`config`] - YAML tone curve settings
//! - [`parallel`] - Rayon buffer processing (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use tonekit_curve::CurveModel;
//! use tonekit_ops::HuePreservingToneMapper;
//!
//! // spline S-curve: kind 1, then x/y pairs
//! let curve = CurveModel::new(
//!     &[1.0, 0.0, 0.0, 0.25, 0.15, 0.75, 0.85, 1.0, 1.0],
//!     1000,
//! )
//! .unwrap();
//! let mapper = HuePreservingToneMapper::from_curve(&curve, 0.0).unwrap();
//!
//! let [r, g, b] = mapper.apply([50000.0, 30000.0, 12000.0]);
//! assert!(r > g && g > b);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod buffer;
mod error;
pub mod config;
pub mod hue_preserving;
pub mod tone_curve;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use buffer::apply_rgb_buffer;
pub use config::ToneCurveConfig;
pub use error::{OpsError, OpsResult};
pub use hue_preserving::{CommitPolicy, HuePreservingToneMapper};
pub use tone_curve::{ToneCurve, TONE_LUT_SIZE, TONE_MAX};

#[cfg(feature = "parallel")]
pub use parallel::par_apply_rgb_buffer;
