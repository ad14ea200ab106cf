//! # tonekit-curve
//!
//! Tone curves defined by control points.
//!
//! A [`CurveModel`] is built once from a raw point list (a [`CurveKind`]
//! code followed by interleaved `x, y` pairs) and evaluated many times.
//! Construction classifies the curve:
//!
//! - points on `y = x` spanning `[0, 1]` become an identity passthrough
//! - coincident first knots at `x = 0` or `x = 1` are pulled apart
//! - spline curves with fewer than three points fall back to linear
//!
//! Spline curves precompute natural cubic spline second derivatives; both
//! linear and spline evaluation locate the knot interval by bisection.
//!
//! # Usage
//!
//! ```rust
//! use tonekit_curve::{ControlPoint, CurveEval, CurveKind, CurveModel};
//!
//! let curve = CurveModel::from_points(
//!     CurveKind::Spline,
//!     &[
//!         ControlPoint::new(0.0, 0.0),
//!         ControlPoint::new(0.25, 0.15),
//!         ControlPoint::new(0.75, 0.85),
//!         ControlPoint::new(1.0, 1.0),
//!     ],
//!     1000,
//! )
//! .unwrap();
//!
//! let y = curve.eval(0.25);
//! assert!((y - 0.15).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`serde`] - Serializable kinds and control points
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Construction diagnostics
//!
//! # Used By
//!
//! - `tonekit-ops` - Tone LUT building

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod eval;
mod kind;
mod model;
pub mod spline;

pub use error::{CurveError, CurveResult};
pub use eval::CurveEval;
pub use kind::{ControlPoint, CurveKind};
pub use model::{CurveModel, DEFAULT_RESOLUTION_HINT, IDENTITY_TOLERANCE, MAX_RESOLUTION_HINT};
