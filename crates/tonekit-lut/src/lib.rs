//! # tonekit-lut
//!
//! Dense, bounds-guarded lookup tables used on the per-pixel path of
//! tone curve application.
//!
//! The central type is [`FastLookupTable`]: a flat `f32` array that can be
//! read with an integer index (clamped to the table) or with a fractional
//! index (linear interpolation between neighbouring entries, flat outside
//! the table). Neither read path can fail or panic.
//!
//! # Usage
//!
//! ```rust
//! use tonekit_lut::FastLookupTable;
//!
//! let lut = FastLookupTable::from_slice(&[0.0, 10.0, 20.0]).unwrap();
//! assert_eq!(lut.lookup(0.5), 5.0);
//! assert_eq!(lut.lookup(-5.0), 0.0);
//! assert_eq!(lut.get(99), 20.0);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Allocation diagnostics
//!
//! # Used By
//!
//! - `tonekit-ops` - 16-bit tone curves and hue-preserving mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod table;

pub use error::{LutError, LutResult};
pub use table::{FastLookupTable, PADDING};
