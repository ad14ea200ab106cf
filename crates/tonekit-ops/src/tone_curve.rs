//! 16-bit tone curve LUT.
//!
//! Samples a curve at 65536 evenly spaced inputs over `[0, 1]` and stores
//! the outputs scaled to `[0, 65535]`, so pixel values in the 16-bit range
//! index the table directly.

use tonekit_curve::CurveEval;
use tonekit_lut::FastLookupTable;
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Number of entries in a tone LUT.
pub const TONE_LUT_SIZE: usize = 65536;

/// Largest pixel value of the tone domain (`0xffff`).
pub const TONE_MAX: f32 = 65535.0;

/// A curve sampled into a 65536-entry lookup table.
///
/// Immutable once built; share it read-only across workers and build a new
/// one rather than calling [`set`](Self::set) on a table that is in use.
///
/// # Example
///
/// ```rust
/// use tonekit_ops::ToneCurve;
///
/// let lift = |t: f64| 0.1 + 0.9 * t;
/// let tc = ToneCurve::build(&lift, 0.0).unwrap();
/// assert!((tc.lookup(0.0) - 6553.5).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToneCurve {
    lut: FastLookupTable,
}

impl ToneCurve {
    /// Creates an empty tone curve. Lookups return `0.0` until built.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tone curve from `curve`.
    ///
    /// See [`set`](Self::set) for the meaning of `gamma`.
    pub fn build<C: CurveEval + ?Sized>(curve: &C, gamma: f32) -> OpsResult<Self> {
        let mut tc = Self::new();
        tc.set(curve, gamma)?;
        Ok(tc)
    }

    /// Wraps an already sampled table of [`TONE_LUT_SIZE`] entries.
    pub fn from_table(lut: FastLookupTable) -> OpsResult<Self> {
        if lut.len() != TONE_LUT_SIZE {
            return Err(OpsError::InvalidParameter(format!(
                "tone LUT must have {} entries, got {}",
                TONE_LUT_SIZE,
                lut.len()
            )));
        }
        Ok(Self { lut })
    }

    /// Reallocates the table and samples `curve` into it.
    ///
    /// Sampling happens only for `gamma <= 0` or `gamma == 1`. Any other
    /// gamma leaves the freshly allocated table all-zero.
    pub fn set<C: CurveEval + ?Sized>(&mut self, curve: &C, gamma: f32) -> OpsResult<()> {
        trace!(gamma, "ToneCurve::set");
        self.lut.init(TONE_LUT_SIZE)?;

        if gamma <= 0.0 || gamma == 1.0 {
            for (i, v) in self.lut.as_mut_slice().iter_mut().enumerate() {
                let t = i as f32 / TONE_MAX;
                *v = curve.eval(f64::from(t)) as f32 * TONE_MAX;
            }
        } else {
            debug!(gamma, "gamma has no sampling rule, tone LUT left unbuilt");
        }
        Ok(())
    }

    /// Releases the table.
    pub fn reset(&mut self) {
        self.lut.reset();
    }

    /// The underlying table.
    #[inline]
    pub fn lut(&self) -> &FastLookupTable {
        &self.lut
    }

    /// Maps a value in `[0, 65535]` through the curve.
    #[inline]
    pub fn lookup(&self, value: f32) -> f32 {
        self.lut.lookup(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tonekit_curve::{CurveKind, CurveModel};

    #[test]
    fn test_identity_build() {
        let curve = CurveModel::identity();
        let tc = ToneCurve::build(&curve, 0.0).unwrap();
        assert_eq!(tc.lut().len(), TONE_LUT_SIZE);
        for i in (0..TONE_LUT_SIZE).step_by(97).chain([TONE_LUT_SIZE - 1]) {
            assert_abs_diff_eq!(tc.lut().get(i as i32), i as f32, epsilon = 0.02);
        }
    }

    #[test]
    fn test_gamma_one_samples() {
        let tc = ToneCurve::build(&|t: f64| 1.0 - t, 1.0).unwrap();
        assert_abs_diff_eq!(tc.lut().get(0), TONE_MAX);
        assert_abs_diff_eq!(tc.lut().get(65535), 0.0);
    }

    #[test]
    fn test_other_gamma_leaves_table_empty() {
        let curve = CurveModel::identity();
        let tc = ToneCurve::build(&curve, 2.2).unwrap();
        assert_eq!(tc.lut().len(), TONE_LUT_SIZE);
        assert!(tc.lut().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_replaces_previous_contents() {
        let mut tc = ToneCurve::build(&|_t: f64| 0.5, 0.0).unwrap();
        tc.set(&|_t: f64| 0.5, 2.0).unwrap();
        assert_eq!(tc.lookup(30000.0), 0.0);
    }

    #[test]
    fn test_spline_build_range() {
        let curve = CurveModel::new(
            &[CurveKind::Spline.code() as f64, 0.0, 0.0, 0.3, 0.45, 1.0, 1.0],
            1000,
        )
        .unwrap();
        let tc = ToneCurve::build(&curve, 0.0).unwrap();
        assert!(tc.lut().as_slice().iter().all(|&v| (0.0..=TONE_MAX).contains(&v)));
        assert_abs_diff_eq!(tc.lookup(0.3 * TONE_MAX), 0.45 * TONE_MAX, epsilon = 1.0);
    }

    #[test]
    fn test_reset() {
        let mut tc = ToneCurve::build(&|t: f64| t, 0.0).unwrap();
        tc.reset();
        assert!(tc.lut().is_empty());
        assert_eq!(tc.lookup(1000.0), 0.0);
    }

    #[test]
    fn test_from_table_checks_size() {
        let small = FastLookupTable::with_size(16).unwrap();
        assert!(ToneCurve::from_table(small).is_err());
        let full = FastLookupTable::with_size(TONE_LUT_SIZE).unwrap();
        assert!(ToneCurve::from_table(full).is_ok());
    }
}
