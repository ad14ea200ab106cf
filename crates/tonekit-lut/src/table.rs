//! Fast 1-dimensional lookup table.
//!
//! The table stores `size` logical entries followed by [`PADDING`] spare
//! cells. The spare cells let the fractional read path touch `data[i + 1]`
//! at the upper edge without a bounds branch, and keep an empty (reset)
//! table readable.

use tracing::trace;

use crate::{LutError, LutResult};

/// Number of spare cells allocated past the logical end of every table.
pub const PADDING: usize = 3;

/// A dense `f32` lookup table with clamped integer and interpolated
/// fractional reads.
///
/// # Bounds
///
/// - `get(i)` clamps `i` to `[0, size - 1]`
/// - `lookup(f)` returns entry `0` for `f < 0`, entry `size - 1` for
///   `f > size - 2`, and interpolates linearly in between
///
/// # Example
///
/// ```rust
/// use tonekit_lut::FastLookupTable;
///
/// let mut lut = FastLookupTable::with_size(4).unwrap();
/// for i in 0..4 {
///     *lut.get_mut(i) = i as f32 * 2.0;
/// }
/// assert_eq!(lut.lookup(1.25), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct FastLookupTable {
    data: Vec<f32>,
    size: usize,
    // always size - 1 (0 for an empty table)
    upper_bound: usize,
    // size - 2, kept as f32 for the fractional comparison
    max_fractional: f32,
}

impl FastLookupTable {
    /// Creates an empty table. Every read returns `0.0` until [`init`](Self::init).
    pub fn new() -> Self {
        Self {
            data: vec![0.0; PADDING],
            size: 0,
            upper_bound: 0,
            max_fractional: 0.0,
        }
    }

    /// Creates a zero-filled table with `size` logical entries.
    pub fn with_size(size: usize) -> LutResult<Self> {
        let mut lut = Self::new();
        lut.init(size)?;
        Ok(lut)
    }

    /// Creates a table holding a copy of `values`.
    pub fn from_slice(values: &[f32]) -> LutResult<Self> {
        if values.is_empty() {
            return Err(LutError::InvalidSize("LUT size must be > 0".into()));
        }
        let mut data = allocate(values.len())?;
        data[..values.len()].copy_from_slice(values);
        Ok(Self::from_storage(data, values.len()))
    }

    /// (Re)allocates the table with `size` zero-filled entries.
    ///
    /// Previous contents are dropped; the table is replaced wholesale.
    pub fn init(&mut self, size: usize) -> LutResult<()> {
        if size == 0 {
            return Err(LutError::InvalidSize("LUT size must be > 0".into()));
        }
        trace!(size, "FastLookupTable::init");
        let data = allocate(size)?;
        *self = Self::from_storage(data, size);
        Ok(())
    }

    fn from_storage(data: Vec<f32>, size: usize) -> Self {
        Self {
            data,
            size,
            upper_bound: size.saturating_sub(1),
            max_fractional: size as f32 - 2.0,
        }
    }

    /// Releases the storage. The table reads as all-zero until re-initialised.
    pub fn reset(&mut self) {
        trace!(size = self.size, "FastLookupTable::reset");
        *self = Self::new();
    }

    /// Zero-fills the logical entries without changing the size.
    pub fn clear(&mut self) {
        self.data[..self.size].fill(0.0);
    }

    /// Number of logical entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table has no logical entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Highest valid integer index.
    #[inline]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Highest fractional index that is still interpolated.
    #[inline]
    pub fn max_fractional(&self) -> f32 {
        self.max_fractional
    }

    /// The logical entries.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data[..self.size]
    }

    /// The logical entries, writable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data[..self.size]
    }

    #[inline]
    fn clamp_index(&self, index: i32) -> usize {
        if index < 0 {
            0
        } else {
            (index as usize).min(self.upper_bound)
        }
    }

    /// Reads the entry at `index`, clamped to `[0, upper_bound]`.
    #[inline]
    pub fn get(&self, index: i32) -> f32 {
        self.data[self.clamp_index(index)]
    }

    /// Mutable access to the entry at `index`, clamped to `[0, upper_bound]`.
    #[inline]
    pub fn get_mut(&mut self, index: i32) -> &mut f32 {
        let i = self.clamp_index(index);
        &mut self.data[i]
    }

    /// Reads the table at a fractional position with linear interpolation.
    #[inline]
    pub fn lookup(&self, index: f32) -> f32 {
        if index < 0.0 {
            return self.data[0];
        }
        if index > self.max_fractional {
            return self.data[self.upper_bound];
        }
        let idx = index as usize;
        let diff = index - idx as f32;
        let p1 = self.data[idx];
        p1 + (self.data[idx + 1] - p1) * diff
    }
}

impl Default for FastLookupTable {
    fn default() -> Self {
        Self::new()
    }
}

fn allocate(size: usize) -> LutResult<Vec<f32>> {
    let cells = size
        .checked_add(PADDING)
        .ok_or(LutError::AllocationFailed { size })?;
    let mut data = Vec::new();
    data.try_reserve_exact(cells)
        .map_err(|_| LutError::AllocationFailed { size })?;
    data.resize(cells, 0.0);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp() -> FastLookupTable {
        FastLookupTable::from_slice(&[0.0, 10.0, 20.0]).unwrap()
    }

    #[test]
    fn test_init_bounds() {
        let lut = FastLookupTable::with_size(65536).unwrap();
        assert_eq!(lut.len(), 65536);
        assert_eq!(lut.upper_bound(), 65535);
        assert_eq!(lut.max_fractional(), 65534.0);
        assert!(lut.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(FastLookupTable::with_size(0).is_err());
        assert!(FastLookupTable::from_slice(&[]).is_err());
    }

    #[test]
    fn test_fractional_lookup() {
        let lut = ramp();
        assert_abs_diff_eq!(lut.lookup(0.5), 5.0);
        assert_abs_diff_eq!(lut.lookup(0.75), 7.5);
        // past size - 2 the last entry is returned, no interpolation
        assert_eq!(lut.lookup(1.75), 20.0);
        assert_eq!(lut.lookup(-5.0), 0.0);
        assert_eq!(lut.lookup(10.0), 20.0);
    }

    #[test]
    fn test_fractional_upper_edge() {
        let lut = ramp();
        // max_fractional itself still interpolates (diff = 0)
        assert_eq!(lut.lookup(1.0), 10.0);
        assert_eq!(lut.lookup(1.0001), 20.0);
    }

    #[test]
    fn test_integer_clamp() {
        let lut = ramp();
        assert_eq!(lut.get(-3), 0.0);
        assert_eq!(lut.get(1), 10.0);
        assert_eq!(lut.get(3), 20.0);
        assert_eq!(lut.get(i32::MAX), 20.0);
    }

    #[test]
    fn test_get_mut_clamps() {
        let mut lut = ramp();
        *lut.get_mut(100) = 42.0;
        assert_eq!(lut.as_slice(), &[0.0, 10.0, 42.0]);
    }

    #[test]
    fn test_clear_keeps_size() {
        let mut lut = ramp();
        lut.clear();
        assert_eq!(lut.len(), 3);
        assert_eq!(lut.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reset_is_safe() {
        let mut lut = ramp();
        lut.reset();
        assert!(lut.is_empty());
        assert_eq!(lut.upper_bound(), 0);
        assert_eq!(lut.get(5), 0.0);
        assert_eq!(lut.lookup(0.0), 0.0);
        assert_eq!(lut.lookup(100.0), 0.0);

        lut.init(2).unwrap();
        assert_eq!(lut.len(), 2);
    }

    #[test]
    fn test_single_entry() {
        let lut = FastLookupTable::from_slice(&[7.0]).unwrap();
        assert_eq!(lut.lookup(0.0), 7.0);
        assert_eq!(lut.lookup(0.5), 7.0);
        assert_eq!(lut.get(-1), 7.0);
    }
}
