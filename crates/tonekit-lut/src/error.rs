//! Lookup table error types.

use thiserror::Error;

/// Result type for lookup table operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while sizing a lookup table.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid table size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// The backing storage could not be reserved.
    #[error("failed to allocate LUT storage for {size} entries")]
    AllocationFailed {
        /// Requested number of logical entries.
        size: usize,
    },
}
