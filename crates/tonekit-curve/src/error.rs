//! Curve construction error types.

use thiserror::Error;

use crate::CurveKind;

/// Result type for curve construction.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building a [`CurveModel`](crate::CurveModel).
///
/// Malformed point lists never produce an error; they fall back to an
/// identity curve. Only a declared kind without an evaluation strategy is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The curve kind is declared but has no evaluator.
    #[error("curve kind {0:?} is not implemented")]
    Unimplemented(CurveKind),
}
