//! Curve evaluation seam.

/// Anything that maps a normalized input `t` to an output value.
///
/// Implemented by [`CurveModel`](crate::CurveModel) and by plain closures,
/// so LUT builders can sample either.
///
/// # Example
///
/// ```rust
/// use tonekit_curve::CurveEval;
///
/// let square = |t: f64| t * t;
/// assert_eq!(square.eval(0.5), 0.25);
/// ```
pub trait CurveEval {
    /// Evaluates the curve at `t`.
    fn eval(&self, t: f64) -> f64;
}

impl<F> CurveEval for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, t: f64) -> f64 {
        self(t)
    }
}
