//! Natural cubic spline setup.
//!
//! Solves the tridiagonal system for the second derivatives at each knot
//! with `y''(x[0]) = y''(x[n-1]) = 0`.

/// Computes the second derivatives of the natural cubic spline through
/// `(x[i], y[i])`.
///
/// `x` must be strictly increasing and `x.len() == y.len()`. For fewer than
/// three points the spline is a straight line and all second derivatives
/// are zero.
pub fn natural_spline_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len().min(y.len());
    let mut ypp = vec![0.0; n];
    if n < 3 {
        return ypp;
    }

    // decomposition scratch; u[0] = 0 for the natural lower boundary
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * ypp[i - 1] + 2.0;
        ypp[i] = (sig - 1.0) / p;
        let d = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (6.0 * d / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    ypp[n - 1] = 0.0;
    for k in (0..n - 1).rev() {
        ypp[k] = ypp[k] * ypp[k + 1] + u[k];
    }

    ypp
}

/// Evaluates one spline segment `[x_lo, x_hi]` at `t`.
#[inline]
pub(crate) fn eval_segment(
    x_lo: f64,
    x_hi: f64,
    y_lo: f64,
    y_hi: f64,
    ypp_lo: f64,
    ypp_hi: f64,
    t: f64,
) -> f64 {
    let h = x_hi - x_lo;
    let a = (x_hi - t) / h;
    let b = (t - x_lo) / h;
    a * y_lo + b * y_hi + ((a * a * a - a) * ypp_lo + (b * b * b - b) * ypp_hi) * (h * h) / 6.0
}
