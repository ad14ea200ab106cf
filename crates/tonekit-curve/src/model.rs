//! Curve model construction and evaluation.

use tracing::{debug, trace};

use crate::spline::{eval_segment, natural_spline_second_derivatives};
use crate::{ControlPoint, CurveError, CurveEval, CurveKind, CurveResult};

/// Largest accepted polyline resolution hint.
pub const MAX_RESOLUTION_HINT: usize = 65500;

/// Resolution hint used when none is given.
pub const DEFAULT_RESOLUTION_HINT: usize = 1000;

/// Points closer than this to `y = x` count as lying on the identity line.
///
/// The smallest step a curve editor produces is ~1e-5.
pub const IDENTITY_TOLERANCE: f64 = 9e-6;

#[derive(Debug, Clone)]
enum Shape {
    Identity,
    Linear {
        x: Box<[f64]>,
        y: Box<[f64]>,
    },
    Spline {
        x: Box<[f64]>,
        y: Box<[f64]>,
        ypp: Box<[f64]>,
    },
}

/// Position of `t` relative to the knots.
enum Bracket {
    /// Outside the knot range (or a single knot); the curve is flat here.
    Flat(f64),
    /// Inside `[x[k], x[k + 1]]`.
    Segment(usize),
}

/// A tone curve through user supplied control points.
///
/// Built once from a point list and read-only afterwards. The effective kind
/// is one of [`CurveKind::Empty`] (identity passthrough),
/// [`CurveKind::Linear`] or [`CurveKind::Spline`].
///
/// # Example
///
/// ```rust
/// use tonekit_curve::{CurveEval, CurveKind, CurveModel};
///
/// // kind code, then interleaved x/y pairs
/// let curve = CurveModel::new(&[0.0, 0.0, 0.0, 1.0, 1.0], 1000).unwrap();
/// assert_eq!(curve.kind(), CurveKind::Empty);
///
/// let curve = CurveModel::new(&[1.0, 0.0, 0.0, 0.5, 0.7, 1.0, 1.0], 1000).unwrap();
/// assert_eq!(curve.kind(), CurveKind::Spline);
/// assert!(curve.eval(0.5) > 0.69);
/// ```
#[derive(Debug, Clone)]
pub struct CurveModel {
    shape: Shape,
    resolution_hint: usize,
}

impl CurveModel {
    /// Identity curve: evaluation returns its input.
    pub fn identity() -> Self {
        Self {
            shape: Shape::Identity,
            resolution_hint: DEFAULT_RESOLUTION_HINT,
        }
    }

    /// Builds a curve from a raw encoded point list.
    ///
    /// `points[0]` is the [`CurveKind`] code, followed by interleaved `x, y`
    /// pairs. Lists with fewer than three values, or with a dangling
    /// coordinate, produce an identity curve.
    ///
    /// # Errors
    ///
    /// [`CurveError::Unimplemented`] if the list declares a parametric,
    /// NURBS or Catmull-Rom curve.
    pub fn new(points: &[f64], resolution_hint: usize) -> CurveResult<Self> {
        trace!(len = points.len(), resolution_hint, "CurveModel::new");

        if points.len() < 3 {
            debug!(len = points.len(), "too few values for a curve, using identity");
            return Ok(Self::identity().with_resolution_hint(resolution_hint));
        }

        let kind = CurveKind::from_code(points[0]);
        ensure_implemented(kind)?;

        let coords = &points[1..];
        if coords.len() % 2 != 0 {
            debug!(len = coords.len(), "odd coordinate count, using identity");
            return Ok(Self::identity().with_resolution_hint(resolution_hint));
        }

        let control_points: Vec<ControlPoint> = coords
            .chunks_exact(2)
            .map(|c| ControlPoint::new(c[0], c[1]))
            .collect();

        Self::from_points(kind, &control_points, resolution_hint)
    }

    /// Builds a curve of `kind` through `points`, sorted by ascending x.
    ///
    /// # Errors
    ///
    /// [`CurveError::Unimplemented`] for kinds without an evaluator.
    pub fn from_points(
        kind: CurveKind,
        points: &[ControlPoint],
        resolution_hint: usize,
    ) -> CurveResult<Self> {
        ensure_implemented(kind)?;

        let identity = Self::identity().with_resolution_hint(resolution_hint);
        if kind == CurveKind::Empty || points.is_empty() {
            return Ok(identity);
        }

        let n = points.len();
        let mut x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();

        let on_diagonal = points
            .iter()
            .all(|p| (p.x - p.y).abs() < IDENTITY_TOLERANCE);
        // all points on y = x but not spanning [0, 1] is not an identity
        if on_diagonal && x[0] == 0.0 && x[n - 1] == 1.0 {
            debug!(?kind, points = n, "curve lies on the identity line");
            return Ok(identity);
        }

        correct_degenerate_start(&mut x);

        let shape = if kind == CurveKind::Spline && n > 2 {
            let ypp = natural_spline_second_derivatives(&x, &y);
            Shape::Spline {
                x: x.into_boxed_slice(),
                y: y.into_boxed_slice(),
                ypp: ypp.into_boxed_slice(),
            }
        } else {
            if kind == CurveKind::Spline {
                debug!(points = n, "spline needs three points, using linear");
            }
            Shape::Linear {
                x: x.into_boxed_slice(),
                y: y.into_boxed_slice(),
            }
        };

        Ok(Self {
            shape,
            resolution_hint: identity.resolution_hint,
        })
    }

    fn with_resolution_hint(mut self, hint: usize) -> Self {
        self.resolution_hint = hint.min(MAX_RESOLUTION_HINT);
        self
    }

    /// Effective kind after identity detection and spline demotion.
    pub fn kind(&self) -> CurveKind {
        match self.shape {
            Shape::Identity => CurveKind::Empty,
            Shape::Linear { .. } => CurveKind::Linear,
            Shape::Spline { .. } => CurveKind::Spline,
        }
    }

    /// Returns true if evaluation is a passthrough.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self.shape, Shape::Identity)
    }

    /// Number of control points kept (0 for identity).
    pub fn len(&self) -> usize {
        self.xs().len()
    }

    /// Returns true if no control points are kept.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Control point x coordinates, after boundary correction.
    pub fn xs(&self) -> &[f64] {
        match &self.shape {
            Shape::Identity => &[],
            Shape::Linear { x, .. } | Shape::Spline { x, .. } => &x[..],
        }
    }

    /// Control point y coordinates.
    pub fn ys(&self) -> &[f64] {
        match &self.shape {
            Shape::Identity => &[],
            Shape::Linear { y, .. } | Shape::Spline { y, .. } => &y[..],
        }
    }

    /// Spline second derivatives, present only for spline curves.
    pub fn second_derivatives(&self) -> Option<&[f64]> {
        match &self.shape {
            Shape::Spline { ypp, .. } => Some(&ypp[..]),
            _ => None,
        }
    }

    /// Polyline resolution hint, clamped to [`MAX_RESOLUTION_HINT`].
    ///
    /// Carried for callers that facet the curve; evaluation ignores it.
    pub fn resolution_hint(&self) -> usize {
        self.resolution_hint
    }

    /// Evaluates the curve at `t`.
    ///
    /// Linear and spline curves are flat outside their first and last knot.
    /// Spline results are clamped to `[0, 1]`; linear results are not.
    pub fn get_val(&self, t: f64) -> f64 {
        match &self.shape {
            Shape::Identity => t,
            Shape::Linear { x, y } => match bracket(x, y, t) {
                Bracket::Flat(v) => v,
                Bracket::Segment(k) => {
                    y[k] + (t - x[k]) * (y[k + 1] - y[k]) / (x[k + 1] - x[k])
                }
            },
            Shape::Spline { x, y, ypp } => match bracket(x, y, t) {
                Bracket::Flat(v) => v,
                Bracket::Segment(k) => {
                    let r = eval_segment(x[k], x[k + 1], y[k], y[k + 1], ypp[k], ypp[k + 1], t);
                    if r > 0.0 {
                        r.min(1.0)
                    } else {
                        0.0
                    }
                }
            },
        }
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::identity()
    }
}

impl CurveEval for CurveModel {
    #[inline]
    fn eval(&self, t: f64) -> f64 {
        self.get_val(t)
    }
}

fn ensure_implemented(kind: CurveKind) -> CurveResult<()> {
    if kind.is_implemented() {
        Ok(())
    } else {
        Err(CurveError::Unimplemented(kind))
    }
}

/// Separates the first two knots when they coincide at 0 or at 1.
fn correct_degenerate_start(x: &mut [f64]) {
    if x.len() < 2 {
        return;
    }
    if x[0] == 0.0 && x[1] == 0.0 {
        debug!("first two points at x = 0, moving the second to 0.01");
        x[1] = 0.01;
    }
    if x[0] == 1.0 && x[1] == 1.0 {
        debug!("first two points at x = 1, moving the first to 0.99");
        x[0] = 0.99;
    }
}

/// Finds the knot interval containing `t` by bisection.
#[inline]
fn bracket(x: &[f64], y: &[f64], t: f64) -> Bracket {
    let n = x.len();
    if t > x[n - 1] {
        return Bracket::Flat(y[n - 1]);
    }
    if t < x[0] || n == 1 {
        return Bracket::Flat(y[0]);
    }

    let mut k_lo = 0;
    let mut k_hi = n - 1;
    while k_hi > k_lo + 1 {
        let k = (k_hi + k_lo) / 2;
        if x[k] > t {
            k_hi = k;
        } else {
            k_lo = k;
        }
    }
    Bracket::Segment(k_lo)
}
