//! Curve kinds and control points.

use serde::{Deserialize, Serialize};

/// Curve kind, encoded as the leading value of a raw point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// No curve. Evaluation is a passthrough. Also used for identity curves.
    #[default]
    Empty,
    /// Piecewise linear interpolation.
    Linear,
    /// Natural cubic spline.
    Spline,
    /// Parametric curve (no evaluator).
    Parametric,
    /// NURBS curve (no evaluator).
    Nurbs,
    /// Catmull-Rom curve (no evaluator).
    CatmullRom,
}

impl CurveKind {
    /// Decodes the leading value of a raw point list.
    ///
    /// The value is truncated toward zero; unknown codes map to [`CurveKind::Empty`].
    pub fn from_code(code: f64) -> Self {
        if !code.is_finite() {
            return Self::Empty;
        }
        match code as i32 {
            0 => Self::Linear,
            1 => Self::Spline,
            2 => Self::Parametric,
            3 => Self::Nurbs,
            4 => Self::CatmullRom,
            _ => Self::Empty,
        }
    }

    /// Numeric code of this kind.
    pub fn code(self) -> i32 {
        match self {
            Self::Empty => -1,
            Self::Linear => 0,
            Self::Spline => 1,
            Self::Parametric => 2,
            Self::Nurbs => 3,
            Self::CatmullRom => 4,
        }
    }

    /// Returns true if curves of this kind can be evaluated.
    pub fn is_implemented(self) -> bool {
        matches!(self, Self::Empty | Self::Linear | Self::Spline)
    }
}

/// A single control point on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPoint {
    /// X coordinate (input value).
    pub x: f64,
    /// Y coordinate (output value).
    pub y: f64,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for ControlPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}
