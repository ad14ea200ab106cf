//! Hue-preserving RGB tone mapping.
//!
//! Applies one 1-D tone curve to an RGB triple the way raw converters
//! following the Adobe reference do: the largest and smallest channels go
//! through the curve, the middle channel keeps its relative position
//! between them. Channel order, and with it hue, is unchanged.
//!
//! All values live in the 16-bit domain `[0, 65535]`.

use serde::{Deserialize, Serialize};
use tonekit_curve::CurveEval;
use tracing::trace;

use crate::tone_curve::{ToneCurve, TONE_MAX};
use crate::OpsResult;

/// When the mapped triple replaces the input.
///
/// Inputs are clamped to `[0, 65535]` before mapping. The policy decides,
/// from the unclamped inputs, whether the result is written back or the
/// input is returned untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Commit if at least one input channel was inside the range.
    #[default]
    AnyInRange,
    /// Commit only if every input channel was inside the range.
    AllInRange,
}

impl CommitPolicy {
    #[inline]
    fn commits(self, rgb: [f32; 3]) -> bool {
        match self {
            Self::AnyInRange => rgb.iter().any(|&v| in_range(v)),
            Self::AllInRange => rgb.iter().all(|&v| in_range(v)),
        }
    }
}

// NaN counts as in range
#[inline]
fn in_range(v: f32) -> bool {
    !(v < 0.0 || v > TONE_MAX)
}

#[inline]
fn clamp_channel(v: f32) -> f32 {
    0.0_f32.max(TONE_MAX.min(v))
}

/// Applies a [`ToneCurve`] to RGB triples while keeping channel order.
///
/// # Example
///
/// ```rust
/// use tonekit_ops::HuePreservingToneMapper;
///
/// let mapper = HuePreservingToneMapper::from_curve(&|t: f64| t.sqrt(), 0.0).unwrap();
/// let [r, g, b] = mapper.apply([40000.0, 20000.0, 10000.0]);
/// assert!(r > g && g > b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HuePreservingToneMapper {
    curve: ToneCurve,
    policy: CommitPolicy,
}

impl HuePreservingToneMapper {
    /// Creates a mapper with the default [`CommitPolicy::AnyInRange`].
    pub fn new(curve: ToneCurve) -> Self {
        Self::with_policy(curve, CommitPolicy::default())
    }

    /// Creates a mapper with an explicit commit policy.
    pub fn with_policy(curve: ToneCurve, policy: CommitPolicy) -> Self {
        Self { curve, policy }
    }

    /// Samples `curve` into a tone LUT and wraps it.
    pub fn from_curve<C: CurveEval + ?Sized>(curve: &C, gamma: f32) -> OpsResult<Self> {
        trace!(gamma, "HuePreservingToneMapper::from_curve");
        Ok(Self::new(ToneCurve::build(curve, gamma)?))
    }

    /// The tone curve in use.
    #[inline]
    pub fn tone_curve(&self) -> &ToneCurve {
        &self.curve
    }

    /// The commit policy in use.
    #[inline]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Maps one RGB triple.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut r = clamp_channel(rgb[0]);
        let mut g = clamp_channel(rgb[1]);
        let mut b = clamp_channel(rgb[2]);

        // fixed decision tree; ties resolve to the first branch that matches
        if r >= g {
            if g > b {
                // r >= g > b
                (r, g, b) = self.rgb_tone(r, g, b);
            } else if b > r {
                // b > r >= g
                (b, r, g) = self.rgb_tone(b, r, g);
            } else if b > g {
                // r >= b > g
                (r, b, g) = self.rgb_tone(r, b, g);
            } else {
                // r >= g == b
                r = self.curve.lookup(r);
                g = self.curve.lookup(g);
                b = g;
            }
        } else if r >= b {
            // g > r >= b
            (g, r, b) = self.rgb_tone(g, r, b);
        } else if b > g {
            // b > g > r
            (b, g, r) = self.rgb_tone(b, g, r);
        } else {
            // g >= b > r
            (g, b, r) = self.rgb_tone(g, b, r);
        }

        if self.policy.commits(rgb) {
            [r, g, b]
        } else {
            rgb
        }
    }

    /// Maps one RGB triple in place.
    #[inline]
    pub fn apply_in_place(&self, rgb: &mut [f32; 3]) {
        *rgb = self.apply(*rgb);
    }

    /// Maps the extremes through the curve and interpolates the middle.
    ///
    /// Requires `max > min`.
    #[inline]
    fn rgb_tone(&self, max: f32, mid: f32, min: f32) -> (f32, f32, f32) {
        let new_max = self.curve.lookup(max);
        let new_min = self.curve.lookup(min);
        let new_mid = new_min + (new_max - new_min) * (mid - min) / (max - min);
        (new_max, new_mid, new_min)
    }
}
