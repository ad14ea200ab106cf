//! Tone curve settings.
//!
//! Serializable description of a tone curve and how it is applied. Parsed
//! from YAML, e.g.:
//!
//! ```yaml
//! kind: spline
//! points:
//!   - [0.0, 0.0]
//!   - [0.25, 0.15]
//!   - [0.75, 0.85]
//!   - [1.0, 1.0]
//! resolution_hint: 1000
//! gamma: 0.0
//! commit_policy: any_in_range
//! ```
//!
//! Every field is optional; missing fields take the [`Default`] values.

use serde::{Deserialize, Serialize};
use tonekit_curve::{CurveKind, CurveModel, DEFAULT_RESOLUTION_HINT};
use tracing::debug;

use crate::{CommitPolicy, HuePreservingToneMapper, OpsResult, ToneCurve};

/// Settings for building a [`HuePreservingToneMapper`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneCurveConfig {
    /// Declared curve kind.
    pub kind: CurveKind,
    /// Control points as `[x, y]`, sorted by x.
    pub points: Vec<[f64; 2]>,
    /// Polyline resolution hint forwarded to the curve.
    pub resolution_hint: usize,
    /// Gamma passed to the LUT builder.
    pub gamma: f32,
    /// When mapped pixels replace their input.
    pub commit_policy: CommitPolicy,
}

impl Default for ToneCurveConfig {
    fn default() -> Self {
        Self {
            kind: CurveKind::Empty,
            points: Vec::new(),
            resolution_hint: DEFAULT_RESOLUTION_HINT,
            gamma: 0.0,
            commit_policy: CommitPolicy::default(),
        }
    }
}

impl ToneCurveConfig {
    /// Loads settings from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(kind = ?config.kind, points = config.points.len(), "Loaded tone curve config");
        Ok(config)
    }

    /// Serializes the settings to YAML.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Encodes kind and points as a raw list: the kind code, then `x, y` pairs.
    pub fn to_raw_points(&self) -> Vec<f64> {
        let mut raw = Vec::with_capacity(1 + 2 * self.points.len());
        raw.push(f64::from(self.kind.code()));
        raw.extend(self.points.iter().flatten());
        raw
    }

    /// Builds the curve model.
    pub fn build_curve(&self) -> OpsResult<CurveModel> {
        Ok(CurveModel::new(&self.to_raw_points(), self.resolution_hint)?)
    }

    /// Builds the curve, samples it and wraps it in a mapper.
    pub fn build_mapper(&self) -> OpsResult<HuePreservingToneMapper> {
        let curve = self.build_curve()?;
        let tone = ToneCurve::build(&curve, self.gamma)?;
        Ok(HuePreservingToneMapper::with_policy(tone, self.commit_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    #[test]
    fn test_defaults() {
        let config = ToneCurveConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ToneCurveConfig::default());
        assert!(config.build_curve().unwrap().is_identity());
    }

    #[test]
    fn test_parse_spline() {
        let yaml = "
kind: spline
points:
  - [0.0, 0.0]
  - [0.5, 0.7]
  - [1.0, 1.0]
commit_policy: all_in_range
";
        let config = ToneCurveConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.kind, CurveKind::Spline);
        assert_eq!(config.points.len(), 3);
        assert_eq!(config.commit_policy, CommitPolicy::AllInRange);
        assert_eq!(config.to_raw_points(), vec![1.0, 0.0, 0.0, 0.5, 0.7, 1.0, 1.0]);
        assert_eq!(config.build_curve().unwrap().kind(), CurveKind::Spline);
    }

    #[test]
    fn test_unimplemented_kind_is_reported() {
        let config = ToneCurveConfig::from_yaml_str("kind: nurbs\npoints: [[0, 0.1], [1, 1]]")
            .unwrap();
        assert!(matches!(config.build_mapper(), Err(OpsError::Curve(_))));
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            ToneCurveConfig::from_yaml_str("kind: [unclosed"),
            Err(OpsError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ToneCurveConfig {
            kind: CurveKind::Linear,
            points: vec![[0.0, 0.1], [1.0, 0.9]],
            gamma: 1.0,
            ..Default::default()
        };
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(ToneCurveConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
