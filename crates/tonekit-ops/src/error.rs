//! Error types for tone operations.

use thiserror::Error;
use tonekit_curve::CurveError;
use tonekit_lut::LutError;

/// Error type for tone operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Lookup table could not be sized or allocated.
    #[error("LUT error: {0}")]
    Lut(#[from] LutError),

    /// Curve definition could not be built.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Buffer layout does not match the requested channel count.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for tone operations.
pub type OpsResult<T> = Result<T, OpsError>;
