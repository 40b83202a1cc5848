//! Curve tuning shared by both interpolators.

use crate::error::InterpolationError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Tunable curve constants. Defaults reproduce the reference curves exactly;
/// missing JSON fields fall back to them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overshoot factor `s` of the back curve.
    pub back_overshoot: f32,
    /// Oscillation period of the elastic curve (phase shift is `period / 4`).
    pub elastic_period: f32,
    /// Aligned quaternion cosine above which slerp falls back to a normalized
    /// lerp, since the great-circle formula divides by a vanishing sine there.
    pub slerp_nlerp_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            back_overshoot: 1.70158,
            elastic_period: 0.3,
            slerp_nlerp_threshold: 0.9995,
        }
    }
}

impl Config {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded interpolation config: {config:?}");
        Ok(config)
    }

    /// Reject a non-finite `back_overshoot`, an `elastic_period` that is not
    /// positive, and a `slerp_nlerp_threshold` outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if !self.back_overshoot.is_finite() {
            return Err(invalid(format!(
                "back_overshoot must be finite, got {}",
                self.back_overshoot
            )));
        }
        if !(self.elastic_period.is_finite() && self.elastic_period > 0.0) {
            return Err(invalid(format!(
                "elastic_period must be a positive number, got {}",
                self.elastic_period
            )));
        }
        if !(self.slerp_nlerp_threshold > 0.0 && self.slerp_nlerp_threshold <= 1.0) {
            return Err(invalid(format!(
                "slerp_nlerp_threshold must lie in (0, 1], got {}",
                self.slerp_nlerp_threshold
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> InterpolationError {
    log::warn!("rejecting interpolation config: {reason}");
    InterpolationError::InvalidConfig { reason }
}
