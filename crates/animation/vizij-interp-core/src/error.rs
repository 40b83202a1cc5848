//! Error types for curve interpolation

use crate::kind::CurveKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the keyframe interval a control point sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Start,
    End,
}

impl Side {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the interpolators and their configuration.
///
/// The two precondition variants point at a bug in the caller's track
/// resolution; they are never retried or papered over with another curve.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InterpolationError {
    /// `initialize` was handed an empty control point sequence
    #[error("Cannot initialize a channel from zero control points")]
    EmptyControlPoints,

    /// A side of the interval has fewer control points than the curve needs
    #[error("{kind} interpolation needs {required} control points on the {side} side, got {actual}")]
    InsufficientControlPoints {
        kind: CurveKind,
        side: Side,
        required: usize,
        actual: usize,
    },

    /// Curve kind name could not be parsed
    #[error("Unknown curve kind: {name}")]
    UnknownCurveKind { name: String },

    /// Configuration failed validation
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl InterpolationError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyControlPoints | Self::InsufficientControlPoints { .. } => "precondition",
            Self::UnknownCurveKind { .. } => "parse",
            Self::InvalidConfig { .. } => "config",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for InterpolationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
