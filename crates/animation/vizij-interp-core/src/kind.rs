//! Curve kind registry.
//!
//! Each kind declares how many ordered control points it consumes from the
//! start side and from the end side of a keyframe interval. Arities are part
//! of the public contract: adding a kind never changes an existing one.

use crate::error::InterpolationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpolation curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Linear,
    Step,
    CubicSpline,
    Bezier,
    Back,
    Bounce,
    Elastic,
    Quadratic,
    CatmullRom,
}

impl CurveKind {
    /// Every kind, in declaration order.
    pub const ALL: [CurveKind; 9] = [
        Self::Linear,
        Self::Step,
        Self::CubicSpline,
        Self::Bezier,
        Self::Back,
        Self::Bounce,
        Self::Elastic,
        Self::Quadratic,
        Self::CatmullRom,
    ];

    /// Number of control points required from *each* side of the interval.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Linear | Self::Step => 1,
            Self::Back | Self::Bounce | Self::Elastic | Self::Quadratic => 2,
            Self::CubicSpline | Self::Bezier | Self::CatmullRom => 3,
        }
    }

    /// Get the name of this curve kind
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Step => "step",
            Self::CubicSpline => "cubic_spline",
            Self::Bezier => "bezier",
            Self::Back => "back",
            Self::Bounce => "bounce",
            Self::Elastic => "elastic",
            Self::Quadratic => "quadratic",
            Self::CatmullRom => "catmull_rom",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = InterpolationError;

    /// Case-insensitive; `_` and `-` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "linear" => Ok(Self::Linear),
            "step" => Ok(Self::Step),
            "cubicspline" => Ok(Self::CubicSpline),
            "bezier" => Ok(Self::Bezier),
            "back" => Ok(Self::Back),
            "bounce" => Ok(Self::Bounce),
            "elastic" => Ok(Self::Elastic),
            "quadratic" => Ok(Self::Quadratic),
            "catmullrom" => Ok(Self::CatmullRom),
            _ => Err(InterpolationError::UnknownCurveKind {
                name: s.to_string(),
            }),
        }
    }
}
