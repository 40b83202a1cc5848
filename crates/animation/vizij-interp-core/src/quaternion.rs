//! Interpolation of rotation channels.
//!
//! Weighted sums do not stay on the unit sphere, so every curve except the
//! cubic spline is rebuilt from shortest-arc slerp steps. Cubic-spline output
//! is a raw Hermite sum and is not guaranteed to be unit length.

use crate::config::Config;
use crate::interpolator::Interpolator;
use crate::kind::CurveKind;
use crate::weights;
use crate::Quat;

/// Shortest-arc spherical interpolation from `a` to `b`.
///
/// `b` is negated when the two lie in opposite hemispheres, so `q` and `-q`
/// interpolate identically. `t` outside [0,1] extrapolates along the same
/// great circle. When the aligned cosine reaches `nlerp_threshold`, or the
/// arc is too short to divide by its sine, the result is a normalized lerp.
#[inline]
pub fn slerp(a: &Quat, b: &Quat, t: f32, nlerp_threshold: f32) -> Quat {
    let mut cos = a.dot(b);
    let mut b = *b;
    if cos < 0.0 {
        b = -b;
        cos = -cos;
    }
    // rounding can push the cosine of identical inputs past 1
    let cos = cos.min(1.0);
    if cos >= nlerp_threshold {
        return a.lerp(&b, t).normalize();
    }
    let theta = cos.acos();
    let sin = theta.sin();
    if sin <= f32::EPSILON {
        return a.lerp(&b, t).normalize();
    }
    *a * (((1.0 - t) * theta).sin() / sin) + b * ((t * theta).sin() / sin)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuaternionInterpolator {
    config: Config,
}

impl QuaternionInterpolator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    fn slerp(&self, a: &Quat, b: &Quat, t: f32) -> Quat {
        slerp(a, b, t, self.config.slerp_nlerp_threshold)
    }

    /// de Casteljau evaluation of a cubic curve over four rotations.
    fn cubic_slerp(&self, p: [Quat; 4], t: f32) -> Quat {
        let temp1 = self.slerp(&p[0], &p[1], t);
        let temp2 = self.slerp(&p[1], &p[2], t);
        let temp3 = self.slerp(&p[2], &p[3], t);
        let mid1 = self.slerp(&temp1, &temp2, t);
        let mid2 = self.slerp(&temp2, &temp3, t);
        self.slerp(&mid1, &mid2, t)
    }
}

impl Interpolator for QuaternionInterpolator {
    type Value = Quat;

    fn blend(&self, t: f32, kind: CurveKind, start: &[Quat], end: &[Quat]) -> Quat {
        match kind {
            CurveKind::Linear => self.slerp(&start[0], &end[0], t),
            CurveKind::Step => start[0],
            CurveKind::CubicSpline => {
                let [h1, h2, h3, h4] = weights::hermite(t);
                start[1] * h1 + start[2] * h2 + end[1] * h3 + end[0] * h4
            }
            // Catmull-Rom reuses the Bezier recursion rather than tangent weights.
            CurveKind::Bezier | CurveKind::CatmullRom => {
                self.cubic_slerp([start[0], start[1], end[0], end[1]], t)
            }
            CurveKind::Back => {
                self.slerp(&start[0], &end[0], weights::back(t, self.config.back_overshoot))
            }
            CurveKind::Bounce => self.slerp(&start[0], &end[0], weights::bounce(t)),
            CurveKind::Elastic => self.slerp(
                &start[0],
                &end[0],
                weights::elastic(t, self.config.elastic_period),
            ),
            CurveKind::Quadratic => {
                let temp1 = self.slerp(&start[0], &start[1], 2.0 * t / (1.0 + t));
                let temp2 = self.slerp(&start[1], &end[0], t);
                self.slerp(&temp1, &temp2, t)
            }
        }
    }
}
