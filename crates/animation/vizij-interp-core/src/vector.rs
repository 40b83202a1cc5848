//! Interpolation of 3-vector channels (position, scale).
//!
//! Every curve is a plain linear combination of control points; the vector
//! space is closed under all of them so nothing is renormalized.

use crate::config::Config;
use crate::interpolator::Interpolator;
use crate::kind::CurveKind;
use crate::weights;
use crate::Vec3;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VectorInterpolator {
    config: Config,
}

impl VectorInterpolator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Interpolator for VectorInterpolator {
    type Value = Vec3;

    fn blend(&self, t: f32, kind: CurveKind, start: &[Vec3], end: &[Vec3]) -> Vec3 {
        match kind {
            CurveKind::Linear => start[0].lerp(&end[0], t),
            CurveKind::Step => start[0],
            CurveKind::CubicSpline => {
                // start = [in-tangent, value, out-tangent]; same layout on the end side
                let [h1, h2, h3, h4] = weights::hermite(t);
                start[1] * h1 + start[2] * h2 + end[1] * h3 + end[0] * h4
            }
            CurveKind::Bezier => {
                let [w0, w1, w2, w3] = weights::cubic_bezier(t);
                start[0] * w0 + start[1] * w1 + end[0] * w2 + end[1] * w3
            }
            CurveKind::Back => start[0].lerp(&end[0], weights::back(t, self.config.back_overshoot)),
            CurveKind::Bounce => start[0].lerp(&end[0], weights::bounce(t)),
            CurveKind::Elastic => {
                start[0].lerp(&end[0], weights::elastic(t, self.config.elastic_period))
            }
            CurveKind::Quadratic => {
                let [w0, w1, w2] = weights::quadratic(t);
                start[0] * w0 + start[1] * w1 + end[0] * w2
            }
            CurveKind::CatmullRom => {
                let [w0, w1, w2, w3] = weights::catmull_rom(t);
                start[0] * w0 + start[1] * w1 + end[0] * w2 + end[1] * w3
            }
        }
    }
}
