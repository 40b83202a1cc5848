//! Scalar blend weights shared by the vector and quaternion interpolators.
//!
//! - hermite / cubic_bezier / quadratic / catmull_rom: per-control-point weights
//! - back / bounce / elastic: eased blend factors fed to a lerp or slerp
//!
//! None of these clamp `t`; back and elastic deliberately leave [0,1].

use std::f32::consts::PI;

const BOUNCE_SCALE: f32 = 7.5625;
const BOUNCE_SPAN: f32 = 2.75;

/// Cubic Hermite basis `[h1, h2, h3, h4]`.
#[inline]
pub fn hermite(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// Cubic Bernstein basis
#[inline]
pub fn cubic_bezier(t: f32) -> [f32; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t]
}

/// Quadratic Bernstein basis
#[inline]
pub fn quadratic(t: f32) -> [f32; 3] {
    let u = 1.0 - t;
    [u * u, 2.0 * u * t, t * t]
}

/// Uniform Catmull-Rom basis over four consecutive points.
#[inline]
pub fn catmull_rom(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -0.5 * t3 + t2 - 0.5 * t,
        1.5 * t3 - 2.5 * t2 + 1.0,
        -1.5 * t3 + 2.0 * t2 + 0.5 * t,
        0.5 * t3 - 0.5 * t2,
    ]
}

/// Back-in easing: dips below 0 before heading to 1.
#[inline]
pub fn back(t: f32, overshoot: f32) -> f32 {
    t * t * ((overshoot + 1.0) * t - overshoot)
}

/// Bounce-out easing: four parabolic arcs, each landing higher than the last.
#[inline]
pub fn bounce(t: f32) -> f32 {
    let (offset, baseline) = if t < 1.0 / BOUNCE_SPAN {
        (0.0, 0.0)
    } else if t < 2.0 / BOUNCE_SPAN {
        (1.5 / BOUNCE_SPAN, 0.75)
    } else if t < 2.5 / BOUNCE_SPAN {
        (2.25 / BOUNCE_SPAN, 0.9375)
    } else {
        (2.625 / BOUNCE_SPAN, 0.984375)
    };
    let x = t - offset;
    BOUNCE_SCALE * x * x + baseline
}

/// Elastic easing with a decaying oscillation of the given period.
#[inline]
pub fn elastic(t: f32, period: f32) -> f32 {
    let s = period / 4.0;
    2f32.powf(-10.0 * t) * ((t - 1.0 - s) * (2.0 * PI) / period).sin() + 1.0
}
