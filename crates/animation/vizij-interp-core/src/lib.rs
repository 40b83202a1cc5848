//! Vizij Interp Core (engine-agnostic)
//!
//! Per-channel keyframe interpolation for skeletal and property animation.
//! A keyframe track resolves the two bracketing keyframes, gathers the control
//! points a [`CurveKind`] needs from each side, and hands them to the
//! interpolator matching the channel's value type:
//!
//! - [`VectorInterpolator`] for position/scale channels ([`Vec3`])
//! - [`QuaternionInterpolator`] for rotation channels ([`Quat`])
//!
//! Both implement the [`Interpolator`] contract. Nothing here keeps state
//! between calls.

pub mod config;
pub mod error;
pub mod interpolator;
pub mod kind;
pub mod quaternion;
pub mod vector;
pub mod weights;

// Re-exports for consumers (track samplers)
pub use config::Config;
pub use error::{InterpolationError, Side};
pub use interpolator::{check_arity, Interpolator};
pub use kind::CurveKind;
pub use quaternion::{slerp, QuaternionInterpolator};
pub use vector::VectorInterpolator;

/// Position/scale channel value.
pub type Vec3 = nalgebra::Vector3<f32>;

/// Rotation channel value, stored as (i, j, k, w).
///
/// Inputs are expected to be unit length. The plain quaternion type is used
/// because cubic-spline output may drift off the unit sphere.
pub type Quat = nalgebra::Quaternion<f32>;

/// Interpolation result type
pub type Result<T> = core::result::Result<T, InterpolationError>;
