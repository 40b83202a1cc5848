//! Calling convention shared by the value-type interpolators.
//!
//! The track sampler picks an interpolator by channel type and calls it the
//! same way for every curve kind. Arity is the only thing checked here; the
//! per-kind formulas live with each value type because vector blending and
//! spherical blending are different primitives.

use crate::error::{InterpolationError, Side};
use crate::kind::CurveKind;
use crate::Result;

/// Fail with `InsufficientControlPoints` when `len` is below `kind.arity()`.
#[inline]
pub fn check_arity(kind: CurveKind, side: Side, len: usize) -> Result<()> {
    let required = kind.arity();
    if len < required {
        log::warn!("{kind} curve got {len} {side}-side control points, needs {required}");
        return Err(InterpolationError::InsufficientControlPoints {
            kind,
            side,
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Trait for value-type interpolators
pub trait Interpolator: Send + Sync {
    /// Channel value type
    type Value: Copy;

    /// Blend resolved control points for `kind` at `delta`.
    ///
    /// # Panics
    ///
    /// Panics if either side holds fewer than `kind.arity()` points. Use
    /// [`Interpolator::interpolate`] unless the lengths are already known.
    fn blend(
        &self,
        delta: f32,
        kind: CurveKind,
        start: &[Self::Value],
        end: &[Self::Value],
    ) -> Self::Value;

    /// Seed `result` with the first control point.
    fn initialize(&self, values: &[Self::Value], result: &mut Self::Value) -> Result<()> {
        let Some(first) = values.first() else {
            log::warn!("initialize called with an empty control point sequence");
            return Err(InterpolationError::EmptyControlPoints);
        };
        *result = *first;
        Ok(())
    }

    /// Write the blended value into `result`.
    ///
    /// Both sides are validated before anything is computed, so `result` is
    /// left untouched on error.
    fn interpolate(
        &self,
        delta: f32,
        kind: CurveKind,
        start: &[Self::Value],
        end: &[Self::Value],
        result: &mut Self::Value,
    ) -> Result<()> {
        *result = self.evaluate(delta, kind, start, end)?;
        Ok(())
    }

    /// Like [`Interpolator::interpolate`], returning the value instead.
    fn evaluate(
        &self,
        delta: f32,
        kind: CurveKind,
        start: &[Self::Value],
        end: &[Self::Value],
    ) -> Result<Self::Value> {
        check_arity(kind, Side::Start, start.len())?;
        check_arity(kind, Side::End, end.len())?;
        Ok(self.blend(delta, kind, start, end))
    }
}
