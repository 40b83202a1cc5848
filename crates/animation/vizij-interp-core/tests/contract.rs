use vizij_interp_core::{
    check_arity, CurveKind, InterpolationError, Interpolator, Quat, QuaternionInterpolator, Side,
    Vec3, VectorInterpolator,
};

/// Generic caller, the way a track sampler would drive either channel type.
fn sample<I: Interpolator>(
    interp: &I,
    kind: CurveKind,
    start: &[I::Value],
    end: &[I::Value],
    result: &mut I::Value,
) -> Result<(), InterpolationError> {
    interp.interpolate(0.5, kind, start, end, result)
}

#[test]
fn initialize_copies_first_value() {
    let interp = VectorInterpolator::default();
    let mut out = Vec3::zeros();
    interp
        .initialize(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(9.0, 9.0, 9.0)], &mut out)
        .unwrap();
    assert_eq!(out, Vec3::new(1.0, 2.0, 3.0));

    let interp = QuaternionInterpolator::default();
    let mut q = Quat::identity();
    let first = Quat::new(0.0, 1.0, 0.0, 0.0);
    interp.initialize(&[first], &mut q).unwrap();
    assert_eq!(q, first);
}

#[test]
fn initialize_rejects_empty_input() {
    let mut out = Vec3::new(7.0, 7.0, 7.0);
    let err = VectorInterpolator::default()
        .initialize(&[], &mut out)
        .unwrap_err();
    assert_eq!(err, InterpolationError::EmptyControlPoints);
    assert_eq!(out, Vec3::new(7.0, 7.0, 7.0));
}

#[test]
fn short_start_side_is_rejected_without_writing() {
    let sentinel = Vec3::new(-1.0, -1.0, -1.0);
    let mut out = sentinel;
    let two = [Vec3::zeros(), Vec3::x()];
    let three = [Vec3::zeros(), Vec3::x(), Vec3::y()];
    let err = VectorInterpolator::default()
        .interpolate(0.5, CurveKind::Bezier, &two, &three, &mut out)
        .unwrap_err();
    assert_eq!(
        err,
        InterpolationError::InsufficientControlPoints {
            kind: CurveKind::Bezier,
            side: Side::Start,
            required: 3,
            actual: 2,
        }
    );
    assert_eq!(out, sentinel);
}

#[test]
fn short_end_side_is_rejected_without_writing() {
    let sentinel = Quat::new(0.5, 0.5, 0.5, 0.5);
    let mut out = sentinel;
    let three = [Quat::identity(); 3];
    let two = [Quat::identity(); 2];
    let err = QuaternionInterpolator::default()
        .interpolate(0.5, CurveKind::CatmullRom, &three, &two, &mut out)
        .unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::InsufficientControlPoints {
            side: Side::End,
            required: 3,
            actual: 2,
            ..
        }
    ));
    assert_eq!(out, sentinel);
}

#[test]
fn no_fallback_to_linear_on_missing_points() {
    let mut out = Vec3::zeros();
    let one = [Vec3::x()];
    for kind in CurveKind::ALL.into_iter().filter(|k| k.arity() > 1) {
        let result = VectorInterpolator::default().interpolate(0.5, kind, &one, &one, &mut out);
        assert!(result.is_err(), "{kind} accepted a single control point");
    }
    assert_eq!(out, Vec3::zeros());
}

#[test]
fn exact_arity_is_enough_for_every_kind() {
    let vec_interp = VectorInterpolator::default();
    let quat_interp = QuaternionInterpolator::default();
    for kind in CurveKind::ALL {
        let n = kind.arity();
        let vs = vec![Vec3::new(1.0, 0.0, 0.0); n];
        let qs = vec![Quat::identity(); n];
        let mut v = Vec3::zeros();
        let mut q = Quat::identity();
        sample(&vec_interp, kind, &vs, &vs, &mut v).unwrap();
        sample(&quat_interp, kind, &qs, &qs, &mut q).unwrap();
    }
}

#[test]
fn check_arity_boundaries() {
    assert!(check_arity(CurveKind::Quadratic, Side::Start, 2).is_ok());
    assert!(check_arity(CurveKind::Quadratic, Side::End, 5).is_ok());
    assert!(check_arity(CurveKind::Quadratic, Side::End, 1).is_err());
    assert!(check_arity(CurveKind::Linear, Side::Start, 0).is_err());
}

#[test]
fn inputs_are_not_mutated() {
    let start = [Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0)];
    let end = [Vec3::new(6.0, 7.0, 8.0), Vec3::new(9.0, 10.0, 11.0)];
    let (s0, e0) = (start, end);
    let mut out = Vec3::zeros();
    VectorInterpolator::default()
        .interpolate(0.25, CurveKind::Quadratic, &start, &end, &mut out)
        .unwrap();
    assert_eq!(start, s0);
    assert_eq!(end, e0);
}
