use scrimshaw_path::{CubicSegment, CurveSegment, align, interpolate, point, to_curves};

fn kinds(segs: &[CurveSegment]) -> String {
    segs.iter()
        .map(|s| match s {
            CurveSegment::MoveTo(_) => 'M',
            CurveSegment::CurveTo(_) => 'C',
            CurveSegment::ClosePath => 'Z',
        })
        .collect()
}

#[test]
fn aligning_a_path_with_itself_yields_its_curve_form_twice() {
    let d = "M0,0 L10,10 Q20,0 30,10 A5,5 0 0 1 40,10 Z";
    let (a, b) = align(d, d);
    assert_eq!(a, b);
    assert_eq!(a, to_curves(d));
}

#[test]
fn shorter_path_is_padded_at_its_pen() {
    let (a, b) = align("M0,0 L10,10", "M0,0 L10,10 L20,0");
    assert_eq!(kinds(&a.segments), "MCC");
    assert_eq!(kinds(&b.segments), "MCC");
    assert_eq!(
        a.segments[2],
        CurveSegment::CurveTo(CubicSegment::degenerate(point(10.0, 10.0)))
    );
}

#[test]
fn arc_expansion_is_matched_by_padding() {
    let (a, b) = align("M0,0 A50,60 0 0 0 100,100", "M0,0 L100,100");
    assert_eq!(a.len(), 3);
    assert!(a.is_aligned_with(&b));
    assert_eq!(
        b.segments[2],
        CurveSegment::CurveTo(CubicSegment::degenerate(point(100.0, 100.0)))
    );
}

#[test]
fn extra_subpath_gets_a_moveto_in_place_on_the_other_side() {
    let (a, b) = align("M0,0 L10,0 M20,0 L30,0", "M0,0 L10,0 L10,10 L0,10");
    assert_eq!(kinds(&a.segments), "MCMCC");
    assert_eq!(kinds(&b.segments), "MCMCC");
    // `b` stays where its pen was when `a` jumped.
    assert_eq!(b.segments[2], CurveSegment::MoveTo(point(10.0, 0.0)));
    // `a` ran out first and parks at its last point.
    assert_eq!(
        a.segments[4],
        CurveSegment::CurveTo(CubicSegment::degenerate(point(30.0, 0.0)))
    );
}

#[test]
fn smooth_cubic_after_a_synthetic_moveto_reflects_through_the_pen() {
    let (_, b) = align("M0,0 L1,0 M5,5 L6,6", "M0,0 C2,2 3,3 4,0 S9,9 10,0");
    // The synthetic moveto resets the reflection point, so `S` starts flat at (4,0).
    assert_eq!(kinds(&b.segments), "MCMC");
    let CurveSegment::CurveTo(s) = b.segments[3] else {
        panic!("expected a cubic");
    };
    assert_eq!(s.ctrl1, point(4.0, 0.0));
}

#[test]
fn interpolation_hits_both_ends_and_the_midpoint() {
    let (a, b) = align("M0,0 L10,0", "M0,10 L20,10");
    assert_eq!(interpolate(&a, &b, 0.0), a);
    assert_eq!(interpolate(&a, &b, 1.0), b);
    let mid = interpolate(&a, &b, 0.5);
    assert_eq!(mid.segments[0], CurveSegment::MoveTo(point(0.0, 5.0)));
    assert_eq!(
        mid.segments[1],
        CurveSegment::CurveTo(CubicSegment::new(
            point(0.0, 5.0),
            point(15.0, 5.0),
            point(15.0, 5.0),
        ))
    );
}

#[test]
fn interpolation_aligns_mismatched_inputs() {
    let a = to_curves("M0,0 L10,0");
    let b = to_curves("M0,0 L10,0 L10,10");
    let mid = interpolate(&a, &b, 0.5);
    assert_eq!(kinds(&mid.segments), "MCC");
    assert_eq!(
        mid.segments[2],
        CurveSegment::CurveTo(CubicSegment::new(
            point(10.0, 0.0),
            point(10.0, 5.0),
            point(10.0, 5.0),
        ))
    );
}

#[test]
fn empty_inputs_align_to_empty_outputs() {
    let (a, b) = align("", "");
    assert!(a.is_empty() && b.is_empty());
}
