use super::*;
use crate::geometry::builder::PathBuilder;
use kurbo::{PathSeg, Point, Rect, Vec2};

const TOL: f64 = 1e-3;

fn two_lines_30_70() -> Path {
    Path::from_svg("M0,0 L30,0 M0,10 L70,10").unwrap()
}

fn mixed_curves() -> Path {
    PathBuilder::new()
        .move_to((0.0, 0.0))
        .line_to((40.0, 0.0))
        .quad_to((60.0, 30.0), (40.0, 60.0))
        .curve_to((20.0, 90.0), (-20.0, 40.0), (0.0, 0.0))
        .close()
        .circle((100.0, 100.0), 25.0)
        .move_to((0.0, 200.0))
        .curve_to((30.0, 150.0), (60.0, 250.0), (90.0, 200.0))
        .build()
}

#[test]
fn seed_builds_cumulative_table() {
    let m = PathMeasure::seeded(&two_lines_30_70());
    assert!(m.is_seeded());
    assert_eq!(m.contour_count(), 2);
    assert_eq!(m.contour_lengths().collect::<Vec<_>>(), vec![30.0, 70.0]);
    assert_eq!(m.cumulative_lengths(), &[30.0, 100.0]);
    assert_eq!(m.total_length(), 100.0);
}

#[test]
fn sequential_half_completes_first_and_trims_second() {
    let path = two_lines_30_70();
    let m = PathMeasure::seeded(&path);
    let out = m.trim_at(&path, 0.5, Progression::Sequential).unwrap();

    assert_eq!(out.len(), 2);
    assert!(out.get(0).unwrap().is_full());
    let TrimmedContour::Partial(c1) = out.get(1).unwrap() else {
        panic!("contour 1 should be partial");
    };
    assert!((c1.length(1e-9) - 20.0).abs() < 1e-9);
    assert_eq!(c1.start(), Point::new(0.0, 10.0));
    assert_eq!(c1.end(), Point::new(20.0, 10.0));
}

#[test]
fn independent_half_trims_every_contour_to_half() {
    let path = two_lines_30_70();
    let m = PathMeasure::seeded(&path);
    let out = m.trim_at(&path, 0.5, Progression::Independent).unwrap();

    let lens = out.iter().map(|t| t.length(1e-9)).collect::<Vec<_>>();
    assert!((lens[0] - 15.0).abs() < 1e-9);
    assert!((lens[1] - 35.0).abs() < 1e-9);
    assert!(out.iter().all(|t| matches!(t, TrimmedContour::Partial(_))));
}

#[test]
fn target_on_contour_start_counts_as_not_reached() {
    let path = Path::from_svg("M0,0 L25,0 M0,10 L75,10").unwrap();
    let m = PathMeasure::seeded(&path);
    let out = m.trim_at(&path, 0.25, Progression::Sequential).unwrap();
    assert!(out.get(0).unwrap().is_full());
    assert!(out.get(1).unwrap().is_absent());
}

#[test]
fn endpoints_under_both_policies() {
    let path = mixed_curves();
    let m = PathMeasure::seeded(&path);
    for policy in [Progression::Sequential, Progression::Independent] {
        let zero = m.trim_at(&path, 0.0, policy).unwrap();
        assert_eq!(zero.len(), path.len());
        assert!(zero.is_all_absent(), "{policy:?}");

        let one = m.trim_at(&path, 1.0, policy).unwrap();
        for (t, c) in one.iter().zip(path.contours()) {
            assert_eq!(t, &TrimmedContour::Full(c.clone()), "{policy:?}");
        }
    }
}

#[test]
fn progress_is_clamped() {
    let path = two_lines_30_70();
    let m = PathMeasure::seeded(&path);
    for policy in [Progression::Sequential, Progression::Independent] {
        assert_eq!(
            m.trim_at(&path, 3.0, policy).unwrap(),
            m.trim_at(&path, 1.0, policy).unwrap()
        );
        assert!(m.trim_at(&path, -0.5, policy).unwrap().is_all_absent());
        assert!(m.trim_at(&path, f64::NAN, policy).unwrap().is_all_absent());
    }
}

#[test]
fn zero_length_contour_is_always_absent() {
    let path = Path::from_svg("M5,5 L5,5 M0,0 L10,0").unwrap();
    let m = PathMeasure::seeded(&path);
    assert_eq!(m.cumulative_lengths(), &[0.0, 10.0]);
    for policy in [Progression::Sequential, Progression::Independent] {
        let out = m.trim_at(&path, 1.0, policy).unwrap();
        assert!(out.get(0).unwrap().is_absent());
        assert!(out.get(1).unwrap().is_full());
    }
}

#[test]
fn empty_path_yields_empty_output() {
    let path = Path::new();
    let m = PathMeasure::new();
    assert!(m.trim_at(&path, 0.7, Progression::Sequential).unwrap().is_empty());
    let m = PathMeasure::seeded(&path);
    assert_eq!(m.total_length(), 0.0);
    assert!(m.trim_at(&path, 1.0, Progression::Independent).unwrap().is_empty());
}

#[test]
fn sequential_reveals_monotonically_and_sums_to_target() {
    let path = mixed_curves();
    let m = PathMeasure::seeded(&path);
    let total = m.total_length();

    let mut prev = 0.0;
    for step in 0..=40 {
        let p = f64::from(step) / 40.0;
        let out = m.trim_at(&path, p, Progression::Sequential).unwrap();
        let revealed = out.total_length(ARCLEN_ACCURACY);
        assert!(revealed + TOL >= prev, "p={p} revealed={revealed} prev={prev}");
        assert!((revealed - p * total).abs() < TOL, "p={p} revealed={revealed}");
        let partial = out
            .iter()
            .filter(|t| matches!(t, TrimmedContour::Partial(_)))
            .count();
        assert!(partial <= 1, "p={p}");
        prev = revealed;
    }
}

#[test]
fn independent_reveals_same_fraction_everywhere() {
    let path = mixed_curves();
    let m = PathMeasure::seeded(&path);
    for p in [0.05, 0.3, 0.5, 0.77, 0.99] {
        let out = m.trim_at(&path, p, Progression::Independent).unwrap();
        for (idx, t) in out.iter().enumerate() {
            let want = p * m.contour_length(idx).unwrap();
            let got = t.length(ARCLEN_ACCURACY);
            assert!((got - want).abs() < TOL, "p={p} idx={idx} got={got} want={want}");
        }
    }
}

#[test]
fn partial_curve_is_not_flattened() {
    let path = Path::from_svg("M0,0 C0,100 100,100 100,0").unwrap();
    let m = PathMeasure::seeded(&path);
    let out = m.trim_at(&path, 0.5, Progression::Sequential).unwrap();
    let c = out.get(0).unwrap().contour().unwrap();
    assert!(matches!(c.segments()[0], PathSeg::Cubic(_)));
    assert!((c.end().x - 50.0).abs() < 1e-2, "end={:?}", c.end());
    assert!((c.end().y - 75.0).abs() < 1e-2, "end={:?}", c.end());
}

#[test]
fn transform_without_reseed_is_stale() {
    let mut path = PathBuilder::new()
        .rect(Rect::new(0.0, 0.0, 10.0, 10.0))
        .build();
    let mut m = PathMeasure::seeded(&path);
    path.apply_affine(kurbo::Affine::scale(2.0));

    let err = m.trim_at(&path, 0.5, Progression::Sequential).unwrap_err();
    assert!(matches!(err, RevealError::StaleMeasurement(_)));

    m.seed(&path);
    assert_eq!(m.total_length(), 80.0);
    assert!(m.trim_at(&path, 0.5, Progression::Sequential).is_ok());
}

#[test]
fn unseeded_engine_rejects_geometry() {
    let path = two_lines_30_70();
    let err = PathMeasure::new()
        .trim_at(&path, 0.5, Progression::Sequential)
        .unwrap_err();
    assert!(matches!(err, RevealError::StaleMeasurement(_)));
}

#[test]
fn different_path_at_same_revision_is_caught_in_debug() {
    let a = Path::from_svg("M0,0 L10,0").unwrap();
    let b = Path::from_svg("M0,0 L20,0").unwrap();
    let m = PathMeasure::seeded(&a);
    let res = m.trim_at(&b, 0.5, Progression::Sequential);
    if cfg!(debug_assertions) {
        assert!(matches!(res, Err(RevealError::StaleMeasurement(_))));
    } else {
        assert!(res.is_ok());
    }
}

#[test]
fn observer_sees_pen_position_per_present_contour() {
    let path = two_lines_30_70();
    let m = PathMeasure::seeded(&path);
    let mut seen = Vec::new();
    m.trim_at_with(&path, 0.5, Progression::Sequential, |s| seen.push(s))
        .unwrap();

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].contour, 0);
    assert_eq!(seen[0].distance, 30.0);
    assert_eq!(seen[0].position, Point::new(30.0, 0.0));
    assert_eq!(seen[1].contour, 1);
    assert!((seen[1].distance - 20.0).abs() < 1e-9);
    assert_eq!(seen[1].position, Point::new(20.0, 10.0));
    assert_eq!(seen[1].tangent, Vec2::new(1.0, 0.0));

    seen.clear();
    m.trim_at_with(&path, 0.0, Progression::Sequential, |s| seen.push(s))
        .unwrap();
    assert!(seen.is_empty());
}

#[test]
fn pos_tan_walks_across_segments() {
    let path = Path::from_svg("M0,0 L10,0 L10,10").unwrap();
    let m = PathMeasure::seeded(&path);

    let s = m.pos_tan_at(&path, 0, 15.0).unwrap().unwrap();
    assert_eq!(s.position, Point::new(10.0, 5.0));
    assert_eq!(s.tangent, Vec2::new(0.0, 1.0));

    let past_end = m.pos_tan_at(&path, 0, 99.0).unwrap().unwrap();
    assert_eq!(past_end.distance, 20.0);
    assert_eq!(past_end.position, Point::new(10.0, 10.0));

    assert!(m.pos_tan_at(&path, 7, 1.0).unwrap().is_none());
}
