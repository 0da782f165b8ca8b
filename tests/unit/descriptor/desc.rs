use super::*;
use crate::{
    geometry::builder::PathBuilder,
    layout::align::Alignment,
    measure::{output::TrimmedContour, policy::Progression},
};

fn rect_100x50() -> Path {
    PathBuilder::new()
        .rect(Rect::new(0.0, 0.0, 100.0, 50.0))
        .build()
}

#[test]
fn state_machine_unbound_bound_fitted() {
    let mut desc = PathDesc::unbound(PathDescConfig::default());
    assert_eq!(desc.state(), DescState::Unbound);
    assert!(
        desc.on_bounds_changed(Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap()
            .is_none()
    );
    assert_eq!(desc.state(), DescState::Unbound);
    assert!(desc.trimmed(1.0).unwrap().is_empty());

    desc.bind(rect_100x50());
    assert_eq!(desc.state(), DescState::Bound);
    let out = desc.trimmed(1.0).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out.is_all_absent());

    desc.on_bounds_changed(Rect::new(0.0, 0.0, 200.0, 100.0))
        .unwrap();
    assert_eq!(desc.state(), DescState::Fitted);
    assert!(desc.trimmed(1.0).unwrap().get(0).unwrap().is_full());

    desc.bind(rect_100x50());
    assert_eq!(desc.state(), DescState::Bound);
    assert!(desc.last_target().is_none());
}

#[test]
fn rect_fit_scales_by_two_into_exact_bounds() {
    let mut desc = PathDesc::new(rect_100x50(), PathDescConfig::default());
    let target = Rect::new(0.0, 0.0, 200.0, 100.0);
    let plan = desc.on_bounds_changed(target).unwrap().unwrap();

    assert_eq!(plan.scale, kurbo::Vec2::new(2.0, 2.0));
    let b = desc.bounds().unwrap();
    assert_eq!(b.rect, target);
    assert_eq!(b.int, crate::foundation::core::IntRect::new(0, 0, 200, 100));
    assert_eq!(desc.measure().total_length(), 600.0);
    assert_eq!(desc.last_target(), Some(target));
}

#[test]
fn refit_with_same_target_leaves_geometry_unchanged() {
    use kurbo::ParamCurve;

    fn points(desc: &PathDesc) -> Vec<kurbo::Point> {
        desc.path()
            .unwrap()
            .contours()
            .iter()
            .flat_map(|c| c.segments().iter().map(|s| s.end()))
            .collect()
    }

    let path = PathBuilder::new()
        .move_to((3.0, 7.0))
        .curve_to((40.0, -20.0), (90.0, 60.0), (33.0, 41.0))
        .line_to((12.0, 5.5))
        .build();
    let mut desc = PathDesc::new(path, PathDescConfig::default());
    let target = Rect::new(13.0, 17.0, 313.0, 217.0);

    desc.on_bounds_changed(target).unwrap();
    let first = points(&desc);
    let first_bounds = desc.bounds().unwrap().rect;

    desc.on_bounds_changed(target).unwrap();
    let second = points(&desc);
    let second_bounds = desc.bounds().unwrap().rect;

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert!(a.distance(*b) < 1e-9, "{a:?} vs {b:?}");
    }
    assert!((first_bounds.x0 - second_bounds.x0).abs() < 1e-9);
    assert!((first_bounds.y0 - second_bounds.y0).abs() < 1e-9);
    assert!((first_bounds.x1 - second_bounds.x1).abs() < 1e-9);
    assert!((first_bounds.y1 - second_bounds.y1).abs() < 1e-9);
}

#[test]
fn repeated_resizes_do_not_accumulate() {
    let mut desc = PathDesc::new(rect_100x50(), PathDescConfig::default());
    desc.on_bounds_changed(Rect::new(0.0, 0.0, 50.0, 50.0))
        .unwrap();
    desc.on_bounds_changed(Rect::new(0.0, 0.0, 400.0, 400.0))
        .unwrap();
    let b = desc.bounds().unwrap().rect;
    assert!((b.width() - 400.0).abs() < 1e-9);
    assert!((b.height() - 200.0).abs() < 1e-9);
    assert!((b.y0 - 100.0).abs() < 1e-9);
}

#[test]
fn trimmed_output_follows_fitted_geometry() {
    let path = Path::from_svg("M0,0 L30,0 M0,10 L70,10").unwrap();
    let config = PathDescConfig::default()
        .alignment(Alignment::TOP_START)
        .scale_for_bounds(false);
    let mut desc = PathDesc::new(path, config);
    desc.on_bounds_changed(Rect::new(100.0, 100.0, 300.0, 300.0))
        .unwrap();

    let out = desc.trimmed(0.5).unwrap();
    assert!(out.get(0).unwrap().is_full());
    let TrimmedContour::Partial(c) = out.get(1).unwrap() else {
        panic!("expected partial");
    };
    assert_eq!(c.start(), kurbo::Point::new(100.0, 110.0));
    assert_eq!(c.end(), kurbo::Point::new(120.0, 110.0));

    let config = config.progression(Progression::Independent);
    let mut desc = PathDesc::from_svg("M0,0 L30,0 M0,10 L70,10", config).unwrap();
    desc.on_bounds_changed(Rect::new(0.0, 0.0, 70.0, 10.0))
        .unwrap();
    let lens = desc
        .trimmed(0.5)
        .unwrap()
        .iter()
        .map(|t| t.length(1e-9))
        .collect::<Vec<_>>();
    assert_eq!(lens, vec![15.0, 35.0]);
}

#[test]
fn observer_is_forwarded() {
    let mut desc = PathDesc::from_svg("M0,0 L10,0", PathDescConfig::default()).unwrap();
    desc.on_bounds_changed(Rect::new(0.0, 0.0, 10.0, 0.0))
        .unwrap();
    let mut distances = Vec::new();
    desc.trimmed_with(0.25, |s| distances.push(s.distance))
        .unwrap();
    assert_eq!(distances, vec![2.5]);
}

#[test]
fn empty_path_stays_bound() {
    let mut desc = PathDesc::new(Path::new(), PathDescConfig::default());
    assert!(
        desc.on_bounds_changed(Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap()
            .is_none()
    );
    assert_eq!(desc.state(), DescState::Bound);
    assert!(desc.trimmed(0.5).unwrap().is_empty());
}

#[test]
fn non_finite_target_is_rejected() {
    let mut desc = PathDesc::new(rect_100x50(), PathDescConfig::default());
    let err = desc
        .on_bounds_changed(Rect::new(0.0, 0.0, f64::INFINITY, 10.0))
        .unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
    assert_eq!(desc.state(), DescState::Bound);
}
