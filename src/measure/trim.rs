use kurbo::{ParamCurve, ParamCurveArclen, ParamCurveDeriv};

use crate::{
    foundation::core::{PathSeg, Vec2},
    geometry::path::Contour,
};

const MAX_BISECTION_STEPS: usize = 64;

/// Curve parameter at which `seg` has accumulated `target` arc length.
///
/// Lines use the closed form. Curves bisect on the length of `seg.subsegment(0..t)` until it
/// is within `accuracy` of `target`.
pub(crate) fn param_at_length(seg: PathSeg, seg_len: f64, target: f64, accuracy: f64) -> f64 {
    if target <= 0.0 || seg_len <= 0.0 {
        return 0.0;
    }
    if target >= seg_len {
        return 1.0;
    }
    if let PathSeg::Line(_) = seg {
        return target / seg_len;
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = target / seg_len;
    for _ in 0..MAX_BISECTION_STEPS {
        let err = seg.subsegment(0.0..t).arclen(accuracy) - target;
        if err.abs() <= accuracy {
            break;
        }
        if err < 0.0 {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    t
}

/// Contour revealed from its start up to `distance`, open.
///
/// `segment_lengths` must be the measured lengths of `contour`'s segments.
pub(crate) fn trim_contour(
    contour: &Contour,
    segment_lengths: &[f64],
    distance: f64,
    accuracy: f64,
) -> Option<Contour> {
    if distance <= 0.0 {
        return None;
    }

    let mut walked = 0.0;
    let mut out = Vec::with_capacity(contour.segments().len());
    for (&seg, &len) in contour.segments().iter().zip(segment_lengths) {
        if len > 0.0 && walked + len >= distance {
            let t = param_at_length(seg, len, distance - walked, accuracy);
            if t >= 1.0 {
                out.push(seg);
            } else if t > 0.0 {
                out.push(seg.subsegment(0.0..t));
            }
            return Contour::new(out, false);
        }
        out.push(seg);
        walked += len;
    }
    Contour::new(out, false)
}

/// Unit tangent of `seg` at parameter `t`.
pub(crate) fn tangent_at(seg: PathSeg, t: f64) -> Vec2 {
    let d = match seg {
        PathSeg::Line(l) => l.p1 - l.p0,
        PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(c) => c.deriv().eval(t).to_vec2(),
    };
    if d.hypot2() > 0.0 { d.normalize() } else { Vec2::ZERO }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/trim.rs"]
mod tests;
