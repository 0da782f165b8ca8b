use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, QuadBez};

use crate::{
    foundation::core::{Affine, BezPath, PathEl, PathSeg, Point},
    foundation::error::{RevealError, RevealResult},
    foundation::math::Fnv1a64,
    geometry::bounds::Bounds,
};

/// Accuracy, in path units, used when measuring curve arc length.
pub const ARCLEN_ACCURACY: f64 = 1e-4;

/// A closing gap at most this long is rounding noise: the last point is moved onto the start
/// instead of adding a closing line.
const CLOSE_SNAP: f64 = 1e-9;

/// One continuous sub-path: a non-empty run of connected segments.
///
/// A closed contour stores its closing edge as an explicit line segment whenever the last
/// point differs from the start, so that edge participates in length and trimming.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    segments: Vec<PathSeg>,
    closed: bool,
}

impl Contour {
    /// Returns `None` for an empty segment list.
    pub fn new(segments: Vec<PathSeg>, closed: bool) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        debug_assert!(
            segments.windows(2).all(|w| w[0].end() == w[1].start()),
            "contour segments must be connected"
        );
        Some(Self { segments, closed })
    }

    pub fn segments(&self) -> &[PathSeg] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn start(&self) -> Point {
        self.segments[0].start()
    }

    pub fn end(&self) -> Point {
        self.segments[self.segments.len() - 1].end()
    }

    /// Sum of segment arc lengths.
    pub fn length(&self, accuracy: f64) -> f64 {
        self.segments.iter().map(|s| s.arclen(accuracy)).sum()
    }

    pub fn bounds(&self) -> Bounds {
        // Non-empty by construction.
        Bounds::of_segments(self.segments.iter().copied()).unwrap_or_default()
    }

    pub fn apply_affine(&mut self, affine: Affine) {
        for seg in &mut self.segments {
            *seg = affine * *seg;
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        self.append_to(&mut out);
        out
    }

    /// Append this contour as a new sub-path of `out`.
    pub fn append_to(&self, out: &mut BezPath) {
        out.move_to(self.start());
        for seg in &self.segments {
            match *seg {
                PathSeg::Line(l) => out.line_to(l.p1),
                PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
            }
        }
        if self.closed {
            out.close_path();
        }
    }

    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        h.write_u8(u8::from(self.closed));
        h.write_u64(self.segments.len() as u64);
        for seg in &self.segments {
            match *seg {
                PathSeg::Line(Line { p0, p1 }) => {
                    h.write_u8(1);
                    h.write_point(p0);
                    h.write_point(p1);
                }
                PathSeg::Quad(QuadBez { p0, p1, p2 }) => {
                    h.write_u8(2);
                    h.write_point(p0);
                    h.write_point(p1);
                    h.write_point(p2);
                }
                PathSeg::Cubic(CubicBez { p0, p1, p2, p3 }) => {
                    h.write_u8(3);
                    h.write_point(p0);
                    h.write_point(p1);
                    h.write_point(p2);
                    h.write_point(p3);
                }
            }
        }
    }
}

/// An ordered list of contours plus a mutation counter.
///
/// The revision increments on every in-place geometry change so that measurement state
/// derived from an earlier revision can be detected as stale.
#[derive(Clone, Debug, Default)]
pub struct Path {
    contours: Vec<Contour>,
    revision: u64,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            revision: 0,
        }
    }

    /// Split a [`BezPath`] into contours, preserving draw order.
    ///
    /// Sub-paths made only of a `MoveTo` carry nothing drawable and are dropped.
    pub fn from_bez_path(bez: &BezPath) -> Self {
        let mut contours = Vec::new();
        let mut segments = Vec::<PathSeg>::new();
        let mut start = Point::ZERO;
        let mut last = Point::ZERO;

        for el in bez.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    contours.extend(Contour::new(std::mem::take(&mut segments), false));
                    start = p;
                    last = p;
                }
                PathEl::LineTo(p) => {
                    segments.push(PathSeg::Line(Line::new(last, p)));
                    last = p;
                }
                PathEl::QuadTo(p1, p2) => {
                    segments.push(PathSeg::Quad(QuadBez::new(last, p1, p2)));
                    last = p2;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    segments.push(PathSeg::Cubic(CubicBez::new(last, p1, p2, p3)));
                    last = p3;
                }
                PathEl::ClosePath => {
                    if !segments.is_empty() && last != start {
                        if (last - start).hypot() <= CLOSE_SNAP {
                            if let Some(seg) = segments.last_mut() {
                                *seg = with_end(*seg, start);
                            }
                        } else {
                            segments.push(PathSeg::Line(Line::new(last, start)));
                        }
                    }
                    contours.extend(Contour::new(std::mem::take(&mut segments), true));
                    last = start;
                }
            }
        }
        contours.extend(Contour::new(segments, false));

        Self::from_contours(contours)
    }

    /// Parse SVG path data (`d` attribute syntax).
    pub fn from_svg(d: &str) -> RevealResult<Self> {
        if d.trim().is_empty() {
            return Err(RevealError::validation("svg path data must be non-empty"));
        }
        let bez = BezPath::from_svg(d)
            .map_err(|e| RevealError::validation(format!("invalid svg path data: {e}")))?;
        Ok(Self::from_bez_path(&bez))
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tight bounds over every segment, `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_segments(self.contours.iter().flat_map(|c| c.segments.iter().copied()))
    }

    /// Transform every point in place.
    pub fn apply_affine(&mut self, affine: Affine) {
        for c in &mut self.contours {
            c.apply_affine(affine);
        }
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn total_length(&self, accuracy: f64) -> f64 {
        self.contours.iter().map(|c| c.length(accuracy)).sum()
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for c in &self.contours {
            c.append_to(&mut out);
        }
        out
    }

    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }

    pub(crate) fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.contours.len() as u64);
        for c in &self.contours {
            c.hash_into(&mut h);
        }
        h.finish()
    }
}

fn with_end(seg: PathSeg, p: Point) -> PathSeg {
    match seg {
        PathSeg::Line(l) => PathSeg::Line(Line::new(l.p0, p)),
        PathSeg::Quad(q) => PathSeg::Quad(QuadBez::new(q.p0, q.p1, p)),
        PathSeg::Cubic(c) => PathSeg::Cubic(CubicBez::new(c.p0, c.p1, c.p2, p)),
    }
}

impl From<&BezPath> for Path {
    fn from(value: &BezPath) -> Self {
        Self::from_bez_path(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
