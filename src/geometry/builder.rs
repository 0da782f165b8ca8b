use crate::{
    foundation::core::{BezPath, Point, Rect, Vec2},
    geometry::path::Path,
};

/// Tolerance used when flattening elliptical arcs into cubic segments.
const ARC_TOLERANCE: f64 = 1e-3;

/// Gaps up to this length between the current point and an arc start are not bridged.
const JOIN_TOLERANCE: f64 = 1e-9;

/// Incremental builder for a [`Path`].
///
/// Drawing before any `move_to` starts a sub-path at the current point (initially the origin).
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    bez: BezPath,
    current: Point,
    start: Point,
    open: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: impl Into<Point>) -> Self {
        let p = p.into();
        self.bez.move_to(p);
        self.current = p;
        self.start = p;
        self.open = true;
        self
    }

    pub fn line_to(mut self, p: impl Into<Point>) -> Self {
        self.ensure_open();
        let p = p.into();
        self.bez.line_to(p);
        self.current = p;
        self
    }

    pub fn quad_to(mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> Self {
        self.ensure_open();
        let p2 = p2.into();
        self.bez.quad_to(p1.into(), p2);
        self.current = p2;
        self
    }

    pub fn curve_to(
        mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Self {
        self.ensure_open();
        let p3 = p3.into();
        self.bez.curve_to(p1.into(), p2.into(), p3);
        self.current = p3;
        self
    }

    /// Append an axis-aligned elliptical arc (angles in radians, sweep may be negative).
    ///
    /// When a sub-path is open and its current point is not the arc start, a connecting line
    /// is inserted first.
    pub fn arc_to(
        mut self,
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        let center = center.into();
        let radii = radii.into();
        let arc_point = |angle: f64| {
            Point::new(
                center.x + radii.x * angle.cos(),
                center.y + radii.y * angle.sin(),
            )
        };
        let from = arc_point(start_angle);
        if !self.open {
            self = self.move_to(from);
        } else if (self.current - from).hypot() > JOIN_TOLERANCE {
            self = self.line_to(from);
        }

        let arc = kurbo::Arc::new(center, radii, start_angle, sweep_angle, 0.0);
        for el in arc.append_iter(ARC_TOLERANCE) {
            if let Some(p) = el.end_point() {
                self.current = p;
            }
            self.bez.push(el);
        }
        self
    }

    pub fn close(mut self) -> Self {
        if self.open {
            self.bez.close_path();
            self.current = self.start;
            self.open = false;
        }
        self
    }

    /// Closed rectangle traced clockwise from its top-left corner.
    pub fn rect(self, r: Rect) -> Self {
        self.move_to((r.x0, r.y0))
            .line_to((r.x1, r.y0))
            .line_to((r.x1, r.y1))
            .line_to((r.x0, r.y1))
            .close()
    }

    /// Closed circle starting at angle 0.
    pub fn circle(self, center: impl Into<Point>, radius: f64) -> Self {
        self.arc_to(
            center,
            Vec2::new(radius, radius),
            0.0,
            std::f64::consts::TAU,
        )
        .close()
    }

    pub fn to_bez_path(&self) -> BezPath {
        self.bez.clone()
    }

    pub fn build(self) -> Path {
        Path::from_bez_path(&self.bez)
    }

    fn ensure_open(&mut self) {
        if !self.open {
            self.bez.move_to(self.current);
            self.start = self.current;
            self.open = true;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/builder.rs"]
mod tests;
