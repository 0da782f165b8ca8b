use kurbo::ParamCurveExtrema;

use crate::foundation::core::{IntRect, PathSeg, Rect};

/// Axis-aligned bounds in float and truncated-integer form.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub rect: Rect,
    pub int: IntRect,
}

impl Bounds {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            int: IntRect::from_rect_truncated(rect),
        }
    }

    /// Tight box over segment extrema (curves included), `None` for no segments.
    pub fn of_segments(segments: impl IntoIterator<Item = PathSeg>) -> Option<Self> {
        segments
            .into_iter()
            .map(|s| ParamCurveExtrema::bounding_box(&s))
            .reduce(|a, b| a.union(b))
            .map(Self::from_rect)
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
