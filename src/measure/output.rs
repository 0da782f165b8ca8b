use crate::{
    foundation::core::{BezPath, Point, Vec2},
    geometry::path::Contour,
};

/// Result for one contour of a trim query.
#[derive(Clone, Debug, PartialEq)]
pub enum TrimmedContour {
    /// Not reached yet, or nothing to draw.
    Absent,
    /// Revealed from the contour start up to some interior arc length. Always open.
    Partial(Contour),
    /// Entirely revealed; keeps the source contour's closed flag.
    Full(Contour),
}

impl TrimmedContour {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    pub fn contour(&self) -> Option<&Contour> {
        match self {
            Self::Absent => None,
            Self::Partial(c) | Self::Full(c) => Some(c),
        }
    }

    pub fn length(&self, accuracy: f64) -> f64 {
        self.contour().map_or(0.0, |c| c.length(accuracy))
    }
}

/// Per-contour trim results, in the owning path's contour order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrimmedOutput {
    items: Vec<TrimmedContour>,
}

impl TrimmedOutput {
    pub fn new(items: Vec<TrimmedContour>) -> Self {
        Self { items }
    }

    /// `len` absent entries.
    pub fn absent(len: usize) -> Self {
        Self {
            items: vec![TrimmedContour::Absent; len],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TrimmedContour> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrimmedContour> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TrimmedContour] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<TrimmedContour> {
        self.items
    }

    pub fn is_all_absent(&self) -> bool {
        self.items.iter().all(TrimmedContour::is_absent)
    }

    /// Sum of revealed arc length over all contours.
    pub fn total_length(&self, accuracy: f64) -> f64 {
        self.items.iter().map(|t| t.length(accuracy)).sum()
    }

    /// Concatenate every present contour into one path, skipping absent entries.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for c in self.items.iter().filter_map(TrimmedContour::contour) {
            c.append_to(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a TrimmedOutput {
    type Item = &'a TrimmedContour;
    type IntoIter = std::slice::Iter<'a, TrimmedContour>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pen state at the end of a contour's revealed part.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PositionSample {
    /// Index of the contour in the path.
    pub contour: usize,
    /// Revealed arc length measured from the contour start.
    pub distance: f64,
    pub position: Point,
    /// Unit tangent in drawing direction; zero when the curve is degenerate there.
    pub tangent: Vec2,
}
