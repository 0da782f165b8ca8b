use kurbo::{ParamCurve, ParamCurveArclen};

use crate::{
    foundation::error::{RevealError, RevealResult},
    geometry::path::{ARCLEN_ACCURACY, Contour, Path},
    measure::{
        output::{PositionSample, TrimmedContour, TrimmedOutput},
        policy::{Progression, clamp_progress},
        trim::{param_at_length, tangent_at, trim_contour},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SeedStamp {
    revision: u64,
    fingerprint: u64,
    contours: usize,
}

#[derive(Clone, Debug, Default)]
struct ContourMeasure {
    segment_lengths: Vec<f64>,
    length: f64,
}

/// Arc-length index over a [`Path`] and the trim queries built on it.
///
/// The engine does not own geometry. [`PathMeasure::seed`] records lengths for the path as it
/// is at that moment; every query takes the path again and refuses to run if it changed since
/// (`RevealError::StaleMeasurement`). Reseeding after each geometry change is the caller's
/// job.
#[derive(Clone, Debug, Default)]
pub struct PathMeasure {
    stamp: Option<SeedStamp>,
    contours: Vec<ContourMeasure>,
    cumulative: Vec<f64>,
    total: f64,
}

impl PathMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine already seeded with `path`.
    pub fn seeded(path: &Path) -> Self {
        let mut m = Self::new();
        m.seed(path);
        m
    }

    /// Measure `path` and rebuild the cumulative length table.
    #[tracing::instrument(skip(self, path), fields(contours = path.len(), revision = path.revision()))]
    pub fn seed(&mut self, path: &Path) {
        self.contours.clear();
        self.cumulative.clear();

        let mut running = 0.0;
        for contour in path.contours() {
            let segment_lengths = contour
                .segments()
                .iter()
                .map(|s| s.arclen(ARCLEN_ACCURACY))
                .collect::<Vec<_>>();
            let length = segment_lengths.iter().sum::<f64>();
            running += length;
            self.cumulative.push(running);
            self.contours.push(ContourMeasure {
                segment_lengths,
                length,
            });
        }
        self.total = running;
        self.stamp = Some(SeedStamp {
            revision: path.revision(),
            fingerprint: path.fingerprint(),
            contours: path.len(),
        });

        tracing::debug!(total_length = self.total, "seeded path measure");
    }

    pub fn is_seeded(&self) -> bool {
        self.stamp.is_some()
    }

    pub fn total_length(&self) -> f64 {
        self.total
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn contour_length(&self, idx: usize) -> Option<f64> {
        self.contours.get(idx).map(|m| m.length)
    }

    pub fn contour_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.contours.iter().map(|m| m.length)
    }

    /// Running totals: entry `i` is where contour `i` ends along the whole path.
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative
    }

    /// Error unless the engine was seeded from `path` in its current state.
    ///
    /// Revision and contour count are always compared; debug builds also compare a
    /// fingerprint of every point so a different path at the same revision is caught.
    pub fn check(&self, path: &Path) -> RevealResult<()> {
        let Some(stamp) = self.stamp else {
            if path.is_empty() {
                return Ok(());
            }
            return Err(RevealError::stale("measurement engine was never seeded"));
        };
        if stamp.revision != path.revision() {
            return Err(RevealError::stale(format!(
                "seeded at path revision {}, path is at revision {}",
                stamp.revision,
                path.revision()
            )));
        }
        if stamp.contours != path.len() {
            return Err(RevealError::stale(format!(
                "seeded with {} contours, path has {}",
                stamp.contours,
                path.len()
            )));
        }
        if cfg!(debug_assertions) && stamp.fingerprint != path.fingerprint() {
            return Err(RevealError::stale(
                "path geometry differs from the seeded geometry",
            ));
        }
        Ok(())
    }

    /// Trim every contour of `path` for `progress` (clamped to `[0, 1]`, NaN as 0).
    pub fn trim_at(
        &self,
        path: &Path,
        progress: f64,
        policy: Progression,
    ) -> RevealResult<TrimmedOutput> {
        self.trim_at_with(path, progress, policy, |_| {})
    }

    /// Like [`PathMeasure::trim_at`], reporting the pen position of each present contour.
    pub fn trim_at_with<F>(
        &self,
        path: &Path,
        progress: f64,
        policy: Progression,
        mut observer: F,
    ) -> RevealResult<TrimmedOutput>
    where
        F: FnMut(PositionSample),
    {
        self.check(path)?;
        let progress = clamp_progress(progress);

        let mut items = Vec::with_capacity(path.len());
        match policy {
            Progression::Independent => {
                for (idx, (contour, m)) in path.contours().iter().zip(&self.contours).enumerate() {
                    let distance = progress * m.length;
                    let item = if m.length <= 0.0 || distance <= 0.0 {
                        TrimmedContour::Absent
                    } else if distance >= m.length {
                        full(idx, contour, m, &mut observer)
                    } else {
                        partial(idx, contour, m, distance, &mut observer)
                    };
                    items.push(item);
                }
            }
            Progression::Sequential => {
                let target = progress * self.total;
                let mut start = 0.0;
                for (idx, (contour, m)) in path.contours().iter().zip(&self.contours).enumerate() {
                    let end = self.cumulative[idx];
                    // Equality with the contour start counts as not yet reached.
                    let item = if m.length <= 0.0 || target <= start {
                        TrimmedContour::Absent
                    } else if target >= end {
                        full(idx, contour, m, &mut observer)
                    } else {
                        partial(idx, contour, m, target - start, &mut observer)
                    };
                    items.push(item);
                    start = end;
                }
            }
        }
        Ok(TrimmedOutput::new(items))
    }

    /// Position and tangent `distance` along contour `contour` (clamped to its length).
    pub fn pos_tan_at(
        &self,
        path: &Path,
        contour: usize,
        distance: f64,
    ) -> RevealResult<Option<PositionSample>> {
        self.check(path)?;
        let (Some(c), Some(m)) = (path.contours().get(contour), self.contours.get(contour)) else {
            return Ok(None);
        };
        let distance = distance.clamp(0.0, m.length);

        let mut walked = 0.0;
        let mut last = None;
        for (&seg, &len) in c.segments().iter().zip(&m.segment_lengths) {
            last = Some(seg);
            if len > 0.0 && walked + len >= distance {
                let t = param_at_length(seg, len, distance - walked, ARCLEN_ACCURACY);
                return Ok(Some(PositionSample {
                    contour,
                    distance,
                    position: seg.eval(t),
                    tangent: tangent_at(seg, t),
                }));
            }
            walked += len;
        }
        Ok(last.map(|seg| PositionSample {
            contour,
            distance,
            position: seg.end(),
            tangent: tangent_at(seg, 1.0),
        }))
    }
}

fn full<F: FnMut(PositionSample)>(
    idx: usize,
    contour: &Contour,
    m: &ContourMeasure,
    observer: &mut F,
) -> TrimmedContour {
    observe_end(idx, contour, m.length, observer);
    TrimmedContour::Full(contour.clone())
}

fn partial<F: FnMut(PositionSample)>(
    idx: usize,
    contour: &Contour,
    m: &ContourMeasure,
    distance: f64,
    observer: &mut F,
) -> TrimmedContour {
    match trim_contour(contour, &m.segment_lengths, distance, ARCLEN_ACCURACY) {
        Some(trimmed) => {
            observe_end(idx, &trimmed, distance, observer);
            TrimmedContour::Partial(trimmed)
        }
        None => TrimmedContour::Absent,
    }
}

fn observe_end<F: FnMut(PositionSample)>(
    idx: usize,
    contour: &Contour,
    distance: f64,
    observer: &mut F,
) {
    if let Some(&last) = contour.segments().last() {
        observer(PositionSample {
            contour: idx,
            distance,
            position: last.end(),
            tangent: tangent_at(last, 1.0),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/engine.rs"]
mod tests;
