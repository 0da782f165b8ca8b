use crate::{
    descriptor::config::PathDescConfig,
    foundation::core::Rect,
    foundation::error::{RevealError, RevealResult},
    foundation::math::approx_eq,
    geometry::{bounds::Bounds, path::Path},
    measure::{
        engine::PathMeasure,
        output::{PositionSample, TrimmedOutput},
    },
    transform::fit::{FitPlan, plan_fit},
};

/// Lifecycle of a [`PathDesc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescState {
    /// No geometry.
    Unbound,
    /// Geometry present, never fitted to a target.
    Bound,
    /// Fitted at least once; trim queries produce geometry.
    Fitted,
}

/// A path together with its placement rules, bounds and measurement engine.
///
/// Every bounds change re-fits the geometry from its current bounds (never by composing
/// with a previous transform), mutates it in place and reseeds the engine, so the engine can
/// never observe stale geometry through the descriptor.
#[derive(Clone, Debug)]
pub struct PathDesc {
    path: Option<Path>,
    config: PathDescConfig,
    bounds: Option<Bounds>,
    measure: PathMeasure,
    state: DescState,
    last_target: Option<Rect>,
}

impl PathDesc {
    /// Descriptor without geometry; reports absent output until a path is bound and fitted.
    pub fn unbound(config: PathDescConfig) -> Self {
        Self {
            path: None,
            config,
            bounds: None,
            measure: PathMeasure::new(),
            state: DescState::Unbound,
            last_target: None,
        }
    }

    pub fn new(path: Path, config: PathDescConfig) -> Self {
        let mut desc = Self::unbound(config);
        desc.bind(path);
        desc
    }

    pub fn from_svg(d: &str, config: PathDescConfig) -> RevealResult<Self> {
        Ok(Self::new(Path::from_svg(d)?, config))
    }

    /// Replace the geometry wholesale. The descriptor returns to [`DescState::Bound`].
    pub fn bind(&mut self, path: Path) {
        self.bounds = path.bounds();
        self.measure.seed(&path);
        self.path = Some(path);
        self.state = DescState::Bound;
        self.last_target = None;
        tracing::debug!(contours = self.contour_count(), "path bound");
    }

    pub fn state(&self) -> DescState {
        self.state
    }

    pub fn config(&self) -> &PathDescConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn measure(&self) -> &PathMeasure {
        &self.measure
    }

    /// Target rectangle of the most recent fit.
    pub fn last_target(&self) -> Option<Rect> {
        self.last_target
    }

    pub fn contour_count(&self) -> usize {
        self.path.as_ref().map_or(0, Path::len)
    }

    /// Fit the geometry into `target` and reseed the engine.
    ///
    /// Returns the applied plan, or `None` when there was nothing to fit (unbound or empty).
    #[tracing::instrument(skip(self), fields(state = ?self.state))]
    pub fn on_bounds_changed(&mut self, target: Rect) -> RevealResult<Option<FitPlan>> {
        if ![target.x0, target.y0, target.x1, target.y1]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(RevealError::validation(format!(
                "target rectangle must be finite, got {target:?}"
            )));
        }
        let Some(path) = self.path.as_mut() else {
            tracing::warn!("bounds change on an unbound path descriptor ignored");
            return Ok(None);
        };

        // 1. bounds from live geometry
        let Some(source) = path.bounds() else {
            self.bounds = None;
            self.measure.seed(path);
            return Ok(None);
        };

        // 2. plan
        let plan = plan_fit(
            source.rect,
            target,
            self.config.alignment,
            self.config.keep_aspect,
            self.config.scale_for_bounds,
        );

        // 3. apply in place
        path.apply_affine(plan.affine);

        // 4. bounds of the transformed geometry
        self.bounds = path.bounds();
        if let Some(b) = self.bounds {
            debug_assert!(
                approx_eq(b.rect.x0, plan.placed.x0, 1e-6)
                    && approx_eq(b.rect.y0, plan.placed.y0, 1e-6)
                    && approx_eq(b.rect.x1, plan.placed.x1, 1e-6)
                    && approx_eq(b.rect.y1, plan.placed.y1, 1e-6),
                "fitted bounds {:?} drifted from placement {:?}",
                b.rect,
                plan.placed
            );
        }

        // 5. reseed
        self.measure.seed(path);

        self.state = DescState::Fitted;
        self.last_target = Some(target);
        tracing::debug!(scale = ?plan.scale, placed = ?plan.placed, "path fitted");
        Ok(Some(plan))
    }

    /// Trimmed geometry for `progress` using the configured progression.
    pub fn trimmed(&self, progress: f64) -> RevealResult<TrimmedOutput> {
        self.trimmed_with(progress, |_| {})
    }

    pub fn trimmed_with<F>(&self, progress: f64, observer: F) -> RevealResult<TrimmedOutput>
    where
        F: FnMut(PositionSample),
    {
        match (&self.path, self.state) {
            (Some(path), DescState::Fitted) => {
                self.measure
                    .trim_at_with(path, progress, self.config.progression, observer)
            }
            _ => Ok(TrimmedOutput::absent(self.contour_count())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/descriptor/desc.rs"]
mod tests;
