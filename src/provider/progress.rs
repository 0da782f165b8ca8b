use crate::{
    descriptor::desc::PathDesc,
    foundation::core::Rect,
    foundation::error::RevealResult,
    measure::output::{PositionSample, TrimmedOutput},
    provider::surface::{Layer, PathStyle, PathSurface},
};

/// Phase of the show/dismiss overlay animation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    #[default]
    Idle,
    Show,
    /// Runs the overlay backwards: queries `1 - phase`.
    Dismiss,
}

impl AnimationKind {
    /// Progress value queried on the overlay for `phase`.
    pub fn effective_phase(self, phase: f64) -> f64 {
        match self {
            Self::Idle | Self::Show => phase,
            Self::Dismiss => 1.0 - phase,
        }
    }
}

/// Geometry of one frame: the progress path and the overlay path, each if configured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameGeometry {
    pub progress: Option<TrimmedOutput>,
    pub animation: Option<TrimmedOutput>,
}

/// Pairs a progress descriptor with an optional overlay descriptor and drives both from host
/// events: bounds changes, animation ticks and render steps.
#[derive(Clone, Debug, Default)]
pub struct PathProgressProvider {
    progress: Option<PathDesc>,
    animation: Option<PathDesc>,
    animation_output: Option<TrimmedOutput>,
}

impl PathProgressProvider {
    pub fn new(progress: Option<PathDesc>, animation: Option<PathDesc>) -> Self {
        Self {
            progress,
            animation,
            animation_output: None,
        }
    }

    pub fn progress_desc(&self) -> Option<&PathDesc> {
        self.progress.as_ref()
    }

    pub fn animation_desc(&self) -> Option<&PathDesc> {
        self.animation.as_ref()
    }

    /// Overlay output cached by the last [`PathProgressProvider::animation_update`].
    pub fn animation_output(&self) -> Option<&TrimmedOutput> {
        self.animation_output.as_ref()
    }

    /// Fit both descriptors to the new drawing region (overlay first).
    #[tracing::instrument(skip(self))]
    pub fn on_bounds_changed(&mut self, bounds: Rect) -> RevealResult<()> {
        if let Some(desc) = self.animation.as_mut() {
            desc.on_bounds_changed(bounds)?;
        }
        if let Some(desc) = self.progress.as_mut() {
            desc.on_bounds_changed(bounds)?;
        }
        // Overlay geometry moved; the cached trim refers to the old placement.
        self.animation_output = None;
        Ok(())
    }

    /// Recompute and cache the overlay output for an animation tick.
    pub fn animation_update(&mut self, kind: AnimationKind, phase: f64) -> RevealResult<()> {
        if let Some(desc) = &self.animation {
            self.animation_output = Some(desc.trimmed(kind.effective_phase(phase))?);
        }
        Ok(())
    }

    /// Both outputs for one frame without touching the cache.
    pub fn current_trimmed_geometry(
        &self,
        progress: f64,
        animation_phase: f64,
        animation_kind: AnimationKind,
    ) -> RevealResult<FrameGeometry> {
        let progress = self
            .progress
            .as_ref()
            .map(|d| d.trimmed(progress))
            .transpose()?;
        let animation = self
            .animation
            .as_ref()
            .map(|d| d.trimmed(animation_kind.effective_phase(animation_phase)))
            .transpose()?;
        Ok(FrameGeometry {
            progress,
            animation,
        })
    }

    /// Render step: the cached overlay first, then the progress path at `progress`.
    ///
    /// Each layer is concatenated into one path and drawn with `style(layer)`; empty
    /// concatenations are not drawn. `observer` sees the pen position of every present
    /// progress contour.
    pub fn draw<S, St, O>(
        &self,
        progress: f64,
        surface: &mut S,
        style: St,
        mut observer: O,
    ) -> RevealResult<()>
    where
        S: PathSurface + ?Sized,
        St: Fn(Layer) -> PathStyle,
        O: FnMut(PositionSample),
    {
        if let Some(out) = &self.animation_output {
            let path = out.to_bez_path();
            if !path.elements().is_empty() {
                surface.draw_path(Layer::Animation, &path, &style(Layer::Animation))?;
            }
        }

        if let Some(desc) = &self.progress {
            let out = desc.trimmed_with(progress, &mut observer)?;
            let path = out.to_bez_path();
            if !path.elements().is_empty() {
                surface.draw_path(Layer::Progress, &path, &style(Layer::Progress))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/progress.rs"]
mod tests;
