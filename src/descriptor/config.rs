use crate::{
    descriptor::desc::PathDesc,
    foundation::error::{RevealError, RevealResult},
    geometry::path::Path,
    layout::align::Alignment,
    measure::policy::Progression,
};

/// Placement and progression parameters of a [`PathDesc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PathDescConfig {
    /// Where the fitted path sits inside the target rectangle.
    #[serde(default)]
    pub alignment: Alignment,
    /// How contours share the progress value.
    #[serde(default)]
    pub progression: Progression,
    /// Scale uniformly when fitting (only meaningful with `scale_for_bounds`).
    #[serde(default = "default_true")]
    pub keep_aspect: bool,
    /// Scale the path when the target rectangle changes; otherwise only translate.
    #[serde(default = "default_true")]
    pub scale_for_bounds: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PathDescConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::CENTER,
            progression: Progression::Sequential,
            keep_aspect: true,
            scale_for_bounds: true,
        }
    }
}

impl PathDescConfig {
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn keep_aspect(mut self, keep_aspect: bool) -> Self {
        self.keep_aspect = keep_aspect;
        self
    }

    pub fn scale_for_bounds(mut self, scale_for_bounds: bool) -> Self {
        self.scale_for_bounds = scale_for_bounds;
        self
    }
}

/// Serializable descriptor definition: SVG path data plus its configuration.
///
/// ```json
/// { "svg_path_d": "M0,0 L100,0 L100,50 Z", "progression": "independent",
///   "alignment": { "x": "center", "y": "end" }, "keep_aspect": true }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathDescSpec {
    pub svg_path_d: String,
    #[serde(flatten)]
    pub config: PathDescConfig,
}

impl PathDescSpec {
    pub fn new(svg_path_d: impl Into<String>, config: PathDescConfig) -> Self {
        Self {
            svg_path_d: svg_path_d.into(),
            config,
        }
    }

    pub fn from_json(s: &str) -> RevealResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        if spec.svg_path_d.trim().is_empty() {
            return Err(RevealError::validation("svg_path_d must be non-empty"));
        }
        Ok(spec)
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the path data into a bound descriptor.
    pub fn build(&self) -> RevealResult<PathDesc> {
        let path = Path::from_svg(&self.svg_path_d)?;
        Ok(PathDesc::new(path, self.config))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/descriptor/config.rs"]
mod tests;
