/// How several contours share one progress value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Progression {
    /// Every contour reveals the same fraction of its own length, in lockstep.
    Independent,
    /// Contours reveal one after another, in contour order, as a single pen stroke.
    #[default]
    Sequential,
}

impl Progression {
    /// Parse a user-facing policy name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" | "async" | "per_contour" | "per-contour" => Some(Self::Independent),
            "sequential" | "sync" | "whole_path" | "whole-path" => Some(Self::Sequential),
            _ => None,
        }
    }
}

/// Progress clamped to `[0, 1]`; NaN counts as no progress.
pub(crate) fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
