use crate::{
    foundation::core::{Affine, Rect, Size, Vec2},
    layout::align::Alignment,
};

/// Result of fitting a source rectangle into a target rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FitPlan {
    /// Per-axis scale factors (equal when aspect is kept).
    pub scale: Vec2,
    /// Where the scaled source lands inside the target.
    pub placed: Rect,
    /// Maps source coordinates onto `placed`.
    pub affine: Affine,
}

/// Per-axis scale used to fit `source` into `target`.
///
/// An axis whose source or target extent is zero or non-finite gets a factor of 1. With
/// `keep_aspect`, the bounding axis is picked by comparing aspect ratios and a degenerate
/// target on that axis yields 1; only a degenerate source axis defers to the other axis.
pub fn fit_scale(source: Rect, target: Rect, keep_aspect: bool, scale_enabled: bool) -> Vec2 {
    if !scale_enabled {
        return Vec2::new(1.0, 1.0);
    }
    let (source, target) = (source.abs(), target.abs());
    let sx = axis_ratio(target.width(), source.width());
    let sy = axis_ratio(target.height(), source.height());

    if !keep_aspect {
        return Vec2::new(sx.unwrap_or(1.0), sy.unwrap_or(1.0));
    }
    let s = match (usable(source.width()), usable(source.height())) {
        (true, true) => {
            let source_ratio = source.width() / source.height();
            let target_ratio = target.width() / target.height();
            // Relatively wider source is bounded by width.
            if source_ratio > target_ratio { sx } else { sy }
        }
        (true, false) => sx,
        (false, true) => sy,
        (false, false) => None,
    };
    let s = s.unwrap_or(1.0);
    Vec2::new(s, s)
}

fn usable(extent: f64) -> bool {
    extent > 0.0 && extent.is_finite()
}

fn axis_ratio(target: f64, source: f64) -> Option<f64> {
    if source <= 0.0 || target <= 0.0 {
        return None;
    }
    let r = target / source;
    r.is_finite().then_some(r)
}

/// Scale `source` and place it inside `target` by `alignment`.
pub fn plan_fit(
    source: Rect,
    target: Rect,
    alignment: Alignment,
    keep_aspect: bool,
    scale_enabled: bool,
) -> FitPlan {
    let (source, target) = (source.abs(), target.abs());
    let scale = fit_scale(source, target, keep_aspect, scale_enabled);
    let scaled = Size::new(source.width() * scale.x, source.height() * scale.y);
    let placed = alignment.place(scaled, target);

    // T(placed origin) * S(scale) * T(-source origin)
    let affine = Affine::translate(placed.origin().to_vec2())
        * (Affine::scale_non_uniform(scale.x, scale.y)
            * Affine::translate(-source.origin().to_vec2()));

    FitPlan {
        scale,
        placed,
        affine,
    }
}

/// Affine mapping `source` into `target`; see [`plan_fit`].
pub fn plan_transform(
    source: Rect,
    target: Rect,
    alignment: Alignment,
    keep_aspect: bool,
    scale_enabled: bool,
) -> Affine {
    plan_fit(source, target, alignment, keep_aspect, scale_enabled).affine
}

#[cfg(test)]
#[path = "../../tests/unit/transform/fit.rs"]
mod tests;
