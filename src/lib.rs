//! pathreveal progressively reveals vector paths and fits them into target rectangles.
//!
//! Two capabilities make up the core:
//!
//! - **Progressive trimming**: given a progress value in `[0, 1]`, [`PathMeasure`] returns the
//!   exact sub-geometry of every contour that should be visible, either with all contours
//!   advancing in lockstep ([`Progression::Independent`]) or one after another as a single pen
//!   stroke ([`Progression::Sequential`]). Curves are cut at the requested arc length, not
//!   flattened.
//! - **Bounds fitting**: [`plan_transform`] maps a path's native bounds into a target rectangle
//!   using aspect and [`Alignment`] rules.
//!
//! [`PathDesc`] ties the two together: on every bounds change it re-fits its geometry from the
//! current bounds, transforms it in place and reseeds its measurement engine.
//! [`PathProgressProvider`] pairs a progress descriptor with a show/dismiss overlay and hands
//! concatenated geometry to a host [`PathSurface`].
//!
//! # Pipeline overview
//!
//! 1. **Bind**: `Path -> PathDesc` (geometry plus placement rules)
//! 2. **Fit**: `PathDesc + Rect -> transformed geometry + reseeded PathMeasure`
//! 3. **Trim**: `progress -> TrimmedOutput` (per contour: absent, partial or full)
//! 4. **Draw** (host): `TrimmedOutput -> BezPath -> PathSurface`
//!
//! Everything is synchronous, in-memory and single-threaded; mutation goes through `&mut`.
#![forbid(unsafe_code)]

mod descriptor;
mod foundation;
mod geometry;
mod layout;
mod measure;
mod provider;
mod transform;

pub use descriptor::config::{PathDescConfig, PathDescSpec};
pub use descriptor::desc::{DescState, PathDesc};
pub use foundation::core::{
    Affine, BezPath, IntRect, PathEl, PathSeg, Point, Rect, Rgba8Premul, Size, Vec2,
};
pub use foundation::error::{RevealError, RevealResult};
pub use geometry::bounds::Bounds;
pub use geometry::builder::PathBuilder;
pub use geometry::path::{ARCLEN_ACCURACY, Contour, Path};
pub use layout::align::{AlignX, AlignY, Alignment};
pub use measure::engine::PathMeasure;
pub use measure::output::{PositionSample, TrimmedContour, TrimmedOutput};
pub use measure::policy::Progression;
pub use provider::progress::{AnimationKind, FrameGeometry, PathProgressProvider};
pub use provider::surface::{
    DEFAULT_ANIMATION_ARGB, DEFAULT_PROGRESS_ARGB, DrawCall, Layer, PaintMode, PathStyle,
    PathSurface, RecordingSurface, default_style,
};
pub use transform::fit::{FitPlan, fit_scale, plan_fit, plan_transform};
