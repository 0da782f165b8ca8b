use crate::{
    foundation::core::{BezPath, Rgba8Premul},
    foundation::error::RevealResult,
};

/// Default progress color, straight `0xAARRGGBB`.
pub const DEFAULT_PROGRESS_ARGB: u32 = 0xFF00_99CC;
/// Default animation-overlay color, straight `0xAARRGGBB`.
pub const DEFAULT_ANIMATION_ARGB: u32 = 0xFFCC_9900;

/// Which geometry a draw call carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// The progressively revealed path.
    Progress,
    /// The show/dismiss overlay path.
    Animation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum PaintMode {
    #[default]
    Fill,
    Stroke {
        width: f64,
    },
}

/// Paint parameters handed to a [`PathSurface`] with each path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathStyle {
    pub color: Rgba8Premul,
    #[serde(default)]
    pub paint: PaintMode,
    #[serde(default = "default_anti_alias")]
    pub anti_alias: bool,
}

fn default_anti_alias() -> bool {
    true
}

impl PathStyle {
    pub fn fill(color: Rgba8Premul) -> Self {
        Self {
            color,
            paint: PaintMode::Fill,
            anti_alias: true,
        }
    }

    pub fn stroke(color: Rgba8Premul, width: f64) -> Self {
        Self {
            color,
            paint: PaintMode::Stroke { width },
            anti_alias: true,
        }
    }
}

/// Default look per layer; callers override by passing their own style function.
pub fn default_style(layer: Layer) -> PathStyle {
    let argb = match layer {
        Layer::Progress => DEFAULT_PROGRESS_ARGB,
        Layer::Animation => DEFAULT_ANIMATION_ARGB,
    };
    PathStyle::fill(Rgba8Premul::from_argb_u32(argb))
}

/// Host-side drawing target. Painting is entirely the implementor's business.
pub trait PathSurface {
    fn draw_path(&mut self, layer: Layer, path: &BezPath, style: &PathStyle) -> RevealResult<()>;
}

/// One recorded [`PathSurface::draw_path`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub layer: Layer,
    pub path: BezPath,
    pub style: PathStyle,
}

/// Surface that keeps every draw call in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PathSurface for RecordingSurface {
    fn draw_path(&mut self, layer: Layer, path: &BezPath, style: &PathStyle) -> RevealResult<()> {
        self.calls.push(DrawCall {
            layer,
            path: path.clone(),
            style: *style,
        });
        Ok(())
    }
}
