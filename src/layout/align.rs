use crate::foundation::core::{Rect, Size};

/// Horizontal placement of content inside a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignX {
    /// Align to start (left).
    Start,
    /// Align to center.
    #[default]
    Center,
    /// Align to end (right).
    End,
}

/// Vertical placement of content inside a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignY {
    /// Align to start (top).
    Start,
    /// Align to center.
    #[default]
    Center,
    /// Align to end (bottom).
    End,
}

/// Two-axis placement rule, like a view gravity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    #[serde(default)]
    pub x: AlignX,
    #[serde(default)]
    pub y: AlignY,
}

impl Alignment {
    pub const TOP_START: Self = Self::new(AlignX::Start, AlignY::Start);
    pub const TOP: Self = Self::new(AlignX::Center, AlignY::Start);
    pub const TOP_END: Self = Self::new(AlignX::End, AlignY::Start);
    pub const START: Self = Self::new(AlignX::Start, AlignY::Center);
    pub const CENTER: Self = Self::new(AlignX::Center, AlignY::Center);
    pub const END: Self = Self::new(AlignX::End, AlignY::Center);
    pub const BOTTOM_START: Self = Self::new(AlignX::Start, AlignY::End);
    pub const BOTTOM: Self = Self::new(AlignX::Center, AlignY::End);
    pub const BOTTOM_END: Self = Self::new(AlignX::End, AlignY::End);

    pub const fn new(x: AlignX, y: AlignY) -> Self {
        Self { x, y }
    }

    pub const fn with_x(self, x: AlignX) -> Self {
        Self { x, y: self.y }
    }

    pub const fn with_y(self, y: AlignY) -> Self {
        Self { x: self.x, y }
    }

    /// Rectangle of `content` size positioned inside `container`.
    ///
    /// Content larger than the container overflows on both sides when centered and on the
    /// far side otherwise; offsets are not clamped.
    pub fn place(self, content: Size, container: Rect) -> Rect {
        let x = container.x0 + align_offset(container.width(), content.width, self.x);
        let y = container.y0 + align_offset(container.height(), content.height, self.y);
        Rect::new(x, y, x + content.width, y + content.height)
    }

    /// Parse `"center"`, `"top_start"`, `"bottom"` style names.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        let a = match s.as_str() {
            "top_start" | "top_left" => Self::TOP_START,
            "top" | "top_center" => Self::TOP,
            "top_end" | "top_right" => Self::TOP_END,
            "start" | "left" | "center_start" => Self::START,
            "center" => Self::CENTER,
            "end" | "right" | "center_end" => Self::END,
            "bottom_start" | "bottom_left" => Self::BOTTOM_START,
            "bottom" | "bottom_center" => Self::BOTTOM,
            "bottom_end" | "bottom_right" => Self::BOTTOM_END,
            _ => return None,
        };
        Some(a)
    }
}

fn align_offset<A>(container: f64, content: f64, align: A) -> f64
where
    A: Into<AlignKind>,
{
    let rem = container - content;
    match align.into() {
        AlignKind::Start => 0.0,
        AlignKind::Center => rem * 0.5,
        AlignKind::End => rem,
    }
}

enum AlignKind {
    Start,
    Center,
    End,
}

impl From<AlignX> for AlignKind {
    fn from(value: AlignX) -> Self {
        match value {
            AlignX::Start => AlignKind::Start,
            AlignX::Center => AlignKind::Center,
            AlignX::End => AlignKind::End,
        }
    }
}

impl From<AlignY> for AlignKind {
    fn from(value: AlignY) -> Self {
        match value {
            AlignY::Start => AlignKind::Start,
            AlignY::Center => AlignKind::Center,
            AlignY::End => AlignKind::End,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/align.rs"]
mod tests;
