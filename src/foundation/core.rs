pub use kurbo::{Affine, BezPath, PathEl, PathSeg, Point, Rect, Size, Vec2};

/// Integer rectangle, edges truncated toward zero from a float [`Rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Truncating conversion; saturates at the `i32` range.
    pub fn from_rect_truncated(r: Rect) -> Self {
        Self {
            left: r.x0 as i32,
            top: r.y0 as i32,
            right: r.x1 as i32,
            bottom: r.y1 as i32,
        }
    }

    pub fn width(self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Packed straight-alpha `0xAARRGGBB`.
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_straight_rgba(r, g, b, a)
    }

    /// CSS-style `#rrggbb` / `#rrggbbaa` string of the un-premultiplied color.
    pub fn to_css_hex(self) -> String {
        fn unpremul(c: u8, a: u8) -> u8 {
            if a == 0 {
                return 0;
            }
            let c = u32::from(c);
            let a = u32::from(a);
            (((c * 255) + (a / 2)) / a).min(255) as u8
        }

        let (r, g, b) = (
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
        );
        if self.a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", self.a)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
