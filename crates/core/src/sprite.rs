//! Sprite metadata and the sink seam that receives finished sprites.

use std::fmt;

use serde::Deserialize;

use crate::{DecodedImage, Vec2, vec2};

/// The two scene slots a mod may override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteSlot {
    Actor,
    Frame,
}

impl SpriteSlot {
    pub const ALL: [SpriteSlot; 2] = [SpriteSlot::Actor, SpriteSlot::Frame];

    pub fn name(self) -> &'static str {
        match self {
            SpriteSlot::Actor => "actor",
            SpriteSlot::Frame => "frame",
        }
    }
}

impl fmt::Display for SpriteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four-sided pixel inset for 9-slice rendering. On the wire either
/// `[l, b, r, t]` or a vector object `{"x": l, "y": b, "z": r, "w": t}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "BorderRepr")]
pub struct Border {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Border {
    pub const ZERO: Border = Border::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

}

impl From<[f32; 4]> for Border {
    fn from([left, bottom, right, top]: [f32; 4]) -> Self {
        Self::new(left, bottom, right, top)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BorderRepr {
    Array([f32; 4]),
    Vector { x: f32, y: f32, z: f32, w: f32 },
}

impl From<BorderRepr> for Border {
    fn from(repr: BorderRepr) -> Self {
        match repr {
            BorderRepr::Array(values) => values.into(),
            BorderRepr::Vector { x, y, z, w } => Self::new(x, y, z, w),
        }
    }
}

/// Axis-aligned rectangle in texture pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect covering the whole image.
    pub fn full(image: &DecodedImage) -> Self {
        Self::new(0.0, 0.0, image.width as f32, image.height as f32)
    }
}

/// A renderable sprite: owned pixels plus display metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub image: DecodedImage,
    pub rect: SpriteRect,
    /// Normalised pivot, (0.5, 0.5) is the centre.
    pub pivot: Vec2,
    pub pixels_per_unit: f32,
    pub border: Option<Border>,
}

impl Sprite {
    /// Full-rect sprite with a centred pivot and no border.
    pub fn new(image: DecodedImage, pixels_per_unit: f32) -> Self {
        Self {
            rect: SpriteRect::full(&image),
            image,
            pivot: vec2(0.5, 0.5),
            pixels_per_unit,
            border: None,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Size in world units.
    pub fn world_size(&self) -> Vec2 {
        vec2(self.rect.width, self.rect.height) / self.pixels_per_unit
    }
}

/// Rendering target for one slot. Takes ownership of the sprite; a sink that
/// never receives one keeps whatever it displayed before.
pub trait SpriteSink {
    fn set_sprite(&mut self, slot: SpriteSlot, sprite: Sprite);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_wire_order_is_left_bottom_right_top() {
        let b = Border::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.left, 1.0);
        assert_eq!(b.bottom, 2.0);
        assert_eq!(b.right, 3.0);
        assert_eq!(b.top, 4.0);
    }

    #[test]
    fn world_size_uses_pixels_per_unit() {
        let sprite = Sprite::new(DecodedImage::solid_rgba8(200, 50, [0; 4]), 100.0);
        assert_eq!(sprite.world_size(), vec2(2.0, 0.5));
        assert!(sprite.border.is_none());
    }

    #[test]
    fn slot_names() {
        assert_eq!(SpriteSlot::Actor.to_string(), "actor");
        assert_eq!(SpriteSlot::Frame.name(), "frame");
    }
}
