//! Core shared types and errors (decoder-agnostic).
//!
//! Everything the mod loader and the scene orchestrator exchange lives here:
//! the decoded image buffer, sprite metadata, the sink seam and the error
//! taxonomy.

pub use glam::{Vec2, vec2};

pub mod error;
pub mod image;
pub mod sprite;

pub use error::{ModError, ModResult};
pub use image::{DecodedImage, PixelFormat};
pub use sprite::{Border, Sprite, SpriteRect, SpriteSink, SpriteSlot};
