//! Ready-made sprite sinks.

use modcore::{Sprite, SpriteSink, SpriteSlot};

/// Keeps the current sprite and counts how many times it was replaced.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    current: Option<Sprite>,
    calls: usize,
}

impl RecordingSink {
    /// Sink that starts out showing `sprite`.
    pub fn with_default(sprite: Sprite) -> Self {
        Self {
            current: Some(sprite),
            calls: 0,
        }
    }

    pub fn current(&self) -> Option<&Sprite> {
        self.current.as_ref()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl SpriteSink for RecordingSink {
    fn set_sprite(&mut self, _slot: SpriteSlot, sprite: Sprite) {
        self.current = Some(sprite);
        self.calls += 1;
    }
}

/// Logs each sprite it receives, then records it.
#[derive(Clone, Debug, Default)]
pub struct LogSink {
    inner: RecordingSink,
}

impl LogSink {
    pub fn with_default(sprite: Sprite) -> Self {
        Self {
            inner: RecordingSink::with_default(sprite),
        }
    }

    pub fn current(&self) -> Option<&Sprite> {
        self.inner.current()
    }

    pub fn replaced(&self) -> bool {
        self.inner.calls() > 0
    }
}

impl SpriteSink for LogSink {
    fn set_sprite(&mut self, slot: SpriteSlot, sprite: Sprite) {
        let size = sprite.world_size();
        match sprite.border {
            Some(b) => log::info!(
                "[{}] {}x{} px, {:.2}x{:.2} units, border l={} b={} r={} t={}",
                slot,
                sprite.image.width,
                sprite.image.height,
                size.x,
                size.y,
                b.left,
                b.bottom,
                b.right,
                b.top
            ),
            None => log::info!(
                "[{}] {}x{} px, {:.2}x{:.2} units",
                slot,
                sprite.image.width,
                sprite.image.height,
                size.x,
                size.y
            ),
        }
        self.inner.set_sprite(slot, sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcore::DecodedImage;

    #[test]
    fn recording_sink_replaces_default() {
        let default = Sprite::new(DecodedImage::solid_rgba8(1, 1, [0; 4]), 100.0);
        let mut sink = RecordingSink::with_default(default.clone());
        assert_eq!(sink.current(), Some(&default));

        let next = Sprite::new(DecodedImage::solid_rgba8(2, 2, [9; 4]), 100.0);
        sink.set_sprite(SpriteSlot::Actor, next.clone());
        assert_eq!(sink.current(), Some(&next));
        assert_eq!(sink.calls(), 1);
    }

    #[test]
    fn log_sink_records() {
        let mut sink = LogSink::default();
        assert!(!sink.replaced());
        sink.set_sprite(
            SpriteSlot::Frame,
            Sprite::new(DecodedImage::solid_rgba8(2, 2, [0; 4]), 100.0),
        );
        assert!(sink.replaced());
        assert_eq!(sink.current().map(|s| s.image.width), Some(2));
    }
}
