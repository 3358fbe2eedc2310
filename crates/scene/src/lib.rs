//! Scene startup: load the mod descriptor and push its sprites into the
//! two slots the scene owns.
//!
//! - Sinks are injected at construction; the scene owns them.
//! - Each slot loads independently; a failure leaves that sink untouched.
//! - Nothing here is fatal. Errors are logged by the asset loaders.

pub mod sink;

use std::path::{Path, PathBuf};

use asset::{ModDescriptor, ModLayout, ProbeOptions, SpriteAssetRef};
use modcore::{DecodedImage, Sprite, SpriteSink, SpriteSlot};

pub use sink::{LogSink, RecordingSink};

pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

/// Startup settings for [`ModScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub data_dir: PathBuf,
    pub pixels_per_unit: f32,
    pub probe: ProbeOptions,
}

impl SceneConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            probe: ProbeOptions::default(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// What [`ModScene::start`] managed to apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartReport {
    pub descriptor_loaded: bool,
    pub applied: Vec<SpriteSlot>,
}

impl StartReport {
    pub fn is_applied(&self, slot: SpriteSlot) -> bool {
        self.applied.contains(&slot)
    }
}

pub struct ModScene<A, F> {
    layout: ModLayout,
    config: SceneConfig,
    actor: A,
    frame: F,
}

impl<A: SpriteSink, F: SpriteSink> ModScene<A, F> {
    pub fn new(config: SceneConfig, actor: A, frame: F) -> Self {
        Self {
            layout: ModLayout::from_data_dir(&config.data_dir),
            config,
            actor,
            frame,
        }
    }

    pub fn mods_dir(&self) -> &Path {
        self.layout.mods_dir()
    }

    /// Load `Mods/mod.json` and apply both sprites. Safe to call once at
    /// startup; calling again reloads from disk.
    pub fn start(&mut self) -> StartReport {
        let mut report = StartReport::default();
        let descriptor_path = self.layout.descriptor_path();
        let Some(descriptor) = asset::load_descriptor(&descriptor_path) else {
            log::warn!(
                "No usable mod at {}; keeping default sprites",
                descriptor_path.display()
            );
            return report;
        };
        report.descriptor_loaded = true;

        for slot in SpriteSlot::ALL {
            if let Some(sprite) = self.load_sprite(&descriptor, slot) {
                log::info!(
                    "Applying {} sprite ({}x{})",
                    slot,
                    sprite.image.width,
                    sprite.image.height
                );
                match slot {
                    SpriteSlot::Actor => self.actor.set_sprite(slot, sprite),
                    SpriteSlot::Frame => self.frame.set_sprite(slot, sprite),
                }
                report.applied.push(slot);
            }
        }
        report
    }

    fn load_sprite(&self, descriptor: &ModDescriptor, slot: SpriteSlot) -> Option<Sprite> {
        let asset = descriptor.asset(slot);
        let path = self
            .layout
            .resolve(&asset.path)
            .map_err(|e| log::error!("[{}] {} sprite: {}", e.kind(), slot, e))
            .ok()?;
        let image = asset::load_image(&path, self.config.probe)?;
        Some(build_sprite(slot, image, asset, self.config.pixels_per_unit))
    }

    pub fn actor_sink(&self) -> &A {
        &self.actor
    }

    pub fn frame_sink(&self) -> &F {
        &self.frame
    }

    pub fn into_sinks(self) -> (A, F) {
        (self.actor, self.frame)
    }
}

/// Full-rect sprite with a centred pivot. Only the frame carries the border.
pub fn build_sprite(
    slot: SpriteSlot,
    image: DecodedImage,
    asset: &SpriteAssetRef,
    pixels_per_unit: f32,
) -> Sprite {
    let sprite = Sprite::new(image, pixels_per_unit);
    match slot {
        SpriteSlot::Actor => sprite,
        SpriteSlot::Frame => sprite.with_border(asset.border),
    }
}
