//! `mod.json` descriptor loading.

use std::{fs, path::Path};

use modcore::{Border, ModError, ModResult, SpriteSlot};
use serde::Deserialize;
use serde_json::error::Category;

/// One overridden sprite: a file relative to the mods directory plus an inset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpriteAssetRef {
    pub path: String,
    /// Only meaningful for the frame slot.
    #[serde(default)]
    pub border: Border,
}

/// Parsed `mod.json`. Both entries are required.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModDescriptor {
    pub actor: SpriteAssetRef,
    pub frame: SpriteAssetRef,
}

impl ModDescriptor {
    pub fn asset(&self, slot: SpriteSlot) -> &SpriteAssetRef {
        match slot {
            SpriteSlot::Actor => &self.actor,
            SpriteSlot::Frame => &self.frame,
        }
    }

    /// Parse descriptor text. `origin` is only used in error messages.
    pub fn from_json(json: &str, origin: &Path) -> ModResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            let message = err.to_string();
            let path = origin.to_path_buf();
            match err.classify() {
                Category::Data => ModError::SchemaMismatch { path, message },
                Category::Syntax | Category::Eof => ModError::MalformedJson { path, message },
                Category::Io => ModError::Io {
                    path,
                    source: std::io::Error::other(message),
                },
            }
        })
    }
}

/// Read and parse the descriptor at `path`.
pub fn try_load_descriptor(path: impl AsRef<Path>) -> ModResult<ModDescriptor> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| ModError::from_io(path, e))?;
    let descriptor = ModDescriptor::from_json(&json, path)?;
    log::info!(
        "Loaded mod descriptor {}: actor='{}', frame='{}'",
        path.display(),
        descriptor.actor.path,
        descriptor.frame.path
    );
    Ok(descriptor)
}

/// Like [`try_load_descriptor`], but logs the failure and returns `None`.
pub fn load_descriptor(path: impl AsRef<Path>) -> Option<ModDescriptor> {
    try_load_descriptor(path)
        .map_err(|e| log::error!("[{}] {}", e.kind(), e))
        .ok()
}
