//! Mods directory layout and asset path resolution.

use std::path::{Component, Path, PathBuf};

use modcore::{ModError, ModResult};

pub const MODS_DIR_NAME: &str = "Mods";
pub const DESCRIPTOR_FILE_NAME: &str = "mod.json";

/// Where mod files live: `<data_dir>/Mods`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModLayout {
    mods_dir: PathBuf,
}

impl ModLayout {
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            mods_dir: data_dir.as_ref().join(MODS_DIR_NAME),
        }
    }

    pub fn mods_dir(&self) -> &Path {
        &self.mods_dir
    }

    /// `<data_dir>/Mods/mod.json`
    pub fn descriptor_path(&self) -> PathBuf {
        self.mods_dir.join(DESCRIPTOR_FILE_NAME)
    }

    /// Join a descriptor-supplied relative path onto the mods directory.
    /// Absolute paths and `..` components are rejected.
    pub fn resolve(&self, relative: &str) -> ModResult<PathBuf> {
        if relative.is_empty() || !is_safe_relative_path(relative) {
            return Err(ModError::PathEscape(relative.to_string()));
        }
        let path = self.mods_dir.join(relative);
        log::debug!("Resolved mod asset '{}' -> {}", relative, path.display());
        Ok(path)
    }
}

fn is_safe_relative_path(path: &str) -> bool {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return false;
    }
    candidate.components().all(|component| match component {
        Component::ParentDir | Component::RootDir | Component::Prefix(_) => false,
        Component::CurDir | Component::Normal(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lives_under_mods_dir() {
        let layout = ModLayout::from_data_dir("/game/data");
        assert_eq!(layout.mods_dir(), Path::new("/game/data/Mods"));
        assert_eq!(
            layout.descriptor_path(),
            PathBuf::from("/game/data/Mods/mod.json")
        );
    }

    #[test]
    fn nested_relative_paths_resolve() {
        let layout = ModLayout::from_data_dir("data");
        let path = layout.resolve("sprites/./actor.png").expect("resolve");
        assert!(path.starts_with("data/Mods"));
        assert!(path.ends_with("sprites/actor.png"));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let layout = ModLayout::from_data_dir("data");
        for bad in ["../secret.png", "a/../../b.png", "/etc/passwd", ""] {
            let err = layout.resolve(bad).unwrap_err();
            assert!(matches!(err, ModError::PathEscape(_)), "{bad} accepted");
        }
    }
}
