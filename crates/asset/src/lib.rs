//! Mod asset loading: descriptor JSON, PNG header probe and image decoding.
//! Loaders never panic; the `load_*` entry points log and return `None`.

pub mod descriptor;
pub mod paths;
pub mod probe;

pub use descriptor::{ModDescriptor, SpriteAssetRef, load_descriptor, try_load_descriptor};
pub use paths::ModLayout;
pub use probe::{
    DimensionSource, ProbeOptions, decode_image, load_image, probe_dimensions, try_load_image,
};
