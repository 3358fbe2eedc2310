//! Entry point: apply the mod found under `<data-dir>/Mods` to the two
//! scene slots and report the result.

use std::path::PathBuf;

use anyhow::{Result, bail};
use asset::{DimensionSource, ProbeOptions};
use modcore::{DecodedImage, Sprite, SpriteSlot};
use scene::{DEFAULT_PIXELS_PER_UNIT, LogSink, ModScene, SceneConfig};

fn parse_data_dir(args: &[String]) -> PathBuf {
    args.iter()
        .rev()
        .find_map(|arg| arg.strip_prefix("--data-dir="))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_dimensions_arg(args: &[String]) -> DimensionSource {
    // Accept: --dimensions=decoder|header
    let mut source = DimensionSource::default();
    for arg in args {
        if let Some(val) = arg.strip_prefix("--dimensions=") {
            source = match val.to_ascii_lowercase().as_str() {
                "decoder" => DimensionSource::Decoder,
                "header" | "ihdr" => DimensionSource::Header,
                other => {
                    log::warn!("Unknown dimension source '{}', using decoder.", other);
                    DimensionSource::Decoder
                }
            };
        }
    }
    source
}

fn parse_strict_arg(args: &[String]) -> bool {
    // --strict-dimensions[=on|off], off by default
    for arg in args {
        if arg == "--strict-dimensions" {
            return true;
        }
        if let Some(val) = arg.strip_prefix("--strict-dimensions=") {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    false
}

fn parse_pixels_per_unit(args: &[String]) -> Result<f32> {
    let mut ppu = DEFAULT_PIXELS_PER_UNIT;
    for arg in args {
        if let Some(v) = arg.strip_prefix("--pixels-per-unit=") {
            match v.parse::<f32>() {
                Ok(p) if p.is_finite() && p > 0.0 => ppu = p,
                _ => bail!("--pixels-per-unit must be a positive number, got '{}'", v),
            }
        }
    }
    Ok(ppu)
}

fn parse_config(args: &[String]) -> Result<SceneConfig> {
    Ok(SceneConfig {
        data_dir: parse_data_dir(args),
        pixels_per_unit: parse_pixels_per_unit(args)?,
        probe: ProbeOptions {
            dimensions: parse_dimensions_arg(args),
            strict_dimensions: parse_strict_arg(args),
        },
    })
}

fn default_sprite(rgba: [u8; 4]) -> Sprite {
    Sprite::new(DecodedImage::solid_rgba8(16, 16, rgba), DEFAULT_PIXELS_PER_UNIT)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_config(&args)?;
    log::info!(
        "Starting modscene. data_dir={}, dimensions={:?}, strict={}, ppu={}",
        config.data_dir.display(),
        config.probe.dimensions,
        config.probe.strict_dimensions,
        config.pixels_per_unit
    );

    let mut scene = ModScene::new(
        config,
        LogSink::with_default(default_sprite([255, 255, 255, 255])),
        LogSink::with_default(default_sprite([128, 128, 128, 255])),
    );
    log::debug!("Mods directory: {}", scene.mods_dir().display());
    let report = scene.start();

    for slot in SpriteSlot::ALL {
        let state = if report.is_applied(slot) {
            "mod"
        } else {
            "default"
        };
        log::info!("{} slot: {}", slot, state);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = parse_config(&[]).expect("config");
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.pixels_per_unit, 100.0);
        assert_eq!(config.probe, ProbeOptions::default());
    }

    #[test]
    fn all_flags() {
        let config = parse_config(&args(&[
            "--data-dir=/opt/game/data",
            "--dimensions=header",
            "--strict-dimensions",
            "--pixels-per-unit=32",
        ]))
        .expect("config");
        assert_eq!(config.data_dir, PathBuf::from("/opt/game/data"));
        assert_eq!(config.probe.dimensions, DimensionSource::Header);
        assert!(config.probe.strict_dimensions);
        assert_eq!(config.pixels_per_unit, 32.0);
    }

    #[test]
    fn unknown_dimension_source_falls_back() {
        let a = args(&["--dimensions=exif"]);
        assert_eq!(parse_dimensions_arg(&a), DimensionSource::Decoder);
        assert!(!parse_strict_arg(&args(&["--strict-dimensions=off"])));
    }

    #[test]
    fn bad_pixels_per_unit_is_an_error() {
        assert!(parse_pixels_per_unit(&args(&["--pixels-per-unit=0"])).is_err());
        assert!(parse_pixels_per_unit(&args(&["--pixels-per-unit=abc"])).is_err());
    }
}
