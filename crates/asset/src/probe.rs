//! Image loading with a fixed-offset PNG header probe.
//!
//! The probe reads width/height as big-endian 32-bit integers at byte offsets
//! 16 and 20, which is where the `IHDR` payload sits when it is the first chunk.
//! Chunk type and length are not checked. Pixel decoding is delegated to the
//! `image` crate.

use std::{fs, path::Path};

use modcore::{DecodedImage, ModError, ModResult};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
pub const WIDTH_OFFSET: usize = 16;
pub const HEIGHT_OFFSET: usize = 20;
/// Bytes needed before the probe can read both dimensions.
pub const HEADER_LEN: usize = 24;

/// Which dimensions end up in the returned [`DecodedImage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionSource {
    /// Dimensions reported by the decoder.
    #[default]
    Decoder,
    /// Dimensions read from the header offsets.
    Header,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    pub dimensions: DimensionSource,
    /// Reject images whose header and decoded dimensions disagree.
    pub strict_dimensions: bool,
}

fn read_be_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    let raw: [u8; 4] = bytes.get(offset..offset + 4)?.try_into().ok()?;
    Some(i32::from_be_bytes(raw))
}

/// Raw `(width, height)` from the header offsets, as signed values.
/// `None` if the buffer is shorter than [`HEADER_LEN`].
pub fn probe_dimensions(bytes: &[u8]) -> Option<(i32, i32)> {
    Some((
        read_be_i32(bytes, WIDTH_OFFSET)?,
        read_be_i32(bytes, HEIGHT_OFFSET)?,
    ))
}

fn header_dimensions(path: &Path, bytes: &[u8]) -> ModResult<(u32, u32)> {
    let (width, height) = probe_dimensions(bytes).ok_or_else(|| ModError::TruncatedImageHeader {
        path: path.to_path_buf(),
        len: bytes.len(),
        needed: HEADER_LEN,
    })?;
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ModError::InvalidDimensions {
            path: path.to_path_buf(),
            width,
            height,
        }),
    }
}

/// Decode an in-memory image file. `path` is only used in errors and logs.
pub fn decode_image(path: &Path, bytes: &[u8], options: ProbeOptions) -> ModResult<DecodedImage> {
    if bytes.len() < HEADER_LEN {
        return Err(ModError::TruncatedImageHeader {
            path: path.to_path_buf(),
            len: bytes.len(),
            needed: HEADER_LEN,
        });
    }

    // Offsets only mean something for PNG; other containers skip the probe
    // unless the caller explicitly asked for header dimensions.
    let header = if bytes.starts_with(&PNG_SIGNATURE) || options.dimensions == DimensionSource::Header
    {
        Some(header_dimensions(path, bytes)?)
    } else {
        None
    };

    let decoded = image::load_from_memory(bytes).map_err(|e| ModError::DecodeFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    let decoded_dims = rgba.dimensions();

    if let Some(header_dims) = header {
        if header_dims != decoded_dims {
            if options.strict_dimensions {
                return Err(ModError::DecodeFailure {
                    path: path.to_path_buf(),
                    message: format!(
                        "header says {}x{} but decoder produced {}x{}",
                        header_dims.0, header_dims.1, decoded_dims.0, decoded_dims.1
                    ),
                });
            }
            log::warn!(
                "{}: header dimensions {}x{} differ from decoded {}x{}",
                path.display(),
                header_dims.0,
                header_dims.1,
                decoded_dims.0,
                decoded_dims.1
            );
        }
    }

    let (width, height) = match (options.dimensions, header) {
        (DimensionSource::Header, Some(dims)) => dims,
        _ => decoded_dims,
    };
    Ok(DecodedImage::new_rgba8(width, height, rgba.into_raw()))
}

/// Read the whole file at `path` and decode it.
pub fn try_load_image(path: impl AsRef<Path>, options: ProbeOptions) -> ModResult<DecodedImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ModError::from_io(path, e))?;
    let image = decode_image(path, &bytes, options)?;
    log::info!(
        "Loaded image {} ({}x{}, {} bytes)",
        path.display(),
        image.width,
        image.height,
        image.pixels.len()
    );
    Ok(image)
}

/// Like [`try_load_image`], but logs the failure and returns `None`.
pub fn load_image(path: impl AsRef<Path>, options: ProbeOptions) -> Option<DecodedImage> {
    try_load_image(path, options)
        .map_err(|e| log::error!("[{}] {}", e.kind(), e))
        .ok()
}
