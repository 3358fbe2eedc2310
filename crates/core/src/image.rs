//! Decoded image buffer handed from the loader to a sprite sink.

/// Pixel layouts a [`DecodedImage`] may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Image pixels plus the dimensions used to build the display rectangle.
///
/// `width`/`height` are not required to match the pixel buffer: when they
/// come from the file header they are trusted as-is (see [`Self::is_consistent`]).
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Rgba8,
            pixels,
        }
    }

    /// Single-colour RGBA8 image, used for placeholder sprites.
    pub fn solid_rgba8(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self::new_rgba8(width, height, pixels)
    }

    /// Returns `true` if the buffer length matches `width * height * bpp`
    /// and both dimensions are positive.
    pub fn is_consistent(&self) -> bool {
        let expected =
            self.width as usize * self.height as usize * self.format.bytes_per_pixel() as usize;
        self.width > 0 && self.height > 0 && self.pixels.len() == expected
    }
}
