//! Image file codecs.
//!
//! The format is picked from the file extension (case-insensitive). Each
//! format implements [`ImageCodec`] over in-memory bytes; [`load`] and
//! [`save`] add the file IO around it.
//!
//! Color channels are scaled by the image's max value, but alpha is always
//! on an 8-bit scale: [`OPAQUE`] means fully opaque whatever the max value.

pub mod png;
pub mod ppm;
pub mod raster;

use crate::error::CodecError;
use imagelab_engine::Image;
use std::path::Path;

/// Alpha of a fully opaque pixel.
pub const OPAQUE: u16 = 255;

/// Decode and encode one file format.
pub trait ImageCodec {
    /// Decode `bytes` into an image registered as `name`.
    fn decode(&self, bytes: &[u8], name: &str) -> Result<Image, CodecError>;

    /// Encode `image` into the bytes of a complete file.
    fn encode(&self, image: &Image) -> Result<Vec<u8>, CodecError>;
}

/// Formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Png,
    /// Lossy; saved without alpha.
    Jpeg,
    Bmp,
}

impl ImageFormat {
    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// [`CodecError::MissingExtension`] when the path has no extension,
    /// [`CodecError::UnsupportedFormat`] for any extension not listed above.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .map(|e| e.to_ascii_lowercase())
            .ok_or(CodecError::MissingExtension)?;

        match ext.as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "bmp" => Ok(ImageFormat::Bmp),
            _ => Err(CodecError::UnsupportedFormat(ext)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// The codec for this format.
    pub fn codec(self) -> &'static dyn ImageCodec {
        match self {
            ImageFormat::Ppm => &ppm::PpmCodec,
            ImageFormat::Png => &png::PngCodec,
            ImageFormat::Jpeg => &raster::JPEG,
            ImageFormat::Bmp => &raster::BMP,
        }
    }
}

/// Rescale `0..=max_value` to `0..=255`, rounding half up.
pub(crate) fn to_8bit(value: u16, max_value: u16) -> u8 {
    if max_value == 0 {
        return 0;
    }
    let value = u32::from(value.min(max_value));
    let max = u32::from(max_value);
    ((value * 255 + max / 2) / max) as u8
}

/// Alpha as written to 8-bit files; anything above [`OPAQUE`] is opaque.
pub(crate) fn alpha_8bit(alpha: u16) -> u8 {
    alpha.min(OPAQUE) as u8
}

/// Whether any pixel of `image` is less than fully opaque.
pub(crate) fn has_translucency(image: &Image) -> bool {
    image.pixels().iter().any(|p| p.alpha() < OPAQUE)
}

/// Read the file at `path` and decode it as `name`.
pub fn load(path: &Path, name: &str) -> Result<Image, CodecError> {
    let codec = ImageFormat::from_path(path)?.codec();
    let bytes = std::fs::read(path)?;
    let image = codec.decode(&bytes, name)?;
    tracing::debug!(
        path = %path.display(),
        name,
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Encode `image` in the format implied by `path` and write it there.
pub fn save(path: &Path, image: &Image) -> Result<(), CodecError> {
    let codec = ImageFormat::from_path(path)?.codec();
    let bytes = codec.encode(image)?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), name = image.name(), "Encoded image");
    Ok(())
}
