//! Image decoding: files and byte buffers into source bitmaps.

use std::path::Path;

use image::DynamicImage;

use crate::error::CropError;
use crate::geometry::Size;

/// File extensions the demo pipeline accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// A decoded source bitmap ready for region export.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// The decoded bitmap
    pub image: DynamicImage,
}

impl SourceImage {
    /// Decode an image from a byte buffer. The format is sniffed from the
    /// content, not from a file name.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CropError> {
        let image = image::load_from_memory(data)?;
        log::trace!(
            "Decoded {}x{} image from {} bytes",
            image.width(),
            image.height(),
            data.len()
        );
        Ok(Self { image })
    }

    /// Read and decode an image file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CropError> {
        let data = std::fs::read(path.as_ref())?;
        let loaded = Self::from_bytes(&data)?;
        log::debug!("Loaded image from {:?}", path.as_ref());
        Ok(loaded)
    }

    /// Intrinsic (unscaled) dimensions of the bitmap.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.image.width() as f32, self.image.height() as f32)
    }
}

/// Check whether a file extension belongs to a supported format.
pub fn is_supported(extension: &str) -> bool {
    let lower = extension.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&lower.as_str())
}
