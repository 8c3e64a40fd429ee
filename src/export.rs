//! Export: mapping the selection back to source pixels and encoding it.
//!
//! The engine works in display coordinates; this module owns the only
//! conversion to the source bitmap's pixel space and the encode step.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::CropError;
use crate::geometry::Rect;

/// Map a display-space crop rectangle into source pixel space.
///
/// `scale = intrinsic_width / bounds.width`: the inverse of the downscale
/// the fit applied. The crop's offset inside the displayed image scales by
/// the same factor as its dimensions.
pub fn source_rect(crop: Rect, bounds: Rect, intrinsic_width: f32) -> Rect {
    let scale = intrinsic_width / bounds.width;
    Rect::new(
        (crop.x - bounds.x) * scale,
        (crop.y - bounds.y) * scale,
        crop.width * scale,
        crop.height * scale,
    )
}

/// Crop `image` to the source-space rectangle and encode it.
///
/// The rectangle is rounded to the pixel grid and clamped to the bitmap;
/// a selection that covers no pixels is an error. Quality `1.0` or above
/// encodes lossless PNG; anything below encodes JPEG at `quality * 100`.
pub fn export_region(
    image: &DynamicImage,
    source: Rect,
    quality: f32,
) -> Result<Vec<u8>, CropError> {
    let (img_width, img_height) = (image.width(), image.height());

    let x = (source.x.round().max(0.0) as u32).min(img_width.saturating_sub(1));
    let y = (source.y.round().max(0.0) as u32).min(img_height.saturating_sub(1));
    let width = (source.width.round().max(0.0) as u32).min(img_width - x);
    let height = (source.height.round().max(0.0) as u32).min(img_height - y);

    if width == 0 || height == 0 {
        return Err(CropError::EmptySelection);
    }

    let cropped = image.crop_imm(x, y, width, height);
    let mut buffer = Cursor::new(Vec::new());
    if quality >= 1.0 {
        cropped.write_to(&mut buffer, ImageFormat::Png)?;
    } else {
        // JPEG has no alpha channel
        let rgb = cropped.to_rgb8();
        let jpeg_quality = (quality * 100.0).clamp(1.0, 100.0) as u8;
        let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality);
        encoder.write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )?;
    }

    log::debug!(
        "Exported {}x{} region at ({}, {}), quality {}",
        width,
        height,
        x,
        y,
        quality
    );
    Ok(buffer.into_inner())
}

/// Export the region to a file.
pub fn export_to_path(
    image: &DynamicImage,
    source: Rect,
    quality: f32,
    path: impl AsRef<Path>,
) -> Result<(), CropError> {
    let bytes = export_region(image, source, quality)?;
    std::fs::write(path.as_ref(), bytes)?;
    log::info!("Wrote cropped image to {:?}", path.as_ref());
    Ok(())
}
