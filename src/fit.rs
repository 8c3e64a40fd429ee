//! Viewport fitting: where the image sits inside the canvas.

use crate::geometry::{Rect, Size};
use crate::ratio::{Ratio, ratio_fit};

/// Compute the display rectangle for an image inside a viewport.
///
/// The available area is the viewport minus the edge tolerance and the
/// container padding on both sides, floored at zero. Images larger than
/// that area on either axis are scaled down by the smaller axis ratio;
/// images that already fit are never scaled up. The scaled image is
/// centered in the full viewport.
pub fn fit_image(
    intrinsic: Size,
    viewport: Size,
    edge_tolerance: f32,
    container_padding: f32,
) -> Rect {
    if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return Rect::new(viewport.width / 2.0, viewport.height / 2.0, 0.0, 0.0);
    }

    let avail_width = (viewport.width - edge_tolerance - container_padding * 2.0).max(0.0);
    let avail_height = (viewport.height - edge_tolerance - container_padding * 2.0).max(0.0);

    let mut scale = 1.0;
    if intrinsic.width > avail_width || intrinsic.height > avail_height {
        scale = (avail_width / intrinsic.width).min(avail_height / intrinsic.height);
    }

    let width = intrinsic.width * scale;
    let height = intrinsic.height * scale;
    Rect::new(
        (viewport.width - width) / 2.0,
        (viewport.height - height) / 2.0,
        width,
        height,
    )
}

/// The default selection installed whenever the image bounds change: the
/// bounds themselves, corrected for the ratio constraint.
pub fn initial_crop(bounds: Rect, ratio: Ratio) -> Rect {
    ratio_fit(bounds, bounds, ratio)
}
