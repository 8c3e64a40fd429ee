//! Aspect-ratio constraint and the fixed-ratio resize anchor table.
//!
//! A fixed ratio is `width / height`. Whenever one dimension changes, the
//! other is re-derived; when the derived rectangle would leave the image
//! bounds, the growth axes are corrected width-first, then height.

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::geometry::{Point, Rect};
use crate::session::Session;
use crate::zone::{HorizontalEdge, ResizeZone, VerticalEdge};

/// Aspect-ratio constraint for the crop rectangle.
///
/// Serializes as the string `"free"` or a bare positive number, the way a
/// config file would write it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RatioRepr", into = "RatioRepr")]
pub enum Ratio {
    /// No constraint
    #[default]
    Free,
    /// Enforced `width / height` value
    Fixed(f32),
}

impl Ratio {
    /// Create a fixed ratio, rejecting zero, negative, and non-finite
    /// values.
    pub fn fixed(value: f32) -> Result<Self, CropError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CropError::InvalidRatio { value });
        }
        Ok(Self::Fixed(value))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// Wire form of [`Ratio`]: the keyword `"free"` or a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RatioRepr {
    Keyword(String),
    Value(f32),
}

impl TryFrom<RatioRepr> for Ratio {
    type Error = CropError;

    fn try_from(repr: RatioRepr) -> Result<Self, CropError> {
        match repr {
            RatioRepr::Keyword(word) if word == "free" => Ok(Ratio::Free),
            RatioRepr::Keyword(word) => Err(CropError::invalid_config(format!(
                "unknown ratio keyword '{word}', expected \"free\" or a number"
            ))),
            RatioRepr::Value(value) => Ratio::fixed(value),
        }
    }
}

impl From<Ratio> for RatioRepr {
    fn from(ratio: Ratio) -> Self {
        match ratio {
            Ratio::Free => RatioRepr::Keyword("free".to_string()),
            Ratio::Fixed(value) => RatioRepr::Value(value),
        }
    }
}

/// Re-derive a rectangle's height from its width and correct overflow
/// against `bounds`.
///
/// With a free ratio the rectangle passes through unchanged. Otherwise
/// `height = width / ratio`; if the right edge then overflows, the width is
/// recomputed from the remaining horizontal space and the height re-derived;
/// if the bottom edge still overflows, the symmetric correction runs for the
/// vertical axis. Fixed order, so the result is deterministic.
pub fn ratio_fit(rect: Rect, bounds: Rect, ratio: Ratio) -> Rect {
    let Ratio::Fixed(r) = ratio else {
        return rect;
    };

    let mut out = rect;
    out.height = out.width / r;
    if out.x + out.width > bounds.right() {
        out.width = bounds.right() - out.x;
        out.height = out.width / r;
    }
    if out.y + out.height > bounds.bottom() {
        out.height = bounds.bottom() - out.y;
        out.width = out.height * r;
    }
    out
}

/// The largest ratio-respecting rectangle centered in `bounds`.
///
/// This is the double-click reset shape: full width with derived height,
/// or, when that is too tall, full height with derived width.
pub fn centered_fit(bounds: Rect, ratio: Ratio) -> Rect {
    let Ratio::Fixed(r) = ratio else {
        return bounds;
    };

    let mut width = bounds.width;
    let mut height = width / r;
    if height > bounds.height {
        height = bounds.height;
        width = height * r;
    }
    Rect::new(
        bounds.x + (bounds.width - width) / 2.0,
        bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    )
}

/// Fixed-ratio resize: move the pointer-driven edge and re-derive the other
/// dimension, holding the direction's anchor in place.
///
/// Anchors per direction: top-left holds the bottom-right corner, top holds
/// the bottom edge, top-right holds the bottom-left corner, right and
/// bottom-right hold the left edge, bottom holds the top edge, bottom-left
/// and left hold the top-right corner. The top rows recompute `y` from the
/// session's rectangle so the bottom edge sits where it was at press time,
/// not where the previous frame left it.
///
/// Returns the unclamped candidate; the caller applies the minimum-size
/// policy and bounds clamping.
pub fn resize_fixed(
    zone: ResizeZone,
    prev: Rect,
    session: &Session,
    pointer: Point,
    r: f32,
) -> Rect {
    let mut rect = prev;
    match (zone.vertical(), zone.horizontal()) {
        (Some(VerticalEdge::Top), Some(HorizontalEdge::Left)) => {
            rect.width = prev.right() - pointer.x;
            rect.x = pointer.x;
            rect.height = rect.width / r;
            rect.y = session.anchor_rect.bottom() - rect.height;
        }
        (Some(VerticalEdge::Top), None) => {
            rect.height = prev.bottom() - pointer.y;
            rect.y = pointer.y;
            rect.width = rect.height * r;
        }
        (Some(VerticalEdge::Top), Some(HorizontalEdge::Right)) => {
            rect.width = pointer.x - prev.x;
            rect.height = rect.width / r;
            rect.y = session.anchor_rect.bottom() - rect.height;
        }
        (None | Some(VerticalEdge::Bottom), Some(HorizontalEdge::Right)) => {
            rect.width = pointer.x - prev.x;
            rect.height = rect.width / r;
        }
        (Some(VerticalEdge::Bottom), None) => {
            rect.height = pointer.y - prev.y;
            rect.width = rect.height * r;
        }
        (None | Some(VerticalEdge::Bottom), Some(HorizontalEdge::Left)) => {
            rect.width = prev.right() - pointer.x;
            rect.x = pointer.x;
            rect.height = rect.width / r;
        }
        // Unreachable: ResizeZone always carries at least one edge
        (None, None) => {}
    }
    rect
}
