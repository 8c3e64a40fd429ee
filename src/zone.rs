//! Edge-zone classification around the crop rectangle.
//!
//! Decides which resize handles a pointer position activates, and which
//! cursor affordance to show. Classification is the first step of both
//! press handling (pick the gesture) and move handling (hover feedback).

use crate::geometry::{Point, Rect};

/// Vertical edge of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Horizontal edge of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// The set of crop edges a resize gesture controls.
///
/// At most one edge per axis and at least one edge overall, so the eight
/// possible values map exactly onto the eight resize directions. Built by
/// [`classify`]; the constructor refuses the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeZone {
    vertical: Option<VerticalEdge>,
    horizontal: Option<HorizontalEdge>,
}

impl ResizeZone {
    /// Build a zone from per-axis choices. Returns `None` when both axes
    /// are empty.
    pub fn new(vertical: Option<VerticalEdge>, horizontal: Option<HorizontalEdge>) -> Option<Self> {
        match (vertical, horizontal) {
            (None, None) => None,
            _ => Some(Self { vertical, horizontal }),
        }
    }

    pub fn vertical(&self) -> Option<VerticalEdge> {
        self.vertical
    }

    pub fn horizontal(&self) -> Option<HorizontalEdge> {
        self.horizontal
    }

    pub fn has_top(&self) -> bool {
        self.vertical == Some(VerticalEdge::Top)
    }

    pub fn has_bottom(&self) -> bool {
        self.vertical == Some(VerticalEdge::Bottom)
    }

    pub fn has_left(&self) -> bool {
        self.horizontal == Some(HorizontalEdge::Left)
    }

    pub fn has_right(&self) -> bool {
        self.horizontal == Some(HorizontalEdge::Right)
    }

    /// Cursor affordance for this zone.
    pub fn cursor(&self) -> CursorHint {
        match (self.vertical, self.horizontal) {
            (Some(_), None) => CursorHint::ResizeNs,
            (None, Some(_)) => CursorHint::ResizeEw,
            (Some(VerticalEdge::Top), Some(HorizontalEdge::Left))
            | (Some(VerticalEdge::Bottom), Some(HorizontalEdge::Right)) => CursorHint::ResizeNwse,
            (Some(VerticalEdge::Top), Some(HorizontalEdge::Right))
            | (Some(VerticalEdge::Bottom), Some(HorizontalEdge::Left)) => CursorHint::ResizeNesw,
            // Unreachable: the constructor refuses the empty set
            (None, None) => CursorHint::Default,
        }
    }
}

/// Cursor affordance derived from pointer position and crop rectangle.
///
/// Named after the CSS cursors a canvas renderer would map them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// No affordance (no image attached)
    Default,
    /// Vertical resize (top or bottom edge)
    ResizeNs,
    /// Horizontal resize (left or right edge)
    ResizeEw,
    /// Diagonal resize (top-left or bottom-right corner)
    ResizeNwse,
    /// Diagonal resize (top-right or bottom-left corner)
    ResizeNesw,
    /// Inside the crop rectangle
    Move,
    /// Outside the crop rectangle, a press starts a new selection
    Crosshair,
}

impl CursorHint {
    /// The CSS cursor name for this affordance.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::ResizeNs => "ns-resize",
            CursorHint::ResizeEw => "ew-resize",
            CursorHint::ResizeNwse => "nwse-resize",
            CursorHint::ResizeNesw => "nesw-resize",
            CursorHint::Move => "move",
            CursorHint::Crosshair => "crosshair",
        }
    }
}

/// Classify a pointer position against the crop rectangle's edges.
///
/// An edge distance only counts while the pointer sits within the edge's
/// band: the crop extent on the perpendicular axis widened by `tolerance`
/// on both ends. An edge is hot when its distance is strictly below
/// `tolerance`. When both edges of one axis are hot (the box is smaller
/// than twice the tolerance) the nearer edge wins; top and left win exact
/// ties. Returns `None` when no edge is hot.
pub fn classify(pointer: Point, crop: Rect, tolerance: f32) -> Option<ResizeZone> {
    let mut to_top = f32::INFINITY;
    let mut to_bottom = f32::INFINITY;
    let mut to_left = f32::INFINITY;
    let mut to_right = f32::INFINITY;

    if pointer.x >= crop.x - tolerance && pointer.x <= crop.right() + tolerance {
        to_top = (pointer.y - crop.y).abs();
        to_bottom = (pointer.y - crop.bottom()).abs();
    }
    if pointer.y >= crop.y - tolerance && pointer.y <= crop.bottom() + tolerance {
        to_left = (pointer.x - crop.x).abs();
        to_right = (pointer.x - crop.right()).abs();
    }

    let vertical = match (to_top < tolerance, to_bottom < tolerance) {
        (true, true) => Some(if to_top <= to_bottom {
            VerticalEdge::Top
        } else {
            VerticalEdge::Bottom
        }),
        (true, false) => Some(VerticalEdge::Top),
        (false, true) => Some(VerticalEdge::Bottom),
        (false, false) => None,
    };
    let horizontal = match (to_left < tolerance, to_right < tolerance) {
        (true, true) => Some(if to_left <= to_right {
            HorizontalEdge::Left
        } else {
            HorizontalEdge::Right
        }),
        (true, false) => Some(HorizontalEdge::Left),
        (false, true) => Some(HorizontalEdge::Right),
        (false, false) => None,
    };

    ResizeZone::new(vertical, horizontal)
}

/// Cursor affordance for a pointer position: resize cursor on a hot edge,
/// `Move` inside the rectangle (edges included), `Crosshair` elsewhere.
pub fn cursor_hint(pointer: Point, crop: Rect, tolerance: f32) -> CursorHint {
    match classify(pointer, crop, tolerance) {
        Some(zone) => zone.cursor(),
        None if crop.contains(&pointer) => CursorHint::Move,
        None => CursorHint::Crosshair,
    }
}
