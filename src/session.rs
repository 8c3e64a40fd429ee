//! Press-time gesture snapshot.

use crate::geometry::{Point, Rect};

/// Immutable snapshot taken when a gesture starts.
///
/// Every move update is computed against this snapshot instead of
/// accumulating per-frame deltas, so replayed or coalesced pointer events
/// cannot make the rectangle drift. Created on press, dropped on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Crop rectangle at the moment of the press
    pub anchor_rect: Rect,
    /// Pointer position at the moment of the press, clamped into bounds
    pub anchor_point: Point,
}

impl Session {
    pub fn new(anchor_rect: Rect, anchor_point: Point) -> Self {
        Self {
            anchor_rect,
            anchor_point,
        }
    }
}
