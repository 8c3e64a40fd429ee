//! Overlay layout: the geometry a renderer draws on top of the image.
//!
//! Pure data, no drawing. A renderer strokes the border and grid lines and
//! fills the handle marks in whatever style it likes; everything here is
//! already positioned in canvas coordinates.

use crate::geometry::{Point, Rect};

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Everything a renderer needs to draw the crop overlay.
///
/// Handle marks come in a fixed order: two bars per corner (top-left,
/// top-right, bottom-right, bottom-left, horizontal bar first), then the
/// midpoint ticks (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// The crop rectangle outline
    pub border: Rect,
    /// Rule-of-thirds grid: two vertical lines, then two horizontal
    pub grid: [Line; 4],
    /// Corner bars and edge ticks
    pub handles: [Rect; 12],
}

impl OverlayLayout {
    /// Lay out the overlay for a crop rectangle.
    ///
    /// Corner bars carry a one-pixel outset past the border so they read as
    /// sitting on top of it; bar thickness is a third of the handle size.
    pub fn new(crop: Rect, handle_size: f32) -> Self {
        let bar = handle_size / 3.0;
        let right = crop.right();
        let bottom = crop.bottom();
        let center = crop.center();

        let grid = [
            Line::new(
                Point::new(crop.x + crop.width / 3.0, crop.y),
                Point::new(crop.x + crop.width / 3.0, bottom),
            ),
            Line::new(
                Point::new(crop.x + 2.0 * crop.width / 3.0, crop.y),
                Point::new(crop.x + 2.0 * crop.width / 3.0, bottom),
            ),
            Line::new(
                Point::new(crop.x, crop.y + crop.height / 3.0),
                Point::new(right, crop.y + crop.height / 3.0),
            ),
            Line::new(
                Point::new(crop.x, crop.y + 2.0 * crop.height / 3.0),
                Point::new(right, crop.y + 2.0 * crop.height / 3.0),
            ),
        ];

        let handles = [
            // top-left corner
            Rect::new(crop.x - 1.0, crop.y - 1.0, handle_size, bar),
            Rect::new(crop.x - 1.0, crop.y - 1.0, bar, handle_size),
            // top-right corner
            Rect::new(right - handle_size + 1.0, crop.y - 1.0, handle_size, bar),
            Rect::new(right - bar + 1.0, crop.y - 1.0, bar, handle_size),
            // bottom-right corner
            Rect::new(right - handle_size + 1.0, bottom - bar + 1.0, handle_size, bar),
            Rect::new(right - bar + 1.0, bottom - handle_size + 1.0, bar, handle_size),
            // bottom-left corner
            Rect::new(crop.x - 1.0, bottom - bar + 1.0, handle_size, bar),
            Rect::new(crop.x - 1.0, bottom - handle_size + 1.0, bar, handle_size),
            // edge midpoints
            Rect::new(center.x - bar, crop.y - 1.0, handle_size, bar),
            Rect::new(right - bar + 1.0, center.y - bar, bar, handle_size),
            Rect::new(center.x - bar, bottom - bar + 1.0, handle_size, bar),
            Rect::new(crop.x - 1.0, center.y - bar, bar, handle_size),
        ];

        Self {
            border: crop,
            grid,
            handles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_matches_crop() {
        let crop = Rect::new(50.0, 50.0, 90.0, 60.0);
        let layout = OverlayLayout::new(crop, 10.0);
        assert_eq!(layout.border, crop);
    }

    #[test]
    fn test_grid_sits_at_thirds() {
        let crop = Rect::new(0.0, 0.0, 90.0, 60.0);
        let layout = OverlayLayout::new(crop, 10.0);

        assert_eq!(layout.grid[0].from, Point::new(30.0, 0.0));
        assert_eq!(layout.grid[0].to, Point::new(30.0, 60.0));
        assert_eq!(layout.grid[1].from.x, 60.0);
        assert_eq!(layout.grid[2].from, Point::new(0.0, 20.0));
        assert_eq!(layout.grid[2].to, Point::new(90.0, 20.0));
        assert_eq!(layout.grid[3].from.y, 40.0);
    }

    #[test]
    fn test_corner_bars_carry_outset() {
        let crop = Rect::new(10.0, 20.0, 100.0, 80.0);
        let layout = OverlayLayout::new(crop, 9.0);

        // top-left horizontal bar: one pixel outside the corner
        assert_eq!(layout.handles[0], Rect::new(9.0, 19.0, 9.0, 3.0));
        // top-left vertical bar
        assert_eq!(layout.handles[1], Rect::new(9.0, 19.0, 3.0, 9.0));
        // bottom-right horizontal bar hugs the far corner
        assert_eq!(layout.handles[4], Rect::new(102.0, 98.0, 9.0, 3.0));
    }

    #[test]
    fn test_edge_ticks_sit_on_midpoints() {
        let crop = Rect::new(0.0, 0.0, 100.0, 80.0);
        let layout = OverlayLayout::new(crop, 9.0);

        // top tick
        assert_eq!(layout.handles[8], Rect::new(47.0, -1.0, 9.0, 3.0));
        // left tick
        assert_eq!(layout.handles[11], Rect::new(-1.0, 37.0, 3.0, 9.0));
    }
}
