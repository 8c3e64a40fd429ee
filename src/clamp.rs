//! Bounds clamping, the last step of every rectangle update.

use crate::geometry::Rect;
use crate::ratio::Ratio;

/// Clamp a candidate rectangle into `bounds`.
///
/// Steps run in a fixed order, each feeding the next: the left edge is
/// pinned first, then the top edge, then right overflow shrinks the width
/// (measured from the already re-anchored `x`), then bottom overflow
/// shrinks the height. Under a fixed ratio the other dimension is
/// re-derived inside the overflow steps, so a simultaneous overflow on
/// both axes resolves width first; width wins ties.
pub fn clamp_rect(rect: Rect, bounds: Rect, ratio: Ratio) -> Rect {
    let mut out = rect;
    if out.x < bounds.x {
        out.x = bounds.x;
    }
    if out.y < bounds.y {
        out.y = bounds.y;
    }
    if out.x + out.width > bounds.right() {
        out.width = bounds.right() - out.x;
        if let Ratio::Fixed(r) = ratio {
            out.height = out.width / r;
        }
    }
    if out.y + out.height > bounds.bottom() {
        out.height = bounds.bottom() - out.y;
        if let Ratio::Fixed(r) = ratio {
            out.width = out.height * r;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_inside_is_untouched() {
        let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(clamp_rect(rect, bounds(), Ratio::Free), rect);
    }

    #[test]
    fn test_position_floors() {
        let out = clamp_rect(Rect::new(-5.0, -8.0, 50.0, 50.0), bounds(), Ratio::Free);
        assert_eq!(out, Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_right_overflow_shrinks_width() {
        let out = clamp_rect(Rect::new(60.0, 10.0, 50.0, 20.0), bounds(), Ratio::Free);
        assert_eq!(out, Rect::new(60.0, 10.0, 40.0, 20.0));
    }

    #[test]
    fn test_right_overflow_measures_from_clamped_x() {
        // The left-edge pin runs first, so the remaining width is computed
        // from the re-anchored x, not the candidate's original one.
        let out = clamp_rect(Rect::new(-10.0, 0.0, 115.0, 50.0), bounds(), Ratio::Free);
        assert_eq!(out, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_fixed_ratio_rederives_height_on_right_overflow() {
        let out = clamp_rect(
            Rect::new(20.0, 0.0, 100.0, 50.0),
            bounds(),
            Ratio::Fixed(2.0),
        );
        assert_eq!(out, Rect::new(20.0, 0.0, 80.0, 40.0));
    }

    #[test]
    fn test_fixed_ratio_rederives_width_on_bottom_overflow() {
        let out = clamp_rect(
            Rect::new(0.0, 60.0, 90.0, 45.0),
            bounds(),
            Ratio::Fixed(2.0),
        );
        assert_eq!(out, Rect::new(0.0, 60.0, 80.0, 40.0));
    }

    #[test]
    fn test_width_wins_double_overflow() {
        // Both axes overflow under a fixed ratio: the width correction runs
        // first and the height follows it.
        let out = clamp_rect(
            Rect::new(40.0, 40.0, 120.0, 120.0),
            bounds(),
            Ratio::Fixed(1.0),
        );
        assert!(approx_eq(out.width, 60.0));
        assert!(approx_eq(out.height, 60.0));
        assert_eq!((out.x, out.y), (40.0, 40.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let once = clamp_rect(
            Rect::new(-10.0, 80.0, 115.0, 60.0),
            bounds(),
            Ratio::Fixed(2.0),
        );
        assert_eq!(clamp_rect(once, bounds(), Ratio::Fixed(2.0)), once);
    }
}
