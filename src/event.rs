//! Pointer events consumed by the crop engine.

use crate::geometry::Point;

/// Pointer events the engine responds to.
///
/// Positions are in canvas coordinates; the engine clamps them into the
/// image bounds itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer button pressed.
    Pressed {
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved.
    Moved { position: Point },
    /// Pointer button released.
    Released { position: Point },
    /// Pointer left the canvas. Ends any gesture, like a release.
    Exited,
    /// Primary button double-clicked.
    DoubleClicked { position: Point },
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The main button, usually the left mouse button
    Primary,
    /// The secondary button, usually the right mouse button
    Secondary,
    /// The wheel button
    Middle,
    Other(u16),
}
