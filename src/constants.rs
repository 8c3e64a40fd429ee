//! Engine constants for interaction geometry.
//!
//! This module centralizes the hardcoded values for edge detection,
//! viewport fitting, and selection limits.

/// Default interaction geometry.
pub mod defaults {
    /// Distance from a crop edge within which resize handles activate (px)
    pub const EDGE_TOLERANCE: f32 = 20.0;
    /// Padding between the viewport border and the fitted image (px)
    pub const CONTAINER_PADDING: f32 = 10.0;
    /// Visual size of the corner and edge handle marks (px)
    pub const HANDLE_SIZE: f32 = 10.0;
}

/// Hard limits on the selection.
pub mod limits {
    /// Margin added to the handle size to get the smallest allowed selection (px)
    pub const MIN_SIZE_MARGIN: f32 = 2.0;
}
