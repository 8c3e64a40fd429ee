//! cropkit - interactive image-crop geometry
//!
//! A deterministic selection engine: feed it pointer events, read back the
//! selection rectangle, cursor affordance and overlay layout, then export
//! the selected region from the source image.

pub mod clamp;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod export;
pub mod fit;
pub mod geometry;
pub mod loader;
pub mod overlay;
pub mod ratio;
pub mod session;
pub mod zone;

pub use config::{CONFIG_VERSION, CropConfig};
pub use engine::{CropEngine, InteractionState};
pub use error::CropError;
pub use event::{PointerButton, PointerEvent};
pub use geometry::{Point, Rect, Size};
pub use loader::SourceImage;
pub use overlay::OverlayLayout;
pub use ratio::Ratio;
pub use zone::{CursorHint, ResizeZone};
