//! Presentation-layer configuration.
//!
//! The cooldown duration and the role set are fixed by the game and are not
//! configurable; this module only covers display labels, clipboard
//! integration, and the tick interval (accelerated values are useful for
//! demos and tests).

pub mod loader;
pub mod schema;

pub use loader::{load, load_file, validate};
pub use schema::{ClipboardConfig, ClipboardMode, RoleLabels, TrackConfig};
