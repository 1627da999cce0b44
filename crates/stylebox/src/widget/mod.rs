//! The style editor widget and its parts.

mod chrome;
mod drag;
mod editor;

pub use chrome::{PanelChrome, PanelHit};
pub use drag::PanelDragTracker;
pub use editor::{ClickTarget, StyleEditor};
