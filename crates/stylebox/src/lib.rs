//! Stylebox - a box whose inline style is edited live from a draggable panel.
//!
//! This is the umbrella crate. It re-exports the core and style crates and
//! provides the [`StyleEditor`](widget::StyleEditor) widget.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stylebox::prelude::*;
//!
//! let source = Arc::new(GlobalPointerEvents::new());
//! let mut editor = StyleEditor::new(source.clone());
//! editor.mount(Rect::new(0.0, 0.0, 200.0, 100.0));
//!
//! editor.click_box();
//! editor.set_input("width: 50px\ninvalid-prop: 1");
//! editor.submit();
//!
//! assert_eq!(editor.ledger().to_lines(), ["width: 50px"]);
//! assert_eq!(
//!     editor.error_message().as_deref(),
//!     Some("Error: Property \"invalid-prop\" on line 1 is not valid or not supported.")
//! );
//! ```

pub use stylebox_core::*;

/// Declaration parsing and style recomputation.
pub mod style {
    pub use stylebox_style::*;
}

pub mod config;
pub mod render;
pub mod widget;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::EditorConfig;
    pub use crate::render::RenderNode;
    pub use crate::widget::{ClickTarget, PanelChrome, PanelHit, StyleEditor};
    pub use stylebox_core::{
        ClickEvent, GlobalPointerEvents, Point, PointerEventSource, PointerMoveEvent,
        PointerPressEvent, PointerReleaseEvent, Rect, Signal, Size,
    };
    pub use stylebox_style::prelude::*;
}
