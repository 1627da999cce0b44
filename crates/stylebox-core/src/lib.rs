//! Core systems for Stylebox.
//!
//! This crate provides the foundational pieces the style editor widget is
//! built on:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] in window coordinates
//! - **Signal/Slot System**: Type-safe notification with connect/disconnect
//! - **Property System**: Shared values with change detection
//! - **Pointer Events**: Press, move, release and click events with
//!   accept/ignore propagation control
//! - **Event Sources**: The [`PointerEventSource`] abstraction for
//!   document-level listeners, and [`GlobalPointerEvents`], an in-process
//!   implementation a host (or a test) drives directly
//!
//! # Signal/Slot Example
//!
//! ```
//! use stylebox_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Global Listener Example
//!
//! ```
//! use std::sync::Arc;
//! use stylebox_core::{GlobalPointerEvents, Point, PointerEventSource, PointerMoveEvent};
//!
//! let source = Arc::new(GlobalPointerEvents::new());
//! let id = source.add_move_listener(Box::new(|event: &PointerMoveEvent| {
//!     println!("pointer at {:?}", event.pos);
//! }));
//!
//! source.dispatch_move(PointerMoveEvent::new(Point::new(10.0, 20.0)));
//! source.remove_listener(id).unwrap();
//! assert_eq!(source.listener_count(), 0);
//! ```

mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CoreError, Result};
pub use event::{
    ClickEvent, EventBase, PointerButton, PointerMoveEvent, PointerPressEvent, PointerReleaseEvent,
};
pub use geometry::{Point, Rect, Size};
pub use input::{GlobalPointerEvents, ListenerId, MoveListener, PointerEventSource, ReleaseListener};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
