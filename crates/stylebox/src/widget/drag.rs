//! Panel drag tracking.
//!
//! A drag is an explicit two-state machine:
//!
//! ```text
//! Idle --begin(pointer)--> Dragging { offset, listeners } --release/cancel--> Idle
//! ```
//!
//! While dragging, two listeners are registered on the document-level
//! [`PointerEventSource`]: one follows pointer moves, the other ends the
//! gesture on release. Both are removed when the gesture ends, so the source
//! is left with no residual listeners however many drags have run.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use stylebox_core::logging::targets;
use stylebox_core::{ListenerId, Point, PointerEventSource, Property, Signal};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        /// Pointer position minus panel position at gesture start.
        offset: Point,
        listeners: [ListenerId; 2],
    },
}

/// Tracks the panel position across drag gestures.
pub struct PanelDragTracker {
    source: Arc<dyn PointerEventSource>,
    position: Arc<Property<Point>>,
    state: Arc<Mutex<DragState>>,
    panel_moved: Arc<Signal<Point>>,
}

impl PanelDragTracker {
    /// Create an idle tracker with the panel at `position`.
    ///
    /// `panel_moved` is emitted with the new position on every move that
    /// changes it.
    pub fn new(
        source: Arc<dyn PointerEventSource>,
        position: Point,
        panel_moved: Arc<Signal<Point>>,
    ) -> Self {
        Self {
            source,
            position: Arc::new(Property::new(position)),
            state: Arc::new(Mutex::new(DragState::Idle)),
            panel_moved,
        }
    }

    /// Current panel position.
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Move the panel outside of a gesture.
    pub fn set_position(&self, position: Point) {
        if self.position.set(position) {
            self.panel_moved.emit(position);
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(*self.state.lock(), DragState::Dragging { .. })
    }

    /// The pointer offset captured when the current gesture began.
    pub fn offset(&self) -> Option<Point> {
        match *self.state.lock() {
            DragState::Dragging { offset, .. } => Some(offset),
            DragState::Idle => None,
        }
    }

    /// Start a gesture with the pointer at `pointer`.
    ///
    /// Any gesture still registered is torn down first, so at most two
    /// listeners are ever live.
    pub fn begin(&self, pointer: Point) {
        if self.cancel() {
            tracing::debug!(target: targets::DRAG, "replaced an unfinished drag");
        }

        let offset = pointer - self.position.get();

        let position = Arc::clone(&self.position);
        let moved = Arc::clone(&self.panel_moved);
        let move_id = self.source.add_move_listener(Box::new(move |event| {
            let next = event.pos - offset;
            if position.set(next) {
                moved.emit(next);
            }
        }));

        let state = Arc::clone(&self.state);
        let source: Weak<dyn PointerEventSource> = Arc::downgrade(&self.source);
        let release_id = self.source.add_release_listener(Box::new(move |event| {
            if let Some(source) = source.upgrade()
                && end_gesture(&state, source.as_ref())
            {
                tracing::debug!(target: targets::DRAG, x = event.pos.x, y = event.pos.y, "drag ended");
            }
        }));

        *self.state.lock() = DragState::Dragging {
            offset,
            listeners: [move_id, release_id],
        };
        tracing::debug!(target: targets::DRAG, x = offset.x, y = offset.y, "drag started");
    }

    /// End the gesture without a release event.
    ///
    /// Returns `true` if a gesture was in progress.
    pub fn cancel(&self) -> bool {
        end_gesture(&self.state, self.source.as_ref())
    }
}

/// Return to `Idle`, removing the gesture's listeners.
fn end_gesture(state: &Mutex<DragState>, source: &dyn PointerEventSource) -> bool {
    let previous = std::mem::replace(&mut *state.lock(), DragState::Idle);
    let DragState::Dragging { listeners, .. } = previous else {
        return false;
    };

    for id in listeners {
        if let Err(err) = source.remove_listener(id) {
            stylebox_core::stylebox_warn!(%err, "drag listener already gone");
        }
    }
    true
}

impl Drop for PanelDragTracker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for PanelDragTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelDragTracker")
            .field("position", &self.position.get())
            .field("state", &*self.state.lock())
            .field("listeners", &self.source.listener_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(PanelDragTracker: Send, Sync);
