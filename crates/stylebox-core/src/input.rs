//! Document-level pointer event sources.
//!
//! A browser delivers pointer-move and pointer-up to listeners registered on
//! the document, so a drag keeps tracking after the pointer leaves the
//! element it started on. [`PointerEventSource`] abstracts that registry:
//! a widget adds listeners when a gesture starts and removes them when it
//! ends. [`GlobalPointerEvents`] is the in-process implementation; a host
//! binding forwards real events into it, and tests drive it directly.

use crate::error::{CoreError, Result};
use crate::event::{PointerMoveEvent, PointerReleaseEvent};
use crate::signal::{ConnectionId, Signal};

/// Listener invoked for every pointer move while registered.
pub type MoveListener = Box<dyn Fn(&PointerMoveEvent) + Send + Sync>;

/// Listener invoked for every pointer release while registered.
pub type ReleaseListener = Box<dyn Fn(&PointerReleaseEvent) + Send + Sync>;

/// Handle to a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerId {
    /// A pointer-move listener.
    Move(ConnectionId),
    /// A pointer-release listener.
    Release(ConnectionId),
}

/// A source of document-level pointer events.
pub trait PointerEventSource: Send + Sync {
    /// Register a listener for pointer moves anywhere in the document.
    fn add_move_listener(&self, listener: MoveListener) -> ListenerId;

    /// Register a listener for pointer releases anywhere in the document.
    fn add_release_listener(&self, listener: ReleaseListener) -> ListenerId;

    /// Remove a previously registered listener.
    ///
    /// Fails with [`CoreError::UnknownListener`] if the id is not registered.
    fn remove_listener(&self, id: ListenerId) -> Result<()>;

    /// Number of listeners currently registered.
    fn listener_count(&self) -> usize;
}

/// In-process [`PointerEventSource`] backed by two signals.
#[derive(Debug, Default)]
pub struct GlobalPointerEvents {
    moved: Signal<PointerMoveEvent>,
    released: Signal<PointerReleaseEvent>,
}

impl GlobalPointerEvents {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a pointer move to every registered move listener.
    pub fn dispatch_move(&self, event: PointerMoveEvent) {
        crate::stylebox_trace!(x = event.pos.x, y = event.pos.y, "global pointer move");
        self.moved.emit(event);
    }

    /// Deliver a pointer release to every registered release listener.
    pub fn dispatch_release(&self, event: PointerReleaseEvent) {
        crate::stylebox_trace!(x = event.pos.x, y = event.pos.y, "global pointer release");
        self.released.emit(event);
    }
}

impl PointerEventSource for GlobalPointerEvents {
    fn add_move_listener(&self, listener: MoveListener) -> ListenerId {
        ListenerId::Move(self.moved.connect(listener))
    }

    fn add_release_listener(&self, listener: ReleaseListener) -> ListenerId {
        ListenerId::Release(self.released.connect(listener))
    }

    fn remove_listener(&self, id: ListenerId) -> Result<()> {
        let removed = match id {
            ListenerId::Move(conn) => self.moved.disconnect(conn),
            ListenerId::Release(conn) => self.released.disconnect(conn),
        };
        if removed {
            crate::stylebox_debug!(?id, "listener removed");
            Ok(())
        } else {
            Err(CoreError::UnknownListener(id))
        }
    }

    fn listener_count(&self) -> usize {
        self.moved.connection_count() + self.released.connection_count()
    }
}

static_assertions::assert_impl_all!(GlobalPointerEvents: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn move_listener_receives_positions() {
        let source = GlobalPointerEvents::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        source.add_move_listener(Box::new(move |e| seen_clone.lock().push(e.pos)));

        source.dispatch_move(PointerMoveEvent::new(Point::new(1.0, 2.0)));
        source.dispatch_move(PointerMoveEvent::new(Point::new(3.0, 4.0)));

        assert_eq!(
            *seen.lock(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn release_does_not_reach_move_listeners() {
        let source = GlobalPointerEvents::new();
        let moves = Arc::new(Mutex::new(0));
        let moves_clone = moves.clone();
        source.add_move_listener(Box::new(move |_| *moves_clone.lock() += 1));

        source.dispatch_release(PointerReleaseEvent::new(Point::ZERO));
        assert_eq!(*moves.lock(), 0);
    }

    #[test]
    fn remove_listener_twice_fails() {
        let source = GlobalPointerEvents::new();
        let id = source.add_release_listener(Box::new(|_| {}));
        assert_eq!(source.listener_count(), 1);

        assert!(source.remove_listener(id).is_ok());
        assert_eq!(
            source.remove_listener(id),
            Err(CoreError::UnknownListener(id))
        );
        assert_eq!(source.listener_count(), 0);
    }
}
