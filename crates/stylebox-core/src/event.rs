//! Pointer and click event types.
//!
//! Events carry positions in window (client) coordinates. Every event has an
//! [`EventBase`] whose accepted flag controls propagation: a handler that
//! accepts an event stops it from reaching handlers further out.

use crate::geometry::Point;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PointerButton {
    /// Primary button (usually left).
    #[default]
    Primary = 0,
    /// Secondary button (usually right).
    Secondary = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }
}

/// Pointer press event.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: PointerButton,
    /// Position in window coordinates.
    pub pos: Point,
}

impl PointerPressEvent {
    /// Create a new press event for the primary button.
    pub fn new(pos: Point) -> Self {
        Self::with_button(PointerButton::Primary, pos)
    }

    /// Create a new press event for a specific button.
    pub fn with_button(button: PointerButton, pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            pos,
        }
    }
}

/// Pointer move event.
#[derive(Debug, Clone, Copy)]
pub struct PointerMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in window coordinates.
    pub pos: Point,
}

impl PointerMoveEvent {
    /// Create a new move event.
    pub fn new(pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            pos,
        }
    }
}

/// Pointer release event.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: PointerButton,
    /// Position in window coordinates.
    pub pos: Point,
}

impl PointerReleaseEvent {
    /// Create a new release event for the primary button.
    pub fn new(pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button: PointerButton::Primary,
            pos,
        }
    }
}

/// Click event (press and release on the same element).
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in window coordinates.
    pub pos: Point,
}

impl ClickEvent {
    /// Create a new click event.
    pub fn new(pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            pos,
        }
    }

    /// Stop the click from reaching outer handlers.
    pub fn stop_propagation(&mut self) {
        self.base.accept();
    }

    /// Check whether an inner handler stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.base.is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_is_sticky() {
        let mut base = EventBase::new();
        assert!(!base.is_accepted());
        base.accept();
        base.accept();
        assert!(base.is_accepted());
    }

    #[test]
    fn click_stop_propagation() {
        let mut click = ClickEvent::new(Point::new(3.0, 4.0));
        assert!(!click.is_propagation_stopped());
        click.stop_propagation();
        assert!(click.is_propagation_stopped());
    }

    #[test]
    fn press_defaults_to_primary() {
        let press = PointerPressEvent::new(Point::ZERO);
        assert_eq!(press.button, PointerButton::Primary);
    }
}
