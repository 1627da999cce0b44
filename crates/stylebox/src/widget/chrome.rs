//! Panel chrome and hit-testing.
//!
//! The editor panel has a thin header strip that drags the panel, with a
//! close control at its right end. Everything below the header is the body
//! (input, submit button, status line) and receives ordinary events.
//!
//! ```text
//! +--------------------------------+---+
//! | header (drag region)           | X |
//! +--------------------------------+---+
//! | body                               |
//! +------------------------------------+
//! ```

use stylebox_core::{Point, Rect, Size};

use crate::config::EditorConfig;

/// Result of hit testing a point against the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    /// The drag region of the header.
    Header,
    /// The close control. Never starts a drag.
    CloseButton,
    /// Below the header.
    Body,
    /// Not on the panel.
    Outside,
}

impl PanelHit {
    /// Whether a press here starts a drag.
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Header)
    }
}

/// Geometry of the panel's interactive regions, in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelChrome {
    size: Size,
    header_height: f32,
    close_button_width: f32,
}

impl PanelChrome {
    /// Create chrome for a panel of the given size.
    pub fn new(size: Size, header_height: f32, close_button_width: f32) -> Self {
        Self {
            size,
            header_height: header_height.max(0.0).min(size.height.max(0.0)),
            close_button_width: close_button_width.max(0.0).min(size.width.max(0.0)),
        }
    }

    /// Build chrome from an editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(
            Size::new(config.panel_width, config.panel_height),
            config.header_height,
            config.close_button_width,
        )
    }

    /// The panel size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole header strip, close control included.
    pub fn header_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.header_height)
    }

    /// The close control at the right end of the header.
    pub fn close_button_rect(&self) -> Rect {
        Rect::new(
            self.size.width - self.close_button_width,
            0.0,
            self.close_button_width,
            self.header_height,
        )
    }

    /// Hit test a point in window coordinates against a panel at `origin`.
    ///
    /// The close control is tested before the header, so the header never
    /// claims a press on it.
    pub fn hit_test(&self, point: Point, origin: Point) -> PanelHit {
        let local = point - origin;

        if !Rect::from_origin_size(Point::ZERO, self.size).contains(local) {
            return PanelHit::Outside;
        }
        if self.close_button_rect().contains(local) {
            return PanelHit::CloseButton;
        }
        if self.header_rect().contains(local) {
            return PanelHit::Header;
        }
        PanelHit::Body
    }
}

impl Default for PanelChrome {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> PanelChrome {
        PanelChrome::new(Size::new(300.0, 150.0), 20.0, 24.0)
    }

    #[test]
    fn regions_relative_to_origin() {
        let chrome = chrome();
        let origin = Point::new(50.0, 40.0);

        assert_eq!(chrome.hit_test(Point::new(100.0, 45.0), origin), PanelHit::Header);
        assert_eq!(chrome.hit_test(Point::new(340.0, 45.0), origin), PanelHit::CloseButton);
        assert_eq!(chrome.hit_test(Point::new(100.0, 100.0), origin), PanelHit::Body);
        assert_eq!(chrome.hit_test(Point::new(49.0, 45.0), origin), PanelHit::Outside);
        assert_eq!(chrome.hit_test(Point::new(350.0, 45.0), origin), PanelHit::Outside);
    }

    #[test]
    fn header_boundary() {
        let chrome = chrome();
        // Bottom edge of the header belongs to the body.
        assert_eq!(chrome.hit_test(Point::new(10.0, 20.0), Point::ZERO), PanelHit::Body);
        assert_eq!(chrome.hit_test(Point::new(10.0, 19.5), Point::ZERO), PanelHit::Header);
    }

    #[test]
    fn only_header_is_draggable() {
        assert!(PanelHit::Header.is_draggable());
        assert!(!PanelHit::CloseButton.is_draggable());
        assert!(!PanelHit::Body.is_draggable());
        assert!(!PanelHit::Outside.is_draggable());
    }

    #[test]
    fn oversized_controls_are_clamped() {
        let chrome = PanelChrome::new(Size::new(100.0, 50.0), 80.0, 500.0);
        assert_eq!(chrome.header_rect().height(), 50.0);
        assert_eq!(chrome.close_button_rect().width(), 100.0);
    }

    #[test]
    fn default_matches_config() {
        let config = EditorConfig::default();
        let chrome = PanelChrome::default();
        assert_eq!(chrome.size(), Size::new(config.panel_width, config.panel_height));
        assert_eq!(chrome.header_rect().height(), config.header_height);
    }
}
