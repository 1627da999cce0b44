//! StyleEditor implementation.
//!
//! This module provides [`StyleEditor`], a clickable box paired with a
//! floating panel. Lines typed into the panel as `property: value` are
//! validated and merged into the box's inline style.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stylebox::prelude::*;
//!
//! let source = Arc::new(GlobalPointerEvents::new());
//! let mut editor = StyleEditor::new(source.clone());
//! editor.mount(Rect::new(20.0, 20.0, 200.0, 100.0));
//!
//! editor.click_box();
//! assert!(editor.is_visible());
//!
//! editor.set_input("background-color: #ff0000\nfontSize: 18");
//! editor.submit();
//! assert_eq!(
//!     editor.style().to_inline_css(),
//!     "cursor: pointer; background-color: #ff0000; font-size: 18px"
//! );
//! ```

use std::sync::Arc;

use stylebox_core::logging::targets;
use stylebox_core::{
    ClickEvent, PerfSpan, Point, PointerButton, PointerEventSource, PointerPressEvent, Rect,
    Signal,
};
use stylebox_style::prelude::*;

use super::chrome::{PanelChrome, PanelHit};
use super::drag::PanelDragTracker;
use crate::config::EditorConfig;
use crate::render::{RenderNode, ids};

/// A handler on a click's propagation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The panel's close control.
    CloseButton,
    /// Anywhere else on the panel.
    Panel,
    /// The target box.
    TargetBox,
}

/// A box whose inline style is edited from a draggable panel.
///
/// The editor is host-driven: the host forwards clicks, presses and text
/// changes, and re-renders when one of the signals fires.
pub struct StyleEditor {
    config: EditorConfig,
    chrome: PanelChrome,
    defaults: StyleDefaults,
    box_rect: Option<Rect>,
    visible: bool,
    clicked: bool,
    input: String,
    error: Option<DeclarationError>,
    ledger: StyleLedger,
    style: ComputedStyle,
    drag: PanelDragTracker,

    /// Emitted when the panel is shown or hidden.
    pub visibility_changed: Signal<bool>,
    /// Emitted with the recomputed style whenever the ledger changes.
    pub style_changed: Signal<ComputedStyle>,
    /// Emitted with the new status text when the error is set or cleared.
    pub error_changed: Signal<Option<String>>,
    /// Emitted with the new panel position while dragging.
    pub panel_moved: Arc<Signal<Point>>,
}

impl StyleEditor {
    /// Create an editor with the default configuration.
    pub fn new(source: Arc<dyn PointerEventSource>) -> Self {
        Self::with_config(source, EditorConfig::default())
    }

    /// Create an editor with a custom configuration.
    pub fn with_config(source: Arc<dyn PointerEventSource>, config: EditorConfig) -> Self {
        let defaults = StyleDefaults::default();
        let panel_moved = Arc::new(Signal::new());

        Self {
            chrome: PanelChrome::from_config(&config),
            config,
            defaults,
            box_rect: None,
            visible: false,
            clicked: false,
            input: String::new(),
            error: None,
            ledger: StyleLedger::new(),
            style: ComputedStyle::initial(&defaults),
            drag: PanelDragTracker::new(source, Point::ZERO, Arc::clone(&panel_moved)),
            visibility_changed: Signal::new(),
            style_changed: Signal::new(),
            error_changed: Signal::new(),
            panel_moved,
        }
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Record the box's measured bounds and place the panel below it.
    ///
    /// Only the first call has an effect. Returns whether this call mounted
    /// the editor.
    pub fn mount(&mut self, box_rect: Rect) -> bool {
        if self.box_rect.is_some() {
            tracing::trace!(target: targets::EDITOR, "already mounted, ignoring measurement");
            return false;
        }

        self.box_rect = Some(box_rect);
        let origin = Point::new(box_rect.left(), box_rect.bottom() + self.config.panel_offset);
        self.drag.set_position(origin);
        tracing::debug!(target: targets::EDITOR, x = origin.x, y = origin.y, "mounted");
        true
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.box_rect.is_some()
    }

    /// The box bounds recorded at mount.
    pub fn box_rect(&self) -> Option<Rect> {
        self.box_rect
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Handle a click on the box: toggle the panel.
    ///
    /// The first click also retires the attention cue, permanently.
    pub fn click_box(&mut self) {
        if !self.clicked {
            self.clicked = true;
            tracing::debug!(target: targets::EDITOR, "first click");
        }
        self.set_visible(!self.visible);
    }

    /// Handle a click on the close control: hide the panel.
    pub fn dismiss(&mut self) {
        self.set_visible(false);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if !visible && self.drag.cancel() {
            tracing::debug!(target: targets::EDITOR, "drag cancelled by hide");
        }
        tracing::debug!(target: targets::EDITOR, visible, "visibility changed");
        self.visibility_changed.emit(visible);
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the box has ever been clicked.
    pub fn has_been_clicked(&self) -> bool {
        self.clicked
    }

    // =========================================================================
    // Pointer Events
    // =========================================================================

    /// The handlers a click at `pos` visits, innermost first.
    ///
    /// The panel is stacked above the box, so a click on an overlapping area
    /// belongs to the panel.
    pub fn click_path(&self, pos: Point) -> Vec<ClickTarget> {
        if self.visible {
            match self.chrome.hit_test(pos, self.drag.position()) {
                PanelHit::CloseButton => return vec![ClickTarget::CloseButton, ClickTarget::Panel],
                PanelHit::Header | PanelHit::Body => return vec![ClickTarget::Panel],
                PanelHit::Outside => {}
            }
        }

        match self.box_rect {
            Some(rect) if rect.contains(pos) => vec![ClickTarget::TargetBox],
            _ => Vec::new(),
        }
    }

    /// Dispatch a click along its propagation path.
    ///
    /// Handlers run innermost first; a handler that stops propagation ends
    /// the dispatch. Returns the targets that handled the click.
    pub fn dispatch_click(&mut self, event: &mut ClickEvent) -> Vec<ClickTarget> {
        let mut visited = Vec::new();

        for target in self.click_path(event.pos) {
            visited.push(target);
            match target {
                ClickTarget::CloseButton => {
                    self.dismiss();
                    event.stop_propagation();
                }
                ClickTarget::Panel => {}
                ClickTarget::TargetBox => self.click_box(),
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        visited
    }

    /// Handle a pointer press. A primary press on the header starts a drag.
    ///
    /// Returns `true` and accepts the event if a drag started.
    pub fn press(&mut self, event: &mut PointerPressEvent) -> bool {
        if !self.visible || event.button != PointerButton::Primary {
            return false;
        }
        if !self.chrome.hit_test(event.pos, self.drag.position()).is_draggable() {
            return false;
        }

        self.drag.begin(event.pos);
        event.base.accept();
        true
    }

    /// End any drag in progress without a release event.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }

    /// Whether the panel is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current top-left corner of the panel.
    pub fn panel_position(&self) -> Point {
        self.drag.position()
    }

    // =========================================================================
    // Input and Submission
    // =========================================================================

    /// Replace the input text. Any status message is cleared.
    pub fn set_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.input == text {
            return;
        }
        self.input = text;
        self.set_error(None);
    }

    /// The current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validate the input and merge accepted declarations into the style.
    ///
    /// Lines before the first invalid one are still applied. An input with
    /// only blank lines changes nothing. The input text is kept either way.
    /// Returns the number of declarations accepted.
    pub fn submit(&mut self) -> usize {
        let _span = PerfSpan::new("submit");

        let outcome = parse_declarations(&self.input);
        if outcome.is_blank() {
            tracing::trace!(target: targets::EDITOR, "blank input, nothing to submit");
            return 0;
        }

        let accepted = outcome.accepted.len();
        let changed = self.ledger.apply(outcome.accepted);
        if changed > 0 {
            self.style = ComputedStyle::from_ledger(&self.defaults, &self.ledger);
            self.style_changed.emit(self.style.clone());
        }

        tracing::debug!(
            target: targets::EDITOR,
            accepted,
            changed,
            failed = outcome.error.is_some(),
            "submitted declarations"
        );
        self.set_error(outcome.error);
        accepted
    }

    fn set_error(&mut self, error: Option<DeclarationError>) {
        if self.error == error {
            return;
        }
        self.error = error;
        self.error_changed.emit(self.error_message());
    }

    /// The current validation error.
    pub fn error(&self) -> Option<&DeclarationError> {
        self.error.as_ref()
    }

    /// The status text shown under the input.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Accepted declarations in first-insertion order.
    pub fn ledger(&self) -> &StyleLedger {
        &self.ledger
    }

    /// The box's current inline style.
    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// The configuration the editor was built with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The panel chrome used for hit testing.
    pub fn chrome(&self) -> &PanelChrome {
        &self.chrome
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the node tree for the current state.
    pub fn render(&self) -> RenderNode {
        let mut root = RenderNode::element("div").with_attr("id", ids::ROOT);

        if self.visible {
            root = root.with_child(self.render_panel());
        }

        let mut target = RenderNode::element("div").with_attr("id", ids::BOX);
        if !self.clicked {
            target = target.with_attr("class", "sparkle");
        }
        root = root.with_child(
            target
                .with_attr("style", self.style.to_inline_css())
                .with_child(RenderNode::element("h1").with_text(self.config.title.as_str())),
        );

        if !self.ledger.is_empty() {
            let list = self
                .ledger
                .to_lines()
                .into_iter()
                .fold(RenderNode::element("ul"), |ul, line| {
                    ul.with_child(RenderNode::element("li").with_text(line))
                });
            root = root.with_child(
                RenderNode::element("div")
                    .with_attr("id", ids::APPLIED)
                    .with_child(RenderNode::element("h3").with_text("Applied CSS:"))
                    .with_child(list),
            );
        }

        root
    }

    fn render_panel(&self) -> RenderNode {
        let origin = self.drag.position();
        let size = self.chrome.size();
        let header = self.chrome.header_rect();

        let mut body = RenderNode::element("div")
            .with_attr("class", "stylebox-body")
            .with_child(
                RenderNode::element("textarea")
                    .with_attr("id", ids::INPUT)
                    .with_attr("placeholder", self.config.placeholder.as_str())
                    .with_text(self.input.as_str()),
            )
            .with_child(
                RenderNode::element("button")
                    .with_attr("id", ids::SUBMIT)
                    .with_text("Add CSS"),
            );
        if let Some(message) = self.error_message() {
            body = body.with_child(
                RenderNode::element("p")
                    .with_attr("id", ids::ERROR)
                    .with_attr("class", "stylebox-error")
                    .with_text(message),
            );
        }

        RenderNode::element("div")
            .with_attr("id", ids::PANEL)
            .with_attr(
                "style",
                format!(
                    "position: absolute; left: {}px; top: {}px; width: {}px",
                    origin.x, origin.y, size.width
                ),
            )
            .with_child(
                RenderNode::element("div")
                    .with_attr("id", ids::HEADER)
                    .with_attr("style", format!("height: {}px", header.height()))
                    .with_child(
                        RenderNode::element("button")
                            .with_attr("id", ids::CLOSE)
                            .with_text("X"),
                    ),
            )
            .with_child(body)
    }
}

impl std::fmt::Debug for StyleEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEditor")
            .field("visible", &self.visible)
            .field("clicked", &self.clicked)
            .field("panel_position", &self.drag.position())
            .field("ledger", &self.ledger)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(StyleEditor: Send, Sync);
