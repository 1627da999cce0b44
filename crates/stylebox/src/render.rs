//! Outbound node tree.
//!
//! The editor does not draw anything itself. [`StyleEditor::render`] builds a
//! small element tree that a host binding diffs into its DOM, or that the
//! demo prints as HTML.
//!
//! [`StyleEditor::render`]: crate::widget::StyleEditor::render

use std::fmt::Write as _;

/// Element ids the editor assigns, for hosts that bind handlers by id.
pub mod ids {
    /// Outer container.
    pub const ROOT: &str = "stylebox-root";
    /// The floating panel.
    pub const PANEL: &str = "stylebox-panel";
    /// The panel's drag header.
    pub const HEADER: &str = "stylebox-header";
    /// The close control.
    pub const CLOSE: &str = "stylebox-close";
    /// The declaration input.
    pub const INPUT: &str = "stylebox-input";
    /// The submit button.
    pub const SUBMIT: &str = "stylebox-submit";
    /// The status line.
    pub const ERROR: &str = "stylebox-error";
    /// The target box.
    pub const BOX: &str = "stylebox-box";
    /// The list of applied declarations.
    pub const APPLIED: &str = "stylebox-applied";
}

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// An element with attributes and children.
    Element {
        /// Tag name, e.g. `div`.
        tag: &'static str,
        /// Attributes in insertion order.
        attributes: Vec<(&'static str, String)>,
        /// Child nodes in document order.
        children: Vec<RenderNode>,
    },
    /// A text node.
    Text(String),
}

impl RenderNode {
    /// Create an element with no attributes or children.
    pub fn element(tag: &'static str) -> Self {
        Self::Element {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Add an attribute. Ignored on text nodes.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push((name, value.into()));
        }
        self
    }

    /// Append a child. Ignored on text nodes.
    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Self::text(text))
    }

    /// The tag name, or `None` for text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text(_) => None,
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Whether the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Child nodes. Empty for text.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Depth-first search for the element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&RenderNode> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_id(id))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element { children, .. } => children.iter().map(Self::text_content).collect(),
        }
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => html_escape_into(out, text),
            Self::Element {
                tag,
                attributes,
                children,
            } => {
                let _ = write!(out, "<{tag}");
                for (name, value) in attributes {
                    let _ = write!(out, " {name}=\"");
                    html_escape_into(out, value);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
