//! A single validated declaration.

use std::fmt;

use super::{DeclaredValue, StyleProperty};

/// A validated `(property, value)` pair destined for the style object.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property being set.
    pub property: StyleProperty,
    /// The value to set it to.
    pub value: DeclaredValue,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: StyleProperty, value: DeclaredValue) -> Self {
        Self { property, value }
    }

    /// Render as an inline CSS fragment, e.g. `background-color: red`.
    pub fn to_css(&self) -> String {
        format!("{}: {}", self.property.css_name(), self.value.to_css(self.property))
    }
}

/// Displays the ledger form, e.g. `backgroundColor: red`.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property.camel_name(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_css_forms() {
        let decl = Declaration::new(
            StyleProperty::BackgroundColor,
            DeclaredValue::Text("red".into()),
        );
        assert_eq!(decl.to_string(), "backgroundColor: red");
        assert_eq!(decl.to_css(), "background-color: red");
    }
}
