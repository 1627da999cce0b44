//! Computed inline style.

use crate::ledger::StyleLedger;
use crate::types::{Cursor, Declaration, DeclaredValue, StyleProperty};

/// Static style the box carries regardless of user declarations.
///
/// The cursor is not an editable property, so it survives every
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefaults {
    /// Cursor shown over the box. `None` leaves the host default.
    pub cursor: Option<Cursor>,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            cursor: Some(Cursor::Pointer),
        }
    }
}

/// The box's effective inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    cursor: Option<Cursor>,
    declarations: Vec<Declaration>,
}

impl ComputedStyle {
    /// The style before any declaration is submitted.
    pub fn initial(defaults: &StyleDefaults) -> Self {
        Self {
            cursor: defaults.cursor,
            declarations: Vec::new(),
        }
    }

    /// Rebuild from defaults and the full ledger, in ledger order.
    pub fn from_ledger(defaults: &StyleDefaults, ledger: &StyleLedger) -> Self {
        Self {
            cursor: defaults.cursor,
            declarations: ledger.iter().cloned().collect(),
        }
    }

    /// The value currently applied for a property.
    pub fn get(&self, property: StyleProperty) -> Option<&DeclaredValue> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    /// The cursor applied to the box.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Number of user declarations applied.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no user declarations are applied.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Applied declarations in ledger order.
    pub fn entries(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Serialize as an HTML `style` attribute value.
    pub fn to_inline_css(&self) -> String {
        let cursor = self
            .cursor
            .map(|c| format!("cursor: {}", c.as_css()));

        cursor
            .into_iter()
            .chain(self.declarations.iter().map(Declaration::to_css))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: StyleProperty, raw: &str) -> Declaration {
        Declaration::new(property, DeclaredValue::parse(raw).unwrap())
    }

    #[test]
    fn initial_has_only_cursor() {
        let style = ComputedStyle::initial(&StyleDefaults::default());
        assert_eq!(style.cursor(), Some(Cursor::Pointer));
        assert!(style.is_empty());
        assert_eq!(style.to_inline_css(), "cursor: pointer");
    }

    #[test]
    fn follows_ledger_order_and_values() {
        let mut ledger = StyleLedger::new();
        ledger.apply([
            decl(StyleProperty::Width, "50px"),
            decl(StyleProperty::Color, "red"),
        ]);
        ledger.upsert(decl(StyleProperty::Width, "80"));

        let style = ComputedStyle::from_ledger(&StyleDefaults::default(), &ledger);
        assert_eq!(style.len(), 2);
        assert_eq!(
            style.get(StyleProperty::Width).and_then(DeclaredValue::as_number),
            Some(80.0)
        );
        assert_eq!(style.entries()[1].property, StyleProperty::Color);
        assert_eq!(style.to_inline_css(), "cursor: pointer; width: 80px; color: red");
    }

    #[test]
    fn cursor_can_be_left_to_host() {
        let mut ledger = StyleLedger::new();
        ledger.upsert(decl(StyleProperty::Margin, "0"));

        let style = ComputedStyle::from_ledger(&StyleDefaults { cursor: None }, &ledger);
        assert_eq!(style.cursor(), None);
        assert_eq!(style.to_inline_css(), "margin: 0");
    }

    #[test]
    fn cursor_survives_recomputation() {
        let defaults = StyleDefaults::default();
        let mut ledger = StyleLedger::new();
        for raw in ["1px", "2px", "3px"] {
            ledger.upsert(decl(StyleProperty::Padding, raw));
            let style = ComputedStyle::from_ledger(&defaults, &ledger);
            assert_eq!(style.cursor(), Some(Cursor::Pointer));
        }
    }
}
