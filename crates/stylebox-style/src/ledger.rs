//! The style ledger: accepted declarations in first-insertion order.

use stylebox_core::logging::targets;

use crate::types::{Declaration, DeclaredValue, StyleProperty};

/// What an upsert did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    /// A new entry was appended at `index`.
    Inserted { index: usize },
    /// The entry at `index` got a new value; its position is unchanged.
    Updated { index: usize },
    /// The entry at `index` already had this value.
    Unchanged { index: usize },
}

impl LedgerChange {
    /// Whether the ledger contents changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Ordered collection of declarations, unique by property.
///
/// A property keeps the position of its first insertion; later writes only
/// replace the value. There is no removal.
///
/// # Example
///
/// ```
/// use stylebox_style::prelude::*;
///
/// let mut ledger = StyleLedger::new();
/// ledger.upsert(Declaration::new(StyleProperty::Width, DeclaredValue::Text("10px".into())));
/// ledger.upsert(Declaration::new(StyleProperty::Color, DeclaredValue::Text("red".into())));
/// let change = ledger.upsert(Declaration::new(StyleProperty::Width, DeclaredValue::Text("20px".into())));
///
/// assert_eq!(change, LedgerChange::Updated { index: 0 });
/// assert_eq!(ledger.to_lines(), ["width: 20px", "color: red"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleLedger {
    entries: Vec<Declaration>,
}

impl StyleLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, or replace the value of an existing entry in place.
    pub fn upsert(&mut self, declaration: Declaration) -> LedgerChange {
        let change = match self.position(declaration.property) {
            Some(index) if self.entries[index].value == declaration.value => {
                LedgerChange::Unchanged { index }
            }
            Some(index) => {
                self.entries[index].value = declaration.value;
                LedgerChange::Updated { index }
            }
            None => {
                self.entries.push(declaration);
                LedgerChange::Inserted {
                    index: self.entries.len() - 1,
                }
            }
        };

        tracing::trace!(target: targets::LEDGER, ?change, "ledger upsert");
        change
    }

    /// Upsert declarations in order. Returns how many changed the ledger.
    pub fn apply<I>(&mut self, declarations: I) -> usize
    where
        I: IntoIterator<Item = Declaration>,
    {
        declarations
            .into_iter()
            .map(|d| self.upsert(d))
            .filter(LedgerChange::is_change)
            .count()
    }

    /// The current value for a property.
    pub fn get(&self, property: StyleProperty) -> Option<&DeclaredValue> {
        self.entries
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    /// Position of a property's entry.
    pub fn position(&self, property: StyleProperty) -> Option<usize> {
        self.entries.iter().position(|d| d.property == property)
    }

    /// Iterate entries in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their `camelName: value` text form.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(property: StyleProperty, value: &str) -> Declaration {
        Declaration::new(property, DeclaredValue::Text(value.into()))
    }

    #[test]
    fn append_in_order() {
        let mut ledger = StyleLedger::new();
        assert_eq!(
            ledger.upsert(text(StyleProperty::Margin, "4px")),
            LedgerChange::Inserted { index: 0 }
        );
        assert_eq!(
            ledger.upsert(text(StyleProperty::Padding, "2px")),
            LedgerChange::Inserted { index: 1 }
        );
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.position(StyleProperty::Padding), Some(1));
    }

    #[test]
    fn update_preserves_position() {
        let mut ledger = StyleLedger::new();
        ledger.apply([
            text(StyleProperty::Width, "1px"),
            text(StyleProperty::Height, "2px"),
            text(StyleProperty::Color, "red"),
        ]);

        let change = ledger.upsert(text(StyleProperty::Width, "9px"));
        assert_eq!(change, LedgerChange::Updated { index: 0 });
        assert_eq!(ledger.to_lines(), ["width: 9px", "height: 2px", "color: red"]);
    }

    #[test]
    fn same_value_is_not_a_change() {
        let mut ledger = StyleLedger::new();
        ledger.upsert(text(StyleProperty::Color, "red"));
        let change = ledger.upsert(text(StyleProperty::Color, "red"));
        assert_eq!(change, LedgerChange::Unchanged { index: 0 });
        assert!(!change.is_change());
    }

    #[test]
    fn duplicates_in_one_batch_keep_first_position_last_value() {
        let mut ledger = StyleLedger::new();
        ledger.upsert(text(StyleProperty::Height, "5px"));
        let changed = ledger.apply([
            text(StyleProperty::Color, "red"),
            text(StyleProperty::Width, "1px"),
            text(StyleProperty::Color, "blue"),
        ]);

        assert_eq!(changed, 3);
        assert_eq!(ledger.to_lines(), ["height: 5px", "color: blue", "width: 1px"]);
        assert_eq!(
            ledger.get(StyleProperty::Color),
            Some(&DeclaredValue::Text("blue".into()))
        );
    }

    #[test]
    fn empty_ledger() {
        let ledger = StyleLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.get(StyleProperty::Width), None);
        assert_eq!(ledger.iter().count(), 0);
    }
}
