//! Declaration parsing and style recomputation for Stylebox.
//!
//! This crate turns free text typed into the editor panel into a live style
//! object:
//!
//! - **Parsing**: one `property: value` declaration per line, kebab-case or
//!   camelCase names, optional trailing comma
//! - **Validation**: names are checked against a fixed allow-list of seven
//!   properties, modelled as the [`StyleProperty`](types::StyleProperty) enum
//! - **Ledger**: accepted declarations are kept in first-insertion order,
//!   unique by property, last write wins
//! - **Recomputation**: the inline style is rebuilt from the ledger on every
//!   change, on top of static defaults
//!
//! # Example
//!
//! ```
//! use stylebox_style::prelude::*;
//!
//! let mut ledger = StyleLedger::new();
//! let outcome = parse_declarations("background-color: #ff0000\nfontSize: 18");
//! assert!(outcome.error.is_none());
//! ledger.apply(outcome.accepted);
//!
//! let style = ComputedStyle::from_ledger(&StyleDefaults::default(), &ledger);
//! assert_eq!(
//!     style.to_inline_css(),
//!     "cursor: pointer; background-color: #ff0000; font-size: 18px"
//! );
//! ```

pub mod ledger;
pub mod parser;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::ledger::{LedgerChange, StyleLedger};
    pub use crate::parser::{DeclarationError, ParseOutcome, kebab_to_camel, parse_declarations};
    pub use crate::style::{ComputedStyle, StyleDefaults};
    pub use crate::types::{Cursor, Declaration, DeclaredValue, StyleProperty};
}
