//! Style recomputation.
//!
//! The box's inline style is never patched in place. Every ledger change
//! rebuilds a [`ComputedStyle`] from the static defaults plus the ledger.

mod computed;

pub use computed::{ComputedStyle, StyleDefaults};
