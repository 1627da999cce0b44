//! Core style types.

mod declaration;
mod property;
mod value;

pub use declaration::Declaration;
pub use property::StyleProperty;
pub use value::{Cursor, DeclaredValue};
