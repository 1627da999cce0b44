//! Declaration parsing module.

mod declaration;
mod error;

pub use declaration::{ParseOutcome, kebab_to_camel, parse_declarations, parse_line};
pub use error::DeclarationError;
