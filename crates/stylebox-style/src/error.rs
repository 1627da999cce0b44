//! Error types for the styling system.

use crate::parser::DeclarationError;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name is not one of the supported style properties.
    #[error("Unknown style property '{name}'")]
    UnknownProperty { name: String },

    /// A declaration line failed validation.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

impl Error {
    /// Create an unknown-property error.
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }
}
