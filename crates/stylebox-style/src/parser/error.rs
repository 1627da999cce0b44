//! Declaration validation errors.

/// Why a declaration line was rejected.
///
/// The `Display` form is the status text shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// The property is not in the allow-list.
    #[error("Error: Property \"{property}\" on line {line} is not valid or not supported.")]
    InvalidProperty {
        /// The property text as typed, before camelCase conversion.
        property: String,
        /// Zero-based index of the offending line in the input.
        line: usize,
    },

    /// The property is valid but has no value.
    #[error("Error: \"{property}\" value is required.")]
    MissingValue {
        /// The property text as typed.
        property: String,
    },
}

impl DeclarationError {
    /// The property text the error refers to.
    pub fn property(&self) -> &str {
        match self {
            Self::InvalidProperty { property, .. } | Self::MissingValue { property } => property,
        }
    }
}
