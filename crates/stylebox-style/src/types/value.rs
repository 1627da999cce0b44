//! Style property value types.

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

use super::StyleProperty;

/// The value half of a declaration.
///
/// A value whose only CSS token is a bare number is kept as a number;
/// everything else is kept as text. Both keep the trimmed text as typed.
///
/// # Example
///
/// ```
/// use stylebox_style::prelude::{DeclaredValue, StyleProperty};
///
/// let size = DeclaredValue::parse("18").unwrap();
/// assert_eq!(size.as_number(), Some(18.0));
/// assert_eq!(size.to_css(StyleProperty::FontSize), "18px");
///
/// let color = DeclaredValue::parse(" #ff0000 ").unwrap();
/// assert_eq!(color.as_text(), Some("#ff0000"));
///
/// assert!(DeclaredValue::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredValue {
    /// A unitless number.
    Number {
        /// The parsed value.
        value: f32,
        /// The number as typed, e.g. `1e3` or `.5`.
        raw: String,
    },
    /// Any other non-empty value text.
    Text(String),
}

impl DeclaredValue {
    /// Classify raw value text. Returns `None` for empty or blank text.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut input = ParserInput::new(raw);
        let mut parser = Parser::new(&mut input);

        let value = match parser.next() {
            Ok(Token::Number { value, .. }) => Some(*value),
            _ => None,
        };

        match value {
            Some(value) if parser.is_exhausted() && value.is_finite() => Some(Self::Number {
                value,
                raw: raw.to_string(),
            }),
            _ => Some(Self::Text(raw.to_string())),
        }
    }

    /// The numeric value, if this is a bare number.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is not a bare number.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number { .. } => None,
            Self::Text(s) => Some(s),
        }
    }

    /// The value as typed.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number { raw, .. } => raw,
            Self::Text(s) => s,
        }
    }

    /// Render the value for an inline style on `property`.
    ///
    /// Bare non-zero numbers on length properties get a `px` unit.
    pub fn to_css(&self, property: StyleProperty) -> String {
        match self {
            Self::Number { value, raw } if property.is_length() && *value != 0.0 => {
                format!("{raw}px")
            }
            _ => self.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeclaredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Pointing hand cursor (for clickable elements).
    #[default]
    Pointer,
}

impl Cursor {
    /// The CSS keyword for this cursor.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
        }
    }
}
