//! Line-oriented declaration parser.
//!
//! The accepted syntax is one declaration per line:
//!
//! ```text
//! background-color: #ff0000,
//! fontSize: 18
//! ```
//!
//! Each line is trimmed, loses one trailing comma, and is split on its first
//! colon. The property name may be kebab-case or camelCase. Parsing a batch
//! stops at the first rejected line; the lines accepted before it are kept.

use stylebox_core::logging::targets;

use super::DeclarationError;
use crate::types::{Declaration, DeclaredValue, StyleProperty};

/// Result of parsing a batch of lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Declarations accepted before the first error, in input order.
    pub accepted: Vec<Declaration>,
    /// The first rejected line, if any. Later lines were not examined.
    pub error: Option<DeclarationError>,
    /// Number of non-blank lines examined.
    pub lines_examined: usize,
}

impl ParseOutcome {
    /// Whether the input held no declarations at all (only blank lines).
    pub fn is_blank(&self) -> bool {
        self.lines_examined == 0
    }

    /// Collapse into a plain result, discarding partial progress on error.
    pub fn into_result(self) -> crate::Result<Vec<Declaration>> {
        match self.error {
            Some(err) => Err(err.into()),
            None => Ok(self.accepted),
        }
    }
}

/// Convert a kebab-case name to camelCase.
///
/// Each hyphen followed by an ASCII lowercase letter is dropped and the letter
/// uppercased. Other hyphens are left alone.
///
/// ```
/// use stylebox_style::prelude::kebab_to_camel;
///
/// assert_eq!(kebab_to_camel("background-color"), "backgroundColor");
/// assert_eq!(kebab_to_camel("fontSize"), "fontSize");
/// ```
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }

    out
}

/// Parse one input line.
///
/// Returns `None` for a line that is blank after normalization. `index` is
/// the zero-based position of the line in the input and is reported in
/// [`DeclarationError::InvalidProperty`].
pub fn parse_line(line: &str, index: usize) -> Option<Result<Declaration, DeclarationError>> {
    let line = line.trim();
    let line = line.strip_suffix(',').unwrap_or(line).trim();
    if line.is_empty() {
        return None;
    }

    let (raw_property, raw_value) = match line.split_once(':') {
        Some((property, value)) => (property.trim(), value.trim()),
        None => (line, ""),
    };

    let Ok(property) = raw_property.parse::<StyleProperty>() else {
        return Some(Err(DeclarationError::InvalidProperty {
            property: raw_property.to_string(),
            line: index,
        }));
    };

    let Some(value) = DeclaredValue::parse(raw_value) else {
        return Some(Err(DeclarationError::MissingValue {
            property: raw_property.to_string(),
        }));
    };

    Some(Ok(Declaration::new(property, value)))
}

/// Parse a multi-line batch of declarations.
///
/// ```
/// use stylebox_style::prelude::*;
///
/// let outcome = parse_declarations("width: 50px\ninvalid-prop: 1\nheight: 10px");
/// assert_eq!(outcome.accepted.len(), 1);
/// assert!(matches!(
///     outcome.error,
///     Some(DeclarationError::InvalidProperty { line: 1, .. })
/// ));
/// ```
pub fn parse_declarations(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in input.split('\n').enumerate() {
        let Some(parsed) = parse_line(line, index) else {
            continue;
        };
        outcome.lines_examined += 1;

        match parsed {
            Ok(declaration) => {
                tracing::trace!(target: targets::PARSER, line = index, %declaration, "accepted declaration");
                outcome.accepted.push(declaration);
            }
            Err(err) => {
                tracing::debug!(target: targets::PARSER, line = index, error = %err, "rejected declaration");
                outcome.error = Some(err);
                break;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn kebab_conversion() {
        assert_eq!(kebab_to_camel("font-size"), "fontSize");
        assert_eq!(kebab_to_camel("width"), "width");
        assert_eq!(kebab_to_camel("invalid-prop"), "invalidProp");
        // Only lowercase letters are lifted, like the host's converter.
        assert_eq!(kebab_to_camel("a-B"), "a-B");
        assert_eq!(kebab_to_camel("trailing-"), "trailing-");
    }

    #[test]
    fn line_normalization() {
        let decl = parse_line("  background-color:  #ff0000 ,  ", 0).unwrap().unwrap();
        assert_eq!(decl.property, StyleProperty::BackgroundColor);
        assert_eq!(decl.value, DeclaredValue::Text("#ff0000".into()));

        assert!(parse_line("   ", 3).is_none());
        assert!(parse_line(" , ", 3).is_none());
    }

    #[test]
    fn split_on_first_colon_only() {
        let decl = parse_line("color: var(--a:b)", 0).unwrap().unwrap();
        assert_eq!(decl.value.to_string(), "var(--a:b)");
    }

    #[test]
    fn invalid_property_keeps_original_text() {
        let err = parse_line("border-radius: 4px", 2).unwrap().unwrap_err();
        assert_eq!(
            err,
            DeclarationError::InvalidProperty {
                property: "border-radius".into(),
                line: 2,
            }
        );
    }

    #[test]
    fn missing_value() {
        let err = parse_line("margin:", 0).unwrap().unwrap_err();
        assert_eq!(
            err,
            DeclarationError::MissingValue {
                property: "margin".into()
            }
        );

        // No colon at all reads as an empty value.
        let err = parse_line("padding", 0).unwrap().unwrap_err();
        assert_eq!(err.property(), "padding");
    }

    #[test]
    fn property_checked_before_value() {
        let err = parse_line("bogus:", 0).unwrap().unwrap_err();
        assert!(matches!(err, DeclarationError::InvalidProperty { .. }));
    }

    #[test]
    fn batch_stops_at_first_error() {
        let outcome = parse_declarations("width: 50px\nmargin:\nheight: 20px");
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].property, StyleProperty::Width);
        assert_eq!(outcome.lines_examined, 2);
        assert_eq!(
            outcome.error,
            Some(DeclarationError::MissingValue {
                property: "margin".into()
            })
        );
    }

    #[test]
    fn blank_lines_count_toward_index() {
        let outcome = parse_declarations("width: 1px\n\n\nnope: 2");
        assert_eq!(
            outcome.error,
            Some(DeclarationError::InvalidProperty {
                property: "nope".into(),
                line: 3,
            })
        );
    }

    #[test]
    fn blank_input() {
        assert!(parse_declarations("").is_blank());
        assert!(parse_declarations("\n  \n,").is_blank());
        assert!(!parse_declarations("width: 1px").is_blank());
    }

    #[test]
    fn crlf_input() {
        let outcome = parse_declarations("width: 1px\r\nheight: 2px\r\n");
        assert!(outcome.error.is_none());
        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.accepted[1].value.to_string(), "2px");
    }

    #[test]
    fn duplicates_are_all_reported_in_order() {
        let outcome = parse_declarations("color: red\ncolor: blue");
        let values: Vec<String> = outcome.accepted.iter().map(|d| d.value.to_string()).collect();
        assert_eq!(values, ["red", "blue"]);
    }

    #[test]
    fn into_result_surfaces_error() {
        let err = parse_declarations("x: 1").into_result().unwrap_err();
        assert!(matches!(err, Error::Declaration(DeclarationError::InvalidProperty { .. })));

        let ok = parse_declarations("fontSize: 18").into_result().unwrap();
        assert_eq!(ok[0].value.as_number(), Some(18.0));
    }
}
