//! The allow-list of editable style properties.

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::parser::kebab_to_camel;

/// A style property the editor accepts.
///
/// The set is closed: anything else typed into the panel is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Box width.
    Width,
    /// Box height.
    Height,
    /// Background color.
    BackgroundColor,
    /// Text color.
    Color,
    /// Outer spacing.
    Margin,
    /// Inner spacing.
    Padding,
    /// Font size.
    FontSize,
}

impl StyleProperty {
    /// Every supported property, in declaration order of the allow-list.
    pub const ALL: [StyleProperty; 7] = [
        StyleProperty::Width,
        StyleProperty::Height,
        StyleProperty::BackgroundColor,
        StyleProperty::Color,
        StyleProperty::Margin,
        StyleProperty::Padding,
        StyleProperty::FontSize,
    ];

    /// The camelCase name, which is the property's identity.
    pub fn camel_name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "backgroundColor",
            Self::Color => "color",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::FontSize => "fontSize",
        }
    }

    /// The kebab-case name used in inline CSS.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "background-color",
            Self::Color => "color",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::FontSize => "font-size",
        }
    }

    /// Look a property up by its exact camelCase name.
    pub fn from_camel_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.camel_name() == name)
    }

    /// Whether bare numbers on this property are pixel lengths.
    pub fn is_length(&self) -> bool {
        !matches!(self, Self::BackgroundColor | Self::Color)
    }
}

impl FromStr for StyleProperty {
    type Err = Error;

    /// Parse a kebab-case or camelCase property name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_camel_name(&kebab_to_camel(s)).ok_or_else(|| Error::unknown_property(s))
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.camel_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_both_spellings() {
        assert_eq!(
            "background-color".parse::<StyleProperty>().unwrap(),
            StyleProperty::BackgroundColor
        );
        assert_eq!(
            "fontSize".parse::<StyleProperty>().unwrap(),
            StyleProperty::FontSize
        );
        assert_eq!("width".parse::<StyleProperty>().unwrap(), StyleProperty::Width);
    }

    #[test]
    fn reject_outside_allow_list() {
        assert_eq!(
            "border".parse::<StyleProperty>(),
            Err(Error::unknown_property("border"))
        );
        // Names are case sensitive, as in the host's style object.
        assert!("Width".parse::<StyleProperty>().is_err());
        assert!("font_size".parse::<StyleProperty>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for prop in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_camel_name(prop.camel_name()), Some(prop));
            assert_eq!(prop.css_name().parse::<StyleProperty>().unwrap(), prop);
        }
    }

    #[test]
    fn colors_are_not_lengths() {
        assert!(StyleProperty::FontSize.is_length());
        assert!(!StyleProperty::Color.is_length());
    }
}
