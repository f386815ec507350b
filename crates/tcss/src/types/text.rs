//! Text styling: modifiers and typography variants.

use std::fmt;
use std::str::FromStr;

use crate::error::TcssError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
}

impl TextStyle {
    /// Creates a default style with all modifiers disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if no styles are applied.
    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }

    /// Merges another style into this one.
    /// Modifiers only ever switch on; a later `false` never clears an earlier `true`.
    pub fn merge(&mut self, other: TextStyle) {
        self.bold |= other.bold;
        self.dim |= other.dim;
        self.italic |= other.italic;
        self.underline |= other.underline;
        self.strike |= other.strike;
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let names = [
            (self.bold, "bold"),
            (self.dim, "dim"),
            (self.italic, "italic"),
            (self.underline, "underline"),
            (self.strike, "strike"),
        ];
        let active: Vec<&str> = names
            .iter()
            .filter_map(|(on, name)| on.then_some(*name))
            .collect();
        f.write_str(&active.join(" "))
    }
}

/// Typography scale applied to text primitives.
///
/// `Inherit` keeps whatever the surrounding text uses, which is the default
/// for inline elements like links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
    #[default]
    Inherit,
}

impl TypographyVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Subtitle1 => "subtitle1",
            Self::Subtitle2 => "subtitle2",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Button => "button",
            Self::Caption => "caption",
            Self::Overline => "overline",
            Self::Inherit => "inherit",
        }
    }

    /// Terminal text modifiers that approximate the variant.
    pub fn text_style(self) -> TextStyle {
        match self {
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6 | Self::Button => {
                TextStyle {
                    bold: true,
                    ..TextStyle::default()
                }
            }
            Self::Subtitle1 | Self::Subtitle2 => TextStyle {
                italic: true,
                ..TextStyle::default()
            },
            Self::Caption | Self::Overline => TextStyle {
                dim: true,
                ..TextStyle::default()
            },
            Self::Body1 | Self::Body2 | Self::Inherit => TextStyle::default(),
        }
    }
}

impl fmt::Display for TypographyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypographyVariant {
    type Err = TcssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variant = match s.trim().to_lowercase().as_str() {
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "subtitle1" => Self::Subtitle1,
            "subtitle2" => Self::Subtitle2,
            "body1" => Self::Body1,
            "body2" => Self::Body2,
            "button" => Self::Button,
            "caption" => Self::Caption,
            "overline" => Self::Overline,
            "inherit" => Self::Inherit,
            _ => {
                return Err(TcssError::InvalidValue {
                    property: "variant".into(),
                    value: s.to_string(),
                });
            }
        };
        Ok(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_adds_modifiers() {
        let mut style = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        style.merge(TextStyle {
            underline: true,
            ..TextStyle::default()
        });
        assert!(style.bold);
        assert!(style.underline);
        assert_eq!(style.to_string(), "bold underline");
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("Body2".parse::<TypographyVariant>().unwrap(), TypographyVariant::Body2);
        assert_eq!(
            "inherit".parse::<TypographyVariant>().unwrap(),
            TypographyVariant::default()
        );
        assert!("h7".parse::<TypographyVariant>().is_err());
    }

    #[test]
    fn headings_are_bold() {
        assert!(TypographyVariant::H3.text_style().bold);
        assert!(TypographyVariant::Inherit.text_style().is_none());
    }
}
