//! Link styling and configuration types.
//!
//! This module provides [`UnderlinePolicy`] for deciding when a link is
//! underlined, and [`LinkDefaults`], the per-theme default props that fill
//! whatever a link doesn't set explicitly.

use std::fmt;
use std::str::FromStr;

use super::palette::ColorToken;
use super::text::TypographyVariant;
use crate::error::TcssError;

/// When a link draws its underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnderlinePolicy {
    /// Never underlined.
    None,
    /// Underlined while hovered.
    Hover,
    /// Always underlined; the underline uses a faded palette color.
    #[default]
    Always,
}

impl UnderlinePolicy {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hover => "hover",
            Self::Always => "always",
        }
    }

    /// Utility class key, e.g. `underlineHover`.
    pub fn class_key(self) -> &'static str {
        match self {
            Self::None => "underlineNone",
            Self::Hover => "underlineHover",
            Self::Always => "underlineAlways",
        }
    }

    /// Whether the underline is drawn in the given hover state.
    pub fn is_underlined(self, hovered: bool) -> bool {
        match self {
            Self::None => false,
            Self::Hover => hovered,
            Self::Always => true,
        }
    }
}

impl fmt::Display for UnderlinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnderlinePolicy {
    type Err = TcssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "hover" => Ok(Self::Hover),
            "always" => Ok(Self::Always),
            _ => Err(TcssError::InvalidValue {
                property: "underline".into(),
                value: s.to_string(),
            }),
        }
    }
}

/// Theme-level default props for links.
///
/// Unset fields fall through to the built-in defaults: `primary`, `always`
/// and `inherit`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinkDefaults {
    pub color: Option<ColorToken>,
    pub underline: Option<UnderlinePolicy>,
    pub variant: Option<TypographyVariant>,
}

impl LinkDefaults {
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_underline(mut self, underline: UnderlinePolicy) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Color for a link whose own prop is `explicit`.
    pub fn color_for(&self, explicit: Option<ColorToken>) -> ColorToken {
        explicit.or(self.color).unwrap_or_default()
    }

    pub fn underline_for(&self, explicit: Option<UnderlinePolicy>) -> UnderlinePolicy {
        explicit.or(self.underline).unwrap_or_default()
    }

    pub fn variant_for(&self, explicit: Option<TypographyVariant>) -> TypographyVariant {
        explicit.or(self.variant).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_policy_follows_hover_state() {
        assert!(!UnderlinePolicy::None.is_underlined(true));
        assert!(!UnderlinePolicy::Hover.is_underlined(false));
        assert!(UnderlinePolicy::Hover.is_underlined(true));
        assert!(UnderlinePolicy::Always.is_underlined(false));
    }

    #[test]
    fn parse_policy() {
        assert_eq!("HOVER".parse::<UnderlinePolicy>().unwrap(), UnderlinePolicy::Hover);
        assert!(matches!(
            "sometimes".parse::<UnderlinePolicy>(),
            Err(TcssError::InvalidValue { property, .. }) if property == "underline"
        ));
    }

    #[test]
    fn explicit_props_beat_theme_defaults() {
        let defaults = LinkDefaults::default()
            .with_color(ColorToken::Secondary)
            .with_underline(UnderlinePolicy::Hover);

        assert_eq!(defaults.color_for(None), ColorToken::Secondary);
        assert_eq!(defaults.color_for(Some(ColorToken::Error)), ColorToken::Error);
        assert_eq!(defaults.underline_for(None), UnderlinePolicy::Hover);
        assert_eq!(defaults.variant_for(None), TypographyVariant::Inherit);

        let builtin = LinkDefaults::default();
        assert_eq!(builtin.color_for(None), ColorToken::Primary);
        assert_eq!(builtin.underline_for(None), UnderlinePolicy::Always);
    }
}
