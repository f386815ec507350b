//! Palette lookup table keyed by color token.
//!
//! A [`Palette`] is built once from a [`Theme`](crate::types::Theme) and
//! answers every per-render question a link asks of the theme: the solid
//! text color for a token, and the precomputed underline decoration color.
//! Rebuilding happens only when the theme itself changes.

use std::fmt;
use std::str::FromStr;

use crate::decoration::{DECORATION_ALPHA, DecorationColor};
use crate::error::TcssError;
use crate::types::color::RgbaColor;
use crate::types::theme::Theme;

/// A semantic color key, or the `Inherit` sentinel.
///
/// The set is closed: every token other than `Inherit` has exactly one slot
/// in a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ColorToken {
    #[default]
    Primary,
    Secondary,
    Error,
    Warning,
    Info,
    Success,
    TextPrimary,
    TextSecondary,
    /// Use the surrounding text color (`currentColor`).
    Inherit,
}

impl ColorToken {
    /// Every token that maps onto a palette slot, in slot order.
    pub const PALETTE: [ColorToken; 8] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Error,
        ColorToken::Warning,
        ColorToken::Info,
        ColorToken::Success,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
    ];

    /// Prop-style name, e.g. `"primary"` or `"textSecondary"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::Inherit => "inherit",
        }
    }

    /// Variable name of the token's base color in [`Theme::colors`].
    pub fn theme_key(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some("primary"),
            Self::Secondary => Some("secondary"),
            Self::Error => Some("error"),
            Self::Warning => Some("warning"),
            Self::Info => Some("info"),
            Self::Success => Some("success"),
            Self::TextPrimary => Some("text-primary"),
            Self::TextSecondary => Some("text-secondary"),
            Self::Inherit => None,
        }
    }

    /// Path segment used in CSS variable names (`--x-palette-{path}`).
    fn css_path(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some("primary-main"),
            Self::Secondary => Some("secondary-main"),
            Self::Error => Some("error-main"),
            Self::Warning => Some("warning-main"),
            Self::Info => Some("info-main"),
            Self::Success => Some("success-main"),
            Self::TextPrimary => Some("text-primary"),
            Self::TextSecondary => Some("text-secondary"),
            Self::Inherit => None,
        }
    }

    pub fn is_inherit(self) -> bool {
        self == Self::Inherit
    }

    fn slot(self) -> Option<usize> {
        Self::PALETTE.iter().position(|t| *t == self)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = TcssError;

    /// Accepts prop names (`textPrimary`) as well as kebab and snake case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let token = match normalized.as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "success" => Self::Success,
            "textprimary" => Self::TextPrimary,
            "textsecondary" => Self::TextSecondary,
            "inherit" => Self::Inherit,
            _ => return Err(TcssError::UnknownColorToken(s.trim().to_string())),
        };
        Ok(token)
    }
}

/// One resolved palette slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Solid color of the slot.
    pub main: RgbaColor,
    /// `--{prefix}-palette-{path}` when the theme uses CSS variables.
    pub main_var: Option<String>,
    /// Underline color for links drawn in this color.
    pub decoration: DecorationColor,
}

/// Lookup table from [`ColorToken`] to [`PaletteEntry`].
///
/// # Examples
///
/// ```
/// use tcss::types::{ColorToken, Palette, RgbaColor, Theme};
///
/// let mut theme = Theme::new("custom", false);
/// theme.set_palette_color(ColorToken::Primary, RgbaColor::hex("#1976d2"));
///
/// let palette = Palette::from_theme(&theme);
/// assert!(palette.contains(ColorToken::Primary));
/// assert!(!palette.contains(ColorToken::Secondary));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: [Option<PaletteEntry>; 8],
    css_var_prefix: Option<String>,
}

impl Palette {
    /// Builds the table from the theme's base colors.
    ///
    /// Tokens the theme doesn't define stay empty.
    pub fn from_theme(theme: &Theme) -> Self {
        let prefix = theme.css_var_prefix.clone();
        let entries = std::array::from_fn(|slot| {
            let token = ColorToken::PALETTE[slot];
            let main = theme.get_color(token.theme_key()?)?;
            let path = token.css_path()?;
            let decoration = match &prefix {
                Some(prefix) => DecorationColor::variable(
                    format!("--{}-palette-{}Channel", prefix, path),
                    DECORATION_ALPHA,
                ),
                None => DecorationColor::Rgba(main.with_alpha(DECORATION_ALPHA)),
            };
            Some(PaletteEntry {
                main_var: prefix
                    .as_ref()
                    .map(|prefix| format!("--{}-palette-{}", prefix, path)),
                main,
                decoration,
            })
        });

        Self {
            entries,
            css_var_prefix: prefix,
        }
    }

    /// Returns the entry for `token`; `Inherit` never has one.
    pub fn get(&self, token: ColorToken) -> Option<&PaletteEntry> {
        token.slot().and_then(|slot| self.entries[slot].as_ref())
    }

    pub fn contains(&self, token: ColorToken) -> bool {
        self.get(token).is_some()
    }

    /// Tokens with a defined entry, in slot order.
    pub fn tokens(&self) -> impl Iterator<Item = ColorToken> + '_ {
        ColorToken::PALETTE
            .into_iter()
            .filter(|token| self.contains(*token))
    }

    pub fn uses_css_vars(&self) -> bool {
        self.css_var_prefix.is_some()
    }

    pub fn css_var_prefix(&self) -> Option<&str> {
        self.css_var_prefix.as_deref()
    }

    /// CSS value for the `color` of text drawn with `token`.
    ///
    /// `Inherit` yields `Ok(None)`. A token missing from the palette is a
    /// [`TcssError::MissingPaletteColor`].
    pub fn text_color(&self, token: ColorToken) -> Result<Option<String>, TcssError> {
        if token.is_inherit() {
            return Ok(None);
        }
        let entry = self
            .get(token)
            .ok_or(TcssError::MissingPaletteColor(token))?;
        Ok(Some(match &entry.main_var {
            Some(var) => format!("var({})", var),
            None => entry.main.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_with_primary() -> Theme {
        let mut theme = Theme::new("test", false);
        theme.set_palette_color(ColorToken::Primary, RgbaColor::hex("#1976d2"));
        theme.set_palette_color(ColorToken::TextPrimary, RgbaColor::rgba(0, 0, 0, 0.87));
        theme
    }

    #[test]
    fn token_names_round_trip_through_from_str() {
        for token in ColorToken::PALETTE {
            assert_eq!(token.name().parse::<ColorToken>().unwrap(), token);
        }
        assert_eq!("inherit".parse::<ColorToken>().unwrap(), ColorToken::Inherit);
        assert_eq!(
            "text-secondary".parse::<ColorToken>().unwrap(),
            ColorToken::TextSecondary
        );
        assert!(matches!(
            "tertiary".parse::<ColorToken>(),
            Err(TcssError::UnknownColorToken(name)) if name == "tertiary"
        ));
    }

    #[test]
    fn only_defined_slots_are_present() {
        let palette = Palette::from_theme(&theme_with_primary());
        let tokens: Vec<_> = palette.tokens().collect();
        assert_eq!(tokens, vec![ColorToken::Primary, ColorToken::TextPrimary]);
        assert!(palette.get(ColorToken::Inherit).is_none());
    }

    #[test]
    fn text_color_uses_solid_main() {
        let palette = Palette::from_theme(&theme_with_primary());
        assert_eq!(
            palette.text_color(ColorToken::Primary).unwrap().as_deref(),
            Some("#1976d2")
        );
        assert_eq!(palette.text_color(ColorToken::Inherit).unwrap(), None);
        assert!(matches!(
            palette.text_color(ColorToken::Error),
            Err(TcssError::MissingPaletteColor(ColorToken::Error))
        ));
    }

    #[test]
    fn css_var_mode_references_variables() {
        let theme = theme_with_primary().with_css_vars("textual");
        let palette = Palette::from_theme(&theme);
        assert!(palette.uses_css_vars());
        assert_eq!(
            palette.text_color(ColorToken::Primary).unwrap().as_deref(),
            Some("var(--textual-palette-primary-main)")
        );
        let entry = palette.get(ColorToken::TextPrimary).unwrap();
        assert_eq!(
            entry.decoration.to_string(),
            "rgba(var(--textual-palette-text-primaryChannel) / 0.4)"
        );
    }
}
