//! Underline decoration color resolution.
//!
//! Links that are always underlined draw the underline in a faded version of
//! their palette color. [`resolve_decoration`] decides whether such a color
//! applies and returns it; everything else falls back to the inherited text
//! color (`currentColor`).
//!
//! Colors are sRGB with straight alpha. The faded color keeps the palette
//! color's channels and replaces its alpha with [`DECORATION_ALPHA`]; nothing
//! is composited against a background.

use std::fmt;

use crate::error::TcssError;
use crate::types::color::RgbaColor;
use crate::types::link::UnderlinePolicy;
use crate::types::palette::{ColorToken, Palette};

/// Opacity of the underline relative to the palette color.
pub const DECORATION_ALPHA: f32 = 0.4;

/// A resolved underline color.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorationColor {
    /// Concrete color.
    Rgba(RgbaColor),
    /// Reference to a theme channel variable, e.g.
    /// `rgba(var(--textual-palette-primary-mainChannel) / 0.4)`.
    Variable { channel_var: String, alpha: f32 },
}

impl DecorationColor {
    pub fn variable(channel_var: impl Into<String>, alpha: f32) -> Self {
        Self::Variable {
            channel_var: channel_var.into(),
            alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Rgba(color) => color.a,
            Self::Variable { alpha, .. } => *alpha,
        }
    }

    pub fn as_rgba(&self) -> Option<&RgbaColor> {
        match self {
            Self::Rgba(color) => Some(color),
            Self::Variable { .. } => None,
        }
    }
}

impl fmt::Display for DecorationColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(color) => write!(f, "{}", color),
            Self::Variable { channel_var, alpha } => {
                write!(f, "rgba(var({}) / {})", channel_var, alpha)
            }
        }
    }
}

/// Returns the underline color for a link drawn with `token` under `underline`.
///
/// - `Ok(None)` when the policy isn't [`UnderlinePolicy::Always`] or the token
///   is [`ColorToken::Inherit`]; the underline then uses the text color.
/// - `Err(MissingPaletteColor)` when the palette has no entry for the token.
///
/// # Examples
///
/// ```
/// use tcss::decoration::resolve_decoration;
/// use tcss::types::{ColorToken, Palette, RgbaColor, Theme, UnderlinePolicy};
///
/// let mut theme = Theme::new("demo", false);
/// theme.set_palette_color(ColorToken::Primary, RgbaColor::hex("#1976d2"));
/// let palette = Palette::from_theme(&theme);
///
/// let color = resolve_decoration(&palette, ColorToken::Primary, UnderlinePolicy::Always)
///     .unwrap()
///     .unwrap();
/// assert_eq!(color.to_string(), "rgba(25, 118, 210, 0.4)");
/// ```
pub fn resolve_decoration(
    palette: &Palette,
    token: ColorToken,
    underline: UnderlinePolicy,
) -> Result<Option<DecorationColor>, TcssError> {
    if underline != UnderlinePolicy::Always || token.is_inherit() {
        return Ok(None);
    }
    palette
        .get(token)
        .map(|entry| Some(entry.decoration.clone()))
        .ok_or(TcssError::MissingPaletteColor(token))
}
