//! Theme definitions for TCSS color palettes.
//!
//! Themes provide named color variables that palettes and stylesheets look
//! up by name. Every palette role gets a base color plus derived shades:
//!
//! | Variable           | Description                             |
//! |--------------------|-----------------------------------------|
//! | `primary`          | Primary accent color                    |
//! | `secondary`        | Secondary accent color                  |
//! | `error`            | Error/danger color                      |
//! | `warning`          | Warning/caution color                   |
//! | `info`             | Informational color                     |
//! | `success`          | Success/positive color                  |
//! | `text-primary`     | Default body text                       |
//! | `text-secondary`   | De-emphasized text                      |
//!
//! The six accent roles also get `-light`, `-dark` and `-contrast`
//! variants (e.g. `primary-light`).
//!
//! A theme may opt into CSS-variable output with [`Theme::with_css_vars`].
//! Palettes built from such a theme emit `var(--{prefix}-palette-…)`
//! references instead of literal colors.

use std::collections::HashMap;
use std::path::Path;

use crate::error::TcssError;
use crate::types::color::RgbaColor;
use crate::types::link::LinkDefaults;
use crate::types::palette::ColorToken;

/// Lightness shift used for the `-light` and `-dark` shades.
const TONAL_OFFSET: f32 = 0.2;

/// A color system that generates theme variables from base colors.
#[derive(Debug, Clone)]
pub struct ColorSystem {
    /// Primary accent color (required)
    pub primary: RgbaColor,
    pub secondary: Option<RgbaColor>,
    pub error: Option<RgbaColor>,
    pub warning: Option<RgbaColor>,
    pub info: Option<RgbaColor>,
    pub success: Option<RgbaColor>,
    pub text_primary: Option<RgbaColor>,
    pub text_secondary: Option<RgbaColor>,
    /// Whether this is a dark theme
    pub dark: bool,
}

impl ColorSystem {
    /// Creates a new color system with the given primary color.
    pub fn new(primary: RgbaColor, dark: bool) -> Self {
        Self {
            primary,
            secondary: None,
            error: None,
            warning: None,
            info: None,
            success: None,
            text_primary: None,
            text_secondary: None,
            dark,
        }
    }

    pub fn with_secondary(mut self, color: RgbaColor) -> Self {
        self.secondary = Some(color);
        self
    }

    pub fn with_error(mut self, color: RgbaColor) -> Self {
        self.error = Some(color);
        self
    }

    pub fn with_warning(mut self, color: RgbaColor) -> Self {
        self.warning = Some(color);
        self
    }

    pub fn with_info(mut self, color: RgbaColor) -> Self {
        self.info = Some(color);
        self
    }

    pub fn with_success(mut self, color: RgbaColor) -> Self {
        self.success = Some(color);
        self
    }

    pub fn with_text_primary(mut self, color: RgbaColor) -> Self {
        self.text_primary = Some(color);
        self
    }

    pub fn with_text_secondary(mut self, color: RgbaColor) -> Self {
        self.text_secondary = Some(color);
        self
    }

    /// Resolves every palette role, filling unset ones with defaults.
    fn resolved(&self) -> Vec<(ColorToken, RgbaColor)> {
        let secondary = self.secondary.clone().unwrap_or_else(|| {
            if self.dark {
                self.primary.darken(0.15)
            } else {
                self.primary.lighten(0.15)
            }
        });
        let (text_primary, text_secondary) = if self.dark {
            (RgbaColor::white(), RgbaColor::rgba(255, 255, 255, 0.7))
        } else {
            (RgbaColor::rgba(0, 0, 0, 0.87), RgbaColor::rgba(0, 0, 0, 0.6))
        };

        vec![
            (ColorToken::Primary, self.primary.clone()),
            (ColorToken::Secondary, secondary),
            (
                ColorToken::Error,
                self.error.clone().unwrap_or_else(|| RgbaColor::hex("#ba3c5b")),
            ),
            (
                ColorToken::Warning,
                self.warning.clone().unwrap_or_else(|| RgbaColor::hex("#ffa62b")),
            ),
            (
                ColorToken::Info,
                self.info.clone().unwrap_or_else(|| RgbaColor::hex("#0288d1")),
            ),
            (
                ColorToken::Success,
                self.success.clone().unwrap_or_else(|| RgbaColor::hex("#4EBF71")),
            ),
            (
                ColorToken::TextPrimary,
                self.text_primary.clone().unwrap_or(text_primary),
            ),
            (
                ColorToken::TextSecondary,
                self.text_secondary.clone().unwrap_or(text_secondary),
            ),
        ]
    }

    /// Generates all color variables from this color system.
    pub fn generate(&self) -> HashMap<String, RgbaColor> {
        let mut vars = HashMap::new();
        for (token, color) in self.resolved() {
            insert_palette_color(&mut vars, token, &color);
        }
        vars
    }
}

/// Inserts a palette color and, for accent roles, its shades.
fn insert_palette_color(vars: &mut HashMap<String, RgbaColor>, token: ColorToken, color: &RgbaColor) {
    let Some(name) = token.theme_key() else {
        return;
    };
    vars.insert(name.into(), color.clone());

    if matches!(token, ColorToken::TextPrimary | ColorToken::TextSecondary) {
        return;
    }
    vars.insert(format!("{}-light", name), color.lighten(TONAL_OFFSET));
    vars.insert(format!("{}-dark", name), color.darken(TONAL_OFFSET * 1.5));
    vars.insert(format!("{}-contrast", name), color.contrast_text());
}

/// A named color theme for styling widgets.
///
/// Themes map variable names to colors, allowing widgets to reference
/// semantic names that can be swapped at runtime.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Unique name for this theme (e.g., "textual-dark").
    pub name: String,
    /// Whether this is a dark theme.
    pub is_dark: bool,
    /// Maps variable names (e.g., "primary", "text-secondary") to colors.
    pub colors: HashMap<String, RgbaColor>,
    /// Prefix for CSS variable output; `None` emits literal colors.
    pub css_var_prefix: Option<String>,
    /// Default props for links rendered under this theme.
    pub link: LinkDefaults,
}

impl Theme {
    /// Creates a new empty theme with the given name.
    pub fn new(name: &str, is_dark: bool) -> Self {
        Self {
            name: name.to_string(),
            is_dark,
            colors: HashMap::new(),
            css_var_prefix: None,
            link: LinkDefaults::default(),
        }
    }

    /// Creates a theme from a ColorSystem.
    pub fn from_color_system(name: &str, system: ColorSystem) -> Self {
        Self {
            colors: system.generate(),
            ..Self::new(name, system.dark)
        }
    }

    /// Loads a theme from a file of TCSS declaration blocks.
    ///
    /// See [`crate::parser::parse_theme`] for the accepted blocks.
    pub fn from_file(name: &str, path: impl AsRef<Path>) -> Result<Self, TcssError> {
        let source = std::fs::read_to_string(path)?;
        crate::parser::parse_theme(name, &source)
    }

    /// Switches palette output to CSS variables named `--{prefix}-palette-…`.
    pub fn with_css_vars(mut self, prefix: &str) -> Self {
        self.css_var_prefix = Some(prefix.to_string());
        self
    }

    pub fn with_link_defaults(mut self, defaults: LinkDefaults) -> Self {
        self.link = defaults;
        self
    }

    /// Looks up a color by variable name.
    pub fn get_color(&self, name: &str) -> Option<RgbaColor> {
        self.colors.get(name).cloned()
    }

    /// Sets the base color of a palette role, regenerating its shades.
    ///
    /// `Inherit` has no palette slot and is ignored.
    pub fn set_palette_color(&mut self, token: ColorToken, color: RgbaColor) {
        insert_palette_color(&mut self.colors, token, &color);
    }

    /// Returns the built-in themes, keyed by name.
    pub fn standard_themes() -> HashMap<String, Theme> {
        let themes = [
            Theme::from_color_system(
                "textual-dark",
                ColorSystem::new(RgbaColor::hex("#0178D4"), true)
                    .with_secondary(RgbaColor::hex("#004578"))
                    .with_warning(RgbaColor::hex("#ffa62b"))
                    .with_error(RgbaColor::hex("#ba3c5b"))
                    .with_success(RgbaColor::hex("#4EBF71"))
                    .with_text_primary(RgbaColor::hex("#e0e0e0")),
            ),
            Theme::from_color_system(
                "textual-light",
                ColorSystem::new(RgbaColor::hex("#004578"), false)
                    .with_secondary(RgbaColor::hex("#0178D4"))
                    .with_warning(RgbaColor::hex("#ffa62b"))
                    .with_error(RgbaColor::hex("#ba3c5b"))
                    .with_success(RgbaColor::hex("#4EBF71")),
            ),
            Theme::from_color_system(
                "material-light",
                ColorSystem::new(RgbaColor::hex("#1976d2"), false)
                    .with_secondary(RgbaColor::hex("#9c27b0"))
                    .with_error(RgbaColor::hex("#d32f2f"))
                    .with_warning(RgbaColor::hex("#ed6c02"))
                    .with_info(RgbaColor::hex("#0288d1"))
                    .with_success(RgbaColor::hex("#2e7d32")),
            ),
            Theme::from_color_system(
                "material-dark",
                ColorSystem::new(RgbaColor::hex("#90caf9"), true)
                    .with_secondary(RgbaColor::hex("#ce93d8"))
                    .with_error(RgbaColor::hex("#f44336"))
                    .with_warning(RgbaColor::hex("#ffa726"))
                    .with_info(RgbaColor::hex("#29b6f6"))
                    .with_success(RgbaColor::hex("#66bb6a")),
            ),
            Theme::from_color_system(
                "nord",
                ColorSystem::new(RgbaColor::hex("#88C0D0"), true)
                    .with_secondary(RgbaColor::hex("#81A1C1"))
                    .with_warning(RgbaColor::hex("#EBCB8B"))
                    .with_error(RgbaColor::hex("#BF616A"))
                    .with_success(RgbaColor::hex("#A3BE8C"))
                    .with_text_primary(RgbaColor::hex("#D8DEE9")),
            ),
        ];

        themes
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect()
    }
}
