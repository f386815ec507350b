//! Theme context for widgets.
//!
//! The `ThemeContext` is what widgets read the theme through. It holds:
//! - the active [`Theme`] and the [`Palette`] built from it
//! - the [`ActivityMonitor`] focus trackers attach to
//! - the [`ResolveMode`] deciding how palette misses are handled

use std::rc::Rc;

use tcss::{ColorToken, DecorationColor, Palette, TcssError, Theme, UnderlinePolicy};

use crate::activity::ActivityMonitor;
use crate::error::Result;

/// How a missing palette color is handled at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Fail the render with the palette error.
    Strict,
    /// Log a warning and render as if the color were `inherit`.
    Tolerant,
}

impl Default for ResolveMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Tolerant
        }
    }
}

/// Read-only theme access shared by the widgets of one document.
///
/// Cloning is cheap and shares the theme, palette and monitor.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Rc<Theme>,
    palette: Rc<Palette>,
    monitor: ActivityMonitor,
    mode: ResolveMode,
}

impl ThemeContext {
    /// Creates a context on the thread's default activity monitor.
    pub fn new(theme: Theme) -> Self {
        Self::with_monitor(theme, ActivityMonitor::current())
    }

    pub fn with_monitor(theme: Theme, monitor: ActivityMonitor) -> Self {
        let palette = Palette::from_theme(&theme);
        Self {
            theme: Rc::new(theme),
            palette: Rc::new(palette),
            monitor,
            mode: ResolveMode::default(),
        }
    }

    /// Looks up one of [`Theme::standard_themes`] by name.
    pub fn standard(name: &str) -> Option<Self> {
        Theme::standard_themes().remove(name).map(Self::new)
    }

    pub fn with_resolve_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Swaps the theme, rebuilding the palette.
    pub fn set_theme(&mut self, theme: Theme) {
        self.palette = Rc::new(Palette::from_theme(&theme));
        self.theme = Rc::new(theme);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn monitor(&self) -> &ActivityMonitor {
        &self.monitor
    }

    pub fn resolve_mode(&self) -> ResolveMode {
        self.mode
    }

    /// Underline color for a link, applying the resolve mode to misses.
    pub fn resolve_decoration(
        &self,
        token: ColorToken,
        underline: UnderlinePolicy,
    ) -> Result<Option<DecorationColor>> {
        let resolved = tcss::resolve_decoration(&self.palette, token, underline);
        self.tolerate(resolved)
    }

    /// Text color for a token, applying the resolve mode to misses.
    pub fn text_color(&self, token: ColorToken) -> Result<Option<String>> {
        let resolved = self.palette.text_color(token);
        self.tolerate(resolved)
    }

    fn tolerate<T>(&self, resolved: std::result::Result<Option<T>, TcssError>) -> Result<Option<T>> {
        match resolved {
            Ok(value) => Ok(value),
            Err(err @ TcssError::MissingPaletteColor(_)) if self.mode == ResolveMode::Tolerant => {
                log::warn!("theme `{}`: {}; using inherit", self.theme.name, err);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
