//! # TCSS - Theme and link style layer
//!
//! The style half of accessible, themed links. This crate provides:
//!
//! - **Palette**: a per-theme lookup table from [`ColorToken`] to solid and
//!   decoration colors, built once per theme
//! - **Decoration**: [`resolve_decoration`], which picks the faded underline
//!   color a link draws when it is always underlined
//! - **Parsing**: `Palette { }` and `Link { }` declaration blocks for themes
//!   loaded from files
//! - **States**: [`WidgetStates`] bitflags, including `FOCUS_VISIBLE`
//!
//! ## Quick Start
//!
//! ```rust
//! use tcss::{ColorToken, Palette, Theme, UnderlinePolicy, resolve_decoration};
//!
//! let themes = Theme::standard_themes();
//! let palette = Palette::from_theme(&themes["material-light"]);
//!
//! let decoration = resolve_decoration(&palette, ColorToken::Primary, UnderlinePolicy::Always)
//!     .unwrap()
//!     .expect("always-underlined links get a decoration");
//! assert_eq!(decoration.to_string(), "rgba(25, 118, 210, 0.4)");
//!
//! let none = resolve_decoration(&palette, ColorToken::Primary, UnderlinePolicy::Hover).unwrap();
//! assert!(none.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`decoration`]: underline decoration color resolution
//! - [`parser`]: declaration-block parsing for themes
//! - [`states`]: pseudo-class state flags
//! - [`types`]: colors, palettes, themes, link props and style rules
//! - [`error`]: error types for parsing and resolution failures

pub mod decoration;
pub mod error;
pub mod parser;
pub mod states;
pub mod types;

pub use decoration::{DECORATION_ALPHA, DecorationColor, resolve_decoration};
pub use error::TcssError;
pub use states::{WidgetMeta, WidgetStates};
pub use types::{
    ColorSystem, ColorToken, LinkDefaults, Palette, PaletteEntry, RgbaColor, RuleState, StyleRule,
    TextStyle, Theme, TypographyVariant, UnderlinePolicy,
};
