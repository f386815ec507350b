pub mod color;
pub mod link;
pub mod palette;
pub mod rule;
pub mod text;
pub mod theme;

pub use color::{ColorParseError, RgbaColor};
pub use link::{LinkDefaults, UnderlinePolicy};
pub use palette::{ColorToken, Palette, PaletteEntry};
pub use rule::{RuleState, StyleRule, computed_declarations};
pub use text::{TextStyle, TypographyVariant};
pub use theme::{ColorSystem, Theme};
