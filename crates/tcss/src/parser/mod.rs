//! TCSS declaration-block parsing.
//!
//! Themes and link defaults are written as named blocks of declarations:
//!
//! ```text
//! Palette {
//!     mode: light;
//!     primary: #1976d2;
//!     text-secondary: rgba(0, 0, 0, 0.6);
//!     css-vars: mui;
//! }
//!
//! Link {
//!     color: secondary;
//!     underline: hover;
//!     variant: body2;
//! }
//! ```
//!
//! - [`parse_blocks`]: generic syntax layer producing [`Block`]s
//! - [`parse_theme`]: builds a [`Theme`] from `Palette` and `Link` blocks
//! - [`parse_link_defaults`]: reads only the `Link` block
//!
//! ## Example
//!
//! ```rust
//! use tcss::parser::parse_theme;
//! use tcss::types::{ColorToken, UnderlinePolicy};
//!
//! let theme = parse_theme("brand", "Palette { primary: #1976d2; } Link { underline: hover; }").unwrap();
//! assert!(theme.get_color("primary").is_some());
//! assert_eq!(theme.link.underline, Some(UnderlinePolicy::Hover));
//! assert_eq!(theme.link.color_for(None), ColorToken::Primary);
//! ```

pub mod values;

use nom::{
    IResult,
    character::complete::char,
    combinator::opt,
    multi::many0,
    sequence::{delimited, preceded},
};

use crate::TcssError;
use crate::parser::values::{
    parse_color, parse_css_vars, parse_ident, parse_mode, parse_raw_value, ws,
};
use crate::types::link::{LinkDefaults, UnderlinePolicy};
use crate::types::palette::ColorToken;
use crate::types::text::TypographyVariant;
use crate::types::theme::Theme;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A named block of declarations, e.g. `Link { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

/// Parses a source file into its blocks.
pub fn parse_blocks(source: &str) -> Result<Vec<Block>, TcssError> {
    let (remaining, blocks) =
        many0(parse_block)(source).map_err(|e| TcssError::InvalidSyntax(e.to_string()))?;
    let (remaining, ()) = ws(remaining).map_err(|e| TcssError::InvalidSyntax(e.to_string()))?;

    if !remaining.is_empty() {
        return Err(TcssError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(blocks)
}

/// Top-level parser for a block (e.g., "Link { color: primary; }").
fn parse_block(input: &str) -> IResult<&str, Block> {
    let (input, ()) = ws(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, ()) = ws(input)?;
    let (input, declarations) = delimited(
        char('{'),
        many0(parse_declaration),
        preceded(ws, char('}')),
    )(input)?;

    Ok((
        input,
        Block {
            name: name.to_string(),
            declarations,
        },
    ))
}

fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, ()) = ws(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, ()) = ws(input)?;
    let (input, _) = char(':')(input)?;
    let (after_value, raw) = parse_raw_value(input)?;

    let value = raw.trim();
    if value.is_empty() {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::NonEmpty,
        )));
    }

    let (input, _) = opt(char(';'))(after_value)?;
    Ok((
        input,
        Declaration {
            property: property.to_string(),
            value: value.to_string(),
        },
    ))
}

/// Builds a theme from `Palette` and `Link` blocks.
///
/// Only the roles a `Palette` block declares end up in the theme; a link
/// asking for an undeclared role fails resolution rather than picking up a
/// default color.
pub fn parse_theme(name: &str, source: &str) -> Result<Theme, TcssError> {
    let mut theme = Theme::new(name, false);

    for block in parse_blocks(source)? {
        match block.name.as_str() {
            "Palette" => apply_palette(&mut theme, &block.declarations)?,
            "Link" => apply_link(&mut theme.link, &block.declarations)?,
            other => {
                return Err(TcssError::InvalidSyntax(format!("Unknown block: {}", other)));
            }
        }
    }

    Ok(theme)
}

/// Reads link default props from the `Link` blocks of `source`.
///
/// Other blocks are skipped.
pub fn parse_link_defaults(source: &str) -> Result<LinkDefaults, TcssError> {
    let mut defaults = LinkDefaults::default();
    for block in parse_blocks(source)?.iter().filter(|b| b.name == "Link") {
        apply_link(&mut defaults, &block.declarations)?;
    }
    Ok(defaults)
}

fn apply_palette(theme: &mut Theme, declarations: &[Declaration]) -> Result<(), TcssError> {
    for decl in declarations {
        match decl.property.as_str() {
            "mode" => theme.is_dark = parse_mode(&decl.value)?,
            "css-vars" => theme.css_var_prefix = parse_css_vars(&decl.value)?,
            property => {
                let token = property
                    .parse::<ColorToken>()
                    .ok()
                    .filter(|token| !token.is_inherit())
                    .ok_or_else(|| TcssError::UnknownProperty(property.to_string()))?;
                theme.set_palette_color(token, parse_color(&decl.value)?);
            }
        }
    }
    Ok(())
}

fn apply_link(defaults: &mut LinkDefaults, declarations: &[Declaration]) -> Result<(), TcssError> {
    for decl in declarations {
        match decl.property.as_str() {
            "color" => defaults.color = Some(decl.value.parse::<ColorToken>()?),
            "underline" => defaults.underline = Some(decl.value.parse::<UnderlinePolicy>()?),
            "variant" => defaults.variant = Some(decl.value.parse::<TypographyVariant>()?),
            other => return Err(TcssError::UnknownProperty(other.to_string())),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_and_declarations() {
        let blocks = parse_blocks("Link { color: error; underline: none }\nPalette{}").unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "Link");
        assert_eq!(
            blocks[0].declarations[1],
            Declaration {
                property: "underline".into(),
                value: "none".into()
            }
        );
        assert!(blocks[1].declarations.is_empty());
    }

    #[test]
    fn color_values_keep_commas() {
        let blocks = parse_blocks("Palette { text-primary: rgba(0, 0, 0, 0.87); }").unwrap();
        assert_eq!(blocks[0].declarations[0].value, "rgba(0, 0, 0, 0.87)");
    }

    #[test]
    fn empty_value_is_a_syntax_error() {
        assert!(matches!(
            parse_blocks("Link { color: }"),
            Err(TcssError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(matches!(
            parse_blocks("Link { } }"),
            Err(TcssError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn unknown_palette_property() {
        let err = parse_theme("t", "Palette { accent: #fff; }").unwrap_err();
        assert!(matches!(err, TcssError::UnknownProperty(p) if p == "accent"));

        let err = parse_theme("t", "Palette { inherit: #fff; }").unwrap_err();
        assert!(matches!(err, TcssError::UnknownProperty(_)));
    }

    #[test]
    fn unknown_link_color() {
        let err = parse_link_defaults("Link { color: magenta; }").unwrap_err();
        assert!(matches!(err, TcssError::UnknownColorToken(_)));
    }

    #[test]
    fn link_defaults_ignore_other_blocks() {
        let defaults = parse_link_defaults(
            "Palette { primary: #000; }\nLink { variant: body2; color: textSecondary; }",
        )
        .unwrap();
        assert_eq!(defaults.color, Some(ColorToken::TextSecondary));
        assert_eq!(defaults.variant, Some(TypographyVariant::Body2));
        assert_eq!(defaults.underline, None);
    }
}
