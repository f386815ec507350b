//! Error types for TCSS parsing and style resolution.
//!
//! This module defines the errors that can occur when parsing theme
//! declaration blocks or resolving palette colors for a widget.

use thiserror::Error;

use crate::types::color::ColorParseError;
use crate::types::palette::ColorToken;

/// Errors that can occur during TCSS parsing and style resolution.
///
/// # Examples
///
/// ```rust
/// use tcss::parser::parse_blocks;
///
/// // Syntax error example - missing value after colon
/// let result = parse_blocks("Link { color: }");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum TcssError {
    /// Invalid syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A color token was requested that the theme palette doesn't define.
    ///
    /// Resolution never substitutes a default color for a missing entry.
    #[error("Palette has no color for `{0}`")]
    MissingPaletteColor(ColorToken),

    /// A color token name that is not part of the palette vocabulary.
    #[error("Unknown color token: {0}")]
    UnknownColorToken(String),

    /// A known property was given a value it doesn't accept.
    #[error("Invalid value `{value}` for `{property}`")]
    InvalidValue { property: String, value: String },

    /// A declaration used a property name this block doesn't understand.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// A color literal failed to parse.
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// An I/O error occurred while reading a theme file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
