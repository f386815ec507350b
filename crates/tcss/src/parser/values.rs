//! Low-level token parsers and typed value conversion.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::multispace1,
    combinator::value,
    multi::many0,
    sequence::delimited,
};

use crate::error::TcssError;
use crate::types::color::RgbaColor;

/// Parse an identifier (property name, block name).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// A `/* ... */` comment.
pub fn comment(input: &str) -> IResult<&str, ()> {
    value((), delimited(tag("/*"), take_until("*/"), tag("*/")))(input)
}

/// Skips any run of whitespace and comments.
pub fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment))))(input)
}

/// Raw declaration value: everything up to `;` or `}`.
pub fn parse_raw_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ';' && c != '}')(input)
}

/// `mode: dark | light`, returning whether the theme is dark.
pub fn parse_mode(value: &str) -> Result<bool, TcssError> {
    match value {
        "dark" => Ok(true),
        "light" => Ok(false),
        _ => Err(invalid("mode", value)),
    }
}

/// `css-vars: <prefix> | none`.
pub fn parse_css_vars(value: &str) -> Result<Option<String>, TcssError> {
    if value == "none" {
        return Ok(None);
    }
    match parse_ident(value) {
        Ok(("", prefix)) => Ok(Some(prefix.to_string())),
        _ => Err(invalid("css-vars", value)),
    }
}

pub fn parse_color(value: &str) -> Result<RgbaColor, TcssError> {
    Ok(RgbaColor::parse(value)?)
}

fn invalid(property: &str, value: &str) -> TcssError {
    TcssError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_skips_comments() {
        let (rest, ()) = ws("  /* note */\n  /**/ Link").unwrap();
        assert_eq!(rest, "Link");
    }

    #[test]
    fn css_vars_prefix() {
        assert_eq!(parse_css_vars("mui").unwrap().as_deref(), Some("mui"));
        assert_eq!(parse_css_vars("none").unwrap(), None);
        assert!(parse_css_vars("two words").is_err());
    }

    #[test]
    fn mode_values() {
        assert!(parse_mode("dark").unwrap());
        assert!(!parse_mode("light").unwrap());
        assert!(matches!(
            parse_mode("dim"),
            Err(TcssError::InvalidValue { property, .. }) if property == "mode"
        ));
    }
}
