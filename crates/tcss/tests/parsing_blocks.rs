use tcss::parser::{parse_blocks, parse_link_defaults, parse_theme};
use tcss::{
    ColorToken, Palette, RgbaColor, TcssError, TypographyVariant, UnderlinePolicy,
    resolve_decoration,
};

const BRAND: &str = r#"
/* Company palette */
Palette {
    mode: light;
    primary: #1976d2;
    secondary: rgb(156, 39, 176);
    text_primary: rgba(0, 0, 0, 0.87);
}

Link {
    color: secondary;
    underline: hover;
    variant: body2;
}
"#;

#[test]
fn theme_blocks_build_a_theme() {
    let theme = parse_theme("brand", BRAND).unwrap();
    assert!(!theme.is_dark);
    assert_eq!(theme.get_color("secondary"), Some(RgbaColor::rgb(156, 39, 176)));
    assert_eq!(theme.link.color, Some(ColorToken::Secondary));
    assert_eq!(theme.link.underline, Some(UnderlinePolicy::Hover));
    assert_eq!(theme.link.variant, Some(TypographyVariant::Body2));

    let palette = Palette::from_theme(&theme);
    let tokens: Vec<_> = palette.tokens().collect();
    assert_eq!(
        tokens,
        vec![
            ColorToken::Primary,
            ColorToken::Secondary,
            ColorToken::TextPrimary
        ]
    );
}

#[test]
fn undeclared_roles_fail_resolution() {
    let theme = parse_theme("brand", BRAND).unwrap();
    let palette = Palette::from_theme(&theme);
    assert!(matches!(
        resolve_decoration(&palette, ColorToken::Error, UnderlinePolicy::Always),
        Err(TcssError::MissingPaletteColor(ColorToken::Error))
    ));
}

#[test]
fn css_vars_declaration() {
    let theme = parse_theme("vars", "Palette { primary: #1976d2; css-vars: mui; }").unwrap();
    assert_eq!(theme.css_var_prefix.as_deref(), Some("mui"));

    let palette = Palette::from_theme(&theme);
    assert_eq!(
        palette.text_color(ColorToken::Primary).unwrap().as_deref(),
        Some("var(--mui-palette-primary-main)")
    );
}

#[test]
fn invalid_color_literal() {
    let err = parse_theme("bad", "Palette { primary: #12345z; }").unwrap_err();
    assert!(matches!(err, TcssError::InvalidColor(_)));
}

#[test]
fn unknown_block() {
    let err = parse_theme("bad", "Button { color: red; }").unwrap_err();
    assert!(matches!(err, TcssError::InvalidSyntax(msg) if msg.contains("Button")));
}

#[test]
fn unknown_link_property() {
    let err = parse_link_defaults("Link { href: home; }").unwrap_err();
    assert!(matches!(err, TcssError::UnknownProperty(p) if p == "href"));
}

#[test]
fn invalid_underline_value() {
    let err = parse_link_defaults("Link { underline: dotted; }").unwrap_err();
    assert_eq!(err.to_string(), "Invalid value `dotted` for `underline`");
}

#[test]
fn later_blocks_override_earlier_ones() {
    let defaults = parse_link_defaults("Link { color: error; } Link { color: info; }").unwrap();
    assert_eq!(defaults.color, Some(ColorToken::Info));
    assert!(parse_blocks("").unwrap().is_empty());
}
