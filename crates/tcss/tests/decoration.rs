use tcss::{
    ColorToken, DECORATION_ALPHA, DecorationColor, Palette, RgbaColor, TcssError, Theme,
    UnderlinePolicy, resolve_decoration,
};

fn material() -> Palette {
    Palette::from_theme(&Theme::standard_themes()["material-light"])
}

#[test]
fn non_always_policies_never_get_a_color() {
    let palette = material();
    for token in ColorToken::PALETTE {
        for policy in [UnderlinePolicy::None, UnderlinePolicy::Hover] {
            assert_eq!(resolve_decoration(&palette, token, policy).unwrap(), None);
        }
    }
}

#[test]
fn inherit_never_gets_a_color() {
    let palette = material();
    for policy in [
        UnderlinePolicy::None,
        UnderlinePolicy::Hover,
        UnderlinePolicy::Always,
    ] {
        assert_eq!(
            resolve_decoration(&palette, ColorToken::Inherit, policy).unwrap(),
            None
        );
    }
}

#[test]
fn always_fades_the_palette_color() {
    let palette = material();
    for token in ColorToken::PALETTE {
        let main = &palette.get(token).unwrap().main;
        let decoration = resolve_decoration(&palette, token, UnderlinePolicy::Always)
            .unwrap()
            .unwrap();
        let rgba = decoration.as_rgba().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (main.r, main.g, main.b));
        assert_eq!(rgba.a, DECORATION_ALPHA);
    }
}

#[test]
fn primary_always_on_material() {
    let decoration = resolve_decoration(&material(), ColorToken::Primary, UnderlinePolicy::Always)
        .unwrap()
        .unwrap();
    assert_eq!(
        decoration,
        DecorationColor::Rgba(RgbaColor::rgba(25, 118, 210, 0.4))
    );
}

#[test]
fn translucent_text_colors_have_alpha_replaced() {
    let decoration = resolve_decoration(
        &material(),
        ColorToken::TextSecondary,
        UnderlinePolicy::Always,
    )
    .unwrap()
    .unwrap();
    assert_eq!(decoration.to_string(), "rgba(0, 0, 0, 0.4)");
}

#[test]
fn missing_entry_is_an_error() {
    let mut theme = Theme::new("sparse", false);
    theme.set_palette_color(ColorToken::Primary, RgbaColor::hex("#1976d2"));
    let palette = Palette::from_theme(&theme);

    let err = resolve_decoration(&palette, ColorToken::Warning, UnderlinePolicy::Always).unwrap_err();
    assert!(matches!(err, TcssError::MissingPaletteColor(ColorToken::Warning)));
    assert_eq!(err.to_string(), "Palette has no color for `warning`");

    // Not asked for, so not an error.
    assert_eq!(
        resolve_decoration(&palette, ColorToken::Warning, UnderlinePolicy::Hover).unwrap(),
        None
    );
}

#[test]
fn css_var_themes_emit_channel_references() {
    let theme = Theme::standard_themes()
        .remove("material-light")
        .unwrap()
        .with_css_vars("mui");
    let palette = Palette::from_theme(&theme);

    let decoration = resolve_decoration(&palette, ColorToken::Secondary, UnderlinePolicy::Always)
        .unwrap()
        .unwrap();
    assert_eq!(decoration.alpha(), 0.4);
    assert_eq!(
        decoration.to_string(),
        "rgba(var(--mui-palette-secondary-mainChannel) / 0.4)"
    );
}
