use tcss::types::{ColorSystem, ColorToken, Palette, RgbaColor, Theme};

#[test]
fn standard_themes_define_every_palette_role() {
    for (name, theme) in Theme::standard_themes() {
        let palette = Palette::from_theme(&theme);
        for token in ColorToken::PALETTE {
            assert!(palette.contains(token), "{} is missing {}", name, token);
        }
    }
}

#[test]
fn dark_systems_get_light_text() {
    let theme = Theme::from_color_system("dark", ColorSystem::new(RgbaColor::hex("#0178D4"), true));
    assert_eq!(theme.get_color("text-primary"), Some(RgbaColor::white()));
    assert_eq!(
        theme.get_color("text-secondary"),
        Some(RgbaColor::rgba(255, 255, 255, 0.7))
    );

    let light = Theme::from_color_system("light", ColorSystem::new(RgbaColor::hex("#0178D4"), false));
    assert_eq!(
        light.get_color("text-primary"),
        Some(RgbaColor::rgba(0, 0, 0, 0.87))
    );
}

#[test]
fn palette_rebuild_follows_theme_changes() {
    let mut theme = Theme::standard_themes().remove("material-light").unwrap();
    let before = Palette::from_theme(&theme);

    theme.set_palette_color(ColorToken::Primary, RgbaColor::rgb(255, 0, 0));
    let after = Palette::from_theme(&theme);

    assert_eq!(
        before.get(ColorToken::Primary).unwrap().main,
        RgbaColor::rgb(25, 118, 210)
    );
    assert_eq!(
        after.get(ColorToken::Primary).unwrap().main,
        RgbaColor::rgb(255, 0, 0)
    );
    assert_eq!(
        before.get(ColorToken::Secondary),
        after.get(ColorToken::Secondary)
    );
}

#[test]
fn theme_from_file() {
    let dir = std::env::temp_dir().join(format!("tcss-theme-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("brand.tcss");
    std::fs::write(
        &path,
        "/* brand colors */\nPalette {\n    mode: dark;\n    primary: #90caf9;\n}\n",
    )
    .unwrap();

    let theme = Theme::from_file("brand", &path).unwrap();
    assert!(theme.is_dark);
    assert_eq!(theme.get_color("primary"), Some(RgbaColor::hex("#90caf9")));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn theme_from_missing_file_is_io_error() {
    let err = Theme::from_file("nope", "/definitely/not/here.tcss").unwrap_err();
    assert!(matches!(err, tcss::TcssError::Io(_)));
}
