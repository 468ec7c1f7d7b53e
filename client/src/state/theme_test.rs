use super::*;

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn parse_accepts_canonical_values() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(" dark\n".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(
        "Dark".parse::<ThemeMode>(),
        Err(ThemeError::MalformedStoredValue("Dark".to_owned()))
    );
    assert_eq!(
        "true".parse::<ThemeMode>(),
        Err(ThemeError::MalformedStoredValue("true".to_owned()))
    );
    assert!("".parse::<ThemeMode>().is_err());
}

#[test]
fn as_str_matches_display_and_parses_back() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.to_string(), mode.as_str());
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
    }
}

#[test]
fn toggled_flips_mode() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn from_prefers_dark_maps_signal() {
    assert_eq!(ThemeMode::from_prefers_dark(true), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
}

#[test]
fn toggle_glyph_points_at_other_mode() {
    assert_eq!(ThemeMode::Light.toggle_glyph(), "☾");
    assert_eq!(ThemeMode::Dark.toggle_glyph(), "☀");
}
