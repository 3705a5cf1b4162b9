use desk_pet::config::*;

// ── Defaults ─────────────────────────────────────────────────────────────────

#[test]
fn default_config_matches_original_tunables() {
    let c = AppConfig::default();
    assert_eq!(c.tunables.character_speed, 320.0);
    assert_eq!(c.tunables.tear_speed, 600.0);
    assert_eq!(c.render.max_fps, 30);
    assert!(!c.render.limit_fps);
    assert_eq!(c.skin, "isaac");
    assert_eq!(c.backdrop, Backdrop::default());
}

// ── apply_property ───────────────────────────────────────────────────────────

#[test]
fn properties_mutate_their_tunable() {
    let mut c = AppConfig::default();
    apply_property(&mut c, Property::Fps(60));
    apply_property(&mut c, Property::FpsLimiter(true));
    apply_property(&mut c, Property::CharacterSpeed(500.0));
    apply_property(&mut c, Property::TearSpeed(900.0));
    apply_property(&mut c, Property::Character("guppy".to_string()));
    assert_eq!(c.render.max_fps, 60);
    assert!(c.render.limit_fps);
    assert_eq!(c.tunables.character_speed, 500.0);
    assert_eq!(c.tunables.tear_speed, 900.0);
    assert_eq!(c.skin, "guppy");
}

#[test]
fn applying_a_property_twice_equals_applying_it_once() {
    let mut once = AppConfig::default();
    apply_property(&mut once, Property::CharacterSpeed(500.0));

    let mut twice = AppConfig::default();
    apply_property(&mut twice, Property::CharacterSpeed(500.0));
    apply_property(&mut twice, Property::CharacterSpeed(500.0));

    assert_eq!(once, twice);
}

#[test]
fn empty_background_path_selects_the_default() {
    let mut c = AppConfig::default();
    apply_property(&mut c, Property::Background("wall.png".to_string()));
    assert_eq!(c.backdrop.image.as_deref(), Some("wall.png"));
    apply_property(&mut c, Property::Background(String::new()));
    assert_eq!(c.backdrop.image, None);
}

#[test]
fn background_style_and_repeat_apply() {
    let mut c = AppConfig::default();
    apply_property(&mut c, Property::BackgroundStyle(BackgroundStyle::Center));
    apply_property(&mut c, Property::BackgroundRepeat(true));
    assert_eq!(c.backdrop.style, BackgroundStyle::Center);
    assert!(c.backdrop.repeat);
}

// ── BackgroundStyle::parse ───────────────────────────────────────────────────

#[test]
fn background_style_parses_known_values() {
    assert_eq!(BackgroundStyle::parse("fit"), Some(BackgroundStyle::Fit));
    assert_eq!(BackgroundStyle::parse("fill"), Some(BackgroundStyle::Fill));
    assert_eq!(BackgroundStyle::parse("center"), Some(BackgroundStyle::Center));
    assert_eq!(BackgroundStyle::parse("left"), Some(BackgroundStyle::Left));
    assert_eq!(BackgroundStyle::parse("right"), Some(BackgroundStyle::Right));
}

#[test]
fn background_style_rejects_unknown_values() {
    assert_eq!(BackgroundStyle::parse("stretch"), None);
    assert_eq!(BackgroundStyle::parse(""), None);
}

// ── Settings file ────────────────────────────────────────────────────────────

#[test]
fn settings_missing_keys_take_defaults() {
    let s = parse_settings(r#"{ "fps": 60, "character": "guppy" }"#);
    assert_eq!(s.fps, 60);
    assert_eq!(s.character, "guppy");
    assert_eq!(s.character_speed, 320.0); // default filled in
    assert_eq!(s.tear_speed, 600.0);
    assert!(!s.fps_limiter);
}

#[test]
fn settings_unknown_keys_are_ignored() {
    let s = parse_settings(r#"{ "fps": 24, "bogus": true, "another": [1, 2] }"#);
    assert_eq!(s.fps, 24);
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    assert_eq!(parse_settings("not json at all"), Settings::default());
    assert_eq!(parse_settings(r#"{ "fps": "sixty" }"#), Settings::default());
}

#[test]
fn apply_settings_routes_through_the_sink() {
    let s = parse_settings(
        r#"{
            "fps": 144,
            "fps_limiter": true,
            "character_speed": 100.0,
            "tear_speed": 50.0,
            "character": "guppy",
            "background": "wall.png",
            "background_style": "left",
            "background_repeat": true
        }"#,
    );
    let mut c = AppConfig::default();
    apply_settings(&mut c, &s);
    assert_eq!(c.render.max_fps, 144);
    assert!(c.render.limit_fps);
    assert_eq!(c.tunables.character_speed, 100.0);
    assert_eq!(c.tunables.tear_speed, 50.0);
    assert_eq!(c.skin, "guppy");
    assert_eq!(c.backdrop.image.as_deref(), Some("wall.png"));
    assert_eq!(c.backdrop.style, BackgroundStyle::Left);
    assert!(c.backdrop.repeat);
}

#[test]
fn unknown_background_style_leaves_the_current_one() {
    let mut s = Settings::default();
    s.background_style = "diagonal".to_string();
    let mut c = AppConfig::default();
    c.backdrop.style = BackgroundStyle::Right;
    apply_settings(&mut c, &s);
    assert_eq!(c.backdrop.style, BackgroundStyle::Right);
}

#[test]
fn applying_the_same_settings_twice_is_idempotent() {
    let s = parse_settings(r#"{ "fps": 75, "tear_speed": 450.0 }"#);
    let mut once = AppConfig::default();
    apply_settings(&mut once, &s);
    let mut twice = AppConfig::default();
    apply_settings(&mut twice, &s);
    apply_settings(&mut twice, &s);
    assert_eq!(once, twice);
}
