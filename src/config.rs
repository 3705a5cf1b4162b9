/// Property sink — the external configuration channel.
///
/// Mirrors a wallpaper-engine property listener: each recognized property is
/// applied idempotently whenever present.  Values are applied as-is; range
/// sanity is the caller's responsibility.  A JSON settings file provides the
/// same properties at startup, degrading silently to defaults when missing
/// or malformed.

use serde::Deserialize;

use crate::entities::Tunables;

pub const DEFAULT_SKIN: &str = "isaac";

/// How the backdrop fill is positioned on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundStyle {
    Fit,
    Fill,
    Center,
    Left,
    Right,
}

impl BackgroundStyle {
    /// Parse the wallpaper property value; unknown strings are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fit" => Some(Self::Fit),
            "fill" => Some(Self::Fill),
            "center" => Some(Self::Center),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Backdrop configuration for the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    /// Background image path; `None` means the default (plain) backdrop.
    pub image: Option<String>,
    pub style: BackgroundStyle,
    pub repeat: bool,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            image: None,
            style: BackgroundStyle::Fit,
            repeat: false,
        }
    }
}

/// Render-loop tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Frame-rate cap, effective only while `limit_fps` is on.
    pub max_fps: u32,
    pub limit_fps: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_fps: 30,
            limit_fps: false,
        }
    }
}

/// Everything the property sink can mutate.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub tunables: Tunables,
    pub render: RenderSettings,
    /// Sprite-sheet skin name; unknown names draw as a blank sprite.
    pub skin: String,
    pub backdrop: Backdrop,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tunables: Tunables::default(),
            render: RenderSettings::default(),
            skin: DEFAULT_SKIN.to_string(),
            backdrop: Backdrop::default(),
        }
    }
}

/// One externally supplied property.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Fps(u32),
    FpsLimiter(bool),
    CharacterSpeed(f32),
    TearSpeed(f32),
    Character(String),
    /// Image path; an empty path selects the default backdrop.
    Background(String),
    BackgroundStyle(BackgroundStyle),
    BackgroundRepeat(bool),
}

/// Apply one property.  Applying the same value twice leaves the same state
/// as applying it once.
pub fn apply_property(config: &mut AppConfig, property: Property) {
    tracing::debug!(?property, "applying property");
    match property {
        Property::Fps(fps) => config.render.max_fps = fps,
        Property::FpsLimiter(on) => config.render.limit_fps = on,
        Property::CharacterSpeed(speed) => config.tunables.character_speed = speed,
        Property::TearSpeed(speed) => config.tunables.tear_speed = speed,
        Property::Character(skin) => config.skin = skin,
        Property::Background(path) => {
            config.backdrop.image = if path.is_empty() { None } else { Some(path) };
        }
        Property::BackgroundStyle(style) => config.backdrop.style = style,
        Property::BackgroundRepeat(repeat) => config.backdrop.repeat = repeat,
    }
}

// ── Settings file ─────────────────────────────────────────────────────────────

/// Startup settings, read from JSON.  Missing keys take defaults; unknown
/// keys are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps: u32,
    pub fps_limiter: bool,
    pub character_speed: f32,
    pub tear_speed: f32,
    pub character: String,
    /// Empty = default backdrop.
    pub background: String,
    pub background_style: String,
    pub background_repeat: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: 30,
            fps_limiter: false,
            character_speed: 320.0,
            tear_speed: 600.0,
            character: DEFAULT_SKIN.to_string(),
            background: String::new(),
            background_style: "fit".to_string(),
            background_repeat: false,
        }
    }
}

/// Parse settings from JSON text; malformed text falls back to defaults.
pub fn parse_settings(text: &str) -> Settings {
    serde_json::from_str(text).unwrap_or_default()
}

/// Load the settings file named by `$DESK_PET_CONFIG`, or `desk_pet.json`
/// in the working directory.  A missing file falls back to defaults.
pub fn load_settings() -> Settings {
    let path =
        std::env::var("DESK_PET_CONFIG").unwrap_or_else(|_| "desk_pet.json".to_string());
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            tracing::info!(path, "loaded settings file");
            parse_settings(&text)
        }
        Err(_) => Settings::default(),
    }
}

/// Route a full settings record through the property sink.
pub fn apply_settings(config: &mut AppConfig, settings: &Settings) {
    apply_property(config, Property::Fps(settings.fps));
    apply_property(config, Property::FpsLimiter(settings.fps_limiter));
    apply_property(config, Property::CharacterSpeed(settings.character_speed));
    apply_property(config, Property::TearSpeed(settings.tear_speed));
    apply_property(config, Property::Character(settings.character.clone()));
    apply_property(config, Property::Background(settings.background.clone()));
    if let Some(style) = BackgroundStyle::parse(&settings.background_style) {
        apply_property(config, Property::BackgroundStyle(style));
    }
    apply_property(config, Property::BackgroundRepeat(settings.background_repeat));
}
