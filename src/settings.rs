use crate::config;
use crate::drum::zone::TouchControlScheme;
use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub touch_scheme: TouchControlScheme,
    pub touch_overlay_enabled: bool,
    pub display_width: u32,
    pub display_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            touch_scheme: TouchControlScheme::default(),
            touch_overlay_enabled: true,
            display_width: config::WINDOW_WIDTH,
            display_height: config::WINDOW_HEIGHT,
        }
    }
}

// Global static for the loaded settings.
static SETTINGS: Lazy<Mutex<Settings>> = Lazy::new(|| Mutex::new(Settings::default()));

fn write_ini(settings: &Settings, path: &str) -> Result<(), std::io::Error> {
    let mut conf = Ini::new();
    conf.set("input", "TouchControlScheme", Some(settings.touch_scheme.as_str().to_string()));
    conf.set(
        "input",
        "TouchOverlayEnabled",
        Some(if settings.touch_overlay_enabled { "1" } else { "0" }.to_string()),
    );
    conf.set("display", "Width", Some(settings.display_width.to_string()));
    conf.set("display", "Height", Some(settings.display_height.to_string()));
    conf.write(path)
}

fn read_ini(path: &str) -> Option<Settings> {
    let mut conf = Ini::new();
    if conf.load(path).is_err() {
        warn!("Failed to load '{}', using default settings.", path);
        return None;
    }

    let defaults = Settings::default();
    let touch_scheme = conf
        .get("input", "TouchControlScheme")
        .and_then(|v| TouchControlScheme::from_str(&v))
        .unwrap_or(defaults.touch_scheme);
    let touch_overlay_enabled = conf
        .get("input", "TouchOverlayEnabled")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(defaults.touch_overlay_enabled, |v| v != 0);
    let display_width = conf
        .get("display", "Width")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(defaults.display_width);
    let display_height = conf
        .get("display", "Height")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(defaults.display_height);

    Some(Settings {
        touch_scheme,
        touch_overlay_enabled,
        display_width,
        display_height,
    })
}

/// Loads settings.ini into the global, creating a default file on first run.
pub fn load() {
    if !Path::new(config::SETTINGS_INI_PATH).exists() {
        info!("Settings file not found, creating defaults in '{}'.", config::SETTINGS_DIR);
        if let Err(e) = fs::create_dir_all(config::SETTINGS_DIR)
            .and_then(|_| write_ini(&Settings::default(), config::SETTINGS_INI_PATH))
        {
            warn!("Failed to create default settings file: {}", e);
            return;
        }
    }

    if let Some(loaded) = read_ini(config::SETTINGS_INI_PATH) {
        *SETTINGS.lock().unwrap() = loaded;
    }
}

/// Persists the given settings and updates the global.
pub fn save(settings: &Settings) {
    if let Err(e) = fs::create_dir_all(config::SETTINGS_DIR)
        .and_then(|_| write_ini(settings, config::SETTINGS_INI_PATH))
    {
        warn!("Failed to save settings to '{}': {}", config::SETTINGS_INI_PATH, e);
    }
    *SETTINGS.lock().unwrap() = settings.clone();
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}
