//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::format::ChouonStyle;
use crate::registry::FormatName;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub chouon: ChouonSettings,
    pub nasal: NasalSettings,
    pub mixed: MixedSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

/// Long-vowel spelling for each romanization.
#[derive(Debug, Clone, Deserialize)]
pub struct ChouonSettings {
    pub nihon: ChouonStyle,
    pub kunrei: ChouonStyle,
    pub hepburn: ChouonStyle,
    pub hepburn_strict: ChouonStyle,
    pub wapuro: ChouonStyle,
}

impl ChouonSettings {
    /// Style for a romanization, `None` for kana and mixed formats.
    pub fn for_format(&self, name: FormatName) -> Option<ChouonStyle> {
        match name {
            FormatName::Nihon => Some(self.nihon),
            FormatName::Kunrei => Some(self.kunrei),
            FormatName::Hepburn => Some(self.hepburn),
            FormatName::HepburnStrict => Some(self.hepburn_strict),
            FormatName::Wapuro => Some(self.wapuro),
            FormatName::Hiragana | FormatName::Katakana | FormatName::Mixed => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NasalSettings {
    /// Write the syllabic nasal as `m` before `b`, `m` and `p` in Hepburn.
    #[serde(default)]
    pub hepburn_labial_m: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MixedSettings {
    /// Romanization read by the mixed input format.
    pub romaji: FormatName,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.chouon.for_format(s.mixed.romaji).is_none() {
        return Err(SettingsError::InvalidValue {
            field: "mixed.romaji".to_string(),
            reason: format!("{} is not a romanization", s.mixed.romaji),
        });
    }
    Ok(())
}
