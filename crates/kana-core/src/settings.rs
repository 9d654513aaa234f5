//! Global settings loaded from TOML, as a lazily initialized singleton.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::{ConvertFlags, ConvertOptions};

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
    #[error("unknown flag in convert.flags: {0}")]
    UnknownFlag(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    flags: Vec<String>,
    /// `flags` resolved and normalized.
    #[serde(skip)]
    options: ConvertOptions,
}

impl Settings {
    /// Options used when a caller names no flags of its own.
    pub fn default_options(&self) -> ConvertOptions {
        self.convert.options
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.convert.options = resolve_flags(&s.convert.flags)?;
    Ok(s)
}

fn resolve_flags(names: &[String]) -> Result<ConvertOptions, SettingsError> {
    let flags = names.iter().try_fold(ConvertFlags::empty(), |acc, name| {
        ConvertFlags::from_name(name.trim())
            .map(|flag| acc | flag)
            .ok_or_else(|| SettingsError::UnknownFlag(name.clone()))
    })?;
    Ok(ConvertOptions::new(flags))
}
