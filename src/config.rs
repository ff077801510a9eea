use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegionalTokens {
    pub currency: Vec<String>,
    pub separators: Vec<String>,
    pub gram: String,
    pub milliliter: String,
    pub kilogram: String,
    pub liter: String,
}

impl Default for RegionalTokens {
    fn default() -> Self {
        Self {
            currency: vec!["р".into(), "Р".into()],
            separators: vec!["за".into(), "/".into()],
            gram: "г".into(),
            milliliter: "мл".into(),
            kilogram: "кг".into(),
            liter: "л".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub language: Language,
    pub show_timestamps: bool,
    /// Skip a line when it repeats the previously rendered one.
    pub only_changes: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tokens: RegionalTokens,
    pub display: DisplayConfig,
}

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// An explicit path must exist. Without one, `fallback` is used when present,
/// built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&str>, fallback: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None if fallback.as_ref().exists() => load_config(fallback),
        None => Ok(AppConfig::default()),
    }
}
