// ABOUTME: Configuration management for fabrica-onboard
// Handles wizard preferences persisted under ~/.fabrica

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::onboarding::draft;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Whether to save a draft on changes and resume it on startup
    #[serde(default = "default_true")]
    pub resume_drafts: bool,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether to show per-step descriptions under the progress header
    #[serde(default = "default_true")]
    pub show_step_descriptions: bool,

    /// Storefront URL prefix shown next to the username input
    #[serde(default = "default_url_prefix")]
    pub storefront_url_prefix: String,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_url_prefix() -> String {
    "fabrica.et/".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            resume_drafts: true,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_step_descriptions: true,
            storefront_url_prefix: default_url_prefix(),
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(draft::base_dir()?.join("config.toml"))
    }

    /// Load config from disk, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.resume_drafts);
        assert!(config.ui_preferences.show_step_descriptions);
        assert_eq!(config.ui_preferences.storefront_url_prefix, "fabrica.et/");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("resume_drafts = false").unwrap();
        assert!(!config.resume_drafts);
        assert!(config.ui_preferences.show_step_descriptions);
    }
}
