//! Configuration management for folio
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, FILTER_ALL, TOAST_DEFAULT_MS};
use crate::icons::IconTheme;
use crate::utils::time::HEADER_DATE_FORMAT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub effects: EffectsConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (required for cursor effects)
    pub mouse_enabled: bool,
    /// Filter active on startup
    pub default_filter: String,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// Time between animation frames in milliseconds
    pub frame_interval_ms: u64,
    /// The scroll prompt hides once the project list is scrolled this many rows
    pub scroll_prompt_rows: usize,
}

/// Effect toggles and timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Leave a trail of pops behind the mouse cursor
    pub trail_enabled: bool,
    /// Ripple the header name on hover and click
    pub ripples_enabled: bool,
    /// Pulse the scroll prompt while idle
    pub pulse_enabled: bool,
    /// How long toasts stay visible, in milliseconds
    pub toast_ms: u64,
}

/// Catalog source
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a .toml or .json catalog; the built-in showcase is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            default_filter: FILTER_ALL.to_string(),
            icon_theme: IconTheme::Unicode,
            frame_interval_ms: 33,
            scroll_prompt_rows: 3,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            trail_enabled: true,
            ripples_enabled: true,
            pulse_enabled: true,
            toast_ms: TOAST_DEFAULT_MS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Explicit override
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            let explicit = PathBuf::from(explicit);
            if !explicit.exists() {
                anyhow::bail!("{} points to a missing file: {}", CONFIG_ENV_VAR, explicit.display());
            }
            return Ok(Some(explicit));
        }

        // 2. Current directory
        let current_dir_config = PathBuf::from("folio.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 3. XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("folio").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(10..=1000).contains(&self.ui.frame_interval_ms) {
            anyhow::bail!(
                "frame_interval_ms must be between 10 and 1000, got {}",
                self.ui.frame_interval_ms
            );
        }

        if !(1..=100).contains(&self.ui.scroll_prompt_rows) {
            anyhow::bail!(
                "scroll_prompt_rows must be between 1 and 100, got {}",
                self.ui.scroll_prompt_rows
            );
        }

        if self.ui.default_filter.trim().is_empty() {
            anyhow::bail!("default_filter cannot be empty");
        }

        if !(100..=60_000).contains(&self.effects.toast_ms) {
            anyhow::bail!("toast_ms must be between 100 and 60000, got {}", self.effects.toast_ms);
        }

        if let Some(path) = &self.catalog.path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("catalog.path cannot be empty when set");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# folio Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(HEADER_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("folio"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
