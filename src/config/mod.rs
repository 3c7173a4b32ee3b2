// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences and service endpoints to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[drive]` - Storage listing API key, endpoint and paging limits
//! - `[content]` - Content store project, dataset and API version
//! - `[gallery]` - Pagination and lightbox zoom
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("vi".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable that overrides `[drive] api_key`.
pub const ENV_DRIVE_API_KEY: &str = "ICED_GALLERY_DRIVE_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (`en`, `vi` or `ja`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Storage listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriveConfig {
    /// Public read-only API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Files listing endpoint.
    #[serde(default = "default_drive_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Pages fetched per folder before resolution is abandoned.
    #[serde(default = "default_max_pages", skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,

    /// Long-edge size substituted into thumbnail links.
    #[serde(
        default = "default_high_res_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub high_res_size: Option<u32>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_drive_endpoint(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            high_res_size: default_high_res_size(),
        }
    }
}

impl DriveConfig {
    /// API key from the environment, else from the file. Blank keys count as missing.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(ENV_DRIVE_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    #[must_use]
    pub fn max_pages(&self) -> u32 {
        self.max_pages
            .unwrap_or(DEFAULT_MAX_PAGES)
            .clamp(MIN_MAX_PAGES, MAX_MAX_PAGES)
    }

    #[must_use]
    pub fn high_res_size(&self) -> u32 {
        self.high_res_size
            .unwrap_or(DEFAULT_HIGH_RES_SIZE)
            .clamp(MIN_HIGH_RES_SIZE, MAX_HIGH_RES_SIZE)
    }
}

/// Content store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    #[serde(default)]
    pub project_id: String,

    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Query API version date (`YYYY-MM-DD`).
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Query the edge cache instead of the live API.
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
        }
    }
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Photos shown when a view is entered.
    #[serde(
        default = "default_initial_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_visible: Option<usize>,

    /// Photos added per load-more trigger.
    #[serde(default = "default_page_step", skip_serializing_if = "Option::is_none")]
    pub page_step: Option<usize>,

    /// Upper bound of the lightbox zoom.
    #[serde(
        default = "default_max_zoom_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_zoom_percent: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
            page_step: default_page_step(),
            max_zoom_percent: default_max_zoom_percent(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn initial_visible(&self) -> usize {
        self.initial_visible
            .unwrap_or(DEFAULT_INITIAL_VISIBLE)
            .clamp(MIN_PAGINATION, MAX_PAGINATION)
    }

    #[must_use]
    pub fn page_step(&self) -> usize {
        self.page_step
            .unwrap_or(DEFAULT_PAGE_STEP)
            .clamp(MIN_PAGINATION, MAX_PAGINATION)
    }

    #[must_use]
    pub fn max_zoom_percent(&self) -> f32 {
        let value = self.max_zoom_percent.unwrap_or(DEFAULT_MAX_ZOOM_PERCENT);
        if value.is_finite() {
            value.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT_CEILING)
        } else {
            DEFAULT_MAX_ZOOM_PERCENT
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub drive: DriveConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_drive_endpoint() -> String {
    DEFAULT_DRIVE_ENDPOINT.to_string()
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_max_pages() -> Option<u32> {
    Some(DEFAULT_MAX_PAGES)
}

fn default_high_res_size() -> Option<u32> {
    Some(DEFAULT_HIGH_RES_SIZE)
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_use_cdn() -> bool {
    true
}

fn default_initial_visible() -> Option<usize> {
    Some(DEFAULT_INITIAL_VISIBLE)
}

fn default_page_step() -> Option<usize> {
    Some(DEFAULT_PAGE_STEP)
}

fn default_max_zoom_percent() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM_PERCENT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
