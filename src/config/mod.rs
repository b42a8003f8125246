// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo application's configuration, including
//! loading and saving preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Carousel orientation, item size, start index, pagination
//! - `[demo]` - Demo content
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.carousel.with_pagination = true;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::carousel::Orientation;
use crate::error::{Error, Result};
use crate::ui::carousel;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Scroll axis: "horizontal" or "vertical".
    #[serde(
        default,
        serialize_with = "serialize_orientation",
        deserialize_with = "deserialize_orientation"
    )]
    pub orientation: Orientation,

    /// Item width for horizontal carousels. Defaults to the screen width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f32>,

    /// Item height for vertical carousels. Defaults to the screen height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f32>,

    /// Index scrolled to when the carousel is mounted.
    #[serde(default = "default_index")]
    pub default_index: i32,

    /// Whether to show pagination dots.
    #[serde(default)]
    pub with_pagination: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            item_width: None,
            item_height: None,
            default_index: DEFAULT_INDEX,
            with_pagination: false,
        }
    }
}

impl From<&CarouselConfig> for carousel::Config {
    fn from(section: &CarouselConfig) -> Self {
        carousel::Config {
            orientation: section.orientation,
            item_width: section.item_width,
            item_height: section.item_height,
            default_index: section.default_index,
            with_pagination: section.with_pagination,
        }
    }
}

/// Demo application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Number of cards to show.
    #[serde(default = "default_item_count")]
    pub item_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_DEMO_ITEM_COUNT,
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
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_index() -> i32 {
    DEFAULT_INDEX
}

fn default_item_count() -> usize {
    DEFAULT_DEMO_ITEM_COUNT
}

fn serialize_orientation<S>(
    orientation: &Orientation,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&orientation.to_string())
}

fn deserialize_orientation<'de, D>(deserializer: D) -> std::result::Result<Orientation, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning message explaining what went wrong.
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
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no configuration directory available".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
