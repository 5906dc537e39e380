// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[discovery]` - Which folder holds the photos, and whether to use the
//!   build-time bundle instead
//! - `[urls]` - How public URLs are built (base URL, path segment)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LOCAL_PHOTOS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use local_photos::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.urls.base_url = Some("/gallery/".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Where photos are discovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryConfig {
    /// Folder scanned by the filesystem adapter, relative to the project root.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Use the photos embedded at build time.
    #[serde(default = "default_embedded")]
    pub embedded: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            embedded: default_embedded(),
        }
    }
}

/// How public URLs are built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UrlConfig {
    /// Deployment base URL. When absent the `BASE_URL` environment variable
    /// is used, then `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Segment between the base URL and the file name.
    #[serde(default = "default_segment")]
    pub segment: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            segment: default_segment(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// URL settings.
    #[serde(default)]
    pub urls: UrlConfig,
}

impl Config {
    /// Returns whether the build-time bundle should be used.
    #[must_use]
    pub fn use_embedded(&self) -> bool {
        self.discovery.embedded
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_directory() -> String {
    DEFAULT_PHOTO_DIRECTORY.to_string()
}

fn default_embedded() -> bool {
    DEFAULT_USE_EMBEDDED
}

fn default_segment() -> String {
    DEFAULT_URL_SEGMENT.to_string()
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
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {err}", path.display())),
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
