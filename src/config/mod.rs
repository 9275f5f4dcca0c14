// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Thumbnail layout, related projects, keyboard navigation
//! - `[display]` - Where gallery image references are resolved on disk
//!
//! # Examples
//!
//! ```no_run
//! use portfolio_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("{} thumbnails per row", config.gallery.thumbnail_columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Gallery layout and interaction settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnails per row under the main image.
    #[serde(default)]
    pub thumbnail_columns: Option<u32>,

    /// Maximum number of related projects listed.
    #[serde(default)]
    pub related_limit: Option<u32>,

    /// Whether Left/Right arrow keys navigate the gallery.
    #[serde(default)]
    pub keyboard_navigation: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_columns: Some(DEFAULT_THUMBNAIL_COLUMNS),
            related_limit: Some(DEFAULT_RELATED_LIMIT),
            keyboard_navigation: Some(true),
        }
    }
}

impl GalleryConfig {
    /// Thumbnails per row, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_columns(&self) -> u32 {
        self.thumbnail_columns
            .unwrap_or(DEFAULT_THUMBNAIL_COLUMNS)
            .clamp(MIN_THUMBNAIL_COLUMNS, MAX_THUMBNAIL_COLUMNS)
    }

    /// Related project limit, capped at the supported maximum.
    #[must_use]
    pub fn related_limit(&self) -> usize {
        self.related_limit
            .unwrap_or(DEFAULT_RELATED_LIMIT)
            .min(MAX_RELATED_LIMIT) as usize
    }

    #[must_use]
    pub fn keyboard_navigation(&self) -> bool {
        self.keyboard_navigation.unwrap_or(true)
    }
}

/// Display settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Directory that gallery image references are resolved against.
    /// Without it, images are shown as labelled placeholders.
    #[serde(default)]
    pub image_root: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Load
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields defaults. An unreadable or malformed file also
/// yields defaults, together with the i18n key of a warning to display.
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
                    eprintln!("[WARN] Ignoring {}: {}", path.display(), err);
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
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and a config error if it
/// is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
