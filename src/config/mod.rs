// SPDX-License-Identifier: MPL-2.0
//! This module handles the banner configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[banner]` - Style, dismiss delay, expansion and timer behavior
//! - `[accessibility]` - Reduce-transparency override
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.banner.expandable = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::banner::{Style, TimerMode};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedBanner";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BANNER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Banner presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Blur style; `None` follows the system theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    /// Seconds the banner rests on screen before the dismiss timer fires.
    #[serde(
        default = "default_dismiss_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_delay_secs: Option<f64>,

    /// Whether a fast downward pull expands the banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,

    /// Whether the dismiss timer re-fires every interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_mode: Option<TimerMode>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            style: None,
            dismiss_delay_secs: default_dismiss_delay_secs(),
            expandable: Some(false),
            timer_mode: Some(TimerMode::default()),
        }
    }
}

impl BannerConfig {
    /// Returns the configured dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_secs_f64(clamp_dismiss_delay(
            self.dismiss_delay_secs.unwrap_or(DEFAULT_DISMISS_DELAY_SECS),
        ))
    }
}

/// Accessibility settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessibilityConfig {
    /// Draw flat backgrounds instead of translucent blur surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_transparency: Option<bool>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Banner presentation settings.
    #[serde(default)]
    pub banner: BannerConfig,

    /// Accessibility settings.
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

fn default_dismiss_delay_secs() -> Option<f64> {
    Some(DEFAULT_DISMISS_DELAY_SECS)
}

/// Keeps dismiss delays inside the supported range so persisted configs
/// cannot request a timer that fires every frame.
#[must_use]
pub fn clamp_dismiss_delay(secs: f64) -> f64 {
    if secs.is_nan() {
        return DEFAULT_DISMISS_DELAY_SECS;
    }
    secs.clamp(MIN_DISMISS_DELAY_SECS, MAX_DISMISS_DELAY_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first and
/// then the environment variable.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
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
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_banner_section() {
        let config = Config {
            banner: BannerConfig {
                style: Some(Style::Dark),
                dismiss_delay_secs: Some(5.0),
                expandable: Some(true),
                timer_mode: Some(TimerMode::SingleShot),
            },
            accessibility: AccessibilityConfig {
                reduce_transparency: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[banner]\nstyle = \"light\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.banner.style, Some(Style::Light));
        assert_eq!(
            loaded.banner.dismiss_delay_secs,
            Some(DEFAULT_DISMISS_DELAY_SECS)
        );
        assert_eq!(loaded.accessibility.reduce_transparency, None);
    }

    #[test]
    fn dismiss_delay_is_clamped() {
        let mut banner = BannerConfig::default();
        banner.dismiss_delay_secs = Some(0.0);
        assert_eq!(
            banner.dismiss_delay(),
            Duration::from_secs_f64(MIN_DISMISS_DELAY_SECS)
        );

        banner.dismiss_delay_secs = Some(600.0);
        assert_eq!(
            banner.dismiss_delay(),
            Duration::from_secs_f64(MAX_DISMISS_DELAY_SECS)
        );

        assert_eq!(clamp_dismiss_delay(f64::NAN), DEFAULT_DISMISS_DELAY_SECS);
    }

    #[test]
    fn default_config_uses_three_second_delay() {
        let config = Config::default();
        assert_eq!(config.banner.dismiss_delay(), Duration::from_secs(3));
        assert_eq!(config.banner.timer_mode, Some(TimerMode::Repeating));
    }
}
