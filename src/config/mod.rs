// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file.
//!
//! Board state (markers, favorite) is never written here; only preferences.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[board]` - Grid layout and characters directory
//! - `[hold]` - Hold-to-clear timing
//! - `[preview]` - Preview modal transition
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `GUESS_BOARD_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use guess_board::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//!
//! // Accessors clamp out-of-range values
//! let columns = config.columns();
//! assert!(columns >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::board::{HoldThreshold, SampleInterval};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
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

/// Board layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Cards per grid row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Directory scanned for character portraits when none is given on the
    /// command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters_dir: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            characters_dir: None,
        }
    }
}

/// Hold-to-clear settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldConfig {
    /// Hold duration in milliseconds before the board clears.
    #[serde(
        default = "default_clear_hold_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub clear_hold_ms: Option<u64>,

    /// Progress sampling interval in milliseconds.
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            clear_hold_ms: default_clear_hold_ms(),
            progress_interval_ms: default_progress_interval_ms(),
        }
    }
}

/// Preview modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Fade in/out duration in milliseconds. `0` disables the fade.
    #[serde(
        default = "default_preview_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_preview_transition_ms(),
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
    pub board: BoardConfig,

    #[serde(default)]
    pub hold: HoldConfig,

    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Cards per row, clamped to the supported range.
    pub fn columns(&self) -> u16 {
        self.board
            .columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    pub fn hold_threshold(&self) -> HoldThreshold {
        HoldThreshold::new(self.hold.clear_hold_ms.unwrap_or(DEFAULT_CLEAR_HOLD_MS))
    }

    pub fn sample_interval(&self) -> SampleInterval {
        SampleInterval::new(
            self.hold
                .progress_interval_ms
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
        )
    }

    /// Preview fade duration, capped at [`MAX_PREVIEW_TRANSITION_MS`].
    pub fn preview_transition(&self) -> Duration {
        let millis = self
            .preview
            .transition_ms
            .unwrap_or(DEFAULT_PREVIEW_TRANSITION_MS)
            .min(MAX_PREVIEW_TRANSITION_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_COLUMNS)
}

fn default_clear_hold_ms() -> Option<u64> {
    Some(DEFAULT_CLEAR_HOLD_MS)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn default_preview_transition_ms() -> Option<u64> {
    Some(DEFAULT_PREVIEW_TRANSITION_MS)
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "config loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("board-warning-config-load-error".to_string()),
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config dir");
        }
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            board: BoardConfig {
                columns: Some(4),
                characters_dir: Some(PathBuf::from("/srv/portraits")),
            },
            hold: HoldConfig {
                clear_hold_ms: Some(1500),
                progress_interval_ms: Some(25),
            },
            preview: PreviewConfig {
                transition_ms: Some(0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.board.columns, Some(DEFAULT_COLUMNS));
        assert_eq!(config.board.characters_dir, None);
        assert_eq!(config.hold.clear_hold_ms, Some(DEFAULT_CLEAR_HOLD_MS));
        assert_eq!(
            config.hold.progress_interval_ms,
            Some(DEFAULT_PROGRESS_INTERVAL_MS)
        );
        assert_eq!(
            config.preview.transition_ms,
            Some(DEFAULT_PREVIEW_TRANSITION_MS)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[board]\ncolumns = 3\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");

        assert_eq!(loaded.board.columns, Some(3));
        assert_eq!(loaded.hold, HoldConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            board: BoardConfig {
                columns: Some(99),
                characters_dir: None,
            },
            hold: HoldConfig {
                clear_hold_ms: Some(1),
                progress_interval_ms: Some(100_000),
            },
            preview: PreviewConfig {
                transition_ms: Some(60_000),
            },
            ..Config::default()
        };

        assert_eq!(config.columns(), MAX_COLUMNS);
        assert_eq!(config.hold_threshold().value(), MIN_CLEAR_HOLD_MS);
        assert_eq!(config.sample_interval().value(), MAX_PROGRESS_INTERVAL_MS);
        assert_eq!(
            config.preview_transition(),
            Duration::from_millis(MAX_PREVIEW_TRANSITION_MS)
        );
    }

    #[test]
    fn zero_columns_clamps_to_one() {
        let config = Config {
            board: BoardConfig {
                columns: Some(0),
                characters_dir: None,
            },
            ..Config::default()
        };
        assert_eq!(config.columns(), MIN_COLUMNS);
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join("settings.toml"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("board-warning-config-load-error")
        );
        assert_eq!(config, Config::default());
    }
}
