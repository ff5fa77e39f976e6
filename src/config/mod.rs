// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the behavior settings stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Toast display and exit timing
//! - `[scroll]` - Debounce wait, header offset, navbar shadow threshold
//! - `[counters]` - Statistic counter animation
//! - `[reveal]` - Fade-in visibility threshold
//! - `[accessibility]` - Skip link target
//!
//! Missing keys take their defaults from [`defaults`]. Raw values are kept as
//! written; the accessor methods clamp them into their valid ranges.
//!
//! # Examples
//!
//! ```no_run
//! use folio_ui::config;
//!
//! let (mut config, _warning) = config::load();
//! config.scroll.debounce_ms = 25;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Display time before the exit animation starts.
    pub default_duration_ms: u64,
    /// Exit animation length.
    pub exit_duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            exit_duration_ms: DEFAULT_NOTIFICATION_EXIT_MS,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.min(MAX_NOTIFICATION_DURATION_MS))
    }

    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms.min(MAX_NOTIFICATION_EXIT_MS))
    }
}

/// Scroll-driven navigation state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Quiet period before the active link is recomputed.
    pub debounce_ms: u64,
    /// Fixed header height added to the scroll offset.
    pub header_offset_px: f64,
    /// Offset above which the navbar is marked as scrolled.
    pub scrolled_threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn debounce_wait(&self) -> Duration {
        Duration::from_millis(
            self.debounce_ms
                .clamp(MIN_SCROLL_DEBOUNCE_MS, MAX_SCROLL_DEBOUNCE_MS),
        )
    }

    #[must_use]
    pub fn header_offset(&self) -> f64 {
        finite_or(self.header_offset_px, DEFAULT_HEADER_OFFSET_PX).max(0.0)
    }

    #[must_use]
    pub fn scrolled_threshold(&self) -> f64 {
        finite_or(self.scrolled_threshold_px, DEFAULT_SCROLLED_THRESHOLD_PX).max(0.0)
    }
}

/// Statistic counter animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub frame_interval_ms: u64,
    /// Visible fraction (0.0 to 1.0) that starts the animation.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            frame_interval_ms: DEFAULT_COUNTER_FRAME_MS,
            threshold: DEFAULT_COUNTER_THRESHOLD,
        }
    }
}

impl CounterConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(MIN_COUNTER_FRAME_MS))
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        unit_fraction(self.threshold, DEFAULT_COUNTER_THRESHOLD)
    }
}

/// Fade-in reveal of content blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn threshold(&self) -> f64 {
        unit_fraction(self.threshold, DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Keyboard and screen-reader affordances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Anchor targeted by the skip link (e.g. `#about`).
    pub skip_link_target: String,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            skip_link_target: DEFAULT_SKIP_LINK_TARGET.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub counters: CounterConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn unit_fraction(value: f64, fallback: f64) -> f64 {
    finite_or(value, fallback).clamp(0.0, 1.0)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning key. A missing file is not an
/// error; an unreadable one yields defaults and [`LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 4500;
        config.scroll.debounce_ms = 25;
        config.accessibility.skip_link_target = "#main".into();

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[scroll]\ndebounce_ms = 40\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.scroll.debounce_ms, 40);
        assert_eq!(loaded.scroll.header_offset_px, DEFAULT_HEADER_OFFSET_PX);
        assert_eq!(loaded.notifications, NotificationConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[scroll\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.scroll.debounce_ms = 0;
        config.scroll.header_offset_px = f64::NAN;
        config.counters.threshold = 3.0;
        config.counters.frame_interval_ms = 0;
        config.notifications.exit_duration_ms = 10_000;

        assert_eq!(config.scroll.debounce_wait(), Duration::from_millis(1));
        assert_eq!(config.scroll.header_offset(), DEFAULT_HEADER_OFFSET_PX);
        assert_eq!(config.counters.threshold(), 1.0);
        assert_eq!(config.counters.frame_interval(), Duration::from_millis(1));
        assert_eq!(
            config.notifications.exit_duration(),
            Duration::from_millis(MAX_NOTIFICATION_EXIT_MS)
        );
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.notifications.default_duration(), Duration::from_secs(3));
        assert_eq!(config.notifications.exit_duration(), Duration::from_millis(300));
        assert_eq!(config.scroll.debounce_wait(), Duration::from_millis(10));
        assert_eq!(config.scroll.header_offset(), 100.0);
        assert_eq!(config.scroll.scrolled_threshold(), 50.0);
    }
}
