//! Configuration for the DevCloud i18n tool.
//!
//! The configuration follows the XDG Base Directory Specification and supports:
//! - User config: `~/.config/devcloud/i18n.yaml`
//! - Project config: `.devcloud-i18n.yaml` in current directory
//! - Environment variables: `DEVCLOUD_*`
//! - Command-line flags (highest precedence)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::{Language, DEFAULT_BUNDLE_DIR};

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bundle location: an `http(s)://` base URL or a directory.
    #[serde(default)]
    pub bundles: Option<String>,

    /// Language used when neither a preference nor the locale matches.
    #[serde(default)]
    pub default_language: Option<Language>,

    /// Timeout for remote bundle fetches, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (table, json, yaml).
    #[serde(default = "default_format")]
    pub format: String,

    /// Color output mode (auto, always, never).
    #[serde(default = "default_color")]
    pub color: String,
}

const fn default_fetch_timeout() -> u64 {
    10
}

fn default_format() -> String {
    "table".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: default_format(), color: default_color() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundles: None,
            default_language: None,
            fetch_timeout_secs: default_fetch_timeout(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.devcloud-i18n.yaml`)
    /// 4. User config (`~/.config/devcloud/i18n.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            let user_config = Self::load_from_file(&path)?;
            config.merge(user_config);
        }

        let project_path = PathBuf::from(".devcloud-i18n.yaml");
        if project_path.exists() {
            let project_config = Self::load_from_file(&project_path)?;
            config.merge(project_config);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.bundles.is_some() {
            self.bundles = other.bundles;
        }

        if other.default_language.is_some() {
            self.default_language = other.default_language;
        }

        if other.fetch_timeout_secs != default_fetch_timeout() {
            self.fetch_timeout_secs = other.fetch_timeout_secs;
        }

        if other.output.format != default_format() {
            self.output.format = other.output.format;
        }

        if other.output.color != default_color() {
            self.output.color = other.output.color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(bundles) = std::env::var("DEVCLOUD_BUNDLES")
            && !bundles.is_empty()
        {
            self.bundles = Some(bundles);
        }

        if let Ok(lang) = std::env::var("DEVCLOUD_DEFAULT_LANG")
            && !lang.is_empty()
        {
            let lang = Language::from_code(&lang)
                .map_err(|e| Error::config(format!("DEVCLOUD_DEFAULT_LANG: {}", e)))?;
            self.default_language = Some(lang);
        }

        Ok(())
    }

    /// Bundle location, defaulting to the site's `i18n` directory.
    pub fn bundles_or_default(&self) -> &str {
        self.bundles.as_deref().unwrap_or(DEFAULT_BUNDLE_DIR)
    }

    /// Final fallback language for detection.
    pub fn fallback_language(&self) -> Language {
        self.default_language.unwrap_or_default()
    }

    /// Timeout for remote bundle fetches.
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Get the path to the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("i18n.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/devcloud`
    /// - Linux/macOS: Falls back to `~/.config/devcloud` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\devcloud`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("devcloud"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("devcloud"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("devcloud"))
        }
    }

    /// Get the path to the state directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_STATE_HOME` is set, uses `$XDG_STATE_HOME/devcloud`
    /// - Linux/macOS: Falls back to `~/.local/state/devcloud` (XDG default)
    /// - Windows: Falls back to `%LOCALAPPDATA%\devcloud`
    #[must_use]
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME")
            && !xdg_state.is_empty()
        {
            return Some(PathBuf::from(xdg_state).join("devcloud"));
        }

        #[cfg(windows)]
        {
            dirs::data_local_dir().map(|p| p.join("devcloud"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".local").join("state").join("devcloud"))
        }
    }

    /// Path of the language preference file.
    #[must_use]
    pub fn preferences_path() -> Option<PathBuf> {
        Self::state_dir().map(|p| p.join("preferences.json"))
    }
}
