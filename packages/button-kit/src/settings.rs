//! Settings loaded from a TOML file.
//!
//! Resolution order:
//! 1. An explicit path passed by the caller
//! 2. `BUTTON_KIT_CONFIG` environment variable
//! 3. `config.toml` in the platform config directory
//! 4. Built-in defaults
//!
//! A missing file resolves to defaults. A file that exists but cannot be
//! read or parsed is an error.

use crate::button::ButtonStyles;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings path.
pub const CONFIG_ENV: &str = "BUTTON_KIT_CONFIG";

/// Output format for rendered controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            pretty: true,
        }
    }
}

/// All settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub styles: ButtonStyles,
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Resolve and load settings. `explicit` takes precedence over the
    /// environment and the platform default.
    ///
    /// Returns the settings and the path they were resolved from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = explicit.map(Path::to_path_buf).or_else(Self::default_path);
        let settings = match &path {
            Some(path) => Self::load_from_path(path)?,
            None => Settings::default(),
        };
        Ok((settings, path))
    }

    /// The settings path from `BUTTON_KIT_CONFIG`, or the platform config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        Self::resolve_path(env::var(CONFIG_ENV).ok(), Self::platform_path)
    }

    /// Pick the env override when it is set and non-blank, otherwise fall
    /// through to `fallback`.
    fn resolve_path(
        env_value: Option<String>,
        fallback: impl FnOnce() -> Option<PathBuf>,
    ) -> Option<PathBuf> {
        match env_value {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => fallback(),
        }
    }

    /// `config.toml` in the platform config directory.
    pub fn platform_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "button-kit")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.styles.root.split_whitespace().next().is_none() {
            return Err(Error::InvalidSettings(
                "styles.root must contain at least one class".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
