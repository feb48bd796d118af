//! core::settings
//!
//! Settings for the tool itself, as opposed to the git configuration it
//! manages.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITCONF_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitconf/config.toml`
//! 3. `~/.gitconf/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use gitconf::core::settings::load;
//!
//! let loaded = load().unwrap();
//! let runner = loaded.settings.runner();
//! ```

pub mod schema;

pub use schema::Settings;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::process::SystemRunner;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "GITCONF_CONFIG";

/// Errors from settings loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid settings value: {0}")]
    InvalidValue(String),
}

/// Result of loading settings.
#[derive(Debug, Default)]
pub struct LoadedSettings {
    /// The loaded settings (defaults if no file was found).
    pub settings: Settings,
    /// Path of the file the settings came from.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Build the process runner these settings describe.
    pub fn runner(&self) -> SystemRunner {
        SystemRunner::new(self.git_binary()).with_timeout(self.timeout())
    }
}

/// Load settings from the standard locations.
///
/// # Errors
///
/// Returns an error if a settings file exists but cannot be read, parsed,
/// or validated.
pub fn load() -> Result<LoadedSettings, SettingsError> {
    load_with(|name| std::env::var(name).ok(), dirs::home_dir())
}

/// Load settings with an explicit environment lookup and home directory.
pub fn load_with(
    var: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Result<LoadedSettings, SettingsError> {
    let Some(path) = locate(&var, home) else {
        debug!("no settings file found, using defaults");
        return Ok(LoadedSettings::default());
    };

    let settings = read_settings(&path)?;
    settings.validate()?;
    debug!(path = %path.display(), "loaded settings");

    Ok(LoadedSettings {
        settings,
        path: Some(path),
    })
}

fn locate(var: &impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    // 1. Check $GITCONF_CONFIG
    if let Some(path) = var(SETTINGS_ENV).map(PathBuf::from) {
        if path.exists() {
            return Some(path);
        }
    }

    // 2. Check $XDG_CONFIG_HOME/gitconf/config.toml
    if let Some(xdg_home) = var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_home).join("gitconf/config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    // 3. Check ~/.gitconf/config.toml
    home.map(|h| h.join(".gitconf/config.toml"))
        .filter(|path| path.exists())
}

/// Read and parse a settings file.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| SettingsError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
