//! core::settings::schema
//!
//! Settings file schema.
//!
//! # Validation
//!
//! Values are validated after parsing so a typo fails loudly instead of
//! silently falling back to a default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::SettingsError;

/// Tool settings (user scope).
///
/// # Example
///
/// ```toml
/// git_binary = "/usr/local/bin/git"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Program used to run git (default: `git` on `PATH`)
    pub git_binary: Option<String>,

    /// Kill git invocations that run longer than this
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Validate the settings values.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(binary) = &self.git_binary {
            if binary.trim().is_empty() {
                return Err(SettingsError::InvalidValue(
                    "git_binary cannot be empty".to_string(),
                ));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(SettingsError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Program used to run git.
    ///
    /// Defaults to "git" if not configured.
    pub fn git_binary(&self) -> &str {
        self.git_binary.as_deref().unwrap_or("git")
    }

    /// Per-invocation timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
