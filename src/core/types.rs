//! core::types
//!
//! Strong types for configuration concepts.
//!
//! # Types
//!
//! - [`ConfigKey`] - Validated dotted config key (`section.name`)
//! - [`ConfigValue`] - A stored value, or the explicit "not set" state
//! - [`ConfigScope`] - Which config file a read or write targets
//! - [`EnvOverride`] - Per-call environment redirection for the child process
//!
//! # Validation
//!
//! Keys are validated at construction time so that a malformed key is
//! reported as a [`TypeError`] instead of reaching git, where it would be
//! indistinguishable from an unset key (both exit with status 1).
//!
//! # Examples
//!
//! ```
//! use gitconf::core::types::{ConfigKey, ConfigValue};
//!
//! let key = ConfigKey::new("core.bare").unwrap();
//! assert_eq!(key.as_str(), "core.bare");
//!
//! assert!(ConfigKey::new("").is_err());
//! assert!(ConfigKey::new("nosection").is_err());
//!
//! let empty = ConfigValue::Set(String::new());
//! assert!(empty.is_set());
//! assert!(!ConfigValue::Absent.is_set());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid config key: {0}")]
    InvalidKey(String),
}

/// A validated git configuration key.
///
/// Keys are `section.name` or `section.subsection.name`. The key is handed
/// to git verbatim; validation only rejects shapes git itself would refuse
/// or misread as a flag:
/// - Cannot be empty
/// - Must contain a `.` that is neither the first nor the last character
/// - The section (before the first `.`) is letters, digits and `-`
/// - The name (after the last `.`) starts with a letter, then letters,
///   digits and `-`
/// - Cannot start with `-`
/// - Cannot contain line terminators or NUL
///
/// The subsection part may contain spaces and other characters, so
/// `remote.my origin.url` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Create a new validated key.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidKey` if the key does not follow git's
    /// `section[.subsection].name` grammar, starts with `-`, or contains a
    /// line break.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    fn validate(key: &str) -> Result<(), TypeError> {
        if key.is_empty() {
            return Err(TypeError::InvalidKey("key cannot be empty".into()));
        }

        if key.starts_with('-') {
            return Err(TypeError::InvalidKey(format!(
                "key cannot start with '-': {key}"
            )));
        }

        if key.contains(['\n', '\r', '\0']) {
            return Err(TypeError::InvalidKey(
                "key cannot contain line breaks or NUL".into(),
            ));
        }

        let (Some(first), Some(last)) = (key.find('.'), key.rfind('.')) else {
            return Err(TypeError::InvalidKey(format!(
                "key must have the form section.name: {key}"
            )));
        };
        if first == 0 || last == key.len() - 1 {
            return Err(TypeError::InvalidKey(format!(
                "key must have the form section.name: {key}"
            )));
        }

        let section = &key[..first];
        if !section.chars().all(is_key_char) {
            return Err(TypeError::InvalidKey(format!(
                "section may only contain letters, digits and '-': {key}"
            )));
        }

        // The subsection between the first and last dot is free-form.
        let name = &key[last + 1..];
        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !chars.all(is_key_char) {
            return Err(TypeError::InvalidKey(format!(
                "name must start with a letter and contain only letters, digits and '-': {key}"
            )));
        }

        Ok(())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

impl TryFrom<String> for ConfigKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The result of resolving a key within one scope.
///
/// `Set(String::new())` means the key is configured as the empty string;
/// `Absent` means no entry exists at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue {
    /// The key has a value (the last entry, when duplicates exist).
    Set(String),
    /// The key has no entry in the queried scope.
    #[default]
    Absent,
}

impl ConfigValue {
    /// Whether the key has an entry.
    pub fn is_set(&self) -> bool {
        matches!(self, ConfigValue::Set(_))
    }

    /// Borrow the value, if any.
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ConfigValue::Set(value) => Some(value),
            ConfigValue::Absent => None,
        }
    }

    /// Convert into an `Option<String>`.
    pub fn into_option(self) -> Option<String> {
        self.into()
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => ConfigValue::Set(v),
            None => ConfigValue::Absent,
        }
    }
}

impl From<ConfigValue> for Option<String> {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Set(v) => Some(v),
            ConfigValue::Absent => None,
        }
    }
}

/// Which configuration file an operation addresses.
///
/// Local is tied to a repository's `.git/config`; Global is tied to the
/// invoking user (`$HOME/.gitconfig` or its XDG equivalent). The two are
/// never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigScope {
    Local,
    Global,
}

impl ConfigScope {
    /// The git command-line flag selecting this scope.
    pub fn flag(&self) -> &'static str {
        match self {
            ConfigScope::Local => "--local",
            ConfigScope::Global => "--global",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigScope::Local => write!(f, "local"),
            ConfigScope::Global => write!(f, "global"),
        }
    }
}

/// Environment variables applied to a single child process.
///
/// Variables in `set` are layered on top of the ambient environment and
/// variables in `unset` are removed from it. The ambient environment of the
/// calling process is never touched.
///
/// # Example
///
/// ```
/// use gitconf::core::types::EnvOverride;
///
/// let env = EnvOverride::home("/tmp/alice");
/// assert_eq!(env.get("HOME"), Some("/tmp/alice"));
/// assert!(env.is_unset("GIT_CONFIG_GLOBAL"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverride {
    set: BTreeMap<String, String>,
    unset: BTreeSet<String>,
}

impl EnvOverride {
    /// An empty override (inherit everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirect the global scope to `<home>/.gitconfig`.
    ///
    /// Besides `HOME`, this points `XDG_CONFIG_HOME` inside the new home and
    /// drops `GIT_CONFIG_GLOBAL`, either of which would otherwise let git
    /// resolve the global file outside of `home`.
    pub fn home(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        Self::new()
            .with_var("HOME", home.to_string_lossy())
            .with_var("XDG_CONFIG_HOME", home.join(".config").to_string_lossy())
            .without_var("GIT_CONFIG_GLOBAL")
    }

    /// Set a variable for the child process.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.unset.remove(&name);
        self.set.insert(name, value.into());
        self
    }

    /// Remove a variable from the child's inherited environment.
    pub fn without_var(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.set.remove(&name);
        self.unset.insert(name);
        self
    }

    /// Value this override assigns to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.set.get(name).map(String::as_str)
    }

    /// Whether this override removes `name`.
    pub fn is_unset(&self, name: &str) -> bool {
        self.unset.contains(name)
    }

    /// Variables to set, in name order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.set.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variables to remove, in name order.
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.unset.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }
}
