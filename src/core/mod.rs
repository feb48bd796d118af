//! core
//!
//! Core domain types and the tool's own settings.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ConfigKey, ConfigValue, ConfigScope, EnvOverride
//! - [`repository`] - Repository handle used by local-scope operations
//! - [`settings`] - Settings schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps "not set" and "set to empty" apart
//! - Keys are validated once, at construction

pub mod repository;
pub mod settings;
pub mod types;
