//! Specwright configuration system.
//!
//! Provides TOML-based configuration with environment overrides and
//! full validation. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use specwright_config::{load_config, resolve_api_key};
//!
//! let config = load_config(None).expect("failed to load config");
//! let api_key = resolve_api_key(&config).expect("no API key");
//! # let _ = api_key;
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, resolve_api_key};
pub use schema::SpecwrightConfig;

use specwright_common::ConfigError;
use std::path::Path;

/// Load, override, and validate the config.
///
/// Reads `path` when given, otherwise the platform default (creating it
/// on first run). Environment overrides are applied before validation.
pub fn load_config(path: Option<&Path>) -> Result<SpecwrightConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
