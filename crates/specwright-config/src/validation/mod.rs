//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod artifact;
mod helpers;
mod models;
mod provider;


use crate::schema::SpecwrightConfig;
use specwright_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SpecwrightConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    provider::validate_provider(&mut errors, config);
    models::validate_models(&mut errors, config);
    artifact::validate_artifact(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
