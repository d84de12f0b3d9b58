//! Environment overrides and credential resolution.
//!
//! Lookups go through a closure so callers (and tests) can supply a
//! source other than the process environment.

use specwright_common::ConfigError;
use tracing::debug;

use crate::schema::SpecwrightConfig;

/// Overrides `models.default`.
pub const MODEL_ENV: &str = "OPENAI_MODEL";
/// Overrides `provider.base_url`.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut SpecwrightConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup. Empty values are ignored.
pub fn apply_overrides_from(
    config: &mut SpecwrightConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(model) = non_empty(MODEL_ENV) {
        debug!(model = %model, "default model overridden from {MODEL_ENV}");
        config.models.default = model;
    }
    if let Some(url) = non_empty(BASE_URL_ENV) {
        debug!(url = %url, "base url overridden from {BASE_URL_ENV}");
        config.provider.base_url = url;
    }
}

/// Read the API key from the variable named by `provider.api_key_env`.
pub fn resolve_api_key(config: &SpecwrightConfig) -> Result<String, ConfigError> {
    resolve_api_key_from(config, |key| std::env::var(key).ok())
}

pub fn resolve_api_key_from(
    config: &SpecwrightConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let var = &config.provider.api_key_env;
    lookup(var)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ConfigError::MissingCredential(var.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn overrides_model_and_base_url() {
        let vars = env(&[
            (MODEL_ENV, "o3-mini"),
            (BASE_URL_ENV, "http://localhost:1234/v1"),
        ]);
        let mut config = SpecwrightConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert_eq!(config.models.default, "o3-mini");
        assert_eq!(config.provider.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn empty_override_is_ignored() {
        let vars = env(&[(MODEL_ENV, "  ")]);
        let mut config = SpecwrightConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert_eq!(config.models.default, "chatgpt-4o-latest");
    }

    #[test]
    fn override_does_not_touch_available_list() {
        let vars = env(&[(MODEL_ENV, "gpt-4o-mini")]);
        let mut config = SpecwrightConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert!(!config.models.available.contains(&"gpt-4o-mini".to_string()));
    }

    #[test]
    fn resolves_key_from_configured_variable() {
        let vars = env(&[("MY_KEY", " sk-test ")]);
        let mut config = SpecwrightConfig::default();
        config.provider.api_key_env = "MY_KEY".into();
        let key = resolve_api_key_from(&config, |k| vars.get(k).cloned()).unwrap();
        assert_eq!(key, "sk-test");
    }

    #[test]
    fn missing_key_is_missing_credential() {
        let config = SpecwrightConfig::default();
        let err = resolve_api_key_from(&config, |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "OPENAI_API_KEY"));
    }

    #[test]
    fn empty_key_is_missing_credential() {
        let vars = env(&[("OPENAI_API_KEY", "")]);
        let config = SpecwrightConfig::default();
        let err = resolve_api_key_from(&config, |k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }
}
