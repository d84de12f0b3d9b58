//! Validation for the `[provider]` section.

use crate::schema::SpecwrightConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate provider URL, credential variable name, and timeouts.
pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &SpecwrightConfig) {
    let provider = &config.provider;

    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }
    validate_not_blank(errors, "provider.api_key_env", &provider.api_key_env);
    validate_range(
        errors,
        "provider.connect_timeout",
        provider.connect_timeout,
        1,
        3600,
    );
    validate_range(
        errors,
        "provider.request_timeout",
        provider.request_timeout,
        1,
        3600,
    );
}
