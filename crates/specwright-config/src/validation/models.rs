//! Validation for the `[models]` section.

use std::collections::HashSet;

use crate::schema::SpecwrightConfig;

use super::helpers::validate_not_blank;

/// Validate the default model and the available list.
///
/// The default does not have to be listed; the session catalog adds it.
pub(crate) fn validate_models(errors: &mut Vec<String>, config: &SpecwrightConfig) {
    validate_not_blank(errors, "models.default", &config.models.default);

    let mut seen = HashSet::new();
    for (i, model) in config.models.available.iter().enumerate() {
        if model.trim().is_empty() {
            errors.push(format!("models.available[{i}] must not be empty"));
        } else if !seen.insert(model.as_str()) {
            errors.push(format!("models.available contains duplicate {model:?}"));
        }
    }
}
