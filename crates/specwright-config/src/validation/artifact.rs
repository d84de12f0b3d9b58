//! Validation for the `[artifact]` section.

use crate::schema::SpecwrightConfig;

/// The artifact must be a plain markdown file name.
pub(crate) fn validate_artifact(errors: &mut Vec<String>, config: &SpecwrightConfig) {
    let name = &config.artifact.file_name;
    if name.trim().is_empty() {
        errors.push("artifact.file_name must not be empty".into());
        return;
    }
    if !name.ends_with(".md") {
        errors.push(format!("artifact.file_name = {name:?} must end with .md"));
    }
    if name.contains('/') || name.contains('\\') {
        errors.push(format!(
            "artifact.file_name = {name:?} must not contain path separators"
        ));
    }
}
