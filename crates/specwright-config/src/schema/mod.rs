//! Configuration schema types for Specwright.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults documented in the
//! generated `config.toml`.

mod artifact;
mod models;
mod provider;
mod session;
mod system;

pub use artifact::*;
pub use models::*;
pub use provider::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Specwright.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpecwrightConfig {
    pub provider: ProviderConfig,
    pub models: ModelsConfig,
    pub session: SessionConfig,
    pub artifact: ArtifactConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use specwright_common::DocType;

    #[test]
    fn default_config_has_openai_provider() {
        let config = SpecwrightConfig::default();
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.provider.connect_timeout, 10);
        assert_eq!(config.provider.request_timeout, 300);
    }

    #[test]
    fn default_config_has_model_catalog() {
        let config = SpecwrightConfig::default();
        assert_eq!(config.models.default, "chatgpt-4o-latest");
        assert_eq!(
            config.models.available,
            vec!["chatgpt-4o-latest", "gpt-4", "o1", "o3-mini"]
        );
    }

    #[test]
    fn default_config_has_session_settings() {
        let config = SpecwrightConfig::default();
        assert!(config.session.system_prompt.is_none());
        assert_eq!(
            config.session.reference_document.as_deref(),
            Some(std::path::Path::new("docs/design.md"))
        );
        assert_eq!(config.session.doc_type, DocType::Unified);
    }

    #[test]
    fn default_config_has_artifact_settings() {
        let config = SpecwrightConfig::default();
        assert!(config.artifact.output_dir.is_none());
        assert_eq!(config.artifact.file_name, "document.md");
    }

    #[test]
    fn default_config_logs_at_info() {
        let config = SpecwrightConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "specwright=info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SpecwrightConfig = toml::from_str(
            r#"
[models]
default = "gpt-4"

[session]
doc_type = "design"
"#,
        )
        .unwrap();
        assert_eq!(config.models.default, "gpt-4");
        assert_eq!(config.models.available.len(), 4);
        assert_eq!(config.session.doc_type, DocType::Design);
        assert_eq!(config.artifact.file_name, "document.md");
    }

    #[test]
    fn unknown_doc_type_is_a_parse_error() {
        let result = toml::from_str::<SpecwrightConfig>(
            r#"
[session]
doc_type = "summary"
"#,
        );
        assert!(result.is_err());
    }
}
