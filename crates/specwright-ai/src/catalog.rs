//! The fixed set of models a session may use.

/// Supported model identifiers plus the one a session starts with.
///
/// Built once from configuration and never modified afterwards. The
/// default is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    models: Vec<String>,
    default: String,
}

impl ModelCatalog {
    /// Build a catalog, dropping duplicates and appending `default` when
    /// it is not already listed.
    pub fn new<I, S>(available: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default = default.into();
        let mut models: Vec<String> = Vec::new();
        for model in available.into_iter().map(Into::into) {
            if !models.contains(&model) {
                models.push(model);
            }
        }
        if !models.contains(&default) {
            models.push(default.clone());
        }
        Self { models, default }
    }

    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    pub fn default_model(&self) -> &str {
        &self.default
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }
}
