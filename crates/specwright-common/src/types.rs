use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownDocType;

/// Which document template a synthesis run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Requirements and design as two chapters of one document.
    #[default]
    Unified,
    Requirements,
    Design,
}

impl DocType {
    pub const ALL: [DocType; 3] = [DocType::Unified, DocType::Requirements, DocType::Design];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Unified => "unified",
            DocType::Requirements => "requirements",
            DocType::Design => "design",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = UnknownDocType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unified" => Ok(DocType::Unified),
            "requirements" => Ok(DocType::Requirements),
            "design" => Ok(DocType::Design),
            _ => Err(UnknownDocType(s.to_string())),
        }
    }
}
