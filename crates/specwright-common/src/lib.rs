pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, SpecwrightError, UnknownDocType};
pub use id::SessionId;
pub use types::DocType;

pub type Result<T> = std::result::Result<T, SpecwrightError>;
