//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    /// The author list is empty; content cannot be attributed.
    #[error("no author")]
    NoAuthor,
}

impl ConfigError {
    /// Whether this is the empty author roster condition.
    #[inline]
    pub const fn is_no_author(&self) -> bool {
        matches!(self, Self::NoAuthor)
    }
}
