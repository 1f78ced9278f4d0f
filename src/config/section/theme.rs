//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! directory = "./themes/default"
//! config_file = "theme_config.toml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Theme directory (relative to site root).
    pub directory: String,

    /// Theme config filename inside `directory`.
    pub config_file: String,
}

impl Theme {
    pub fn new_default() -> Self {
        Self {
            directory: "./themes/default".into(),
            config_file: "theme_config.toml".into(),
        }
    }

    /// Path of the theme config file. Existence is not checked.
    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.config_file)
    }
}
