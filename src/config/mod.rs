//! Site configuration management for `config.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── author     # [[author]]
//! │   ├── build      # [build]
//! │   ├── menu       # [[menu]]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle
//! ├── util.rs        # Config discovery, path escaping
//! └── mod.rs         # Config (this file)
//! ```
//!
//! # Lifecycle
//!
//! A `Config` is decoded once per invocation (or built with
//! [`Config::new_default`]), gated with [`Config::check`], then frozen behind
//! [`init_config`] and only read afterwards.

pub mod section;
pub mod types;
mod util;

pub use section::{Author, BuildConfig, Menu, SiteConfig, Theme};
pub use types::{ConfigError, cfg, init_config};
pub use util::find_config_file;

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing config.toml
///
/// `Default` is the zero value: no menu, no author. Use
/// [`Config::new_default`] for a complete starter config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Navigation entries
    #[serde(default)]
    pub menu: Vec<Menu>,

    /// Author roster, in lookup order
    #[serde(default)]
    pub author: Vec<Author>,

    /// Theme selection
    #[serde(default)]
    pub theme: Theme,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Starter configuration used by `init` and as a fallback.
    ///
    /// Always passes [`Config::check`].
    pub fn new_default() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: SiteConfig {
                title: "PuGo".into(),
                sub_title: "a simple static site generator".into(),
                base: "http://localhost:18080".into(),
                description: "a simple static site generator with markdown support".into(),
                keywords: vec!["site".into(), "generator".into(), "markdown".into()],
            },
            menu: Menu::defaults(),
            author: vec![Author {
                name: "admin".into(),
                email: "admin@example.com".into(),
                website: "http://example.com".into(),
                avatar: String::new(),
                use_gravatar: true,
                slug: "admin".into(),
            }],
            theme: Theme::new_default(),
            build: BuildConfig::new_default(),
        }
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as a warning and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        crate::debug!(
            "config";
            "loaded {} ({} authors, {} menu entries)",
            path.display(),
            config.author.len(),
            config.menu.len()
        );
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Serialize to TOML document text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // queries
    // ========================================================================

    /// Find an author by name or slug.
    ///
    /// Authors are scanned in stored order and the first match wins, so a
    /// later author whose slug equals an earlier author's name is shadowed.
    pub fn get_author(&self, name: &str) -> Option<&Author> {
        self.author.iter().find(|author| author.matches(name))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check the config is usable for building content.
    ///
    /// Only the author roster is checked: it must not be empty.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.author.is_empty() {
            return Err(ConfigError::NoAuthor);
        }
        Ok(())
    }
}

/// Parse configuration from TOML string
impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================
