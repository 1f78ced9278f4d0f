//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output_dir = "./build"              # Generated site output
//! static_assets_dir = ["./assets"]    # Copied verbatim into output
//! enable_minify_html = true           # Minify HTML output
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory.
    pub output_dir: String,

    /// Static asset directories copied into the output.
    pub static_assets_dir: Vec<String>,

    /// Minify HTML output.
    pub enable_minify_html: bool,
}

impl BuildConfig {
    pub fn new_default() -> Self {
        Self {
            output_dir: "./build".into(),
            static_assets_dir: vec!["./assets".into()],
            enable_minify_html: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let build = BuildConfig::new_default();
        assert_eq!(build.output_dir, "./build");
        assert_eq!(build.static_assets_dir, vec!["./assets".to_string()]);
        assert!(build.enable_minify_html);
    }

    #[test]
    fn test_partial_section_is_zero_filled() {
        let build: BuildConfig = toml::from_str(r#"output_dir = "dist""#).unwrap();
        assert_eq!(build.output_dir, "dist");
        assert!(build.static_assets_dir.is_empty());
        assert!(!build.enable_minify_html);
    }
}
