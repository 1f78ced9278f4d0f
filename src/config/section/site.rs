//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! sub_title = "notes and essays"
//! base = "https://myblog.com"
//! description = "A personal blog"
//! keywords = ["blog", "notes"]
//! ```

use serde::{Deserialize, Serialize};

/// Global site metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site subtitle.
    pub sub_title: String,

    /// Base URL, used as prefix for every site-relative path.
    pub base: String,

    /// Site description.
    pub description: String,

    /// Keywords for `<meta name="keywords">`.
    pub keywords: Vec<String>,
}

impl SiteConfig {
    /// Join `path` onto the base URL with exactly one `/` in between.
    ///
    /// At most one trailing slash of `base` and one leading slash of `path`
    /// are dropped. No URL validation is done.
    pub fn full_url(&self, path: &str) -> String {
        let base = self.base.strip_suffix('/').unwrap_or(&self.base);
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{base}/{path}")
    }
}
