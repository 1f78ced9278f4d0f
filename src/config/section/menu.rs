//! `[[menu]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! title = "Archives"
//! slug = "/archives/"
//!
//! [[menu]]
//! title = "GitHub"
//! slug = "https://github.com/alice"
//! icon = "github"
//! hover = "source code"
//! blank = true
//! ```

use serde::{Deserialize, Serialize};

/// A single navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    /// Link text.
    pub title: String,

    /// Link target, site-relative or absolute.
    pub slug: String,

    /// Icon name for themes that render one.
    pub icon: String,

    /// Hover text.
    pub hover: String,

    /// Open the link in a new browsing context.
    pub blank: bool,
}

impl Menu {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// The built-in navigation: index, archives and about.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Index", "/"),
            Self::new("Archives", "/archives/"),
            Self::new("About", "/about/"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let menu = Menu::defaults();
        let slugs: Vec<_> = menu.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, ["/", "/archives/", "/about/"]);
        assert!(menu.iter().all(|m| !m.blank));
    }
}
