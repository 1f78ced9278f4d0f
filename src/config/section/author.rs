//! `[[author]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[author]]
//! name = "alice"
//! email = "alice@example.com"
//! website = "https://alice.dev"
//! use_gravatar = true
//! slug = "alice"
//! ```

use crate::config::util::path_escape;
use serde::{Deserialize, Serialize};

/// A content author. Looked up by either `name` or `slug`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub website: String,
    pub avatar: String,
    /// Opt in to gravatar avatars (keyed by `email`).
    pub use_gravatar: bool,
    pub slug: String,
}

impl Author {
    /// Build an author with placeholder contact data for demo content.
    ///
    /// ```ignore
    /// let author = Author::demo("Jane Doe");
    /// assert_eq!(author.email, "Jane Doe@example.com");
    /// assert_eq!(author.slug, "/author/Jane%20Doe");
    /// ```
    pub fn demo(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            use_gravatar: true,
            slug: format!("/author/{}", path_escape(name)),
            ..Self::default()
        }
    }

    /// Whether `key` identifies this author by name or slug.
    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.slug == key
    }
}
