//! Read-only queries against the loaded config (`author`, `url`).

use crate::{config::Config, log};
use anyhow::Result;

/// Look up an author by name or slug and print it.
///
/// A missing author is not an error.
pub fn show_author(config: &Config, name: &str) -> Result<()> {
    config.check()?;

    match config.get_author(name) {
        Some(author) => {
            println!("name:         {}", author.name);
            println!("email:        {}", author.email);
            println!("slug:         {}", author.slug);
            println!("website:      {}", author.website);
            println!("avatar:       {}", author.avatar);
            println!("use_gravatar: {}", author.use_gravatar);
        }
        None => log!("author"; "no author named '{}'", name),
    }
    Ok(())
}

/// Print `path` resolved against `site.base`.
pub fn show_url(config: &Config, path: &str) {
    println!("{}", config.site.full_url(path));
}
