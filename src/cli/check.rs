//! `check` command: gate the loaded config before a build.

use crate::{config::Config, log};
use anyhow::Result;

/// Run the author check and print a short summary.
///
/// `NoAuthor` is returned unchanged so the caller reports it verbatim.
pub fn check_config(config: &Config) -> Result<()> {
    if let Err(err) = config.check() {
        if err.is_no_author() {
            log!("hint"; "add at least one [[author]] entry to {}", config.config_path.display());
        }
        return Err(err.into());
    }

    log!("check"; "{}", config.config_path.display());
    log!("check"; "site: {} ({})", config.site.title, config.site.base);
    log!(
        "check";
        "{} author(s), {} menu entries, theme config {}",
        config.author.len(),
        config.menu.len(),
        config.theme.config_path().display()
    );
    Ok(())
}
