//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod query;

pub use args::{Cli, Commands};

use crate::{
    config::{Config, find_config_file},
    log,
};
use anyhow::{Context, Result, bail};

/// Locate and load the config file for non-init commands.
///
/// Searches upward from the current directory for `cli.config`.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    let Some(path) = find_config_file(&cwd, &cli.config) else {
        log!(
            "error";
            "Config file '{}' not found. Run 'pugo init' to create one.",
            cli.config.display()
        );
        bail!("config file not found");
    };

    Config::load(&path)
}
