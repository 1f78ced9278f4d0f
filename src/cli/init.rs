//! Site initialization.
//!
//! Writes the default configuration for a new site.

use crate::{
    config::{Author, Config},
    log,
};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Starter config, optionally with a demo author appended after `admin`.
pub fn starter_config(demo_author: Option<&str>) -> Config {
    let mut config = Config::new_default();
    if let Some(name) = demo_author {
        config.author.push(Author::demo(name));
    }
    config
}

/// Write `config` to `root/config_name`.
///
/// Never overwrites an existing file. Returns the written path.
pub fn write_config(config: &Config, root: &Path, config_name: &Path) -> Result<PathBuf> {
    let path = root.join(config_name);
    if path.exists() {
        bail!("config file '{}' already exists", path.display());
    }

    let content = generate_config_template(config)?;
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Config as TOML text with a header comment.
pub fn generate_config_template(config: &Config) -> Result<String> {
    let mut out = format!(
        "# PuGo configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&config.to_toml()?);
    Ok(out)
}

/// Entry point of the `init` command.
pub fn new_site(
    root: &Path,
    config_name: &Path,
    demo_author: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let config = starter_config(demo_author);

    if dry_run {
        print!("{}", generate_config_template(&config)?);
        return Ok(());
    }

    let path = write_config(&config, root, config_name)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
