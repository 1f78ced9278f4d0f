//! PuGo - configuration tooling for a simple markdown static site generator.

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Config, cfg, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry, author } => {
            let cwd = std::env::current_dir()?;
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            cli::init::new_site(&root, &cli.config, author.as_deref(), *dry)
        }
        command => {
            init_config(cli::load_config(&cli)?);
            run_query(command, &cfg())
        }
    }
}

/// Run a command that reads the loaded config.
fn run_query(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Check => cli::check::check_config(config),
        Commands::Author { name } => cli::query::show_author(config, name),
        Commands::Url { path } => {
            cli::query::show_url(config, path);
            Ok(())
        }
        Commands::Init { .. } => Ok(()),
    }
}
