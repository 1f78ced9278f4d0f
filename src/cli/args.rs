//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// PuGo site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: config.toml)
    #[arg(short = 'C', long, global = true, default_value = "config.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default config file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,

        /// Add a demo author with this display name
        #[arg(short, long, value_name = "NAME")]
        author: Option<String>,
    },

    /// Load the config and check it is usable for building
    #[command(visible_alias = "c")]
    Check,

    /// Look up an author by name or slug
    #[command(visible_alias = "a")]
    Author {
        /// Author name or slug
        name: String,
    },

    /// Resolve a site-relative path against the base URL
    #[command(visible_alias = "u")]
    Url {
        /// Path such as `/about/` or `posts/hello`
        path: String,
    },
}
