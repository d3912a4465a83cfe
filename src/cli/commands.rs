//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pintidy")]
#[command(about = "Consolidate Pinboard bookmark tags into parent tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ~/.config/pintidy/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the consolidation pass over all bookmarks
    Consolidate,

    /// List every tag in use on the account
    Tags,

    /// List tags that are neither mapped nor known parents
    Unmapped,
}
