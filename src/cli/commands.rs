//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghost-import")]
#[command(about = "Import a Ghost blog export as markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a Ghost export file
    Import {
        /// Ghost JSON export
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Create a default site.toml
    Init {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
