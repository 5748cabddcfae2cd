//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dynamics 365 tap: schema discovery
#[derive(Parser, Debug)]
#[command(name = "tap-dynamics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Service metadata file (.json, .yaml, or CSDL .xml/.edmx)
    #[arg(short, long, global = true)]
    pub metadata: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the catalog and print it to stdout
    Discover {
        /// Include advanced entities (in addition to the config flag)
        #[arg(long)]
        advanced: bool,
    },

    /// List eligible entity names the service exposes
    Streams {
        /// Include advanced entities (in addition to the config flag)
        #[arg(long)]
        advanced: bool,
    },

    /// Translate every entity in the metadata and report problems
    Validate,
}
