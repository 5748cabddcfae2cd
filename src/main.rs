//! tap-dynamics CLI
//!
//! Command-line interface for schema discovery

use clap::Parser;
use tap_dynamics::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Stdout carries the catalog, so logs go to stderr
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
