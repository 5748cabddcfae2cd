//! CLI module
//!
//! Command-line interface for running discovery.
//!
//! # Commands
//!
//! - `discover` - Build the catalog and print it
//! - `streams` - List eligible entity names (lightweight, no schemas)
//! - `validate` - Check every entity's metadata translates cleanly

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
