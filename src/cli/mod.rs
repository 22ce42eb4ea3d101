//! Command-line interface definitions.

pub mod check;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// evotrade - configuration tooling for the evolutionary trading platform.
#[derive(Parser, Debug)]
#[command(name = "evotrade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration and print a summary
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// TOML parameter file; bundles fall back to built-in defaults without it
    #[arg(long)]
    pub config: Option<PathBuf>,
}
