//! Command-line argument types.

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;
use super::commands::show::ShowArgs;

/// Command-line interface
#[derive(Parser)]
#[command(name = "oil-exploration")]
#[command(about = "Validate and inspect the exploration platform configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "OIL_EXPLORATION_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write log records to stdout
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable the log file
    #[arg(long, global = true)]
    pub no_log_file: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file
    Check(CheckArgs),

    /// Print a validated configuration with API keys redacted
    Show(ShowArgs),
}
