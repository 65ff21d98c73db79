//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Milepost - migration ledger for the project service schema
#[derive(Parser, Debug)]
#[command(name = "mp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Named target store from milepost.yml
    #[arg(short, long, global = true)]
    pub target: Option<String>,

    /// Database path override (takes precedence over --target)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered change-units
    Ls(LsArgs),

    /// Check the history for duplicates, gaps, and empty units
    Validate(ValidateArgs),

    /// Show applied, pending, and orphaned versions for a target store
    Status(StatusArgs),

    /// Apply all pending change-units in version order
    Up(UpArgs),

    /// Scaffold the next change-unit file
    New(NewArgs),
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the up command
#[derive(Args, Debug)]
pub struct UpArgs {
    /// Continue applying later units after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Show what would be applied without touching the store
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// snake_case description for the new change-unit
    pub description: String,
}

/// Output formats for listing commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
