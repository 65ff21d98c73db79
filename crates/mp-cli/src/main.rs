//! Milepost CLI - forward-only schema migrations for the project service

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{ls, new, status, up, validate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Validate(args) => validate::execute(args, &cli.global),
        cli::Commands::Status(args) => status::execute(args, &cli.global),
        cli::Commands::Up(args) => up::execute(args, &cli.global),
        cli::Commands::New(args) => new::execute(args, &cli.global),
    }
}
