//! Development tasks for the bot workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Config, Describe, Validate};
use tracing_subscriber::EnvFilter;

/// Development tasks for the bot workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for companion bot content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load rotation files and report skipped rows
    Validate(Validate),

    /// Print the rotation table of one class/spec
    Describe(Describe),

    /// Print the effective bot configuration
    Config(Config),
}

fn main() -> Result<()> {
    // Loader warnings go to stderr; RUST_LOG=debug shows per-row details.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate(cmd) => cmd.execute(),
        Command::Describe(cmd) => cmd.execute(),
        Command::Config(cmd) => cmd.execute(),
    }
}
