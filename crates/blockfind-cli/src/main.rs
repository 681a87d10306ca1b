//! blockfind CLI - block-usage search over a document store
//!
//! This is the main entry point for the blockfind command-line interface.
//! Command implementations live in the `commands` module; output formatting
//! in `output`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli)
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            target,
            scope,
            page,
            filter,
            format,
            corpus,
        } => commands::search(
            &target,
            &scope,
            page,
            filter,
            format,
            &corpus,
            cli.config.as_deref(),
        ),

        Commands::Types { corpus, format } => commands::list_types(&corpus, format),

        Commands::Blocks { corpus, format } => commands::list_blocks(&corpus, format),
    }
}
