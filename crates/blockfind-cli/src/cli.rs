//! CLI structure and argument parsing.
//!
//! The CLI follows a command-subcommand pattern built with `clap` derive
//! macros:
//!
//! ```bash
//! # Find every document using a block
//! blockfind search core/paragraph --corpus site.json
//!
//! # Restrict to one document type, show nested matches only
//! blockfind search core/quote --corpus site.json --scope post --filter nested
//!
//! # Machine-readable output
//! blockfind search core/quote --corpus site.json --format json
//!
//! # Corpus introspection (the search form's two selectors, CLI-shaped)
//! blockfind types --corpus site.json
//! blockfind blocks --corpus site.json
//! ```

use blockfind_core::FilterMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for the `blockfind` command.
#[derive(Debug, Parser)]
#[command(name = "blockfind", version, about = "Find block usage across a document corpus")]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file (page size, cache TTL)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for documents using a specific block
    Search {
        /// Full block name, e.g. `core/paragraph` or `acme/hero`
        target: String,

        /// Document type to search in, or `all` for every
        /// block-editor-capable type
        #[arg(short, long, default_value = "all")]
        scope: String,

        /// Page of results to show (1-based; clamped into range)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Result subset to show
        #[arg(short, long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Corpus JSON file (documents and registered types)
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,
    },

    /// List public, block-editor-capable document types
    Types {
        /// Corpus JSON file
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the distinct block names used across the corpus
    Blocks {
        /// Corpus JSON file
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// CLI-facing filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every matching document
    All,
    /// Only documents with nested matches
    Nested,
}

impl From<FilterArg> for FilterMode {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Nested => Self::Nested,
        }
    }
}

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// Machine-readable JSON
    Json,
}
