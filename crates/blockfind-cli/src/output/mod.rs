//! Output formatting: text for humans, JSON for scripts.

mod json;
mod text;

use crate::cli::OutputFormat;
use crate::commands::catalog::BlockEntry;
use anyhow::Result;
use blockfind_core::{DocumentType, ResultSet};

/// Prints a rendered result page.
pub fn print_result_set(set: &ResultSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            text::print_result_set(set);
            Ok(())
        },
        OutputFormat::Json => json::print(set),
    }
}

/// Prints the no-results message for a valid search with zero candidates.
pub fn print_not_found(message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            text::print_not_found(message);
            Ok(())
        },
        OutputFormat::Json => json::print_not_found(message),
    }
}

/// Prints document types.
pub fn print_types(types: &[DocumentType], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            text::print_types(types);
            Ok(())
        },
        OutputFormat::Json => json::print(&types),
    }
}

/// Prints observed block names.
pub fn print_blocks(entries: &[BlockEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            text::print_blocks(entries);
            Ok(())
        },
        OutputFormat::Json => json::print(&entries),
    }
}
