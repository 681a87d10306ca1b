//! Text output formatting

use crate::commands::catalog::BlockEntry;
use blockfind_core::{DocumentType, FilterMode, ResultSet};
use colored::Colorize;

/// Prints a result page in the human-readable layout.
pub fn print_result_set(set: &ResultSet) {
    let noun = if set.total == 1 { "document" } else { "documents" };
    println!(
        "{} is used in the following: ({} {noun})",
        format!("{} Block", set.target_label).bold(),
        set.total
    );

    if set.show_filters {
        let all = format!("All Blocks ({})", set.all_count);
        let nested = format!("InnerBlocks ({})", set.nested_count);
        let (all, nested) = match set.filter {
            FilterMode::All => (all.bold().to_string(), nested),
            FilterMode::Nested => (all, nested.bold().to_string()),
        };
        println!("Filters: {all} | {nested}");
    }

    for item in &set.items {
        let mut markers = Vec::new();
        if item.has_root {
            markers.push("root");
        }
        if item.has_nested {
            markers.push("nested");
        }
        println!(
            "  {} {}",
            item.title.bold(),
            format!("[{}]", markers.join(", ")).bright_black()
        );
        if !item.parent_labels.is_empty() {
            println!("    Parent: {}", item.parent_labels.join(", ").cyan());
        }
        println!(
            "    edit: {}  view: {}",
            item.edit_link.underline(),
            item.view_link.underline()
        );
    }

    if set.total_pages > 1 {
        let mut controls = Vec::new();
        if set.has_previous {
            controls.push("previous".to_string());
        }
        if set.has_next {
            controls.push("next".to_string());
        }
        println!(
            "Page {} of {} ({})",
            set.page,
            set.total_pages,
            controls.join(" | ")
        );
    }
}

/// Prints the no-results message.
pub fn print_not_found(message: &str) {
    println!("{message}");
}

/// Prints the document-type selector contents.
pub fn print_types(types: &[DocumentType]) {
    for doc_type in types {
        println!("{} ({})", doc_type.label.bold(), doc_type.name);
    }
}

/// Prints the block selector contents.
pub fn print_blocks(entries: &[BlockEntry]) {
    for entry in entries {
        println!("{} ({})", entry.label.bold(), entry.name);
    }
}
