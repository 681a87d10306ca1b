//! Corpus introspection commands: the search form's two selectors (document
//! types and available blocks), CLI-shaped.

use crate::cli::OutputFormat;
use crate::output;
use anyhow::{Context, Result};
use blockfind_core::{
    BlockNode, BlockParser, DocumentType, MarkerParser, MemoryRepository, humanize,
    strip_any_namespace,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// A block name observed in the corpus, with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct BlockEntry {
    /// Full block name, namespace included.
    pub name: String,
    /// Display label.
    pub label: String,
}

/// Lists the public, block-editor-capable document types, label-sorted.
pub fn list_types(corpus: &Path, format: OutputFormat) -> Result<()> {
    let repository = load(corpus)?;
    let mut types: Vec<DocumentType> = repository
        .types()
        .iter()
        .filter(|t| t.public && t.editor_capable)
        .cloned()
        .collect();
    types.sort_by(|a, b| a.label.cmp(&b.label));
    output::print_types(&types, format)
}

/// Lists the distinct block names used anywhere in the corpus, label-sorted.
pub fn list_blocks(corpus: &Path, format: OutputFormat) -> Result<()> {
    let repository = load(corpus)?;
    let parser = MarkerParser::new()?;

    let mut names: BTreeSet<String> = BTreeSet::new();
    for document in repository.documents() {
        let tree = parser.parse(&document.body)?;
        collect_names(&tree, &mut names);
    }

    let mut entries: Vec<BlockEntry> = names
        .into_iter()
        .map(|name| BlockEntry {
            label: humanize(strip_any_namespace(&name)),
            name,
        })
        .collect();
    entries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.name.cmp(&b.name)));
    output::print_blocks(&entries, format)
}

fn load(corpus: &Path) -> Result<MemoryRepository> {
    MemoryRepository::from_json_file(corpus)
        .with_context(|| format!("failed to load corpus {}", corpus.display()))
}

fn collect_names(nodes: &[BlockNode], names: &mut BTreeSet<String>) {
    for node in nodes {
        if !node.is_fragment() {
            names.insert(node.name.clone());
        }
        collect_names(&node.children, names);
    }
}
