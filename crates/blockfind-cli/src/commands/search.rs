//! The `search` command: one full pass through the search orchestrator.

use crate::cli::{FilterArg, OutputFormat};
use crate::output;
use anyhow::{Context, Result};
use blockfind_core::{
    Config, MarkerParser, MemoryCache, MemoryRepository, Scope, SearchRequest, SearchService,
};
use std::path::Path;

/// Loads the corpus, runs one search, and prints the rendered page.
///
/// A not-found outcome is a normal rendered message, not a process failure,
/// mirroring how the search surface presents it.
pub fn search(
    target: &str,
    scope: &str,
    page: usize,
    filter: FilterArg,
    format: OutputFormat,
    corpus: &Path,
    config: Option<&Path>,
) -> Result<()> {
    let config = match config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let repository = MemoryRepository::from_json_file(corpus)
        .with_context(|| format!("failed to load corpus {}", corpus.display()))?;
    let parser = MarkerParser::new()?;
    let cache = MemoryCache::new();
    let service = SearchService::with_config(&repository, &repository, &parser, &cache, config);

    let request = SearchRequest {
        target_block: target.to_string(),
        scope: Scope::parse(scope),
        page,
        filter: filter.into(),
    };

    match service.search(&request) {
        Ok(set) => output::print_result_set(&set, format),
        Err(e) if e.status() == 404 => output::print_not_found(&e.to_string(), format),
        Err(e) => Err(e.into()),
    }
}
