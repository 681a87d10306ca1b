//! Search orchestration.
//!
//! [`SearchService`] coordinates the two-phase search: the repository's cheap
//! substring pre-filter picks candidate documents, and only those are parsed
//! into block trees and classified. The classified aggregate is cached under
//! a key derived from the query parameters; the view layer then slices and
//! filters it for one page.
//!
//! The cache is an optimization, never a dependency: read and write failures
//! degrade to "always miss" with a warning and the search proceeds.

use crate::cache::{ResultCache, SearchKey};
use crate::classifier::classify;
use crate::parser::BlockParser;
use crate::repository::{DocumentRepository, StoredDocument, TypeRegistry};
use crate::view::{self, ResultSet};
use crate::{
    Config, DocumentResult, Error, FilterMode, Result, Scope, UNTITLED, strip_core_prefix,
    target_label,
};
use tracing::{debug, info, warn};

/// Opening delimiter of a block marker in stored body text. An opaque
/// substring contract of the document store; only the pre-filter uses it.
const MARKER_OPEN: &str = "<!-- wp:";

/// One search request, as explicit parameters.
///
/// All validation happens against this struct; the orchestrator never reads
/// ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Full block name to search for, namespace included.
    pub target_block: String,
    /// Document types to search in.
    pub scope: Scope,
    /// Requested page, 1-based; out-of-range values are clamped.
    pub page: usize,
    /// Result subset to show.
    pub filter: FilterMode,
}

impl SearchRequest {
    /// Creates a request for page 1 with the default filter.
    pub fn new(target_block: impl Into<String>, scope: Scope) -> Self {
        Self {
            target_block: target_block.into(),
            scope,
            page: 1,
            filter: FilterMode::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.target_block.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "target block and scope values are required".into(),
            ));
        }
        if matches!(&self.scope, Scope::Type(name) if name.trim().is_empty()) {
            return Err(Error::InvalidRequest(
                "target block and scope values are required".into(),
            ));
        }
        Ok(())
    }
}

/// Anti-forgery collaborator consulted before any search work.
pub trait RequestGuard: Send + Sync {
    /// Whether the presented token is valid.
    fn verify(&self, token: &str) -> bool;
}

/// Guard for trusted surfaces (e.g. a local CLI); accepts every token.
pub struct NoGuard;

impl RequestGuard for NoGuard {
    fn verify(&self, _token: &str) -> bool {
        true
    }
}

/// Coordinates repository, parser, classifier, cache, and view for one
/// search call. Stateless between calls; safe to share across threads.
pub struct SearchService<'a> {
    repository: &'a dyn DocumentRepository,
    types: &'a dyn TypeRegistry,
    parser: &'a dyn BlockParser,
    cache: &'a dyn ResultCache,
    config: Config,
}

impl<'a> SearchService<'a> {
    /// Creates a service with default configuration.
    pub fn new(
        repository: &'a dyn DocumentRepository,
        types: &'a dyn TypeRegistry,
        parser: &'a dyn BlockParser,
        cache: &'a dyn ResultCache,
    ) -> Self {
        Self::with_config(repository, types, parser, cache, Config::default())
    }

    /// Creates a service with explicit configuration.
    pub fn with_config(
        repository: &'a dyn DocumentRepository,
        types: &'a dyn TypeRegistry,
        parser: &'a dyn BlockParser,
        cache: &'a dyn ResultCache,
        config: Config,
    ) -> Self {
        Self {
            repository,
            types,
            parser,
            cache,
            config,
        }
    }

    /// Entry point for untrusted callers: checks the anti-forgery token
    /// before any other work, then searches.
    pub fn handle(
        &self,
        request: &SearchRequest,
        token: &str,
        guard: &dyn RequestGuard,
    ) -> Result<ResultSet> {
        if !guard.verify(token) {
            return Err(Error::InvalidRequest("anti-forgery check failed".into()));
        }
        self.search(request)
    }

    /// Runs one search and renders the requested page.
    pub fn search(&self, request: &SearchRequest) -> Result<ResultSet> {
        request.validate()?;

        let key = SearchKey::derive(&request.target_block, &request.scope);

        if let Some(cached) = self.cache_get(&key) {
            debug!(key = key.as_str(), "cache hit");
            return Ok(self.render(request, &cached));
        }
        debug!(key = key.as_str(), "cache miss");

        let type_names = self.resolve_scope(&request.scope)?;
        if type_names.is_empty() {
            // No block-editor-capable types registered: a successful empty
            // result, distinct from NotFound because no query was attempted.
            debug!("scope resolved to zero document types");
            return Ok(self.render(request, &[]));
        }

        let marker = format!("{MARKER_OPEN}{}", strip_core_prefix(&request.target_block));
        let candidates = self.repository.find_by_substring(&type_names, &marker)?;
        if candidates.is_empty() {
            return Err(Error::NotFound(format!(
                "No documents found using the {} block in {}.",
                target_label(&request.target_block),
                request.scope.describe()
            )));
        }

        let candidate_count = candidates.len();
        let aggregate = self.build_aggregate(candidates, &request.target_block)?;
        info!(
            target = %request.target_block,
            candidates = candidate_count,
            documents = aggregate.len(),
            "search classified"
        );

        self.cache_put(&key, &aggregate);
        Ok(self.render(request, &aggregate))
    }

    fn render(&self, request: &SearchRequest, aggregate: &[DocumentResult]) -> ResultSet {
        view::render(
            &request.target_block,
            aggregate,
            request.page,
            request.filter,
            self.config.page_size,
        )
    }

    fn resolve_scope(&self, scope: &Scope) -> Result<Vec<String>> {
        match scope {
            Scope::All => self.types.list_types(true, true),
            Scope::Type(name) => Ok(vec![name.clone()]),
        }
    }

    /// Parses and classifies each candidate; a candidate whose classification
    /// comes back empty was a pre-filter false positive and is dropped.
    fn build_aggregate(
        &self,
        candidates: Vec<StoredDocument>,
        target: &str,
    ) -> Result<Vec<DocumentResult>> {
        let mut aggregate = Vec::new();
        for document in candidates {
            let tree = self.parser.parse(&document.body)?;
            let instances = classify(&tree, target);
            if instances.is_empty() {
                debug!(id = document.id, "candidate dropped after classification");
                continue;
            }
            let title = if document.title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                document.title
            };
            aggregate.push(DocumentResult {
                id: document.id,
                title,
                edit_link: document.edit_link,
                view_link: document.view_link,
                block_instances: instances,
            });
        }
        Ok(aggregate)
    }

    fn cache_get(&self, key: &SearchKey) -> Option<Vec<DocumentResult>> {
        match self.cache.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "cache read failed; treating as miss");
                None
            },
        }
    }

    fn cache_put(&self, key: &SearchKey, aggregate: &[DocumentResult]) {
        if let Err(e) = self.cache.put(key, aggregate, self.config.cache_ttl()) {
            warn!(error = %e, "cache write failed; continuing without cache");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_is_rejected() {
        let request = SearchRequest::new("  ", Scope::All);
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn empty_scope_type_is_rejected() {
        let request = SearchRequest::new("core/quote", Scope::Type(String::new()));
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn well_formed_request_passes_validation() {
        let request = SearchRequest::new("core/quote", Scope::Type("post".into()));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn no_guard_accepts_anything() {
        assert!(NoGuard.verify(""));
        assert!(NoGuard.verify("anything"));
    }
}
