//! Document repository and type-registry adapters.
//!
//! The orchestrator only depends on the [`DocumentRepository`] and
//! [`TypeRegistry`] traits; the store behind them is external. The substring
//! query is deliberately coarse: it exists so only candidate documents are
//! tree-parsed, and false positives are expected and filtered out by
//! classification.
//!
//! [`MemoryRepository`] is the reference adapter: an in-memory corpus
//! (loadable from JSON) with the same observable behavior the upstream store
//! contract requires - published-only results in title-ascending order.

use crate::{Error, Result};
use memchr::memmem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Publication status of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Visible to search.
    Published,
    /// Excluded from search.
    Draft,
}

/// A document as the repository stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Store-assigned id.
    pub id: u64,
    /// Source title; may be empty (the aggregate substitutes a placeholder).
    pub title: String,
    /// Document type identifier (e.g. `post`, `page`).
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Publication status.
    pub status: DocumentStatus,
    /// Raw body text with inline block markers.
    pub body: String,
    /// Locator for editing the document.
    pub edit_link: String,
    /// Locator for viewing the document.
    pub view_link: String,
}

/// A registered document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Type identifier.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Whether the type is publicly queryable.
    pub public: bool,
    /// Whether the type supports the block editor.
    pub editor_capable: bool,
}

/// Queries candidate documents by body substring.
pub trait DocumentRepository: Send + Sync {
    /// Returns every published document of one of `types` whose body
    /// contains `substring`, ordered by title ascending.
    fn find_by_substring(&self, types: &[String], substring: &str) -> Result<Vec<StoredDocument>>;
}

/// Enumerates registered document types.
pub trait TypeRegistry: Send + Sync {
    /// Lists type identifiers matching the given capability flags.
    fn list_types(&self, public: bool, editor_capable: bool) -> Result<Vec<String>>;
}

/// Serialized corpus format consumed by [`MemoryRepository::from_json_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Registered document types.
    pub types: Vec<DocumentType>,
    /// Stored documents.
    pub documents: Vec<StoredDocument>,
}

/// Callback the store is contractually required to issue synchronously after
/// every create, update, or delete. Wired to cache invalidation.
pub type MutationHook = Arc<dyn Fn() + Send + Sync>;

/// In-memory reference implementation of both store-side adapters.
pub struct MemoryRepository {
    types: Vec<DocumentType>,
    documents: Vec<StoredDocument>,
    mutation_hook: Option<MutationHook>,
}

impl MemoryRepository {
    /// Creates a repository over an existing corpus.
    pub fn new(corpus: Corpus) -> Self {
        Self {
            types: corpus.types,
            documents: corpus.documents,
            mutation_hook: None,
        }
    }

    /// Loads a corpus from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let corpus: Corpus = serde_json::from_str(&raw)
            .map_err(|e| Error::Repository(format!("invalid corpus {}: {e}", path.display())))?;
        debug!(
            documents = corpus.documents.len(),
            types = corpus.types.len(),
            "loaded corpus"
        );
        Ok(Self::new(corpus))
    }

    /// Registers the hook fired after every document mutation.
    pub fn set_mutation_hook(&mut self, hook: MutationHook) {
        self.mutation_hook = Some(hook);
    }

    /// Registered document types, with labels.
    pub fn types(&self) -> &[DocumentType] {
        &self.types
    }

    /// All stored documents, regardless of status.
    pub fn documents(&self) -> &[StoredDocument] {
        &self.documents
    }

    /// Creates or updates a document (matched by id) and fires the mutation
    /// hook.
    pub fn upsert(&mut self, document: StoredDocument) {
        match self.documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
        self.fire_mutation_hook();
    }

    /// Deletes a document by id; returns whether one existed. Fires the
    /// mutation hook either way, mirroring the store's lifecycle callbacks.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        self.fire_mutation_hook();
        self.documents.len() < before
    }

    fn fire_mutation_hook(&self) {
        if let Some(hook) = &self.mutation_hook {
            hook();
        }
    }
}

impl DocumentRepository for MemoryRepository {
    fn find_by_substring(&self, types: &[String], substring: &str) -> Result<Vec<StoredDocument>> {
        let finder = memmem::Finder::new(substring.as_bytes());
        let mut matches: Vec<StoredDocument> = self
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Published)
            .filter(|d| types.iter().any(|t| *t == d.doc_type))
            .filter(|d| finder.find(d.body.as_bytes()).is_some())
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        debug!(
            candidates = matches.len(),
            substring, "substring pre-filter"
        );
        Ok(matches)
    }
}

impl TypeRegistry for MemoryRepository {
    fn list_types(&self, public: bool, editor_capable: bool) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .types
            .iter()
            .filter(|t| t.public == public && t.editor_capable == editor_capable)
            .map(|t| t.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
