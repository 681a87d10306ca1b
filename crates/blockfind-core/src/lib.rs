//! # blockfind-core
//!
//! Core functionality for blockfind - locating structured content blocks
//! embedded as inline markers inside free-text documents, and reporting where
//! each match occurs and its nesting context.
//!
//! ## Architecture
//!
//! The crate is organized around several key components:
//!
//! - **Types**: Block trees, match instances, and per-document results
//! - **Classification**: Pre-order traversal recording depth and parent
//!   lineage for every match
//! - **Orchestration**: Two-phase search (substring pre-filter, then precise
//!   tree classification of candidates only) with result caching
//! - **View**: Pagination and filtering over the classified aggregate
//! - **Adapters**: Traits for the document repository, type registry, block
//!   parser, and result cache, with in-process reference implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use blockfind_core::{
//!     Corpus, MarkerParser, MemoryCache, MemoryRepository, Result, Scope,
//!     SearchRequest, SearchService,
//! };
//!
//! let repository = MemoryRepository::new(Corpus {
//!     types: vec![],
//!     documents: vec![],
//! });
//! let parser = MarkerParser::new()?;
//! let cache = MemoryCache::new();
//!
//! let service = SearchService::new(&repository, &repository, &parser, &cache);
//! let request = SearchRequest::new("core/quote", Scope::All);
//! // Zero registered types resolves to a successful empty result.
//! let page = service.search(&request)?;
//! assert_eq!(page.all_count, 0);
//! # Ok::<(), blockfind_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`] with an HTTP-equivalent status
//! per variant; see [`error`] for the taxonomy.

/// Result caching keyed by query parameters
pub mod cache;
/// Match classification over parsed block trees
pub mod classifier;
/// Pagination and cache-TTL settings
pub mod config;
/// Error types and result aliases
pub mod error;
/// Block tree parsing for marker-delimited bodies
pub mod parser;
/// Document repository and type-registry adapters
pub mod repository;
/// Search orchestration
pub mod search;
/// Core data types and structures
pub mod types;
/// Pagination and filter view over classified results
pub mod view;

// Re-export commonly used types
pub use cache::{DEFAULT_TTL, KEY_NAMESPACE, MemoryCache, ResultCache, SearchKey};
pub use classifier::classify;
pub use config::Config;
pub use error::{Error, Result};
pub use parser::{BlockParser, MarkerParser};
pub use repository::{
    Corpus, DocumentRepository, DocumentStatus, DocumentType, MemoryRepository, MutationHook,
    StoredDocument, TypeRegistry,
};
pub use search::{NoGuard, RequestGuard, SearchRequest, SearchService};
pub use types::*;
pub use view::{DEFAULT_PAGE_SIZE, ResultItem, ResultSet, render};
