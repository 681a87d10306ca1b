//! Error types and handling for blockfind-core operations.
//!
//! The taxonomy separates caller-input errors (rejected before any work) from
//! the not-found condition (a valid search with zero candidates) and from
//! adapter failures, which are fatal for the current request. The one
//! deliberate exception is the cache: an unavailable cache degrades to
//! "always miss" inside the orchestrator and never surfaces here.

use thiserror::Error;

/// The main error type for blockfind-core operations.
///
/// All fallible public functions return `Result<T, Error>`. Each variant maps
/// to an HTTP-equivalent status via [`Error::status`] so a presentation layer
/// can translate without inspecting messages.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty required request field, or a failed anti-forgery
    /// check. HTTP-equivalent 400; no partial work is performed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Zero candidate documents for the resolved scope. HTTP-equivalent 404.
    ///
    /// This is a normal outcome of a well-formed search, not a system fault;
    /// the message names the block and the scope so it can be shown verbatim.
    #[error("{0}")]
    NotFound(String),

    /// The block-tree parser adapter failed on a document body.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The document repository adapter failed. Fatal for the current request;
    /// retry/backoff, if desired, belongs to the adapter layer.
    #[error("Repository error: {0}")]
    Repository(String),

    /// The result cache adapter failed.
    ///
    /// The orchestrator treats cache read failures as misses and cache write
    /// failures as no-ops, so this variant only reaches callers that use a
    /// cache adapter directly.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure while loading a corpus or configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// HTTP-equivalent status code for this error.
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Whether the error was caused by caller input rather than the system.
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::NotFound(_))
    }
}

/// Result alias used throughout blockfind-core.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(Error::InvalidRequest("block is required".into()).status(), 400);
        assert_eq!(Error::NotFound("no documents".into()).status(), 404);
        assert_eq!(Error::Repository("connection refused".into()).status(), 500);
        assert_eq!(Error::Cache("store down".into()).status(), 500);
    }

    #[test]
    fn caller_errors_are_flagged() {
        assert!(Error::InvalidRequest("x".into()).is_caller_error());
        assert!(Error::NotFound("x".into()).is_caller_error());
        assert!(!Error::Parse("x".into()).is_caller_error());
    }
}
