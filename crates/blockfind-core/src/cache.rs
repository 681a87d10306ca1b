//! Result caching keyed by query parameters.
//!
//! Keys are derived from the raw `(target, scope)` pair by hashing the
//! length-prefixed components with SHA-256, so distinct pairs cannot collide
//! by concatenation ambiguity. Entries live under a fixed namespace prefix
//! and invalidation is coarse: any document mutation purges the whole
//! namespace. Expired entries read as misses.

use crate::{DocumentResult, Error, Result, Scope};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// Prefix shared by every cache key this feature writes.
pub const KEY_NAMESPACE: &str = "blockfind:";

/// Fixed entry lifetime; no sliding expiration.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Deterministic cache key for one `(target, scope)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey(String);

impl SearchKey {
    /// Derives the key: SHA-256 over the length-prefixed pair, hex-encoded,
    /// under [`KEY_NAMESPACE`].
    pub fn derive(target: &str, scope: &Scope) -> Self {
        let scope_id = scope.identifier();
        let mut hasher = Sha256::new();
        hasher.update((target.len() as u64).to_be_bytes());
        hasher.update(target.as_bytes());
        hasher.update((scope_id.len() as u64).to_be_bytes());
        hasher.update(scope_id.as_bytes());
        let digest = hasher.finalize();
        let hex = digest.iter().fold(String::new(), |mut acc, byte| {
            // write! to String is infallible
            let _ = write!(acc, "{byte:02x}");
            acc
        });
        Self(format!("{KEY_NAMESPACE}{hex}"))
    }

    /// The full key string, namespace prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Transient key-value store for classified search aggregates.
///
/// Implementations must be safe for concurrent readers and writers.
/// Last-write-wins on same-key races is acceptable: classification is
/// deterministic, so both writers produce the same value.
pub trait ResultCache: Send + Sync {
    /// Reads a cached aggregate; expired entries behave as misses.
    fn get(&self, key: &SearchKey) -> Result<Option<Vec<DocumentResult>>>;

    /// Writes an aggregate with the given lifetime.
    fn put(&self, key: &SearchKey, value: &[DocumentResult], ttl: Duration) -> Result<()>;

    /// Deletes every entry under [`KEY_NAMESPACE`], regardless of remaining
    /// TTL. Issued by the document-mutation collaborator after every create,
    /// update, or delete.
    fn invalidate_namespace(&self) -> Result<()>;
}

/// Clock used by [`MemoryCache`]; injectable so expiry is testable.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct CacheEntry {
    value: Vec<DocumentResult>,
    expires_at: DateTime<Utc>,
}

/// In-memory reference implementation of [`ResultCache`].
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Clock,
}

impl MemoryCache {
    /// Creates a cache on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Creates a cache on an injected clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, CacheEntry>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Cache("cache lock poisoned".into()))
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache for MemoryCache {
    fn get(&self, key: &SearchKey) -> Result<Option<Vec<DocumentResult>>> {
        let now = (self.clock)();
        let mut entries = self.lock()?;
        match entries.get(key.as_str()) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                // Expired; drop it so the map does not accumulate dead keys.
                entries.remove(key.as_str());
                debug!(key = key.as_str(), "cache entry expired");
                Ok(None)
            },
            None => Ok(None),
        }
    }

    fn put(&self, key: &SearchKey, value: &[DocumentResult], ttl: Duration) -> Result<()> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| Error::Cache(format!("ttl out of range: {e}")))?;
        let expires_at = (self.clock)() + ttl;
        self.lock()?.insert(
            key.as_str().to_string(),
            CacheEntry {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    fn invalidate_namespace(&self) -> Result<()> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(KEY_NAMESPACE));
        debug!(purged = before - entries.len(), "namespace invalidated");
        Ok(())
    }
}
