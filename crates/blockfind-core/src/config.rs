//! Configuration for the search surface.
//!
//! A small TOML file controls the two tunables the feature exposes; all
//! fields are optional and default to the values the upstream feature
//! shipped with. Unknown keys are rejected so typos fail loudly instead of
//! silently falling back.
//!
//! ```toml
//! page_size = 10
//! cache_ttl_secs = 3600
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for pagination and result caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Documents per rendered page; must be at least 1.
    pub page_size: usize,
    /// Result cache entry lifetime in seconds, from write time; no sliding
    /// expiration.
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            cache_ttl_secs: 3600,
        }
    }
}

impl Config {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// The cache TTL as a duration.
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
