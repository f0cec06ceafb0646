//! Caching wrapper around the parameterizer
//!
//! Maintains an LRU cache of parse results so hot statements are
//! rewritten only once.

use super::parameterize;
use crate::error::Result;
use crate::types::ParsedQuery;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::trace;

/// Default capacity for the parse cache
const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// A caching wrapper around [`parameterize`]
pub struct CachingParser {
    /// LRU cache of parse results
    cache: LruCache<String, Arc<ParsedQuery>>,
}

impl CachingParser {
    /// Create a new caching parser with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a new caching parser with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(100).unwrap()),
            ),
        }
    }

    /// Parse with caching. Cache keys are trimmed statements.
    pub fn parse(&mut self, sql: &str) -> Result<Arc<ParsedQuery>> {
        let normalized = normalize_sql(sql);

        if let Some(parsed) = self.cache.get(&normalized) {
            trace!(statement = %normalized, "parse cache hit");
            return Ok(parsed.clone());
        }

        trace!(statement = %normalized, "parse cache miss");
        let parsed = Arc::new(parameterize(sql)?);
        self.cache.put(normalized, parsed.clone());

        Ok(parsed)
    }

    /// Number of parameters a cached statement expects, if cached.
    ///
    /// Reads the cached entry without touching its recency, so an
    /// evicted statement answers `None` again.
    pub fn param_count(&self, sql: &str) -> Option<usize> {
        self.cache.peek(sql.trim()).map(|parsed| parsed.params.len())
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached statements
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for CachingParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a statement for consistent cache keys
#[inline]
fn normalize_sql(sql: &str) -> String {
    sql.trim().to_string()
}
