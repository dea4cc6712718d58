//! Configuration types for the query executor.

use std::time::Duration;

/// Configuration for the query executor.
///
/// # Example
///
/// ```rust
/// use golembase_query_executor::{CacheConfig, ExecutorConfig};
///
/// let config = ExecutorConfig::builder()
///     .with_cache(CacheConfig::default())
///     .with_max_results(10_000)
///     .build();
/// assert_eq!(config.max_results, Some(10_000));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExecutorConfig {
    /// Cache configuration (None = caching disabled).
    pub cache: Option<CacheConfig>,
    /// Maximum number of records a query may return (None = unlimited).
    pub max_results: Option<usize>,
}

impl ExecutorConfig {
    /// Creates a new builder for ExecutorConfig.
    pub fn builder() -> ExecutorConfigBuilder {
        ExecutorConfigBuilder::default()
    }
}

/// Builder for ExecutorConfig.
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfigBuilder {
    cache: Option<CacheConfig>,
    max_results: Option<usize>,
}

impl ExecutorConfigBuilder {
    /// Enables caching with the given configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the maximum number of records.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Builds the ExecutorConfig.
    pub fn build(self) -> ExecutorConfig {
        ExecutorConfig {
            cache: self.cache,
            max_results: self.max_results,
        }
    }
}

/// Configuration for the query cache.
///
/// # Example
///
/// ```rust
/// use golembase_query_executor::CacheConfig;
/// use std::time::Duration;
///
/// let cache = CacheConfig {
///     max_entries: 1_000,
///     ttl: Duration::from_secs(30),
/// };
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheConfig {
    /// Maximum number of cached query results.
    pub max_entries: usize,
    /// Time-to-live for cached entries.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_000,
            ttl: Duration::from_secs(10),
        }
    }
}
