//! Query executor implementation.

use std::time::Instant;

use golembase_query::{Condition, QueryBuilder};
use tracing::{debug, warn};

use crate::cache::ResultCache;
use crate::config::ExecutorConfig;
use crate::error::{ExecutorError, ExecutorResult};
use crate::result::{ExecutionStats, QueryResponse};
use crate::store::{EntityRecord, EntityStore};

/// Runs built queries against an [`EntityStore`].
///
/// # Example
///
/// ```ignore
/// use golembase_query::{QueryBuilder, ANNOTATIONS};
/// use golembase_query_executor::QueryExecutor;
///
/// // Assumes MyClient implements EntityStore
/// let client = MyClient::connect(rpc_url)?;
/// let executor = QueryExecutor::new(&client);
///
/// let query = QueryBuilder::new().where_(ANNOTATIONS.get("color").eq("red")?);
/// let response = executor.execute(&query)?;
/// println!("Found {} entities", response.count());
/// ```
pub struct QueryExecutor<'a> {
    store: &'a dyn EntityStore,
    config: ExecutorConfig,
    cache: Option<ResultCache>,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor with default configuration.
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self {
            store,
            config: ExecutorConfig::default(),
            cache: None,
        }
    }

    /// Creates an executor with custom configuration.
    pub fn with_config(store: &'a dyn EntityStore, config: ExecutorConfig) -> Self {
        let cache = config.cache.as_ref().map(ResultCache::new);
        Self {
            store,
            config,
            cache,
        }
    }

    /// Returns a reference to the executor configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Builds `query` and runs it.
    ///
    /// # Errors
    ///
    /// Fails with [`ExecutorError::EmptyQuery`] if the builder holds no
    /// conditions; otherwise as [`execute_query`](Self::execute_query).
    pub fn execute(&self, query: &QueryBuilder) -> ExecutorResult<QueryResponse> {
        self.execute_query(&query.build())
    }

    /// Runs a single condition as the whole query.
    pub fn execute_condition(&self, condition: &Condition) -> ExecutorResult<QueryResponse> {
        self.execute_query(condition.expression())
    }

    /// Runs raw query text.
    ///
    /// The text is handed to the store unchanged. If caching is enabled,
    /// rows are cached under that exact text; cached rows can lag the store
    /// by up to the configured TTL.
    ///
    /// # Errors
    ///
    /// * [`ExecutorError::EmptyQuery`] for blank text; the store is not called.
    /// * [`ExecutorError::Store`] if the store fails.
    /// * [`ExecutorError::ResultTooLarge`] if more records than
    ///   `max_results` come back.
    pub fn execute_query(&self, query: &str) -> ExecutorResult<QueryResponse> {
        let start = Instant::now();

        if query.trim().is_empty() {
            return Err(ExecutorError::EmptyQuery);
        }

        if let Some(ref cache) = self.cache {
            if let Some(records) = cache.get(query) {
                debug!(query, count = records.len(), "query served from cache");
                let stats = ExecutionStats::new(start.elapsed(), true);
                return Ok(QueryResponse::new(query.to_string(), records, stats));
            }
        }

        debug!(query, "dispatching query to entity store");
        let records = self.store.query_entities(query)?;
        self.check_limit(&records)?;

        if let Some(ref cache) = self.cache {
            cache.insert(query, records.clone());
        }

        let stats = ExecutionStats::new(start.elapsed(), false);
        debug!(
            query,
            count = records.len(),
            elapsed_ms = stats.duration.as_millis() as u64,
            "query completed"
        );
        Ok(QueryResponse::new(query.to_string(), records, stats))
    }

    /// Returns true if any entity matches `condition`.
    pub fn exists(&self, condition: &Condition) -> ExecutorResult<bool> {
        Ok(!self.execute_condition(condition)?.is_empty())
    }

    fn check_limit(&self, records: &[EntityRecord]) -> ExecutorResult<()> {
        match self.config.max_results {
            Some(limit) if records.len() > limit => {
                warn!(count = records.len(), limit, "query result exceeds limit");
                Err(ExecutorError::ResultTooLarge {
                    count: records.len(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for QueryExecutor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExecutor")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
