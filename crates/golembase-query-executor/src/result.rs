//! Query response types.

use std::time::Duration;

use crate::store::EntityRecord;

/// Records returned for a query, with execution statistics.
///
/// # Example
///
/// ```ignore
/// let response = executor.execute(&query)?;
///
/// println!("Found {} entities", response.count());
///
/// for record in response.iter() {
///     println!("Entity: {}", record.entity_key);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// The query text sent to the store.
    pub query: String,
    /// Matching records, in store order.
    pub records: Vec<EntityRecord>,
    /// Execution statistics.
    pub stats: ExecutionStats,
}

impl QueryResponse {
    /// Creates a new response.
    pub fn new(query: String, records: Vec<EntityRecord>, stats: ExecutionStats) -> Self {
        Self {
            query,
            records,
            stats,
        }
    }

    /// Returns the number of matching records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks if an entity key is among the results.
    pub fn contains_key(&self, entity_key: &str) -> bool {
        self.records.iter().any(|r| r.entity_key == entity_key)
    }

    /// Returns an iterator over matching records.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.iter()
    }

    /// Returns the entity keys of all records.
    pub fn entity_keys(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.entity_key.as_str()).collect()
    }
}

impl IntoIterator for QueryResponse {
    type Item = EntityRecord;
    type IntoIter = std::vec::IntoIter<EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResponse {
    type Item = &'a EntityRecord;
    type IntoIter = std::slice::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Statistics from query execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    /// Total execution duration.
    pub duration: Duration,
    /// Whether the result was served from cache.
    pub cache_hit: bool,
}

impl ExecutionStats {
    /// Creates new execution stats.
    pub fn new(duration: Duration, cache_hit: bool) -> Self {
        Self {
            duration,
            cache_hit,
        }
    }
}
