//! # golembase-query-executor
//!
//! Runs queries built with [`golembase_query`] against a GolemBase entity
//! store.
//!
//! The store itself is abstracted behind the [`EntityStore`] trait: one
//! method that takes query text and returns matching records. This crate adds
//! the plumbing around it: empty-query rejection, result limits, an optional
//! LRU cache, and `tracing` events for every dispatched query.
//!
//! ## Quick Start
//!
//! ```rust
//! use golembase_query::{QueryBuilder, ANNOTATIONS, ID};
//! use golembase_query_executor::{EntityRecord, EntityStore, QueryExecutor, StoreError};
//!
//! struct Fixed;
//!
//! impl EntityStore for Fixed {
//!     fn query_entities(&self, _query: &str) -> Result<Vec<EntityRecord>, StoreError> {
//!         Ok(vec![EntityRecord::new("0x01", b"payload".to_vec())])
//!     }
//! }
//!
//! let executor = QueryExecutor::new(&Fixed);
//! let query = QueryBuilder::new()
//!     .where_(ID.eq("batch123")?)
//!     .and(ANNOTATIONS.get("size").gt(10)?);
//!
//! let response = executor.execute(&query)?;
//! assert_eq!(response.query, "($id = \"batch123\" && size > 10)");
//! assert!(response.contains_key("0x01"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## With Configuration
//!
//! ```rust
//! use golembase_query_executor::{CacheConfig, ExecutorConfig};
//! use std::time::Duration;
//!
//! let config = ExecutorConfig::builder()
//!     .with_cache(CacheConfig {
//!         max_entries: 500,
//!         ttl: Duration::from_secs(5),
//!     })
//!     .with_max_results(10_000)
//!     .build();
//! # let _ = config;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod error;
mod executor;
mod result;
mod store;

pub use config::{CacheConfig, ExecutorConfig, ExecutorConfigBuilder};
pub use error::{ExecutorError, ExecutorResult, StoreError};
pub use executor::QueryExecutor;
pub use result::{ExecutionStats, QueryResponse};
pub use store::{EntityRecord, EntityStore};

// Re-export the builder crate for convenience
pub use golembase_query;
