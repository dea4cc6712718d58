//! The entity store boundary.
//!
//! This crate never talks to the network. Callers implement [`EntityStore`]
//! for whatever client reaches their GolemBase node and hand it to a
//! [`QueryExecutor`](crate::QueryExecutor).
//!
//! # Example
//!
//! ```rust
//! use golembase_query_executor::{EntityRecord, EntityStore, StoreError};
//!
//! struct Offline;
//!
//! impl EntityStore for Offline {
//!     fn query_entities(&self, _query: &str) -> Result<Vec<EntityRecord>, StoreError> {
//!         Err(StoreError::new("not connected"))
//!     }
//! }
//! ```

use crate::error::StoreError;

/// One entity returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRecord {
    /// Hex-encoded entity key.
    pub entity_key: String,
    /// Stored payload.
    pub storage_value: Vec<u8>,
}

impl EntityRecord {
    /// Creates a record.
    pub fn new(entity_key: impl Into<String>, storage_value: impl Into<Vec<u8>>) -> Self {
        Self {
            entity_key: entity_key.into(),
            storage_value: storage_value.into(),
        }
    }
}

/// A store that evaluates query strings.
///
/// The query text is passed through untouched; interpreting it is entirely
/// the store's business.
pub trait EntityStore: Send + Sync {
    /// Returns every entity matching `query`.
    fn query_entities(&self, query: &str) -> Result<Vec<EntityRecord>, StoreError>;
}

impl<S: EntityStore + ?Sized> EntityStore for &S {
    fn query_entities(&self, query: &str) -> Result<Vec<EntityRecord>, StoreError> {
        (**self).query_entities(query)
    }
}
