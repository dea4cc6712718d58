//! # golembase-query
//!
//! A typed builder for GolemBase entity queries.
//!
//! Entities in a GolemBase store carry system attributes (key, owner, expiry)
//! and user-defined string or numeric annotations. The store's query endpoint
//! takes a boolean filter expression over those attributes as text. This
//! crate builds that text from typed parts so values are always formatted
//! correctly and grouping is always explicit.
//!
//! ## Usage
//!
//! ```rust
//! use golembase_query::{and, or, QueryBuilder, ANNOTATIONS, ID, OWNER};
//!
//! let status = ANNOTATIONS.get("status");
//! let query = QueryBuilder::new()
//!     .where_(and([
//!         ID.eq("batch456")?,
//!         OWNER.eq("0xabcd1234")?,
//!         or([
//!             status.eq("active")?,
//!             status.eq("pending")? & ANNOTATIONS.get("priority").eq("high")?,
//!         ])?,
//!     ])?)
//!     .build();
//!
//! assert_eq!(
//!     query,
//!     "(($id = \"batch456\" && $owner = \"0xabcd1234\") && \
//!      (status = \"active\" || (status = \"pending\" && priority = \"high\")))"
//! );
//! # Ok::<(), golembase_query::QueryError>(())
//! ```
//!
//! ## Grammar Quick Reference
//!
//! | Construct | Example |
//! |-----------|---------|
//! | Comparison | `size > 10`, `$id = "abc"` |
//! | Operators | `=`, `!=`, `>`, `<`, `>=`, `<=` |
//! | Pattern | `name LIKE "%test%"` |
//! | Membership | `level IN (1, 2, 3)` |
//! | Conjunction | `(a && b)` |
//! | Disjunction | `(a \|\| b)` |
//! | Negation | `!(a)` |
//!
//! System fields start with `$`; everything else is an annotation key.
//! Integer literals must be non-negative and string literals must not
//! contain `"`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod annotations;
mod builder;
mod condition;
mod error;
mod field;
mod value;

pub use annotations::{field, Annotations, ANNOTATIONS};
pub use builder::QueryBuilder;
pub use condition::{and, custom_condition, not, or, Condition, AND, OR};
pub use error::{QueryError, QueryResult};
pub use field::{
    Comparison, Field, CREATED_AT, EXPIRES_AT, ID, OWNER, SYSTEM_FIELDS, SYSTEM_SIGIL,
    UPDATED_AT,
};
pub use value::Value;
