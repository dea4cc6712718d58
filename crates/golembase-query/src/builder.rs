//! Fluent builder for top-level query strings.

use std::fmt;

use crate::condition::Condition;

/// Separator between top-level conditions.
const TOP_LEVEL_SEPARATOR: &str = " && ";

/// Fluent builder that accumulates conditions into a query string.
///
/// [`where_`](Self::where_) starts a new top-level condition;
/// [`and`](Self::and) and [`or`](Self::or) refine the most recent one in
/// place. Top-level conditions are joined with `&&` by
/// [`build`](Self::build).
///
/// ```rust
/// use golembase_query::{field, QueryBuilder, ID};
///
/// let query = QueryBuilder::new()
///     .where_(ID.eq("test").unwrap())
///     .and(field("size").gt(10).unwrap())
///     .build();
/// assert_eq!(query, "($id = \"test\" && size > 10)");
///
/// assert_eq!(QueryBuilder::new().build(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    conditions: Vec<Condition>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new top-level condition.
    pub fn where_(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replaces the last condition with `last && condition`.
    ///
    /// Behaves like [`where_`](Self::where_) on an empty builder.
    pub fn and(self, condition: Condition) -> Self {
        self.refine_last(condition, Condition::and)
    }

    /// Replaces the last condition with `last || condition`.
    ///
    /// Behaves like [`where_`](Self::where_) on an empty builder.
    pub fn or(self, condition: Condition) -> Self {
        self.refine_last(condition, Condition::or)
    }

    fn refine_last<F>(mut self, condition: Condition, combine: F) -> Self
    where
        F: Fn(&Condition, &Condition) -> Condition,
    {
        match self.conditions.last_mut() {
            Some(last) => *last = combine(last, &condition),
            None => self.conditions.push(condition),
        }
        self
    }

    /// Top-level conditions accumulated so far.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Number of top-level conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns true if no condition was added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Renders the query string.
    ///
    /// Returns an empty string when no condition was added. Calling this
    /// repeatedly yields the same text.
    pub fn build(&self) -> String {
        self.conditions
            .iter()
            .map(Condition::expression)
            .collect::<Vec<_>>()
            .join(TOP_LEVEL_SEPARATOR)
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
