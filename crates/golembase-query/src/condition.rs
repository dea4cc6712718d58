//! Boolean conditions and the combinators that join them.
//!
//! A [`Condition`] holds fully rendered query text. Combining two conditions
//! renders the result immediately, wrapping it in parentheses, so any
//! condition can be embedded in a larger one without further grouping.
//!
//! ```rust
//! use golembase_query::{and, field, not, or, ID};
//!
//! let color = field("color");
//! let cond = and([
//!     ID.eq("batch").unwrap(),
//!     or([color.eq("red").unwrap(), color.eq("blue").unwrap()]).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(
//!     cond.expression(),
//!     "($id = \"batch\" && (color = \"red\" || color = \"blue\"))"
//! );
//!
//! let negated = not(field("status").eq("active").unwrap());
//! assert_eq!(negated.expression(), "!(status = \"active\")");
//! ```

use std::fmt;
use std::ops;

use crate::error::{QueryError, QueryResult};

/// Conjunction symbol of the query grammar.
pub const AND: &str = "&&";
/// Disjunction symbol of the query grammar.
pub const OR: &str = "||";

/// A rendered boolean sub-expression.
///
/// Conditions are produced by [`Field`](crate::Field) operations and by the
/// combinators below. They are immutable; every combinator returns a new
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Condition {
    expression: String,
}

impl Condition {
    pub(crate) fn new(expression: String) -> Self {
        Self { expression }
    }

    /// The rendered expression text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Consumes the condition, returning its text.
    pub fn into_expression(self) -> String {
        self.expression
    }

    /// `(<self> && <other>)`
    pub fn and(&self, other: &Condition) -> Condition {
        self.join(AND, other)
    }

    /// `(<self> || <other>)`
    pub fn or(&self, other: &Condition) -> Condition {
        self.join(OR, other)
    }

    /// `!(<self>)`
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Condition {
        Condition::new(format!("!({})", self.expression))
    }

    fn join(&self, op: &str, other: &Condition) -> Condition {
        Condition::new(format!("({} {} {})", self.expression, op, other.expression))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        Condition::and(&self, &rhs)
    }
}

impl ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        Condition::or(&self, &rhs)
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::not(&self)
    }
}

/// Left-folds [`Condition::and`] over `conditions`.
///
/// `and([a, b, c])` renders as `((a && b) && c)`. A single condition is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`QueryError::EmptyArgumentList`] if `conditions` is empty.
pub fn and<I>(conditions: I) -> QueryResult<Condition>
where
    I: IntoIterator<Item = Condition>,
{
    fold(conditions, "and", Condition::and)
}

/// Left-folds [`Condition::or`] over `conditions`.
///
/// # Errors
///
/// Returns [`QueryError::EmptyArgumentList`] if `conditions` is empty.
pub fn or<I>(conditions: I) -> QueryResult<Condition>
where
    I: IntoIterator<Item = Condition>,
{
    fold(conditions, "or", Condition::or)
}

/// Negates `condition`.
pub fn not(condition: Condition) -> Condition {
    condition.not()
}

/// Wraps raw query text as a condition.
///
/// The text is not checked against the grammar; use this only for
/// expressions the builder cannot produce.
pub fn custom_condition(expression: impl Into<String>) -> Condition {
    Condition::new(expression.into())
}

fn fold<I, F>(conditions: I, operation: &'static str, combine: F) -> QueryResult<Condition>
where
    I: IntoIterator<Item = Condition>,
    F: Fn(&Condition, &Condition) -> Condition,
{
    let mut iter = conditions.into_iter();
    let first = iter
        .next()
        .ok_or(QueryError::EmptyArgumentList { operation })?;
    Ok(iter.fold(first, |acc, next| combine(&acc, &next)))
}
