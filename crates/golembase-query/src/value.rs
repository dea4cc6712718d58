//! Scalar values and their rendering into query literals.

use crate::error::{QueryError, QueryResult};

/// A scalar that can appear on the right-hand side of a comparison.
///
/// Annotations on an entity are either strings or numbers, so these are the
/// only literal kinds the grammar knows about. Conversions exist from the
/// built-in string and integer types, which lets [`Field`](crate::Field)
/// operations accept plain Rust values:
///
/// ```rust
/// use golembase_query::Value;
///
/// assert_eq!(Value::from("red").format().unwrap(), "\"red\"");
/// assert_eq!(Value::from(10u32).format().unwrap(), "10");
/// assert!(Value::from(-1).format().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// String literal, rendered in double quotes.
    String(String),
    /// Signed integer; only non-negative values can be rendered.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
}

impl Value {
    /// Renders the value as a literal of the query grammar.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidValue`] for negative integers (the grammar
    /// has no unary minus) and for strings containing a double quote, which
    /// would terminate the literal early.
    pub fn format(&self) -> QueryResult<String> {
        match self {
            Value::String(s) => quote(s),
            Value::Int(n) if *n < 0 => Err(QueryError::negative_integer(*n)),
            Value::Int(n) => Ok(n.to_string()),
            Value::UInt(n) => Ok(n.to_string()),
        }
    }

    /// Returns true for string values.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
}

/// Wraps `s` in double quotes, rejecting embedded quotes.
pub(crate) fn quote(s: &str) -> QueryResult<String> {
    if s.contains('"') {
        return Err(QueryError::embedded_quote());
    }
    Ok(format!("\"{s}\""))
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
