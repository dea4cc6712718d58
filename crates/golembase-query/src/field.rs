//! Queryable fields and the comparisons they produce.

use std::borrow::Cow;
use std::fmt;

use crate::condition::Condition;
use crate::error::{QueryError, QueryResult};
use crate::value::{quote, Value};

/// Prefix reserved for store-defined attributes.
pub const SYSTEM_SIGIL: char = '$';

/// Entity key.
pub const ID: Field = Field::system("$id");
/// Address of the entity owner.
pub const OWNER: Field = Field::system("$owner");
/// Block number at which the entity expires.
pub const EXPIRES_AT: Field = Field::system("$expires_at");
/// Block number at which the entity was created.
pub const CREATED_AT: Field = Field::system("$created_at");
/// Block number of the last update.
pub const UPDATED_AT: Field = Field::system("$updated_at");

/// All system fields known to the store.
pub const SYSTEM_FIELDS: [Field; 5] = [ID, OWNER, EXPIRES_AT, CREATED_AT, UPDATED_AT];

/// Binary comparison operators of the query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Comparison {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Comparison {
    /// Grammar symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "!=",
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A named attribute of an entity that conditions can be written against.
///
/// Fields are either system fields (the constants in this module, whose names
/// start with [`SYSTEM_SIGIL`]) or annotation fields created on demand with
/// [`field`](crate::field) or [`Annotations`](crate::Annotations).
///
/// Every operation is a pure function of the field name, the operator and the
/// value; the field itself is never modified.
///
/// ```rust
/// use golembase_query::{field, ID};
///
/// assert_eq!(ID.eq("batch123").unwrap().expression(), "$id = \"batch123\"");
/// assert_eq!(field("size").gt(10).unwrap().expression(), "size > 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Field {
    name: Cow<'static, str>,
}

impl Field {
    /// Creates a field with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    const fn system(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the field name as written in queries.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this is a store-defined field.
    pub fn is_system(&self) -> bool {
        self.name.starts_with(SYSTEM_SIGIL)
    }

    /// Builds `<name> <op> <value>`.
    pub fn compare(&self, op: Comparison, value: impl Into<Value>) -> QueryResult<Condition> {
        let literal = value.into().format()?;
        Ok(Condition::new(format!("{} {} {}", self.name, op, literal)))
    }

    /// `<name> = <value>`
    pub fn eq(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Eq, value)
    }

    /// `<name> != <value>`
    pub fn ne(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Ne, value)
    }

    /// `<name> > <value>`
    pub fn gt(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Gt, value)
    }

    /// `<name> < <value>`
    pub fn lt(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Lt, value)
    }

    /// `<name> >= <value>`
    pub fn ge(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Ge, value)
    }

    /// `<name> <= <value>`
    pub fn le(&self, value: impl Into<Value>) -> QueryResult<Condition> {
        self.compare(Comparison::Le, value)
    }

    /// `<name> LIKE "<pattern>"`
    ///
    /// The pattern is always quoted and passed through as-is; wildcard
    /// syntax is interpreted by the store.
    pub fn like(&self, pattern: &str) -> QueryResult<Condition> {
        Ok(Condition::new(format!("{} LIKE {}", self.name, quote(pattern)?)))
    }

    /// `<name> IN (<v1>, <v2>, ...)`
    ///
    /// Each value is formatted by its own type, so strings and integers may
    /// be mixed by converting them to [`Value`] first.
    ///
    /// # Errors
    ///
    /// Fails with [`QueryError::EmptyArgumentList`] when `values` is empty,
    /// and with [`QueryError::InvalidValue`] if any value cannot be rendered.
    pub fn in_<I, V>(&self, values: I) -> QueryResult<Condition>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let literals = values
            .into_iter()
            .map(|v| v.into().format())
            .collect::<QueryResult<Vec<_>>>()?;

        if literals.is_empty() {
            return Err(QueryError::EmptyArgumentList { operation: "IN" });
        }

        Ok(Condition::new(format!(
            "{} IN ({})",
            self.name,
            literals.join(", ")
        )))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}
