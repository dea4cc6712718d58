//! Fields for user-defined annotations.

use crate::field::Field;

/// Factory for annotation fields.
///
/// Annotation keys are chosen by whoever created the entity, so there is no
/// schema to declare them against. Any key, including ones with dashes or
/// other characters that are not valid identifiers, resolves to a field:
///
/// ```rust
/// use golembase_query::ANNOTATIONS;
///
/// let cond = ANNOTATIONS.get("field-with-dash").eq("value").unwrap();
/// assert_eq!(cond.expression(), "field-with-dash = \"value\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations;

/// Shared annotation namespace.
pub const ANNOTATIONS: Annotations = Annotations;

impl Annotations {
    /// Returns the field for annotation `name`.
    pub fn get(&self, name: impl Into<String>) -> Field {
        field(name)
    }
}

/// Creates an annotation field from a name built at runtime.
pub fn field(name: impl Into<String>) -> Field {
    Field::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_resolves_any_name() {
        assert_eq!(ANNOTATIONS.get("color").name(), "color");
        assert_eq!(ANNOTATIONS.get("field-with-dash").name(), "field-with-dash");
        assert_eq!(ANNOTATIONS.get("a.b/c").name(), "a.b/c");
    }

    #[test]
    fn test_namespace_matches_field_fn() {
        assert_eq!(ANNOTATIONS.get("size"), field("size"));
        assert_eq!(Annotations.get("size"), field(String::from("size")));
        let key = String::from("owner-tag");
        assert_eq!(ANNOTATIONS.get(key.clone()), field(key));
    }

    #[test]
    fn test_dynamic_field() {
        let name = format!("{}_{}", "dynamic", "attribute");
        let cond = field(name).eq("value").unwrap();
        assert_eq!(cond.expression(), "dynamic_attribute = \"value\"");
    }

    #[test]
    fn test_annotation_fields_are_not_system() {
        assert!(!field("id").is_system());
    }
}
