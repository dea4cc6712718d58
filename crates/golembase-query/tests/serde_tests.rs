//! Serialization of query building blocks.

#![cfg(feature = "serde")]

use golembase_query::{field, Comparison, Condition, Field, Value, ID};

#[test]
fn test_field_serializes_as_name() {
    assert_eq!(serde_json::to_string(&ID).unwrap(), "\"$id\"");
    let parsed: Field = serde_json::from_str("\"color\"").unwrap();
    assert_eq!(parsed, field("color"));
}

#[test]
fn test_condition_serializes_as_expression() {
    let cond = field("size").gt(10).unwrap();
    let json = serde_json::to_string(&cond).unwrap();
    assert_eq!(json, "\"size > 10\"");
    let parsed: Condition = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cond);
}

#[test]
fn test_value_untagged() {
    assert_eq!(serde_json::to_string(&Value::from("a")).unwrap(), "\"a\"");
    assert_eq!(serde_json::to_string(&Value::from(5u8)).unwrap(), "5");
    let parsed: Value = serde_json::from_str("7").unwrap();
    assert_eq!(parsed, Value::Int(7));
}

#[test]
fn test_comparison_names() {
    assert_eq!(serde_json::to_string(&Comparison::Ge).unwrap(), "\"ge\"");
}
