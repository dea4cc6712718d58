//! End-to-end query construction tests.

use golembase_query::{
    and, field, not, or, Field, QueryBuilder, QueryError, Value, ANNOTATIONS, ID, OWNER,
};

#[test]
fn test_system_field_equality() {
    let cond = Field::new("$id").eq("batch123").unwrap();
    assert_eq!(cond.expression(), "$id = \"batch123\"");
}

#[test]
fn test_integer_comparison() {
    let cond = Field::new("size").gt(10).unwrap();
    assert_eq!(cond.expression(), "size > 10");
}

#[test]
fn test_and_of_system_and_annotation() {
    let cond = and([
        Field::new("$id").eq("batch123").unwrap(),
        Field::new("color").eq("red").unwrap(),
    ])
    .unwrap();
    assert_eq!(cond.expression(), "($id = \"batch123\" && color = \"red\")");
}

#[test]
fn test_membership() {
    let cond = Field::new("priority").in_(["high", "medium"]).unwrap();
    assert_eq!(cond.expression(), "priority IN (\"high\", \"medium\")");
}

#[test]
fn test_negation() {
    let cond = not(Field::new("status").eq("active").unwrap());
    assert_eq!(cond.expression(), "!(status = \"active\")");
}

#[test]
fn test_negative_integer_rejected() {
    let err = Field::new("size").gt(-5).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidValue {
            reason: "only non-negative integers are permitted (got -5)".to_string()
        }
    );
}

#[test]
fn test_negative_integer_rejected_before_build() {
    let result = ANNOTATIONS.get("size").gt(-5).map(|c| QueryBuilder::new().where_(c));
    assert!(result.is_err());
}

#[test]
fn test_integers_unquoted_strings_quoted() {
    for n in [0u64, 1, 42, 1_000_000, u64::MAX] {
        assert_eq!(field("x").eq(n).unwrap().expression(), format!("x = {n}"));
    }
    for s in ["", "red", "with space", "0x1234", "%like%"] {
        assert_eq!(
            field("x").eq(s).unwrap().expression(),
            format!("x = \"{s}\"")
        );
    }
}

#[test]
fn test_numeric_string_stays_quoted() {
    assert_eq!(field("x").eq("10").unwrap().expression(), "x = \"10\"");
}

#[test]
fn test_nested_or_within_and() {
    let color = ANNOTATIONS.get("color");
    let query = QueryBuilder::new()
        .where_(
            ID.eq("batch123")
                .unwrap()
                .and(&color.eq("red").unwrap().or(&color.eq("blue").unwrap())),
        )
        .build();
    assert_eq!(
        query,
        "($id = \"batch123\" && (color = \"red\" || color = \"blue\"))"
    );
}

#[test]
fn test_convenience_functions() {
    let color = ANNOTATIONS.get("color");
    let cond = and([
        ID.eq("batch").unwrap(),
        or([color.eq("red").unwrap(), color.eq("blue").unwrap()]).unwrap(),
        ANNOTATIONS.get("size").ge(10).unwrap(),
    ])
    .unwrap();
    assert_eq!(
        QueryBuilder::new().where_(cond).build(),
        "(($id = \"batch\" && (color = \"red\" || color = \"blue\")) && size >= 10)"
    );
}

#[test]
fn test_real_world_query() {
    let status = ANNOTATIONS.get("status");
    let query = QueryBuilder::new()
        .where_(
            and([
                ID.eq("batch456").unwrap(),
                OWNER.eq("0xabcd1234").unwrap(),
                or([
                    status.eq("active").unwrap(),
                    and([
                        status.eq("pending").unwrap(),
                        ANNOTATIONS.get("priority").eq("high").unwrap(),
                    ])
                    .unwrap(),
                ])
                .unwrap(),
                ANNOTATIONS.get("created_date").gt("2024-01-01").unwrap(),
            ])
            .unwrap(),
        )
        .build();

    assert_eq!(
        query,
        "((($id = \"batch456\" && $owner = \"0xabcd1234\") && \
         (status = \"active\" || (status = \"pending\" && priority = \"high\"))) && \
         created_date > \"2024-01-01\")"
    );
}

#[test]
fn test_mixed_membership_list() {
    let cond = field("level")
        .in_(vec![Value::from(1), Value::from("two"), Value::from(3u8)])
        .unwrap();
    assert_eq!(cond.expression(), "level IN (1, \"two\", 3)");
}

#[test]
fn test_empty_argument_lists() {
    assert!(matches!(
        and(Vec::new()),
        Err(QueryError::EmptyArgumentList { .. })
    ));
    assert!(matches!(
        or(Vec::new()),
        Err(QueryError::EmptyArgumentList { .. })
    ));
    assert!(matches!(
        field("x").in_(Vec::<&str>::new()),
        Err(QueryError::EmptyArgumentList { .. })
    ));
}

#[test]
fn test_embedded_quote_rejected() {
    assert!(field("x").eq("a\"b").is_err());
    assert!(field("x").like("\"").is_err());
    assert!(field("x").in_(["ok", "not\"ok"]).is_err());
}

#[test]
fn test_conditions_are_shareable_across_threads() {
    let cond = ID.eq("shared").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cond = cond.clone();
            std::thread::spawn(move || cond.and(&field("n").eq(i as u32).unwrap()))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let joined = handle.join().unwrap();
        assert_eq!(
            joined.expression(),
            format!("($id = \"shared\" && n = {i})")
        );
    }
}
