use super::*;
use relscope_core::catalog::inspect;
use relscope_core::error::IntrospectError;

#[test]
fn test_tables_fails_atomically_on_foreign_key_error() {
    let mut conn = users_orders_fixture();
    conn.fail_on = Some("foreign_keys");

    // The very first table's aggregation fails; nothing is returned.
    let err = inspect::tables(&mut conn).unwrap_err();
    match err {
        IntrospectError::Aggregation { schema, table, source } => {
            assert_eq!(schema, "public");
            assert_eq!(table, "users");
            match *source {
                IntrospectError::Query { query, .. } => assert_eq!(query, "foreign_keys"),
                other => panic!("expected query error, got {other:?}"),
            }
        }
        other => panic!("expected aggregation error, got {other:?}"),
    }
}

#[test]
fn test_failed_enumeration_stops_after_first_table() {
    let mut conn = users_orders_fixture();
    conn.fail_on = Some("primary_keys");
    inspect::tables(&mut conn).unwrap_err();
    // columns for the first table ran, then the failing lookup; no second table.
    assert_eq!(conn.executed, vec!["tables", "columns", "primary_keys"]);
}

#[test]
fn test_tables_fails_when_listing_query_fails() {
    let mut conn = users_orders_fixture();
    conn.fail_on = Some("tables");
    let err = inspect::tables(&mut conn).unwrap_err();
    match err {
        IntrospectError::Query { query, cause } => {
            assert_eq!(query, "tables");
            assert!(cause.contains("simulated"));
        }
        other => panic!("expected query error, got {other:?}"),
    }
}

#[test]
fn test_malformed_column_row_surfaces_as_aggregation_error() {
    let mut conn = users_orders_fixture();
    conn.columns
        .insert(("users".to_string(), "public".to_string()), vec![vec![None]]);

    let err = inspect::tables(&mut conn).unwrap_err();
    match err {
        IntrospectError::Aggregation { table, source, .. } => {
            assert_eq!(table, "users");
            assert!(matches!(*source, IntrospectError::Decode { .. }));
        }
        other => panic!("expected aggregation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_table_header_fails_before_aggregation() {
    let mut conn = FakeConnection::default();
    conn.tables = vec![vec![Some("public".to_string())]];
    let err = inspect::tables(&mut conn).unwrap_err();
    assert!(matches!(err, IntrospectError::Decode { .. }));
}

#[test]
fn test_schema_listing_failure_propagates_unchanged() {
    let mut conn = FakeConnection::default();
    conn.fail_on = Some("schemas");
    let err = inspect::schemas(&mut conn).unwrap_err();
    assert!(matches!(err, IntrospectError::Query { query: "schemas", .. }));
}
