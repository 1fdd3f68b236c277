use super::*;
use relscope_core::catalog::inspect;

#[test]
fn test_table_columns_resolves_qualified_name() {
    let mut conn = FakeConnection::default();
    conn.columns.insert(
        ("events".to_string(), "analytics".to_string()),
        vec![column_row("analytics", "events", "id", "1", "int8")],
    );

    let columns = inspect::table_columns(&mut conn, "analytics.events").unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].table_schema, "analytics");
    assert_eq!(columns[0].column_name, "id");
}

#[test]
fn test_table_columns_defaults_bare_name_to_public() {
    let mut conn = users_orders_fixture();
    let columns = inspect::table_columns(&mut conn, "users").unwrap();
    assert_eq!(columns.len(), 2);
    assert!(columns.iter().all(|c| c.table_schema == "public"));
}

#[test]
fn test_table_columns_ignores_extra_qualifiers() {
    let mut conn = FakeConnection::default();
    conn.columns.insert(
        ("events".to_string(), "analytics".to_string()),
        vec![column_row("analytics", "events", "id", "1", "int8")],
    );

    let columns = inspect::table_columns(&mut conn, "analytics.events.extra").unwrap();
    assert_eq!(columns.len(), 1);
}

#[test]
fn test_table_primary_keys_for_qualified_name() {
    let mut conn = users_orders_fixture();
    let pks = inspect::table_primary_keys(&mut conn, "public.users").unwrap();
    assert_eq!(pks.len(), 1);
    assert_eq!(pks[0].constraint.constraint_type, "PRIMARY KEY");
    assert_eq!(pks[0].constraint.constraint_name, "users_pkey");
}

#[test]
fn test_table_foreign_keys_carry_reference_target() {
    let mut conn = users_orders_fixture();
    let fks = inspect::table_foreign_keys(&mut conn, "orders").unwrap();
    assert_eq!(fks.len(), 1);
    assert_eq!(fks[0].foreign_table_name, "users");
    assert_eq!(fks[0].foreign_column_name, "id");
    assert_eq!(fks[0].foreign_schema_name, "public");
}

#[test]
fn test_unknown_table_yields_empty_results() {
    let mut conn = users_orders_fixture();
    assert!(inspect::table_columns(&mut conn, "missing").unwrap().is_empty());
    assert!(
        inspect::table_primary_keys(&mut conn, "missing")
            .unwrap()
            .is_empty()
    );
    assert!(
        inspect::table_foreign_keys(&mut conn, "missing")
            .unwrap()
            .is_empty()
    );
}
