use super::*;
use relscope_core::catalog::inspect;

#[test]
fn test_tables_returns_fully_populated_catalog() {
    let mut conn = users_orders_fixture();
    let tables = inspect::tables(&mut conn).unwrap();
    assert_eq!(tables.len(), 2);

    let users = tables.iter().find(|t| t.name == "users").unwrap();
    assert_eq!(users.schema, "public");
    assert_eq!(users.columns.len(), 2);
    assert_eq!(users.primary_keys.len(), 1);
    assert_eq!(users.primary_keys[0].constraint.column_name, "id");
    assert!(users.foreign_keys.is_empty());

    let orders = tables.iter().find(|t| t.name == "orders").unwrap();
    assert_eq!(orders.foreign_keys.len(), 1);
    let fk = &orders.foreign_keys[0];
    assert_eq!(fk.constraint.column_name, "user_id");
    assert_eq!(fk.foreign_table_name, "users");
    assert_eq!(fk.foreign_column_name, "id");
}

#[test]
fn test_tables_runs_per_table_lookups_in_order() {
    let mut conn = users_orders_fixture();
    inspect::tables(&mut conn).unwrap();
    assert_eq!(
        conn.executed,
        vec![
            "tables",
            "columns",
            "primary_keys",
            "foreign_keys",
            "columns",
            "primary_keys",
            "foreign_keys",
        ]
    );
}

#[test]
fn test_tables_twice_yields_equal_snapshots() {
    let mut conn = users_orders_fixture();
    let first = inspect::tables(&mut conn).unwrap();
    let second = inspect::tables(&mut conn).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tables_on_empty_catalog() {
    let mut conn = FakeConnection::default();
    assert!(inspect::tables(&mut conn).unwrap().is_empty());
}

#[test]
fn test_tables_in_schema_filters_by_name() {
    let mut conn = users_orders_fixture();
    conn.tables.push(table_row("analytics", "events"));
    conn.columns.insert(
        ("events".to_string(), "analytics".to_string()),
        vec![column_row("analytics", "events", "id", "1", "int8")],
    );

    let tables = inspect::tables_in_schema(&mut conn, "analytics").unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].schema, "analytics");
    assert_eq!(tables[0].name, "events");
    assert_eq!(tables[0].columns.len(), 1);
}

#[test]
fn test_tables_via_introspector_facade() {
    use relscope_core::Introspector;

    let mut introspector = Introspector::new(Box::new(users_orders_fixture()));
    let tables = introspector.tables().unwrap();
    assert_eq!(tables.len(), 2);
    let schemas = introspector.schemas().unwrap();
    assert_eq!(schemas.len(), 1);
}
