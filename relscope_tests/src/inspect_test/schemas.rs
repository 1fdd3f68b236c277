use super::*;
use relscope_core::catalog::inspect;

#[test]
fn test_schemas_lists_user_schemas() {
    let mut conn = FakeConnection::default();
    conn.schemas = vec![schema_row("public"), schema_row("analytics")];

    let schemas = inspect::schemas(&mut conn).unwrap();
    let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["public", "analytics"]);
}

#[test]
fn test_schemas_carry_no_tables() {
    let mut conn = users_orders_fixture();
    let schemas = inspect::schemas(&mut conn).unwrap();
    assert!(schemas.iter().all(|s| s.tables.is_empty()));
}

#[test]
fn test_schemas_issue_a_single_query() {
    let mut conn = users_orders_fixture();
    inspect::schemas(&mut conn).unwrap();
    assert_eq!(conn.executed, vec!["schemas"]);
}
