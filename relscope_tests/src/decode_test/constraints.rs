use super::*;
use relscope_core::catalog::decode;
use relscope_core::connect::RawRow;
use relscope_core::error::IntrospectError;

fn pk_row() -> RawRow {
    vec![
        cell("users"),
        cell("public"),
        cell("PRIMARY KEY"),
        cell("users_pkey"),
        cell("appdb"),
        cell("id"),
    ]
}

fn fk_row() -> RawRow {
    vec![
        cell("orders"),
        cell("public"),
        cell("FOREIGN KEY"),
        cell("orders_user_id_fkey"),
        cell("appdb"),
        cell("user_id"),
        cell("users"),
        cell("id"),
        cell("public"),
    ]
}

#[test]
fn test_primary_key_row_decodes_in_projection_order() {
    let pk = decode::primary_key(&pk_row()).unwrap();
    assert_eq!(pk.constraint.table_name, "users");
    assert_eq!(pk.constraint.table_schema, "public");
    assert_eq!(pk.constraint.constraint_type, "PRIMARY KEY");
    assert_eq!(pk.constraint.constraint_name, "users_pkey");
    assert_eq!(pk.constraint.catalog, "appdb");
    assert_eq!(pk.constraint.column_name, "id");
}

#[test]
fn test_foreign_key_row_decodes_referenced_column() {
    let fk = decode::foreign_key(&fk_row()).unwrap();
    assert_eq!(fk.constraint.table_name, "orders");
    assert_eq!(fk.constraint.constraint_type, "FOREIGN KEY");
    assert_eq!(fk.constraint.column_name, "user_id");
    assert_eq!(fk.foreign_table_name, "users");
    assert_eq!(fk.foreign_column_name, "id");
    assert_eq!(fk.foreign_schema_name, "public");
}

#[test]
fn test_primary_key_row_with_wrong_arity_fails() {
    // A foreign-key-shaped row must not decode as a primary key.
    let err = decode::primary_key(&fk_row()).unwrap_err();
    match err {
        IntrospectError::Decode { entity, reason } => {
            assert_eq!(entity, "primary key");
            assert!(reason.contains("expected 6"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_foreign_key_row_with_null_reference_fails() {
    let mut row = fk_row();
    row[6] = None;
    let err = decode::foreign_key(&row).unwrap_err();
    match err {
        IntrospectError::Decode { reason, .. } => {
            assert!(reason.contains("foreign_table_name"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}
