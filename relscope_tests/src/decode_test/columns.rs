use super::*;
use relscope_core::catalog::decode;
use relscope_core::error::IntrospectError;

#[test]
fn test_column_row_decodes_every_field() {
    let column = decode::column(&column_row()).unwrap();
    assert_eq!(column.table_catalog, "appdb");
    assert_eq!(column.table_schema, "public");
    assert_eq!(column.table_name, "users");
    assert_eq!(column.column_name, "email");
    assert_eq!(column.ordinal_position, "2");
    assert_eq!(column.is_nullable, Some("NO".to_string()));
    assert_eq!(column.character_maximum_length, Some("255".to_string()));
    assert_eq!(column.udt_name, Some("varchar".to_string()));
}

#[test]
fn test_null_optional_field_stays_absent() {
    let column = decode::column(&column_row()).unwrap();
    assert_eq!(column.column_default, None);
    assert_eq!(column.numeric_precision, None);
}

#[test]
fn test_empty_string_is_not_null() {
    let mut row = column_row();
    row[5] = cell("");
    let column = decode::column(&row).unwrap();
    // NULL and '' must stay distinguishable after decoding.
    assert_eq!(column.column_default, Some(String::new()));
}

#[test]
fn test_column_row_with_wrong_arity_fails() {
    let mut row = column_row();
    row.pop();
    let err = decode::column(&row).unwrap_err();
    match err {
        IntrospectError::Decode { entity, reason } => {
            assert_eq!(entity, "column");
            assert!(reason.contains("expected 12"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_column_row_with_null_required_field_fails() {
    let mut row = column_row();
    row[3] = None;
    let err = decode::column(&row).unwrap_err();
    match err {
        IntrospectError::Decode { reason, .. } => assert!(reason.contains("column_name")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_schema_name_row_decodes() {
    assert_eq!(decode::schema_name(&vec![cell("analytics")]).unwrap(), "analytics");
}

#[test]
fn test_schema_name_row_with_wrong_arity_fails() {
    let row = vec![cell("analytics"), cell("extra")];
    assert!(decode::schema_name(&row).is_err());
}

#[test]
fn test_table_header_row_decodes() {
    let table = decode::table_header(&vec![cell("public"), cell("users")]).unwrap();
    assert_eq!(table.schema, "public");
    assert_eq!(table.name, "users");
    assert!(table.columns.is_empty());
    assert!(table.primary_keys.is_empty());
    assert!(table.foreign_keys.is_empty());
}
