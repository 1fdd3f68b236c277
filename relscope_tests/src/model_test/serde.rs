use super::*;
use anyhow::Result;
use relscope_core::model::{Constraint, PrimaryKey, Schema, Table};

#[test]
fn test_column_serializes_with_catalog_field_names() -> Result<()> {
    let mut column = sample_column();
    column.is_nullable = Some("YES".to_string());
    let json = serde_json::to_value(&column)?;

    assert_eq!(json["table_schema"], "public");
    assert_eq!(json["column_name"], "email");
    assert_eq!(json["ordinal_position"], "2");
    assert_eq!(json["is_nullable"], "YES");
    // absent catalog values serialize as null, not ""
    assert!(json["column_default"].is_null());
    Ok(())
}

#[test]
fn test_primary_key_serializes_flattened() -> Result<()> {
    let pk = PrimaryKey {
        constraint: Constraint {
            constraint_name: "users_pkey".to_string(),
            constraint_type: "PRIMARY KEY".to_string(),
            column_name: "id".to_string(),
            table_name: "users".to_string(),
            table_schema: "public".to_string(),
            catalog: "appdb".to_string(),
        },
    };
    let json = serde_json::to_value(&pk)?;

    // constraint fields sit at the top level, mirroring the wire shape
    assert_eq!(json["constraint_name"], "users_pkey");
    assert_eq!(json["constraint_type"], "PRIMARY KEY");
    assert_eq!(json["column_name"], "id");
    Ok(())
}

#[test]
fn test_schema_nests_tables() -> Result<()> {
    let schema = Schema {
        name: "public".to_string(),
        tables: vec![Table::header("public".to_string(), "users".to_string())],
    };
    let json = serde_json::to_value(&schema)?;

    assert_eq!(json["name"], "public");
    assert_eq!(json["tables"][0]["name"], "users");
    assert_eq!(json["tables"][0]["columns"], serde_json::json!([]));
    Ok(())
}
