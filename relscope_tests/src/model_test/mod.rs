use relscope_core::model::Column;

fn sample_column() -> Column {
    Column {
        table_catalog: "appdb".to_string(),
        table_schema: "public".to_string(),
        table_name: "users".to_string(),
        column_name: "email".to_string(),
        ordinal_position: "2".to_string(),
        column_default: None,
        is_nullable: None,
        character_maximum_length: None,
        character_octet_length: None,
        numeric_precision: None,
        udt_name: None,
        dtd_identifier: None,
    }
}

mod accessors;
mod serde;
