use crate::connect::provider::RawRow;
use crate::error::IntrospectError;
use crate::model::{Column, Constraint, ForeignKey, PrimaryKey, Table};

// One decode function per query shape. Field order must match the query's
// projection in crate::catalog::queries.

/// Decodes a `schemas` row into the schema's name.
pub fn schema_name(row: &RawRow) -> Result<String, IntrospectError> {
    check_arity("schema", row, 1)?;
    required("schema", row, 0, "schema_name")
}

/// Decodes a `tables` / `tables_in_schema` row into an unpopulated table
/// header.
pub fn table_header(row: &RawRow) -> Result<Table, IntrospectError> {
    check_arity("table", row, 2)?;
    let schema = required("table", row, 0, "table_schema")?;
    let name = required("table", row, 1, "table_name")?;
    Ok(Table::header(schema, name))
}

/// Decodes a `columns` row. Optional catalog fields keep NULL as `None`.
pub fn column(row: &RawRow) -> Result<Column, IntrospectError> {
    check_arity("column", row, 12)?;
    Ok(Column {
        table_catalog: required("column", row, 0, "table_catalog")?,
        table_schema: required("column", row, 1, "table_schema")?,
        table_name: required("column", row, 2, "table_name")?,
        column_name: required("column", row, 3, "column_name")?,
        ordinal_position: required("column", row, 4, "ordinal_position")?,
        column_default: optional(row, 5),
        is_nullable: optional(row, 6),
        character_maximum_length: optional(row, 7),
        character_octet_length: optional(row, 8),
        numeric_precision: optional(row, 9),
        udt_name: optional(row, 10),
        dtd_identifier: optional(row, 11),
    })
}

/// Decodes a `primary_keys` row.
pub fn primary_key(row: &RawRow) -> Result<PrimaryKey, IntrospectError> {
    check_arity("primary key", row, 6)?;
    Ok(PrimaryKey {
        constraint: constraint("primary key", row)?,
    })
}

/// Decodes a `foreign_keys` row: the shared constraint fields plus the
/// referenced table/column/schema.
pub fn foreign_key(row: &RawRow) -> Result<ForeignKey, IntrospectError> {
    check_arity("foreign key", row, 9)?;
    Ok(ForeignKey {
        constraint: constraint("foreign key", row)?,
        foreign_table_name: required("foreign key", row, 6, "foreign_table_name")?,
        foreign_column_name: required("foreign key", row, 7, "foreign_column_name")?,
        foreign_schema_name: required("foreign key", row, 8, "foreign_table_schema")?,
    })
}

// Shared prefix of the primary_keys and foreign_keys projections.
fn constraint(entity: &'static str, row: &RawRow) -> Result<Constraint, IntrospectError> {
    Ok(Constraint {
        table_name: required(entity, row, 0, "table_name")?,
        table_schema: required(entity, row, 1, "table_schema")?,
        constraint_type: required(entity, row, 2, "constraint_type")?,
        constraint_name: required(entity, row, 3, "constraint_name")?,
        catalog: required(entity, row, 4, "constraint_catalog")?,
        column_name: required(entity, row, 5, "column_name")?,
    })
}

fn check_arity(entity: &'static str, row: &RawRow, expected: usize) -> Result<(), IntrospectError> {
    if row.len() != expected {
        return Err(IntrospectError::Decode {
            entity,
            reason: format!("expected {expected} fields, got {}", row.len()),
        });
    }
    Ok(())
}

fn required(
    entity: &'static str,
    row: &RawRow,
    idx: usize,
    field: &'static str,
) -> Result<String, IntrospectError> {
    row[idx].clone().ok_or_else(|| IntrospectError::Decode {
        entity,
        reason: format!("{field} is null"),
    })
}

fn optional(row: &RawRow, idx: usize) -> Option<String> {
    row[idx].clone()
}
