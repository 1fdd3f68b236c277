use tracing::debug;

use crate::catalog::{decode, queries, resolve};
use crate::connect::provider::{Connection, RawRow};
use crate::error::IntrospectError;
use crate::model::{Column, ForeignKey, PrimaryKey, Schema, Table};

/// Lists all user schemas. The returned schemas carry no tables; callers
/// stitch tables in when they want the nested view.
pub fn schemas(conn: &mut dyn Connection) -> Result<Vec<Schema>, IntrospectError> {
    let rows = conn.execute_query(&queries::SCHEMAS, &[])?;
    let mut result = Vec::with_capacity(rows.len());
    for row in &rows {
        result.push(Schema {
            name: decode::schema_name(row)?,
            tables: Vec::new(),
        });
    }
    debug!(count = result.len(), "listed schemas");
    Ok(result)
}

/// Lists every table outside the system schemas, each fully populated with
/// its columns, primary keys, and foreign keys.
///
/// The first per-table failure aborts the enumeration; no partial catalog is
/// returned.
pub fn tables(conn: &mut dyn Connection) -> Result<Vec<Table>, IntrospectError> {
    let rows = conn.execute_query(&queries::TABLES, &[])?;
    collect_tables(conn, &rows)
}

/// Same as [`tables`] but restricted to one schema.
pub fn tables_in_schema(
    conn: &mut dyn Connection,
    schema: &str,
) -> Result<Vec<Table>, IntrospectError> {
    let rows = conn.execute_query(&queries::TABLES_IN_SCHEMA, &[schema])?;
    collect_tables(conn, &rows)
}

/// Columns of one table. `name` may be bare or schema-qualified.
pub fn table_columns(
    conn: &mut dyn Connection,
    name: &str,
) -> Result<Vec<Column>, IntrospectError> {
    let (schema, table) = resolve::split_qualified(name);
    let rows = conn.execute_query(&queries::COLUMNS, &[table, schema])?;
    rows.iter().map(decode::column).collect()
}

/// Primary keys of one table. `name` may be bare or schema-qualified.
pub fn table_primary_keys(
    conn: &mut dyn Connection,
    name: &str,
) -> Result<Vec<PrimaryKey>, IntrospectError> {
    let (schema, table) = resolve::split_qualified(name);
    let rows = conn.execute_query(&queries::PRIMARY_KEYS, &[table, schema])?;
    rows.iter().map(decode::primary_key).collect()
}

/// Foreign keys of one table. `name` may be bare or schema-qualified.
pub fn table_foreign_keys(
    conn: &mut dyn Connection,
    name: &str,
) -> Result<Vec<ForeignKey>, IntrospectError> {
    let (schema, table) = resolve::split_qualified(name);
    let rows = conn.execute_query(&queries::FOREIGN_KEYS, &[table, schema])?;
    rows.iter().map(decode::foreign_key).collect()
}

fn collect_tables(
    conn: &mut dyn Connection,
    rows: &[RawRow],
) -> Result<Vec<Table>, IntrospectError> {
    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let mut table = decode::table_header(row)?;
        populate_table(conn, &mut table)?;
        result.push(table);
    }
    debug!(count = result.len(), "listed tables");
    Ok(result)
}

/// Fills in a table header by running the three per-table lookups in order:
/// columns, primary keys, foreign keys. Fails fast: the first sub-query
/// failure is wrapped and returned, and the partially filled table is
/// dropped.
fn populate_table(conn: &mut dyn Connection, table: &mut Table) -> Result<(), IntrospectError> {
    let qualified = table.qualified_name();
    debug!(table = %qualified, "populating table");

    table.columns = table_columns(conn, &qualified).map_err(|e| aggregation(table, e))?;
    table.primary_keys = table_primary_keys(conn, &qualified).map_err(|e| aggregation(table, e))?;
    table.foreign_keys = table_foreign_keys(conn, &qualified).map_err(|e| aggregation(table, e))?;
    Ok(())
}

fn aggregation(table: &Table, source: IntrospectError) -> IntrospectError {
    IntrospectError::Aggregation {
        schema: table.schema.clone(),
        table: table.name.clone(),
        source: Box::new(source),
    }
}
