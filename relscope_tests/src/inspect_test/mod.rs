use std::collections::HashMap;

use relscope_core::catalog::CatalogQuery;
use relscope_core::connect::{Connection, RawRow};
use relscope_core::error::IntrospectError;

/// In-memory [`Connection`] serving canned catalog rows, keyed the same way
/// the real queries are: per-table lookups by (table, schema). Records every
/// query it executes and can be told to fail a specific one.
#[derive(Default)]
pub struct FakeConnection {
    pub schemas: Vec<RawRow>,
    pub tables: Vec<RawRow>,
    pub columns: HashMap<(String, String), Vec<RawRow>>,
    pub primary_keys: HashMap<(String, String), Vec<RawRow>>,
    pub foreign_keys: HashMap<(String, String), Vec<RawRow>>,
    pub fail_on: Option<&'static str>,
    pub executed: Vec<String>,
}

impl FakeConnection {
    fn per_table(
        map: &HashMap<(String, String), Vec<RawRow>>,
        params: &[&str],
    ) -> Vec<RawRow> {
        let key = (params[0].to_string(), params[1].to_string());
        map.get(&key).cloned().unwrap_or_default()
    }
}

impl Connection for FakeConnection {
    fn execute_query(
        &mut self,
        query: &CatalogQuery,
        params: &[&str],
    ) -> Result<Vec<RawRow>, IntrospectError> {
        self.executed.push(query.name.to_string());
        if self.fail_on == Some(query.name) {
            return Err(IntrospectError::Query {
                query: query.name,
                cause: "simulated failure".to_string(),
            });
        }
        match query.name {
            "schemas" => Ok(self.schemas.clone()),
            "tables" => Ok(self.tables.clone()),
            "tables_in_schema" => Ok(self
                .tables
                .iter()
                .filter(|row| row[0].as_deref() == Some(params[0]))
                .cloned()
                .collect()),
            "columns" => Ok(Self::per_table(&self.columns, params)),
            "primary_keys" => Ok(Self::per_table(&self.primary_keys, params)),
            "foreign_keys" => Ok(Self::per_table(&self.foreign_keys, params)),
            other => panic!("unexpected query '{other}'"),
        }
    }
}

fn cell(v: &str) -> Option<String> {
    Some(v.to_string())
}

pub fn schema_row(name: &str) -> RawRow {
    vec![cell(name)]
}

pub fn table_row(schema: &str, name: &str) -> RawRow {
    vec![cell(schema), cell(name)]
}

pub fn column_row(schema: &str, table: &str, name: &str, position: &str, udt: &str) -> RawRow {
    vec![
        cell("appdb"),
        cell(schema),
        cell(table),
        cell(name),
        cell(position),
        None,
        cell("NO"),
        None,
        None,
        None,
        cell(udt),
        cell(position),
    ]
}

pub fn pk_row(schema: &str, table: &str, column: &str) -> RawRow {
    vec![
        cell(table),
        cell(schema),
        cell("PRIMARY KEY"),
        cell(&format!("{table}_pkey")),
        cell("appdb"),
        cell(column),
    ]
}

pub fn fk_row(
    schema: &str,
    table: &str,
    column: &str,
    foreign_table: &str,
    foreign_column: &str,
) -> RawRow {
    vec![
        cell(table),
        cell(schema),
        cell("FOREIGN KEY"),
        cell(&format!("{table}_{column}_fkey")),
        cell("appdb"),
        cell(column),
        cell(foreign_table),
        cell(foreign_column),
        cell(schema),
    ]
}

/// A "public" schema with users(id, email) and orders(id, user_id -> users.id).
pub fn users_orders_fixture() -> FakeConnection {
    let mut conn = FakeConnection::default();
    conn.schemas = vec![schema_row("public")];
    conn.tables = vec![table_row("public", "users"), table_row("public", "orders")];

    let users = ("users".to_string(), "public".to_string());
    let orders = ("orders".to_string(), "public".to_string());

    conn.columns.insert(
        users.clone(),
        vec![
            column_row("public", "users", "id", "1", "int4"),
            column_row("public", "users", "email", "2", "text"),
        ],
    );
    conn.columns.insert(
        orders.clone(),
        vec![
            column_row("public", "orders", "id", "1", "int4"),
            column_row("public", "orders", "user_id", "2", "int4"),
        ],
    );

    conn.primary_keys
        .insert(users.clone(), vec![pk_row("public", "users", "id")]);
    conn.primary_keys
        .insert(orders.clone(), vec![pk_row("public", "orders", "id")]);

    conn.foreign_keys.insert(
        orders,
        vec![fk_row("public", "orders", "user_id", "users", "id")],
    );
    conn
}

mod failures;
mod lookups;
mod schemas;
mod tables;
