pub mod catalog;
pub mod connect;
pub mod error;
pub mod model;

use catalog::inspect;
use connect::{Connection, DatabaseConfig, PostgresConnection};
use error::IntrospectError;
use model::{Column, ForeignKey, PrimaryKey, Schema, Table};

/// Read-only view over one database's catalog.
///
/// Every operation re-queries the catalog and rebuilds its result from
/// scratch; nothing is cached between calls. Each call returns either a
/// complete result or an error, never a partial one.
pub struct Introspector {
    conn: Box<dyn Connection>,
}

impl Introspector {
    /// Opens a PostgreSQL-backed introspector for `config`.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, IntrospectError> {
        Ok(Self::new(Box::new(PostgresConnection::connect(config)?)))
    }

    /// Wraps an already-open connection.
    pub fn new(conn: Box<dyn Connection>) -> Self {
        Self { conn }
    }

    /// All user schemas, with `tables` left empty.
    pub fn schemas(&mut self) -> Result<Vec<Schema>, IntrospectError> {
        inspect::schemas(self.conn.as_mut())
    }

    /// Every table outside the system schemas, fully populated.
    pub fn tables(&mut self) -> Result<Vec<Table>, IntrospectError> {
        inspect::tables(self.conn.as_mut())
    }

    /// Every table in one schema, fully populated.
    pub fn tables_in_schema(&mut self, schema: &str) -> Result<Vec<Table>, IntrospectError> {
        inspect::tables_in_schema(self.conn.as_mut(), schema)
    }

    /// Columns of one table; `name` may be bare or "schema.table".
    pub fn table_columns(&mut self, name: &str) -> Result<Vec<Column>, IntrospectError> {
        inspect::table_columns(self.conn.as_mut(), name)
    }

    /// Primary keys of one table; `name` may be bare or "schema.table".
    pub fn table_primary_keys(&mut self, name: &str) -> Result<Vec<PrimaryKey>, IntrospectError> {
        inspect::table_primary_keys(self.conn.as_mut(), name)
    }

    /// Foreign keys of one table; `name` may be bare or "schema.table".
    pub fn table_foreign_keys(&mut self, name: &str) -> Result<Vec<ForeignKey>, IntrospectError> {
        inspect::table_foreign_keys(self.conn.as_mut(), name)
    }
}
