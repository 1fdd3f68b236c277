use postgres::types::ToSql;
use postgres::{Client, NoTls};
use tracing::{error, info};

use crate::catalog::queries::CatalogQuery;
use crate::connect::config::DatabaseConfig;
use crate::connect::provider::{Connection, RawRow};
use crate::error::IntrospectError;

/// Blocking PostgreSQL-backed [`Connection`].
pub struct PostgresConnection {
    client: Client,
}

impl PostgresConnection {
    /// Opens a client for `config` and verifies it with one round trip
    /// before handing it out.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, IntrospectError> {
        info!(dsn = %config.redacted_dsn(), "connecting to database");
        let mut client = Client::connect(&config.dsn(), NoTls).map_err(|e| {
            error!(error = %e, "failed to connect to database");
            IntrospectError::Connection(e.to_string())
        })?;
        client.simple_query("SELECT 1").map_err(|e| {
            error!(error = %e, "failed to ping database");
            IntrospectError::Connection(e.to_string())
        })?;
        Ok(Self { client })
    }
}

impl Connection for PostgresConnection {
    fn execute_query(
        &mut self,
        query: &CatalogQuery,
        params: &[&str],
    ) -> Result<Vec<RawRow>, IntrospectError> {
        let bound: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        // query() drains the result set and releases the portal before
        // returning, on success and on error alike.
        let rows = self.client.query(query.sql, &bound).map_err(|e| {
            error!(query = query.name, error = %e, "catalog query failed");
            IntrospectError::Query {
                query: query.name,
                cause: e.to_string(),
            }
        })?;

        let mut raw = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut cells: RawRow = Vec::with_capacity(row.len());
            for idx in 0..row.len() {
                let cell: Option<String> = row.try_get(idx).map_err(|e| {
                    error!(query = query.name, column = idx, error = %e, "failed to read cell");
                    IntrospectError::Query {
                        query: query.name,
                        cause: e.to_string(),
                    }
                })?;
                cells.push(cell);
            }
            raw.push(cells);
        }
        Ok(raw)
    }
}
