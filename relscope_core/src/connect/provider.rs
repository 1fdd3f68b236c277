use crate::catalog::queries::CatalogQuery;
use crate::error::IntrospectError;

/// A single catalog result row: one optional text value per projected column.
/// NULL cells stay `None`.
pub type RawRow = Vec<Option<String>>;

/// Live database handle capable of running parameterized catalog queries.
///
/// Implementations must drain the result set and release the server-side
/// cursor before returning, on success and on error, so the next query always
/// starts against a clean session.
pub trait Connection {
    /// Runs `query` with positional string `params` and returns every row.
    fn execute_query(
        &mut self,
        query: &CatalogQuery,
        params: &[&str],
    ) -> Result<Vec<RawRow>, IntrospectError>;
}
