use thiserror::Error;

/// Failures surfaced while introspecting a catalog.
///
/// Lower-layer errors are wrapped with context, never replaced: an
/// [`IntrospectError::Aggregation`] always carries the sub-query failure that
/// caused it as its source.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// The underlying connection could not be established or died mid-session.
    /// Produced by the connection provider, never by the core itself.
    #[error("connection failed: {0}")]
    Connection(String),

    /// A catalog query failed to execute.
    #[error("catalog query '{query}' failed: {cause}")]
    Query {
        query: &'static str,
        cause: String,
    },

    /// A result row did not match the projection expected for its query.
    #[error("failed to decode {entity} row: {reason}")]
    Decode {
        entity: &'static str,
        reason: String,
    },

    /// A per-table composite fetch failed part-way through.
    #[error("failed to assemble table '{schema}.{table}'")]
    Aggregation {
        schema: String,
        table: String,
        #[source]
        source: Box<IntrospectError>,
    },
}
