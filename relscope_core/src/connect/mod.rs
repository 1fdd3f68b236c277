pub mod config;
pub mod postgres;
pub mod provider;

// Re-export main types for convenience
pub use config::DatabaseConfig;
pub use postgres::PostgresConnection;
pub use provider::{Connection, RawRow};
