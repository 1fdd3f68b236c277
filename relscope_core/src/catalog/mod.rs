pub mod decode;
pub mod inspect;
pub mod queries;
pub mod resolve;

// Re-export main entry points for convenience
pub use inspect::{
    schemas, table_columns, table_foreign_keys, table_primary_keys, tables, tables_in_schema,
};
pub use queries::CatalogQuery;
pub use resolve::{DEFAULT_SCHEMA, split_qualified};
