use serde::{Deserialize, Serialize};

use crate::model::column::Column;
use crate::model::constraint::{ForeignKey, PrimaryKey};

/// A table identified by its (schema, name) pair, carrying everything the
/// catalog knows about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub primary_keys: Vec<PrimaryKey>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// A bare (schema, name) header with nothing populated yet.
    pub fn header(schema: String, name: String) -> Self {
        Self {
            schema,
            name,
            columns: Vec::new(),
            primary_keys: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// The "schema.table" form used to key the per-table catalog lookups.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// A schema and the tables it owns. Ownership is presentational: the schema
/// listing returns these with `tables` empty, and callers stitch tables in
/// when they want the nested view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub tables: Vec<Table>,
}
