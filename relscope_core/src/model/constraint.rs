use serde::{Deserialize, Serialize};

/// A named rule on a table, as reported by the constraint catalog views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub constraint_name: String,
    pub constraint_type: String,
    pub column_name: String,
    pub table_name: String,
    pub table_schema: String,
    pub catalog: String,
}

/// A primary-key constraint. The constraint type is "PRIMARY KEY" by
/// construction; the query filter is trusted, not re-validated at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKey {
    #[serde(flatten)]
    pub constraint: Constraint,
}

/// A foreign-key constraint plus the column it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    #[serde(flatten)]
    pub constraint: Constraint,
    pub foreign_table_name: String,
    pub foreign_column_name: String,
    pub foreign_schema_name: String,
}
