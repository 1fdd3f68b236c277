use serde::{Deserialize, Serialize};

/// One row of the catalog's column listing for a table.
///
/// Optional fields mirror catalog NULLs directly: an absent value is `None`,
/// never an empty string, so NULL and `''` stay distinguishable all the way
/// to the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub table_catalog: String,
    pub table_schema: String,
    pub table_name: String,
    pub column_name: String,
    pub ordinal_position: String,
    pub column_default: Option<String>,
    pub is_nullable: Option<String>,
    pub character_maximum_length: Option<String>,
    pub character_octet_length: Option<String>,
    pub numeric_precision: Option<String>,
    pub udt_name: Option<String>,
    pub dtd_identifier: Option<String>,
}

impl Column {
    pub fn column_default(&self) -> &str {
        self.column_default.as_deref().unwrap_or("")
    }

    /// True only when the catalog reports exactly "YES".
    pub fn is_nullable(&self) -> bool {
        self.is_nullable.as_deref() == Some("YES")
    }

    /// Stored length as an integer; 0 when absent or not numeric.
    pub fn character_maximum_length(&self) -> i64 {
        parse_or_zero(&self.character_maximum_length)
    }

    pub fn character_octet_length(&self) -> i64 {
        parse_or_zero(&self.character_octet_length)
    }

    pub fn numeric_precision(&self) -> i64 {
        parse_or_zero(&self.numeric_precision)
    }

    pub fn udt_name(&self) -> &str {
        self.udt_name.as_deref().unwrap_or("")
    }

    pub fn dtd_identifier(&self) -> &str {
        self.dtd_identifier.as_deref().unwrap_or("")
    }
}

fn parse_or_zero(field: &Option<String>) -> i64 {
    field.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0)
}
