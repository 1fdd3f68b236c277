/// A catalog lookup: its identity plus the SQL it runs.
///
/// The name tags errors and pairs each query with its decode function in
/// [`crate::catalog::decode`]; keep the two in sync when changing a
/// projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

/// All user schemas. System schemas (pg_ prefix, information_schema) are
/// filtered out in SQL; result order is whatever the server returns.
pub const SCHEMAS: CatalogQuery = CatalogQuery {
    name: "schemas",
    sql: "
        SELECT schema_name
        FROM information_schema.schemata
        WHERE schema_name NOT LIKE 'pg_%'
        AND schema_name NOT LIKE 'information_schema'
    ",
};

/// Every (schema, table) pair outside the two built-in system schemas.
pub const TABLES: CatalogQuery = CatalogQuery {
    name: "tables",
    sql: "
        SELECT
            table_schema,
            table_name
        FROM information_schema.tables
        WHERE table_schema NOT IN ('pg_catalog', 'information_schema')
    ",
};

pub const TABLES_IN_SCHEMA: CatalogQuery = CatalogQuery {
    name: "tables_in_schema",
    sql: "
        SELECT
            table_schema,
            table_name
        FROM information_schema.tables
        WHERE table_schema = $1
    ",
};

/// Column projection for one table. cardinal_number fields are cast to text
/// so every cell decodes uniformly as an optional string. No ORDER BY:
/// callers must not assume ordinal order.
pub const COLUMNS: CatalogQuery = CatalogQuery {
    name: "columns",
    sql: "
        SELECT
            table_catalog,
            table_schema,
            table_name,
            column_name,
            ordinal_position::text,
            column_default,
            is_nullable,
            character_maximum_length::text,
            character_octet_length::text,
            numeric_precision::text,
            udt_name,
            dtd_identifier
        FROM
            information_schema.columns
        WHERE
            table_name = $1
            AND table_schema = $2
    ",
};

pub const PRIMARY_KEYS: CatalogQuery = CatalogQuery {
    name: "primary_keys",
    sql: "
        SELECT
            tc.table_name,
            tc.table_schema,
            tc.constraint_type,
            tc.constraint_name,
            tc.constraint_catalog,
            kcu.column_name
        FROM
            information_schema.key_column_usage AS kcu
        JOIN
            information_schema.table_constraints AS tc
            ON kcu.constraint_name = tc.constraint_name
            AND kcu.table_schema = tc.table_schema
        JOIN
            information_schema.constraint_column_usage AS ccu
            ON ccu.constraint_name = tc.constraint_name
            AND ccu.table_schema = tc.table_schema
        WHERE
            tc.constraint_type = 'PRIMARY KEY'
            AND kcu.table_name = $1
            AND kcu.table_schema = $2
    ",
};

/// Same join as [`PRIMARY_KEYS`] but also projects the referenced column out
/// of constraint_column_usage.
pub const FOREIGN_KEYS: CatalogQuery = CatalogQuery {
    name: "foreign_keys",
    sql: "
        SELECT
            tc.table_name,
            tc.table_schema,
            tc.constraint_type,
            tc.constraint_name,
            tc.constraint_catalog,
            kcu.column_name,
            ccu.table_name AS foreign_table_name,
            ccu.column_name AS foreign_column_name,
            ccu.table_schema AS foreign_table_schema
        FROM
            information_schema.key_column_usage AS kcu
        JOIN
            information_schema.table_constraints AS tc
            ON kcu.constraint_name = tc.constraint_name
            AND kcu.table_schema = tc.table_schema
        JOIN
            information_schema.constraint_column_usage AS ccu
            ON ccu.constraint_name = tc.constraint_name
            AND ccu.table_schema = tc.table_schema
        WHERE
            tc.constraint_type = 'FOREIGN KEY'
            AND kcu.table_name = $1
            AND kcu.table_schema = $2
    ",
};
