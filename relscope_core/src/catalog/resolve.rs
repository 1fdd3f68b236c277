/// Schema assumed for unqualified table names.
pub const DEFAULT_SCHEMA: &str = "public";

/// Splits a possibly schema-qualified identifier into (schema, table).
///
/// Bare names resolve to [`DEFAULT_SCHEMA`]. A doubly-qualified name like
/// "a.b.c" yields ("a", "b"); the trailing segments are ignored. Never fails.
pub fn split_qualified(name: &str) -> (&str, &str) {
    match name.split_once('.') {
        None => (DEFAULT_SCHEMA, name),
        Some((schema, rest)) => match rest.split_once('.') {
            None => (schema, rest),
            Some((table, _)) => (schema, table),
        },
    }
}
