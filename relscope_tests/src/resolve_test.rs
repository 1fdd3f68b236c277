use relscope_core::catalog::{DEFAULT_SCHEMA, split_qualified};

#[test]
fn test_qualified_name_splits_into_schema_and_table() {
    assert_eq!(split_qualified("analytics.events"), ("analytics", "events"));
}

#[test]
fn test_bare_name_defaults_to_public() {
    assert_eq!(split_qualified("users"), (DEFAULT_SCHEMA, "users"));
    assert_eq!(split_qualified("users"), ("public", "users"));
}

#[test]
fn test_doubly_qualified_name_drops_trailing_segments() {
    // Pinned behavior: everything after the second separator is ignored.
    assert_eq!(split_qualified("a.b.c"), ("a", "b"));
    assert_eq!(split_qualified("a.b.c.d"), ("a", "b"));
}

#[test]
fn test_trailing_separator_yields_empty_table() {
    assert_eq!(split_qualified("a."), ("a", ""));
}

#[test]
fn test_leading_separator_yields_empty_schema() {
    assert_eq!(split_qualified(".users"), ("", "users"));
}

#[test]
fn test_empty_name_never_fails() {
    assert_eq!(split_qualified(""), ("public", ""));
}
