use super::*;

#[test]
fn test_is_nullable_true_only_for_exact_yes() {
    let mut column = sample_column();
    column.is_nullable = Some("YES".to_string());
    assert!(column.is_nullable());

    for other in ["yes", "Yes", "Y", "NO", "no", ""] {
        column.is_nullable = Some(other.to_string());
        assert!(!column.is_nullable(), "{other:?} must not read as nullable");
    }

    column.is_nullable = None;
    assert!(!column.is_nullable());
}

#[test]
fn test_numeric_accessors_parse_stored_string() {
    let mut column = sample_column();
    column.character_maximum_length = Some("255".to_string());
    column.character_octet_length = Some("1020".to_string());
    column.numeric_precision = Some("32".to_string());
    assert_eq!(column.character_maximum_length(), 255);
    assert_eq!(column.character_octet_length(), 1020);
    assert_eq!(column.numeric_precision(), 32);
}

#[test]
fn test_numeric_accessors_fall_back_to_zero() {
    let mut column = sample_column();
    assert_eq!(column.character_maximum_length(), 0);
    assert_eq!(column.numeric_precision(), 0);

    column.character_maximum_length = Some("not-a-number".to_string());
    column.numeric_precision = Some(String::new());
    assert_eq!(column.character_maximum_length(), 0);
    assert_eq!(column.numeric_precision(), 0);
}

#[test]
fn test_string_accessors_fall_back_to_empty() {
    let mut column = sample_column();
    assert_eq!(column.column_default(), "");
    assert_eq!(column.udt_name(), "");
    assert_eq!(column.dtd_identifier(), "");

    column.column_default = Some("now()".to_string());
    column.udt_name = Some("timestamptz".to_string());
    assert_eq!(column.column_default(), "now()");
    assert_eq!(column.udt_name(), "timestamptz");
}
