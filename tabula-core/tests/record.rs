//! Tests for Record field access and identity.

use tabula_core::{FieldError, Record, Value};

#[test]
fn test_builder_and_get() {
    let record = Record::new().set("name", "Beta").set("score", 10i64);
    assert_eq!(record.get("name"), Some(&Value::String("Beta".into())));
    assert_eq!(record.get("score"), Some(&Value::Int(10)));
    assert_eq!(record.get("missing"), None);
    assert_eq!(record.len(), 2);
}

#[test]
fn test_typed_getters() {
    let record = Record::new()
        .set("name", "Beta")
        .set("count", 3i64)
        .set("ratio", 0.5)
        .set("active", true);

    assert_eq!(record.get_string("name").unwrap(), Some("Beta"));
    assert_eq!(record.get_i64("count").unwrap(), Some(3));
    assert_eq!(record.get_f64("ratio").unwrap(), Some(0.5));
    assert_eq!(record.get_bool("active").unwrap(), Some(true));
}

#[test]
fn test_typed_getter_absent_and_null_are_none() {
    let record = Record::new().set("gone", Value::Null);
    assert_eq!(record.get_string("gone").unwrap(), None);
    assert_eq!(record.get_string("absent").unwrap(), None);
}

#[test]
fn test_typed_getter_type_mismatch() {
    let record = Record::new().set("count", 3i64);
    let err = record.get_string("count").unwrap_err();
    assert!(matches!(err, FieldError::TypeMismatch { .. }));
    assert!(err.to_string().contains("count"));
}

#[test]
fn test_get_f64_accepts_int() {
    let record = Record::new().set("count", 3i64);
    assert_eq!(record.get_f64("count").unwrap(), Some(3.0));
}

#[test]
fn test_key_from_any_value_type() {
    let record = Record::new().set("id", 7i64);
    assert_eq!(record.key("id"), Some("7".to_string()));

    let record = Record::new().set("id", "abc");
    assert_eq!(record.key("id"), Some("abc".to_string()));
}

#[test]
fn test_key_absent_or_null_is_none() {
    let record = Record::new().set("id", Value::Null);
    assert_eq!(record.key("id"), None);
    assert_eq!(Record::new().key("id"), None);
}

#[test]
fn test_display_string_for_filtering() {
    let record = Record::new().set("score", 10i64).set("note", Value::Null);
    assert_eq!(record.display_string("score"), "10");
    assert_eq!(record.display_string("note"), "");
    assert_eq!(record.display_string("absent"), "");
}
