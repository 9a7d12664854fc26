//! Tests for the dynamic Value type.

use tabula_core::Value;

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
}

#[test]
fn test_display_string() {
    assert_eq!(Value::Null.display_string(), "");
    assert_eq!(Value::Bool(false).display_string(), "false");
    assert_eq!(Value::Int(-4).display_string(), "-4");
    assert_eq!(Value::Float(2.5).display_string(), "2.5");
    assert_eq!(Value::String("abc".into()).display_string(), "abc");
}

#[test]
fn test_as_f64_promotes_ints() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Float(0.25).as_f64(), Some(0.25));
    assert_eq!(Value::String("3".into()).as_f64(), None);
    assert_eq!(Value::Null.as_f64(), None);
}

#[test]
fn test_type_name() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::Float(0.0).type_name(), "float");
    assert_eq!(Value::String(String::new()).type_name(), "string");
}

#[test]
fn test_is_numeric() {
    assert!(Value::Int(1).is_numeric());
    assert!(Value::Float(1.0).is_numeric());
    assert!(!Value::Bool(true).is_numeric());
    assert!(!Value::Null.is_numeric());
}
