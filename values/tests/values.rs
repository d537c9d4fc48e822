use core::cmp::Ordering;

use arrayc_values::{
    ElementType, Pointer, Value,
    typed::{Element, slot_size},
};
use pretty_assertions::assert_eq;

// =============================================================================
// Tags and defaults
// =============================================================================

#[test]
fn type_tag_matches_variant() {
    assert_eq!(Value::from(1).type_tag(), ElementType::Int);
    assert_eq!(Value::from(1.5).type_tag(), ElementType::Float);
    assert_eq!(Value::from("a").type_tag(), ElementType::Text);
    assert_eq!(Value::from(b"a".as_slice()).type_tag(), ElementType::Bytes);
    assert_eq!(Value::from(true).type_tag(), ElementType::Bool);
    assert_eq!(Value::from(Pointer(8)).type_tag(), ElementType::Pointer);
}

#[test]
fn default_for_every_type() {
    assert_eq!(Value::default_for(ElementType::Int), Value::Int(0));
    assert_eq!(Value::default_for(ElementType::Float), Value::Float(0.0));
    assert_eq!(Value::default_for(ElementType::Text), Value::Text(String::new()));
    assert_eq!(Value::default_for(ElementType::Bytes), Value::Bytes(Vec::new()));
    assert_eq!(Value::default_for(ElementType::Bool), Value::Bool(false));
    assert_eq!(Value::default_for(ElementType::Pointer), Value::Pointer(Pointer::NULL));
    for ty in ElementType::ALL {
        assert_eq!(Value::default_for(ty).type_tag(), ty);
    }
}

#[test]
fn slot_sizes() {
    assert_eq!(slot_size(ElementType::Int), 8);
    assert_eq!(slot_size(ElementType::Float), 8);
    assert_eq!(slot_size(ElementType::Bool), 1);
    assert_eq!(slot_size(ElementType::Pointer), core::mem::size_of::<usize>());
    assert_eq!(slot_size(ElementType::Text), core::mem::size_of::<String>());
}

// =============================================================================
// Coercion
// =============================================================================

#[test]
fn coerce_numeric_widening() {
    assert_eq!(Value::Int(3).coerce(ElementType::Float), Ok(Value::Float(3.0)));
    assert_eq!(Value::Bool(true).coerce(ElementType::Int), Ok(Value::Int(1)));
    assert_eq!(Value::Int(0).coerce(ElementType::Bool), Ok(Value::Bool(false)));
    assert_eq!(Value::Int(-2).coerce(ElementType::Bool), Ok(Value::Bool(true)));
    assert_eq!(
        Value::Int(16).coerce(ElementType::Pointer),
        Ok(Value::Pointer(Pointer(16)))
    );
}

#[test]
fn coerce_rejects_lossy_or_foreign() {
    assert_eq!(Value::Float(1.5).coerce(ElementType::Int), Err(Value::Float(1.5)));
    assert_eq!(Value::Int(1).coerce(ElementType::Text), Err(Value::Int(1)));
    assert_eq!(Value::from("x").coerce(ElementType::Bytes), Err(Value::from("x")));
    assert_eq!(Value::Int(-1).coerce(ElementType::Pointer), Err(Value::Int(-1)));
}

#[test]
fn from_value_matches_coerce() {
    assert_eq!(i64::from_value(Value::Bool(true)), Ok(1));
    assert_eq!(String::from_value(Value::Int(1)), Err(Value::Int(1)));
    assert_eq!(<Vec<u8>>::from_value(Value::Bytes(vec![1])), Ok(vec![1]));
}

// =============================================================================
// Equality and ordering
// =============================================================================

#[test]
fn float_equality_is_ieee() {
    assert!(!f64::NAN.equals(&f64::NAN));
    assert!(0.0f64.equals(&-0.0));
}

#[test]
fn total_cmp_within_and_across_types() {
    assert_eq!(Value::Int(1).total_cmp(&Value::Int(2)), Ordering::Less);
    assert_eq!(Value::from("b").total_cmp(&Value::from("a")), Ordering::Greater);
    assert_eq!(
        Value::Float(f64::NAN).total_cmp(&Value::Float(f64::INFINITY)),
        Ordering::Greater
    );
    assert_eq!(Value::Bool(true).total_cmp(&Value::Int(0)), Ordering::Less);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_forms() {
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::Float(0.0).to_string(), "0.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::from("hi").to_string(), "\"hi\"");
    assert_eq!(Value::from(b"a\n".as_slice()).to_string(), "b\"a\\n\"");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Pointer(Pointer::NULL).to_string(), "null");
    assert_eq!(Value::Pointer(Pointer(255)).to_string(), "0xff");
}
