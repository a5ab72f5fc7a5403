//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use galoisfield::{ElementWithField, Field, Gf256};

#[test]
fn element_serializes_as_coefficients() {
    let f = Field::new(16).unwrap();
    let a = f.element(10).unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[0,1,0,1]");
}

#[test]
fn field_roundtrip() {
    let f = Field::new(256).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"order":256,"modulus":[1,1,0,1,1,0,0,0,1]}"#);
    let g: Field = serde_json::from_str(&json).unwrap();
    assert_eq!(g, f);
    assert_eq!(g.modulus_polynomial(), f.modulus_polynomial());
}

#[test]
fn prime_field_roundtrip() {
    let f = Field::new(17).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"order":17,"modulus":[1]}"#);
    let g: Field = serde_json::from_str(&json).unwrap();
    assert_eq!(g, f);
}

#[test]
fn degenerate_field_roundtrip() {
    let f = Field::new(729).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"order":729,"modulus":null}"#);
    let g: Field = serde_json::from_str(&json).unwrap();
    assert!(g.is_degenerate());
}

#[test]
fn field_invalid_order_fails() {
    let result: Result<Field, _> = serde_json::from_str(r#"{"order":12,"modulus":null}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("2² * 3"), "{}", err);
}

#[test]
fn field_wrong_modulus_degree_fails() {
    let result: Result<Field, _> = serde_json::from_str(r#"{"order":16,"modulus":[1,1,1]}"#);
    assert!(result.is_err());
}

#[test]
fn element_with_field_roundtrip() {
    let f = Field::new(27).unwrap();
    let a = f.element(17).unwrap();

    let with_field = ElementWithField::from_element(&a);
    let json = serde_json::to_string(&with_field).unwrap();
    assert!(json.contains("field"));
    assert!(json.contains("coeffs"));

    let back: ElementWithField = serde_json::from_str(&json).unwrap();
    let b = back.to_element().unwrap();
    assert_eq!(a, b);
    assert_eq!(b.field().modulus_polynomial(), f.modulus_polynomial());
}

#[test]
fn element_with_field_wrong_length_fails() {
    let json = r#"{"field":{"order":9,"modulus":[2,1,1]},"coeffs":[1,2,0]}"#;
    let with_field: ElementWithField = serde_json::from_str(json).unwrap();
    assert!(with_field.to_element().is_err());
}

#[test]
fn element_with_field_reduces_coefficients() {
    let json = r#"{"field":{"order":9,"modulus":[2,1,1]},"coeffs":[4,5]}"#;
    let with_field: ElementWithField = serde_json::from_str(json).unwrap();
    assert_eq!(with_field.to_element().unwrap().coeff(), &[1, 2]);
}

#[test]
fn gf256_roundtrip() {
    let a = Gf256::new(0xAE);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "174");
    let b: Gf256 = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}
