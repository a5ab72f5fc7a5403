//! Field Basics
//!
//! This example demonstrates:
//! - Building GF(p) and GF(p^m) from an order
//! - Converting between integers, coefficient vectors and elements
//! - Field arithmetic: addition, multiplication, inversion, exponentiation
//! - Raw polynomial division and the error for invalid orders
//!
//! Run with: cargo run --example field_basics

use galoisfield::poly::{self, PolyDisplay};
use galoisfield::{Factorization, Field};

fn main() {
    println!("=== Field Basics ===\n");

    prime_field();
    extension_field();
    raw_polynomials();
    invalid_orders();
}

fn prime_field() {
    println!("--- Prime Field ---\n");

    let f = Field::new(17).unwrap();
    let a = f.element(5).unwrap();
    let b = f.element(9).unwrap();

    println!("field: {}", f);
    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", &a + &b);
    println!("a * b = {}", &a * &b);
    println!("a^-1 = {}", a.inverse().unwrap());
    println!("a^16 = {}", a.pow(16).unwrap());
    println!();
}

fn extension_field() {
    println!("--- Extension Field ---\n");

    let f = Field::new(9).unwrap();
    let modulus = f.modulus_polynomial().unwrap();
    println!("field: {} with modulus {}", f, PolyDisplay(modulus));

    for e in f.elements() {
        println!("  {:>2} = {:<10} coeff={:?}", e.to_integer(), e.to_string(), e.coeff());
    }

    let a = f.element_from_coeffs(&[1, 2]).unwrap();
    let b = f.element(5).unwrap();
    println!("\na = {:?}", a);
    println!("b = {:?}", b);
    println!("a * b = {}", &a * &b);
    println!("unreduced a * b = {:?}", a.unreduced_mul(&b).unwrap());
    println!("a / b = {}", a.checked_field_div(&b).unwrap());

    let total = f.sum(f.elements().collect::<Vec<_>>().iter()).unwrap();
    println!("sum of all elements = {}", total);
    println!();
}

fn raw_polynomials() {
    println!("--- Raw Polynomials ---\n");

    let num = [-4, 0, -2, 1];
    let den = [-3, 1];
    let (q, r) = poly::divmod(&num, &den).unwrap();
    println!("(x^3 - 2x^2 - 4) / (x - 3): q = {:?}, r = {:?}", q, r);
    println!();
}

fn invalid_orders() {
    println!("--- Invalid Orders ---\n");

    for n in [6u64, 12, 5040] {
        println!("{} = {}", n, Factorization::of(n));
        match Field::new(n) {
            Ok(f) => println!("  unexpectedly built {}", f),
            Err(e) => println!("  error: {}", e),
        }
    }

    let degenerate = Field::new(3u64.pow(6)).unwrap();
    println!("\n{} has no tabulated modulus: degenerate = {}", degenerate, degenerate.is_degenerate());
}
