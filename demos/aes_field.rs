//! The AES Field
//!
//! This example demonstrates:
//! - Byte-level GF(2^8) arithmetic with `ff_add` and `ff_multiply`
//! - The `Gf256` element type and its inverse
//! - Agreement between the fast path and the general `Field` engine
//!
//! Run with: cargo run --example aes_field

use galoisfield::binary::{is_known_irreducible, is_known_reducible};
use galoisfield::{ff_add, ff_multiply, Field, FieldElement, Gf256, AES_MODULUS};

fn main() {
    println!("=== GF(2^8) ===\n");

    println!("modulus: {:#05x}", AES_MODULUS);
    println!("listed as irreducible: {}", is_known_irreducible(AES_MODULUS as u64));
    println!("x^8 + 1 listed as reducible: {}\n", is_known_reducible(0x101));

    println!("{{57}} + {{83}} = {{{:02x}}}", ff_add(0x57, 0x83));
    for b in [0x02u8, 0x04, 0x08, 0x10, 0x13] {
        println!("{{57}} * {{{:02x}}} = {{{:02x}}}", b, ff_multiply(0x57, b));
    }

    let a = Gf256::new(0x53);
    let inv = a.inverse().unwrap();
    println!("\n{:?}^-1 = {:?}, product = {}", a, inv, a * inv);

    let f = Field::new(256).unwrap();
    let mismatches = (0..=255u8)
        .flat_map(|x| (0..=255u8).map(move |y| (x, y)))
        .filter(|&(x, y)| {
            let slow = &f.element(x as u64).unwrap() * &f.element(y as u64).unwrap();
            slow.to_integer() != ff_multiply(x, y) as u64
        })
        .count();
    println!("\n{} disagrees with ff_multiply on {} of 65536 products", f, mismatches);
}
