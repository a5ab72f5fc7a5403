//! Finite field arithmetic over GF(p^m).
//!
//! - [`Field`] builds GF(p^m) from its order and mints [`Element`]s, which
//!   support addition, subtraction, negation, multiplication reduced by the
//!   field's modulus polynomial, and polynomial division.
//! - [`poly`] holds the raw coefficient-vector routines (normalization,
//!   padding, long division, irreducibility) the engine is built on.
//! - [`binary`] is a standalone fast path for GF(2^m) on plain integers,
//!   with [`Gf256`] as a `Copy` value type for the AES field.
//!
//! ```
//! use galoisfield::{binary, Field};
//!
//! let gf256 = Field::new(256).unwrap();
//! let a = gf256.element(0x57).unwrap();
//! let b = gf256.element(0x83).unwrap();
//!
//! assert_eq!((&a * &b).to_integer(), binary::ff_multiply(0x57, 0x83) as u64);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod structures;
pub mod utils;

pub use algebra::field_element::FieldElement;
pub use algebra::ring::Ring;

pub use structures::binary;
pub use structures::binary::{ff_add, ff_multiply, ff_multiply_with, Gf256, AES_MODULUS};
pub use structures::element::{Element, ElementValue};
#[cfg(feature = "serde")]
pub use structures::element::ElementWithField;
pub use structures::field::{Field, FieldError, ModulusError};
pub use structures::poly;
pub use structures::poly::PolyError;
pub use structures::tables;
pub use utils::{is_prime, to_superscript, Factorization};
