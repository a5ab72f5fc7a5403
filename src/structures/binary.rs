//! Fast arithmetic in binary extension fields GF(2^m).
//!
//! Elements are plain integers whose bit `k` is the coefficient of `x^k`.
//! Addition is XOR and multiplication is carry-less "Russian peasant"
//! multiplication with the modulus folded in as bits overflow. None of this
//! needs a [`Field`](crate::Field); for GF(2^8) with [`AES_MODULUS`] the
//! results agree with `Field::new(256)`.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field_element::FieldElement;
use crate::algebra::ring::Ring;
use crate::structures::poly::is_irreducible_mod_p;

/// `x^8 + x^4 + x^3 + x + 1`, the AES field polynomial.
pub const AES_MODULUS: u16 = 0x11B;

/// Irreducible polynomials over GF(2) as bit patterns, up to 375
/// (OEIS A014580).
#[rustfmt::skip]
pub static KNOWN_IRREDUCIBLE_POLYS: [u16; 54] = [
    2, 3, 7, 11, 13, 19, 25, 31, 37, 41, 47, 55, 59, 61, 67, 73, 87, 91, 97,
    103, 109, 115, 117, 131, 137, 143, 145, 157, 167, 171, 185, 191, 193, 203,
    211, 213, 229, 239, 241, 247, 253, 283, 285, 299, 301, 313, 319, 333, 351,
    355, 357, 361, 369, 375,
];

/// True if `poly` appears in [`KNOWN_IRREDUCIBLE_POLYS`].
pub fn is_known_irreducible(poly: u64) -> bool {
    u16::try_from(poly)
        .map(|p| KNOWN_IRREDUCIBLE_POLYS.binary_search(&p).is_ok())
        .unwrap_or(false)
}

/// True if `poly` lies inside the tabulated range but is not listed,
/// i.e. it is known to be reducible.
pub fn is_known_reducible(poly: u64) -> bool {
    let last = KNOWN_IRREDUCIBLE_POLYS[KNOWN_IRREDUCIBLE_POLYS.len() - 1] as u64;
    poly < last && !is_known_irreducible(poly)
}

fn warn_if_reducible(poly: u64) {
    if is_known_reducible(poly) {
        log::warn!(
            "using a known-reducible polynomial {:#x}; products will not form a field",
            poly
        );
    }
}

/// Irreducibility of a bit-pattern polynomial over GF(2), by Rabin's test.
///
/// # Example
///
/// ```
/// use galoisfield::binary::gf2_is_irreducible;
///
/// assert!(gf2_is_irreducible(0x11B));
/// assert!(!gf2_is_irreducible(0x145)); // x^8 + x^6 + x^2 + 1 = (x^4 + x^3 + x + 1)^2
/// ```
pub fn gf2_is_irreducible(poly: u64) -> bool {
    is_irreducible_mod_p(&bits_to_coeffs(poly), 2)
}

/// Expand a bit pattern into ascending coefficients.
pub fn bits_to_coeffs(poly: u64) -> Vec<u64> {
    let len = (64 - poly.leading_zeros()).max(1) as usize;
    (0..len).map(|k| (poly >> k) & 1).collect()
}

/// Addition (and subtraction) in GF(2^m).
#[inline]
pub const fn ff_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication in GF(2^8) with the AES modulus.
///
/// # Example
///
/// ```
/// use galoisfield::binary::ff_multiply;
///
/// assert_eq!(ff_multiply(0x57, 0x83), 0xC1);
/// assert_eq!(ff_multiply(0x53, 0xCA), 0x01);
/// ```
#[inline]
pub fn ff_multiply(a: u8, b: u8) -> u8 {
    peasant(a as u64, b as u64, AES_MODULUS as u64, 8) as u8
}

/// Multiplication in GF(2^8) reducing by `modulus`.
///
/// `modulus` should be a degree-8 irreducible polynomial including its
/// `x^8` bit. A known-reducible modulus is logged at warn level and the
/// multiplication goes ahead regardless.
///
/// # Panics
///
/// Debug builds panic if `modulus` does not have degree 8, e.g. `0x1B`
/// without its top bit.
pub fn ff_multiply_with(a: u8, b: u8, modulus: u16) -> u8 {
    ff_multiply_width(a as u64, b as u64, modulus as u64, 8) as u8
}

/// Multiplication in GF(2^bits) for `1 <= bits <= 32`.
///
/// `a` and `b` must be below `2^bits` and `modulus` must have degree `bits`.
/// A modulus of any other degree leaves bits above `bits` in the product,
/// so debug builds assert it.
///
/// # Example
///
/// ```
/// use galoisfield::binary::ff_multiply_width;
///
/// // GF(2^4) with x^4 + x + 1: x^3 * x = x + 1
/// assert_eq!(ff_multiply_width(0b1000, 0b0010, 0b1_0011, 4), 0b0011);
/// ```
pub fn ff_multiply_width(a: u64, b: u64, modulus: u64, bits: u32) -> u64 {
    debug_assert!((1..=32).contains(&bits), "unsupported width {}", bits);
    debug_assert_eq!(
        64 - modulus.leading_zeros(),
        bits + 1,
        "modulus {:#x} does not have degree {}",
        modulus,
        bits
    );
    warn_if_reducible(modulus);
    peasant(a, b, modulus, bits)
}

fn peasant(mut a: u64, mut b: u64, modulus: u64, bits: u32) -> u64 {
    let high = 1u64 << (bits - 1);
    let mut product = 0;
    while a != 0 && b != 0 {
        if b & 1 == 1 {
            product ^= a;
        }
        // a * x, folding x^bits back into the field
        if a & high != 0 {
            a = (a << 1) ^ modulus;
        } else {
            a <<= 1;
        }
        b >>= 1;
    }
    product
}

/// An element of GF(2^8) with the AES modulus.
///
/// # Example
///
/// ```
/// use galoisfield::{FieldElement, Gf256, Ring};
///
/// let a = Gf256::new(0x57);
/// let b = Gf256::new(0x83);
/// assert_eq!(a + b, Gf256::new(0xD4));
/// assert_eq!(a * b, Gf256::new(0xC1));
/// assert_eq!(a * a.inverse().unwrap(), Gf256::ONE);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Gf256(u8);

impl Gf256 {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(ff_add(self.0, rhs.0))
    }
}

impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(ff_add(self.0, rhs.0))
    }
}

impl Neg for Gf256 {
    type Output = Self;

    fn neg(self) -> Self {
        self
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(ff_multiply(self.0, rhs.0))
    }
}

/// # Panics
///
/// Panics when dividing by zero.
impl Div for Gf256 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.try_div(rhs)
            .unwrap_or_else(|| panic!("division by zero in GF(2^8)"))
    }
}

impl Ring for Gf256 {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);
}

impl FieldElement for Gf256 {
    const ORDER: u64 = 256;
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf256({:#04x})", self.0)
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl fmt::LowerHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Gf256> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Gf256 {
        Gf256(rng.gen())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Gf256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Gf256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn addition_is_xor() {
        assert_eq!(ff_add(0x57, 0x83), 0xD4);
        assert_eq!(ff_add(0xFF, 0xFF), 0x00);
    }

    #[test]
    fn fips_197_products() {
        assert_eq!(ff_multiply(0x57, 0x83), 0xC1);
        assert_eq!(ff_multiply(0x57, 0x02), 0xAE);
        assert_eq!(ff_multiply(0x57, 0x04), 0x47);
        assert_eq!(ff_multiply(0x57, 0x08), 0x8E);
        assert_eq!(ff_multiply(0x57, 0x10), 0x07);
        assert_eq!(ff_multiply(0x57, 0x13), 0xFE);
    }

    #[test]
    fn aes_inverse_pair() {
        assert_eq!(ff_multiply(0x53, 0xCA), 0x01);
        assert_eq!(ff_multiply(0xCA, 0x53), 0x01);
    }

    #[test]
    fn zero_and_one() {
        for a in 0..=255u8 {
            assert_eq!(ff_multiply(a, 0), 0);
            assert_eq!(ff_multiply(0, a), 0);
            assert_eq!(ff_multiply(a, 1), a);
        }
    }

    #[test]
    fn alternative_modulus() {
        // x^8 + x^4 + x^3 + x^2 + 1 (0x11D): x^7 * x = x^4 + x^3 + x^2 + 1
        assert_eq!(ff_multiply_with(0x80, 0x02, 0x11D), 0x1D);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not have degree 8")]
    fn modulus_missing_top_bit() {
        let _ = ff_multiply_with(0x80, 0x02, 0x1B);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not have degree 4")]
    fn modulus_of_wrong_width() {
        let _ = ff_multiply_width(0b1000, 0b0010, AES_MODULUS as u64, 4);
    }

    #[test]
    fn table_matches_rabin() {
        let last = KNOWN_IRREDUCIBLE_POLYS[KNOWN_IRREDUCIBLE_POLYS.len() - 1] as u64;
        for poly in 2..=last {
            assert_eq!(
                is_known_irreducible(poly),
                gf2_is_irreducible(poly),
                "poly {:#x}",
                poly
            );
        }
    }

    #[test]
    fn table_is_sorted() {
        assert!(KNOWN_IRREDUCIBLE_POLYS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reducible_detection() {
        assert!(!is_known_reducible(AES_MODULUS as u64));
        assert!(is_known_reducible(0x100));
        assert!(is_known_reducible(0x145));
        // Outside the table nothing is claimed.
        assert!(!is_known_reducible(0x1_0000));
    }

    #[test]
    fn bit_expansion() {
        assert_eq!(bits_to_coeffs(0x11B), vec![1, 1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(bits_to_coeffs(0), vec![0]);
    }

    #[test]
    fn small_width() {
        // GF(2^3) with x^3 + x + 1: every nonzero element has an inverse
        for a in 1..8u64 {
            let found = (1..8u64).filter(|&b| ff_multiply_width(a, b, 0b1011, 3) == 1).count();
            assert_eq!(found, 1, "a = {}", a);
        }
    }

    #[test]
    fn gf256_ring_laws() {
        let a = Gf256::new(0x57);
        let b = Gf256::new(0x83);
        let c = Gf256::new(0x1F);
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a - a, Gf256::ZERO);
        assert_eq!(-a, a);
        assert_eq!(a.pow(255), Gf256::ONE);
    }

    #[test]
    fn gf256_inverse() {
        assert_eq!(Gf256::new(0x53).inverse(), Some(Gf256::new(0xCA)));
        assert_eq!(Gf256::ZERO.inverse(), None);
        assert_eq!(Gf256::new(0x57) / Gf256::new(0x57), Gf256::ONE);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn gf256_division_by_zero() {
        let _ = Gf256::ONE / Gf256::ZERO;
    }

    #[test]
    fn gf256_formatting() {
        assert_eq!(format!("{:?}", Gf256::new(0x0A)), "Gf256(0x0a)");
        assert_eq!(format!("{}", Gf256::new(0xAE)), "ae");
    }
}
