//! Minimal-weight irreducible polynomials used as default field moduli.
//!
//! Entries follow Hansen and Mullen, "Supplement to Primitive Polynomials
//! over Finite Fields" (Math. Comp. 59, 1992), except GF(2^8) which uses the
//! AES polynomial `x^8 + x^4 + x^3 + x + 1`. Coefficients are ascending and
//! include the leading 1.

/// `(prime, power, coefficients)` for every tabulated field.
static MIN_WEIGHT_IRREDUCIBLE: &[(u64, usize, &[u64])] = &[
    (2, 2, &[1, 1, 1]),
    (2, 3, &[1, 1, 0, 1]),
    (2, 4, &[1, 1, 0, 0, 1]),
    (2, 5, &[1, 0, 1, 0, 0, 1]),
    (2, 6, &[1, 1, 0, 0, 0, 0, 1]),
    (2, 7, &[1, 1, 0, 0, 0, 0, 0, 1]),
    (2, 8, &[1, 1, 0, 1, 1, 0, 0, 0, 1]),
    (3, 2, &[2, 1, 1]),
    (3, 3, &[1, 2, 0, 1]),
    (3, 4, &[2, 1, 0, 0, 1]),
    (3, 5, &[1, 2, 0, 0, 0, 1]),
    (5, 2, &[2, 1, 1]),
    (5, 3, &[2, 3, 0, 1]),
    (5, 4, &[2, 2, 1, 0, 1]),
    (5, 5, &[2, 4, 0, 0, 0, 1]),
    (7, 2, &[3, 1, 1]),
    (7, 3, &[2, 3, 0, 1]),
    (7, 4, &[5, 3, 1, 0, 1]),
    (7, 5, &[4, 1, 0, 0, 0, 1]),
    (11, 2, &[7, 1, 1]),
    (11, 3, &[4, 1, 0, 1]),
    (13, 2, &[2, 1, 1]),
    (13, 3, &[6, 1, 0, 1]),
    (17, 2, &[3, 1, 1]),
    (17, 3, &[3, 1, 0, 1]),
    (19, 2, &[2, 1, 1]),
    (19, 3, &[4, 1, 0, 1]),
    (23, 2, &[7, 1, 1]),
    (23, 3, &[3, 1, 0, 1]),
];

/// Look up the tabulated modulus for GF(prime^power).
///
/// # Example
///
/// ```
/// use galoisfield::tables::min_weight_irreducible;
///
/// assert_eq!(min_weight_irreducible(2, 8), Some(&[1, 1, 0, 1, 1, 0, 0, 0, 1][..]));
/// assert_eq!(min_weight_irreducible(29, 2), None);
/// ```
pub fn min_weight_irreducible(prime: u64, power: usize) -> Option<&'static [u64]> {
    MIN_WEIGHT_IRREDUCIBLE
        .iter()
        .find(|&&(p, k, _)| p == prime && k == power)
        .map(|&(_, _, poly)| poly)
}

/// Iterate over every tabulated `(prime, power, coefficients)` entry.
pub fn entries() -> impl Iterator<Item = (u64, usize, &'static [u64])> {
    MIN_WEIGHT_IRREDUCIBLE.iter().copied()
}
