//! Raw polynomial utilities.
//!
//! Polynomials here are plain coefficient vectors, not bound to any field.
//! Coefficients are stored in ascending order of degree: `poly[i]` is the
//! coefficient of `x^i`. A normalized polynomial has a nonzero top
//! coefficient, except for the zero polynomial which is `[0]`, never `[]`.
//!
//! Two families of routines live here:
//! - integer routines ([`divmod`]) that work over Z and leave reduction to
//!   the caller
//! - `*_mod_p` routines that keep every coefficient in `[0, p)` and divide
//!   by modular inverses, used by the field engine

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::utils::{add_mod, floor_div, inverse_mod, mul_mod, sub_mod, Factorization};

/// Error type for raw polynomial division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    DivisionByZero,
    /// The divisor's leading coefficient has no inverse modulo the prime.
    NotInvertible { coeff: u64, modulus: u64 },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::DivisionByZero => write!(f, "polynomial division by zero"),
            PolyError::NotInvertible { coeff, modulus } => {
                write!(f, "leading coefficient {} is not invertible mod {}", coeff, modulus)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyError {}

/// Strip zero coefficients from the high-degree end, in place.
///
/// Stops at a single coefficient, so the zero polynomial normalizes to `[0]`.
///
/// # Example
///
/// ```
/// use galoisfield::poly::normalize;
///
/// let mut p = vec![1, 2, 0, 0];
/// normalize(&mut p);
/// assert_eq!(p, vec![1, 2]);
///
/// let mut z: Vec<i64> = vec![0, 0, 0];
/// normalize(&mut z);
/// assert_eq!(z, vec![0]);
/// ```
pub fn normalize<T: Copy + Default + PartialEq>(poly: &mut Vec<T>) {
    let zero = T::default();
    while poly.len() > 1 && poly[poly.len() - 1] == zero {
        poly.pop();
    }
    if poly.is_empty() {
        poly.push(zero);
    }
}

/// Copy `poly` and pad its high-degree end with zeros up to `order` coefficients.
///
/// A polynomial already holding `order` or more coefficients is returned as is.
pub fn pad<T: Copy + Default>(poly: &[T], order: usize) -> Vec<T> {
    let mut out = poly.to_vec();
    if out.len() < order {
        out.resize(order, T::default());
    }
    out
}

/// Polynomial long division over the integers.
///
/// Returns `(quotient, remainder)`, both normalized. The inputs are copied
/// and normalized first. If the denominator has the higher degree the
/// quotient is `[0]` and the remainder is the (normalized) numerator.
///
/// Each quotient coefficient is the floor of the current top coefficient
/// divided by the denominator's leading coefficient, so the result is exact
/// only when that leading coefficient divides evenly (e.g. a monic divisor).
/// Coefficients are not reduced modulo anything; use [`divmod_mod_p`] for
/// division inside Z_p.
///
/// # Example
///
/// ```
/// use galoisfield::poly::divmod;
///
/// // (3x^7 + x^6 + 11x^5 + 7x^4 + 22x^3 + 10x^2 + 16x + 5) / (3x^3 + x^2 + 2x + 1)
/// let (q, r) = divmod(&[5, 16, 10, 22, 7, 11, 1, 3], &[1, 2, 1, 3]).unwrap();
/// assert_eq!(q, vec![5, 1, 3, 0, 1]);
/// assert_eq!(r, vec![0, 5]);
/// ```
pub fn divmod(num: &[i64], den: &[i64]) -> Result<(Vec<i64>, Vec<i64>), PolyError> {
    let mut num = num.to_vec();
    normalize(&mut num);
    let mut den = den.to_vec();
    normalize(&mut den);

    if den == [0] {
        return Err(PolyError::DivisionByZero);
    }
    if num.len() < den.len() {
        return Ok((vec![0], num));
    }

    let shift = num.len() - den.len();
    let divisor = den[den.len() - 1];
    let mut quotient = vec![0; shift + 1];

    for i in (0..=shift).rev() {
        let mult = floor_div(num[i + den.len() - 1], divisor);
        quotient[i] = mult;
        if mult != 0 {
            for (j, &d) in den.iter().enumerate() {
                num[i + j] -= mult * d;
            }
        }
    }

    // Each step retires the top coefficient, whatever is left in it.
    num.truncate(den.len() - 1);
    normalize(&mut num);
    normalize(&mut quotient);
    Ok((quotient, num))
}

/// Degree of a polynomial, or `None` for the zero polynomial.
pub fn degree<T: Copy + Default + PartialEq>(poly: &[T]) -> Option<usize> {
    let zero = T::default();
    poly.iter().rposition(|&c| c != zero)
}

/// Reduce every coefficient into `[0, p)` and normalize.
pub fn reduce_mod_p(poly: &[i64], p: u64) -> Vec<u64> {
    let mut out: Vec<u64> = poly
        .iter()
        .map(|&c| (c as i128).rem_euclid(p as i128) as u64)
        .collect();
    normalize(&mut out);
    out
}

/// Full product of two polynomials with coefficients reduced mod `p`.
///
/// The result has `a.len() + b.len() - 1` coefficients and is not normalized.
pub fn mul_mod_p(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut result = vec![0u64; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        if ca == 0 {
            continue;
        }
        for (j, &cb) in b.iter().enumerate() {
            result[i + j] = add_mod(result[i + j], mul_mod(ca, cb, p), p);
        }
    }
    result
}

/// `a - b` with coefficients mod `p`, normalized.
pub fn sub_mod_p(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    let len = a.len().max(b.len());
    let mut out: Vec<u64> = (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0) % p;
            let y = b.get(i).copied().unwrap_or(0) % p;
            sub_mod(x, y, p)
        })
        .collect();
    normalize(&mut out);
    out
}

/// Evaluate a polynomial at `x` mod `p` using Horner's method.
pub fn eval_mod_p(poly: &[u64], x: u64, p: u64) -> u64 {
    poly.iter()
        .rev()
        .fold(0, |acc, &c| add_mod(mul_mod(acc, x, p), c % p, p))
}

/// Polynomial long division inside Z_p.
///
/// Like [`divmod`], but every quotient coefficient is the top coefficient
/// times the modular inverse of the divisor's leading coefficient, so the
/// result is exact for any nonzero divisor when `p` is prime.
///
/// # Errors
///
/// Returns `PolyError::DivisionByZero` if `den` is zero mod `p`, and
/// `PolyError::NotInvertible` if its leading coefficient has no inverse
/// (only possible when `p` is not prime).
///
/// # Example
///
/// ```
/// use galoisfield::poly::divmod_mod_p;
///
/// // (x^2 + 2x + 1) / (2x + 2) over F_5 = 3x + 3, remainder 0
/// let (q, r) = divmod_mod_p(&[1, 2, 1], &[2, 2], 5).unwrap();
/// assert_eq!(q, vec![3, 3]);
/// assert_eq!(r, vec![0]);
/// ```
pub fn divmod_mod_p(num: &[u64], den: &[u64], p: u64) -> Result<(Vec<u64>, Vec<u64>), PolyError> {
    let mut num: Vec<u64> = num.iter().map(|&c| c % p).collect();
    normalize(&mut num);
    let mut den: Vec<u64> = den.iter().map(|&c| c % p).collect();
    normalize(&mut den);

    if den == [0] {
        return Err(PolyError::DivisionByZero);
    }
    if num.len() < den.len() {
        return Ok((vec![0], num));
    }

    let lead = den[den.len() - 1];
    let lc_inv = inverse_mod(lead, p).ok_or(PolyError::NotInvertible {
        coeff: lead,
        modulus: p,
    })?;

    let shift = num.len() - den.len();
    let mut quotient = vec![0u64; shift + 1];

    for i in (0..=shift).rev() {
        let mult = mul_mod(num[i + den.len() - 1], lc_inv, p);
        quotient[i] = mult;
        if mult != 0 {
            for (j, &d) in den.iter().enumerate() {
                num[i + j] = sub_mod(num[i + j], mul_mod(mult, d, p), p);
            }
        }
    }

    num.truncate(den.len() - 1);
    normalize(&mut num);
    normalize(&mut quotient);
    Ok((quotient, num))
}

/// Compute `base^exp mod modulus` over Z_p using repeated squaring.
pub fn powmod_mod_p(
    base: &[u64],
    mut exp: u64,
    modulus: &[u64],
    p: u64,
) -> Result<Vec<u64>, PolyError> {
    let mut b = divmod_mod_p(base, modulus, p)?.1;
    let mut result = divmod_mod_p(&[1], modulus, p)?.1;

    while exp > 0 {
        if exp & 1 == 1 {
            result = divmod_mod_p(&mul_mod_p(&result, &b, p), modulus, p)?.1;
        }
        b = divmod_mod_p(&mul_mod_p(&b, &b, p), modulus, p)?.1;
        exp >>= 1;
    }

    Ok(result)
}

/// Scale a polynomial so its leading coefficient is 1.
pub fn monic_mod_p(poly: &[u64], p: u64) -> Result<Vec<u64>, PolyError> {
    let mut out: Vec<u64> = poly.iter().map(|&c| c % p).collect();
    normalize(&mut out);
    let lead = out[out.len() - 1];
    if lead == 0 {
        return Err(PolyError::DivisionByZero);
    }
    let inv = inverse_mod(lead, p).ok_or(PolyError::NotInvertible {
        coeff: lead,
        modulus: p,
    })?;
    Ok(out.iter().map(|&c| mul_mod(c, inv, p)).collect())
}

/// Monic greatest common divisor over Z_p.
///
/// `gcd(0, 0)` is the zero polynomial `[0]`.
pub fn gcd_mod_p(a: &[u64], b: &[u64], p: u64) -> Result<Vec<u64>, PolyError> {
    let mut a: Vec<u64> = a.iter().map(|&c| c % p).collect();
    normalize(&mut a);
    let mut b: Vec<u64> = b.iter().map(|&c| c % p).collect();
    normalize(&mut b);

    while b != [0] {
        let r = divmod_mod_p(&a, &b, p)?.1;
        a = b;
        b = r;
    }

    if a == [0] {
        return Ok(a);
    }
    monic_mod_p(&a, p)
}

/// Test if a polynomial is irreducible over F_p using Rabin's algorithm.
///
/// A polynomial f(x) of degree n over F_p is irreducible if and only if:
/// 1. `x^{p^n} ≡ x (mod f(x))`
/// 2. `gcd(x^{p^{n/q}} - x, f(x)) = 1` for each prime divisor q of n
///
/// Returns `false` for constant or zero polynomials, and whenever `p` is
/// not prime.
///
/// # Example
///
/// ```
/// use galoisfield::poly::is_irreducible_mod_p;
///
/// // x^2 - 3 is irreducible over F_17 (3 is not a quadratic residue)
/// assert!(is_irreducible_mod_p(&[14, 0, 1], 17));
///
/// // x^2 - 4 = (x - 2)(x + 2) is reducible
/// assert!(!is_irreducible_mod_p(&[13, 0, 1], 17));
/// ```
pub fn is_irreducible_mod_p(poly: &[u64], p: u64) -> bool {
    if !crate::utils::is_prime(p) {
        return false;
    }

    let n = match degree(&poly.iter().map(|&c| c % p).collect::<Vec<_>>()) {
        None | Some(0) => return false,
        Some(1) => return true,
        Some(d) => d,
    };

    let f = match monic_mod_p(poly, p) {
        Ok(f) => f,
        Err(_) => return false,
    };

    rabin(&f, n, p).unwrap_or(false)
}

fn rabin(f: &[u64], n: usize, p: u64) -> Result<bool, PolyError> {
    let x = [0, 1];
    let prime_divisors: Vec<usize> = Factorization::of(n as u64)
        .factors()
        .iter()
        .map(|&(q, _)| q as usize)
        .collect();

    // h = x^{p^i} mod f
    let mut h = x.to_vec();
    for i in 1..=n {
        h = powmod_mod_p(&h, p, f, p)?;

        for &q in &prime_divisors {
            if n == i * q {
                let g = gcd_mod_p(&sub_mod_p(&h, &x, p), f, p)?;
                if degree(&g) != Some(0) {
                    return Ok(false);
                }
            }
        }
    }

    Ok(degree(&sub_mod_p(&h, &x, p)).is_none())
}

/// Human-readable rendering of a coefficient vector, e.g. `x^8 + x^4 + x^3 + x + 1`.
///
/// Terms are written from the highest degree down.
pub struct PolyDisplay<'a>(pub &'a [u64]);

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &coeff) in self.0.iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == 1 => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn normalize_strips_high_zeros() {
        let mut p = vec![1i64, 2, 0, 0];
        normalize(&mut p);
        assert_eq!(p, vec![1, 2]);
    }

    #[test]
    fn normalize_never_empties() {
        let mut z = vec![0u64, 0, 0];
        normalize(&mut z);
        assert_eq!(z, vec![0]);

        let mut e: Vec<i64> = Vec::new();
        normalize(&mut e);
        assert_eq!(e, vec![0]);
    }

    #[test]
    fn normalize_keeps_low_zeros() {
        let mut p = vec![0i64, 0, 3];
        normalize(&mut p);
        assert_eq!(p, vec![0, 0, 3]);
    }

    #[test]
    fn pad_extends_high_end() {
        assert_eq!(pad(&[1u64, 2], 4), vec![1, 2, 0, 0]);
        assert_eq!(pad(&[1u64, 2], 2), vec![1, 2]);
        assert_eq!(pad::<u64>(&[], 3), vec![0, 0, 0]);
    }

    #[test]
    fn pad_does_not_truncate() {
        assert_eq!(pad(&[1u64, 2, 3], 2), vec![1, 2, 3]);
    }

    #[test]
    fn divmod_binomial() {
        // (x + 1)^5 / (x + 1)^2 = (x + 1)^3
        let (q, r) = divmod(&[1, 5, 10, 10, 5, 1], &[1, 2, 1]).unwrap();
        assert_eq!(q, vec![1, 3, 3, 1]);
        assert_eq!(r, vec![0]);
    }

    #[test]
    fn divmod_non_monic_divisor() {
        let (q, r) = divmod(&[5, 16, 10, 22, 7, 11, 1, 3], &[1, 2, 1, 3]).unwrap();
        assert_eq!(q, vec![5, 1, 3, 0, 1]);
        assert_eq!(r, vec![0, 5]);
    }

    #[test]
    fn divmod_smaller_numerator() {
        let (q, r) = divmod(&[1, 2, 0], &[1, 2, 3]).unwrap();
        assert_eq!(q, vec![0]);
        assert_eq!(r, vec![1, 2]);
    }

    #[test]
    fn divmod_does_not_mutate_inputs() {
        let num = vec![1i64, 5, 10, 10, 5, 1, 0];
        let den = vec![1i64, 2, 1, 0];
        let _ = divmod(&num, &den).unwrap();
        assert_eq!(num, vec![1, 5, 10, 10, 5, 1, 0]);
        assert_eq!(den, vec![1, 2, 1, 0]);
    }

    #[test]
    fn divmod_by_constant() {
        let (q, r) = divmod(&[2, 4, 6], &[2]).unwrap();
        assert_eq!(q, vec![1, 2, 3]);
        assert_eq!(r, vec![0]);
    }

    #[test]
    fn divmod_by_zero() {
        assert_eq!(divmod(&[1, 2], &[0, 0]), Err(PolyError::DivisionByZero));
        assert_eq!(divmod_mod_p(&[1, 2], &[7], 7), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn divmod_mod_p_reconstructs() {
        let p = 7;
        let num = [3u64, 0, 5, 1, 6];
        let den = [2u64, 3, 4];
        let (q, r) = divmod_mod_p(&num, &den, p).unwrap();
        assert!(degree(&r).map_or(true, |d| d < 2));

        // q * den + r == num
        let mut back = mul_mod_p(&q, &den, p);
        back = sub_mod_p(&back, &sub_mod_p(&[0], &r, p), p);
        assert_eq!(back, num.to_vec());
    }

    #[test]
    fn divmod_mod_p_agrees_with_integer_division_for_monic() {
        // x^4 + 1 over F_2 divided by x^2 + x + 1
        let (q, r) = divmod_mod_p(&[1, 0, 0, 0, 1], &[1, 1, 1], 2).unwrap();
        let (qi, ri) = divmod(&[1, 0, 0, 0, 1], &[1, 1, 1]).unwrap();
        assert_eq!(q, reduce_mod_p(&qi, 2));
        assert_eq!(r, reduce_mod_p(&ri, 2));
    }

    #[test]
    fn divmod_mod_p_near_u64_max() {
        // largest prime below 2^64
        let p = 18446744073709551557u64;
        let (q, r) = divmod_mod_p(&[p - 1], &[7], p).unwrap();
        assert_eq!(mul_mod(q[0], 7, p), p - 1);
        assert_eq!(r, vec![0]);

        let (q, r) = divmod_mod_p(&[p - 1, p - 2, p - 1], &[p - 3, 1], p).unwrap();
        let back = mul_mod_p(&q, &[p - 3, 1], p);
        assert_eq!(sub_mod_p(&[p - 1, p - 2, p - 1], &back, p), r);

        assert_eq!(mul_mod_p(&[p - 1, p - 1], &[p - 1, p - 1], p), vec![1, 2, 1]);
        assert_eq!(sub_mod_p(&[0], &[p - 1], p), vec![1]);
        assert_eq!(eval_mod_p(&[p - 1, p - 1], p - 1, p), 0);
    }

    #[test]
    fn product_length() {
        // (2 + x + 2x^2)^2 over F_3
        assert_eq!(mul_mod_p(&[2, 1, 2], &[2, 1, 2], 3), vec![1, 1, 0, 1, 1]);
    }

    #[test]
    fn horner() {
        // 1 + 2x + 3x^2 at x = 2 over F_17: 1 + 4 + 12 = 17 ≡ 0
        assert_eq!(eval_mod_p(&[1, 2, 3], 2, 17), 0);
        assert_eq!(eval_mod_p(&[1, 2, 3], 1, 17), 6);
    }

    #[test]
    fn gcd_of_shared_root() {
        // (x - 1)(x - 2) and (x - 2)(x - 3) over F_17 share x - 2
        let a = [2u64, 14, 1];
        let b = [6u64, 12, 1];
        assert_eq!(gcd_mod_p(&a, &b, 17).unwrap(), vec![15, 1]);
    }

    #[test]
    fn irreducible_small() {
        // x^2 + 1 over F_3
        assert!(is_irreducible_mod_p(&[1, 0, 1], 3));
        // x^2 + 1 = (x + 1)^2 over F_2
        assert!(!is_irreducible_mod_p(&[1, 0, 1], 2));
        // AES polynomial
        assert!(is_irreducible_mod_p(&[1, 1, 0, 1, 1, 0, 0, 0, 1], 2));
        // x^6 + x^2 + 1 = (x^3 + x + 1)^2
        assert!(!is_irreducible_mod_p(&[1, 0, 1, 0, 0, 0, 1], 2));
    }

    #[test]
    fn irreducible_rejects_degenerate() {
        assert!(!is_irreducible_mod_p(&[0], 5));
        assert!(!is_irreducible_mod_p(&[3], 5));
        assert!(is_irreducible_mod_p(&[3, 1], 5));
        assert!(!is_irreducible_mod_p(&[1, 0, 1], 4));
    }

    #[test]
    fn display() {
        assert_eq!(PolyDisplay(&[1, 1, 0, 1, 1, 0, 0, 0, 1]).to_string(), "x^8 + x^4 + x^3 + x + 1");
        assert_eq!(PolyDisplay(&[2, 3]).to_string(), "3*x + 2");
        assert_eq!(PolyDisplay(&[0, 0]).to_string(), "0");
    }
}
