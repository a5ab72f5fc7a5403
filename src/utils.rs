use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Check if `n` is a prime number.
///
/// Deterministic Miller-Rabin: the first twelve primes as witnesses are
/// enough for every `u64`.
pub const fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        if n % WITNESSES[i] == 0 {
            return n == WITNESSES[i];
        }
        i += 1;
    }

    // n - 1 = d * 2^s
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    let mut i = 0;
    while i < WITNESSES.len() {
        let mut x = pow_mod(WITNESSES[i], d, n);
        if x != 1 && x != n - 1 {
            let mut r = 1;
            let mut witness = true;
            while r < s {
                x = mul_mod(x, x, n);
                if x == n - 1 {
                    witness = false;
                    break;
                }
                r += 1;
            }
            if witness {
                return false;
            }
        }
        i += 1;
    }
    true
}

/// Prime factorization of an integer as `(prime, exponent)` pairs in
/// ascending prime order.
///
/// `Display` renders the factorization the way it is written by hand,
/// with superscript exponents: `2⁴ * 3² * 5 * 7`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Factorization {
    factors: Vec<(u64, u32)>,
}

impl Factorization {
    /// Factor `n` by trial division.
    ///
    /// `0` and `1` have no prime factors and produce an empty factorization.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Factorization;
    ///
    /// let f = Factorization::of(5040);
    /// assert_eq!(f.factors(), &[(2, 4), (3, 2), (5, 1), (7, 1)]);
    /// assert_eq!(f.to_string(), "2⁴ * 3² * 5 * 7");
    /// ```
    pub fn of(mut n: u64) -> Self {
        let mut factors = Vec::new();
        if n < 2 {
            return Self { factors };
        }

        let mut exp = 0;
        while n % 2 == 0 {
            n /= 2;
            exp += 1;
        }
        if exp > 0 {
            factors.push((2, exp));
        }

        // Trial division stops early once the cofactor is prime.
        let mut d: u64 = 3;
        let mut cofactor_changed = true;
        while d <= n / d {
            if cofactor_changed {
                if is_prime(n) {
                    break;
                }
                cofactor_changed = false;
            }

            let mut exp = 0;
            while n % d == 0 {
                n /= d;
                exp += 1;
            }
            if exp > 0 {
                factors.push((d, exp));
                cofactor_changed = true;
            }
            d += 2;
        }

        if n > 1 {
            factors.push((n, 1));
        }

        Self { factors }
    }

    /// The `(prime, exponent)` pairs.
    pub fn factors(&self) -> &[(u64, u32)] {
        &self.factors
    }

    /// Number of distinct primes.
    pub fn distinct_primes(&self) -> usize {
        self.factors.len()
    }

    /// The single `(prime, exponent)` pair if `n` is a prime power.
    pub fn as_prime_power(&self) -> Option<(u64, u32)> {
        match self.factors.as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(prime, exp)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            if exp > 1 {
                write!(f, "{}{}", prime, to_superscript(exp as u64))?;
            } else {
                write!(f, "{}", prime)?;
            }
        }
        Ok(())
    }
}

/// Render an integer with Unicode superscript digits.
pub fn to_superscript(n: u64) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let mut out = String::new();
    let mut divisor = 1u64;
    while n / divisor >= 10 {
        divisor *= 10;
    }
    while divisor > 0 {
        out.push(DIGITS[((n / divisor) % 10) as usize]);
        divisor /= 10;
    }
    out
}

/// `a * b mod m` without overflow.
#[inline]
pub(crate) const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `a + b mod m` without overflow, for `a, b < m`.
#[inline]
pub(crate) const fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// `a - b mod m` without overflow, for `a, b < m`.
#[inline]
pub(crate) const fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + m as u128 - b as u128) % m as u128) as u64
}

/// `base^exp mod m` using square-and-multiply.
pub const fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut base = base % m;
    let mut result = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse of `a` modulo a prime `p`, or `None` for zero.
///
/// Uses the extended Euclidean algorithm on signed 128-bit intermediates.
pub fn inverse_mod(a: u64, p: u64) -> Option<u64> {
    let a = a % p;
    if a == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a as i128, p as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(p as i128) as u64)
}

/// Floor division, matching the rounding of long division over the integers.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}
