use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring whose elements are small `Copy` values.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a commutative monoid with identity ONE
/// - multiplication distributes over addition.
///
/// Runtime-sized fields use [`Element`](crate::Element) instead; this trait
/// is for fixed-size fast paths such as [`Gf256`](crate::Gf256).
pub trait Ring:
    Sized
    + Copy
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Exponentiation by a non-negative integer using square-and-multiply.
    fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::ONE;

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }
}
