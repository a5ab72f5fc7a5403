use super::ring::Ring;

/// Elements of a finite field with a fixed, compile-time size.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait FieldElement: Ring {
    /// Number of elements in the field.
    const ORDER: u64;

    /// Multiplicative inverse `a⁻¹`.
    ///
    /// - `self == ZERO`  ⇒  `None`
    /// - otherwise       ⇒  `Some(a⁻¹)`
    ///
    /// The default uses `a^(ORDER - 2)`.
    fn inverse(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(Self::ORDER - 2))
        }
    }

    /// Safe division: returns `None` on division by zero.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}
