use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Rem, Sub};

use crate::structures::field::{Field, FieldError};
use crate::structures::poly::{divmod_mod_p, mul_mod_p, pad, PolyDisplay};
use crate::utils::{add_mod, mul_mod, sub_mod};

/// An element of a finite field GF(p^m).
///
/// The element is stored as `power` coefficients in `[0, prime)`, ascending:
/// `coeff[k]` is the coefficient of `x^k`. It keeps a handle to its [`Field`],
/// so elements of different fields can never be combined silently.
///
/// The `checked_*` methods report failures as [`FieldError`]. The operator
/// impls (`+`, `-`, `*`, `%`, unary `-`) call them and panic on error.
///
/// # Example
///
/// ```
/// use galoisfield::Field;
///
/// let gf256 = Field::new(256).unwrap();
/// let a = gf256.element(0x57).unwrap();
/// let b = gf256.element(0x13).unwrap();
///
/// assert_eq!(a.checked_mul(&b).unwrap().to_integer(), 0xFE);
/// assert_eq!((&a * &b).to_integer(), 0xFE);
/// ```
#[derive(Clone)]
pub struct Element {
    field: Field,
    coeff: Vec<u64>,
}

impl Element {
    pub(crate) fn from_parts(field: Field, coeff: Vec<u64>) -> Self {
        debug_assert_eq!(coeff.len(), field.power());
        debug_assert!(coeff.iter().all(|&c| c < field.prime()));
        Self { field, coeff }
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Coefficients in ascending degree, exactly `power` of them.
    pub fn coeff(&self) -> &[u64] {
        &self.coeff
    }

    /// The integer encoding, `sum(coeff[k] * prime^k)`.
    ///
    /// Inverse of [`Field::element`].
    pub fn to_integer(&self) -> u64 {
        let p = self.field.prime();
        self.coeff.iter().rev().fold(0, |acc, &c| acc * p + c)
    }

    /// Check if this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.coeff.iter().all(|&c| c == 0)
    }

    /// Check if this is the one element.
    pub fn is_one(&self) -> bool {
        self.coeff[0] == 1 && self.coeff[1..].iter().all(|&c| c == 0)
    }

    fn with_coeff(&self, coeff: Vec<u64>) -> Self {
        Self::from_parts(self.field.clone(), coeff)
    }

    fn zip_with(&self, rhs: &Self, op: fn(u64, u64, u64) -> u64) -> Result<Self, FieldError> {
        self.field.check_compatible(&rhs.field)?;
        let p = self.field.prime();
        let coeff = self
            .coeff
            .iter()
            .zip(&rhs.coeff)
            .map(|(&a, &b)| op(a, b, p))
            .collect();
        Ok(self.with_coeff(coeff))
    }

    /// Component-wise sum mod `prime`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` if `rhs` belongs to another field.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.zip_with(rhs, add_mod)
    }

    /// Component-wise difference mod `prime`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` if `rhs` belongs to another field.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.zip_with(rhs, sub_mod)
    }

    /// Additive inverse, `0 - self`.
    pub fn negate(&self) -> Self {
        let p = self.field.prime();
        let coeff = self.coeff.iter().map(|&c| sub_mod(0, c, p)).collect();
        self.with_coeff(coeff)
    }

    /// Polynomial product of the coefficient vectors, mod `prime`, without
    /// reducing by the field modulus.
    ///
    /// The result has `2 * power - 1` coefficients.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Field;
    ///
    /// let gf27 = Field::new(27).unwrap();
    /// let a = gf27.element_from_coeffs(&[2, 1, 2]).unwrap();
    /// assert_eq!(a.unreduced_mul(&a).unwrap(), vec![1, 1, 0, 1, 1]);
    /// ```
    pub fn unreduced_mul(&self, rhs: &Self) -> Result<Vec<u64>, FieldError> {
        self.field.check_compatible(&rhs.field)?;
        Ok(mul_mod_p(&self.coeff, &rhs.coeff, self.field.prime()))
    }

    /// Field multiplication: the polynomial product reduced by the modulus.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` for elements of different fields and
    /// `FieldError::UndefinedModulus` if the field has no modulus polynomial.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.field.check_compatible(&rhs.field)?;
        let modulus = self.field.require_modulus()?;
        let p = self.field.prime();
        let power = self.field.power();

        if power == 1 {
            return Ok(self.with_coeff(vec![mul_mod(self.coeff[0], rhs.coeff[0], p)]));
        }

        let raw = mul_mod_p(&self.coeff, &rhs.coeff, p);
        let (_, remainder) = divmod_mod_p(&raw, modulus, p)?;
        Ok(self.with_coeff(pad(&remainder, power)))
    }

    /// Polynomial long division of the coefficient vectors inside Z_p.
    ///
    /// Returns `(quotient, remainder)`. The remainder has lower degree than
    /// the divisor, so it is padded back to `power` coefficients and returned
    /// as an element; the quotient is a raw, normalized polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` for elements of different fields,
    /// `FieldError::UndefinedModulus` if the field has no modulus polynomial,
    /// and `FieldError::DivisionByZero` if `rhs` is zero.
    pub fn divmod(&self, rhs: &Self) -> Result<(Vec<u64>, Self), FieldError> {
        self.field.check_compatible(&rhs.field)?;
        self.field.require_modulus()?;

        let (quotient, remainder) = divmod_mod_p(&self.coeff, &rhs.coeff, self.field.prime())?;
        let remainder = self.with_coeff(pad(&remainder, self.field.power()));
        Ok((quotient, remainder))
    }

    /// Quotient of [`Element::divmod`].
    pub fn divide(&self, rhs: &Self) -> Result<Vec<u64>, FieldError> {
        self.divmod(rhs).map(|(q, _)| q)
    }

    /// Remainder of [`Element::divmod`].
    pub fn modulo(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.divmod(rhs).map(|(_, r)| r)
    }

    /// Compute `self^exp` using square-and-multiply.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::UndefinedModulus` if the field has no modulus polynomial.
    pub fn pow(&self, exp: u64) -> Result<Self, FieldError> {
        self.field.require_modulus()?;

        let mut base = self.clone();
        let mut result = self.field.one();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            base = base.checked_mul(&base)?;
            e >>= 1;
        }
        Ok(result)
    }

    /// Multiplicative inverse, computed as `self^(order - 2)`.
    ///
    /// Only meaningful when the modulus is irreducible.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` for the zero element and
    /// `FieldError::UndefinedModulus` if the field has no modulus polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Field;
    ///
    /// let gf256 = Field::new(256).unwrap();
    /// let a = gf256.element(0x53).unwrap();
    /// assert_eq!(a.inverse().unwrap().to_integer(), 0xCA);
    /// ```
    pub fn inverse(&self) -> Result<Self, FieldError> {
        self.field.require_modulus()?;
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        self.pow(self.field.order() - 2)
    }

    /// Field division, `self * rhs^(-1)`.
    ///
    /// Unlike [`Element::divide`], which returns the polynomial quotient,
    /// this is division in the field's multiplicative group.
    pub fn checked_field_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.field.check_compatible(&rhs.field)?;
        self.checked_mul(&rhs.inverse()?)
    }
}

/// Values that can be coerced into an element with [`Field::as_element`].
#[derive(Clone, Debug)]
pub enum ElementValue {
    /// Integer encoding.
    Integer(u64),
    /// Explicit coefficients, ascending degree.
    Coefficients(Vec<i64>),
    /// An existing element.
    Element(Element),
}

impl From<u64> for ElementValue {
    fn from(v: u64) -> Self {
        ElementValue::Integer(v)
    }
}

impl From<u8> for ElementValue {
    fn from(v: u8) -> Self {
        ElementValue::Integer(v as u64)
    }
}

impl From<Vec<i64>> for ElementValue {
    fn from(coeffs: Vec<i64>) -> Self {
        ElementValue::Coefficients(coeffs)
    }
}

impl From<&[i64]> for ElementValue {
    fn from(coeffs: &[i64]) -> Self {
        ElementValue::Coefficients(coeffs.to_vec())
    }
}

impl From<Element> for ElementValue {
    fn from(e: Element) -> Self {
        ElementValue::Element(e)
    }
}

impl From<&Element> for ElementValue {
    fn from(e: &Element) -> Self {
        ElementValue::Element(e.clone())
    }
}

impl From<&Element> for u64 {
    fn from(e: &Element) -> Self {
        e.to_integer()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coeff == other.coeff
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.coeff.hash(state);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Element in {} coeff={:?}>", self.field, self.coeff)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PolyDisplay(&self.coeff))
    }
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for &Element {
            type Output = Element;

            fn $method(self, rhs: Self) -> Element {
                self.$checked(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $trait for Element {
            type Output = Element;

            fn $method(self, rhs: Self) -> Element {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, checked_add);
impl_binary_op!(Sub, sub, checked_sub);
impl_binary_op!(Mul, mul, checked_mul);
impl_binary_op!(Rem, rem, modulo);

impl Neg for &Element {
    type Output = Element;

    fn neg(self) -> Element {
        self.negate()
    }
}

impl Neg for Element {
    type Output = Element;

    fn neg(self) -> Element {
        self.negate()
    }
}

// ============================================================================
// Serde
// ============================================================================

/// Serialize an element as its coefficient list.
///
/// `Element` implements `Serialize` but not `Deserialize`, because the
/// coefficients alone do not identify the field. Use [`ElementWithField`]
/// for a self-contained form.
#[cfg(feature = "serde")]
impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeff.serialize(serializer)
    }
}

/// An element bundled with its field for full round-trip serialization.
///
/// # Example
///
/// ```
/// use galoisfield::{ElementWithField, Field};
///
/// let f = Field::new(9).unwrap();
/// let a = f.element(7).unwrap();
///
/// let with_field = ElementWithField::from_element(&a);
/// assert_eq!(with_field.to_element().unwrap(), a);
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementWithField {
    field: Field,
    coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl ElementWithField {
    /// Capture an element together with its field.
    pub fn from_element(e: &Element) -> Self {
        Self {
            field: e.field.clone(),
            coeffs: e.coeff.clone(),
        }
    }

    /// Rebuild the element, reducing coefficients mod the field's prime.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::CoefficientCount` if the coefficient count does
    /// not match the field's power.
    pub fn to_element(&self) -> Result<Element, FieldError> {
        if self.coeffs.len() != self.field.power() {
            return Err(FieldError::CoefficientCount {
                expected: self.field.power(),
                got: self.coeffs.len(),
            });
        }
        let p = self.field.prime();
        let coeff = self.coeffs.iter().map(|&c| c % p).collect();
        Ok(Element::from_parts(self.field.clone(), coeff))
    }
}
