//! Prime-power finite fields GF(p^m) built at runtime from their order.
//!
//! This module provides:
//! - The `Field` handle, a cheaply cloneable description of GF(p^m) shared
//!   by all of its elements
//! - `FieldError` and `ModulusError` for construction and arithmetic failures
//! - Modulus resolution from an explicit polynomial or the built-in table

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::structures::element::{Element, ElementValue};
use crate::structures::poly::{self, PolyDisplay, PolyError};
use crate::structures::tables::min_weight_irreducible;
use crate::utils::{to_superscript, Factorization};

// ============================================================================
// Errors
// ============================================================================

/// Error type for modulus validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModulusError {
    /// The polynomial has the wrong degree.
    WrongDegree { expected: usize, got: Option<usize> },
    /// The polynomial is not monic.
    NotMonic,
}

impl fmt::Display for ModulusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulusError::WrongDegree { expected, got } => {
                write!(f, "wrong degree: expected {}, got {:?}", expected, got)
            }
            ModulusError::NotMonic => write!(f, "polynomial is not monic"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModulusError {}

/// Error type for field construction and element arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The requested order is not a prime power.
    InvalidFieldOrder { order: u64, factors: Factorization },
    /// An integer does not fit in `power` base-`prime` digits.
    ValueOutOfField { field: String, value: u64 },
    /// A coefficient vector has the wrong length.
    CoefficientCount { expected: usize, got: usize },
    /// The operands belong to different fields.
    FieldMismatch { left: String, right: String },
    /// Multiplication or division on a field without a modulus polynomial.
    UndefinedModulus { field: String },
    /// Division by the zero element.
    DivisionByZero,
    /// An explicitly supplied modulus polynomial was rejected.
    InvalidModulus(ModulusError),
    /// Polynomial arithmetic failed.
    Poly(PolyError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidFieldOrder { order, factors } => {
                if factors.distinct_primes() == 0 {
                    write!(f, "cannot form GF({}): order must be a prime power", order)
                } else {
                    write!(f, "cannot form GF({}) = GF({})", order, factors)
                }
            }
            FieldError::ValueOutOfField { field, value } => {
                write!(f, "{} can not hold {}", field, value)
            }
            FieldError::CoefficientCount { expected, got } => write!(
                f,
                "number of coefficients: {} disagrees with field exponent: {}",
                got, expected
            ),
            FieldError::FieldMismatch { left, right } => {
                write!(f, "elements belong to different fields: {} and {}", left, right)
            }
            FieldError::UndefinedModulus { field } => {
                write!(f, "no modulus polynomial known for {}", field)
            }
            FieldError::DivisionByZero => write!(f, "division by the zero element"),
            FieldError::InvalidModulus(err) => write!(f, "invalid modulus polynomial: {}", err),
            FieldError::Poly(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

impl From<ModulusError> for FieldError {
    fn from(err: ModulusError) -> Self {
        FieldError::InvalidModulus(err)
    }
}

impl From<PolyError> for FieldError {
    fn from(err: PolyError) -> Self {
        match err {
            PolyError::DivisionByZero => FieldError::DivisionByZero,
            other => FieldError::Poly(other),
        }
    }
}

// ============================================================================
// Field
// ============================================================================

struct FieldInner {
    order: u64,
    prime: u64,
    power: usize,
    modulus: Option<Vec<u64>>,
}

/// The finite field GF(p^m).
///
/// A `Field` is an immutable description of the field: its order, its
/// characteristic `prime`, its extension degree `power`, and the monic
/// modulus polynomial used to reduce products. Cloning is cheap; every
/// [`Element`] holds a clone, so a field lives as long as any of its
/// elements.
///
/// Two fields compare equal when they have the same prime and power.
/// Arithmetic additionally requires the same modulus polynomial.
///
/// # Example
///
/// ```
/// use galoisfield::Field;
///
/// let gf16 = Field::new(16).unwrap();
/// assert_eq!(gf16.prime(), 2);
/// assert_eq!(gf16.power(), 4);
///
/// let a = gf16.element(10).unwrap();
/// assert_eq!(a.coeff(), &[0, 1, 0, 1]);
///
/// let b = gf16.element(7).unwrap();
/// assert_eq!((&a + &b).to_integer(), 10 ^ 7);
/// ```
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldInner>,
}

impl Field {
    /// Construct GF(order), taking the modulus from the built-in table.
    ///
    /// Fields of prime order need no modulus. For extension fields missing
    /// from the table the field is built without one: addition and
    /// subtraction still work, multiplication and division fail with
    /// `FieldError::UndefinedModulus`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidFieldOrder` if `order` is not a prime power.
    pub fn new(order: u64) -> Result<Self, FieldError> {
        let (prime, power) = Self::factor_order(order)?;

        let modulus = if power == 1 {
            Some(alloc::vec![1])
        } else {
            let table = min_weight_irreducible(prime, power).map(<[u64]>::to_vec);
            if table.is_none() {
                log::debug!(
                    "no tabulated modulus for GF({}{}), multiplication unavailable",
                    prime,
                    to_superscript(power as u64)
                );
            }
            table
        };

        Ok(Self::from_parts(order, prime, power, modulus))
    }

    /// Construct GF(order) with an explicit modulus polynomial.
    ///
    /// Coefficients are ascending, include the leading term, and are reduced
    /// mod the prime. For fields of prime order the argument is ignored.
    /// A modulus that fails the irreducibility test is accepted with a
    /// logged warning, since products then leave the field's algebra.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidFieldOrder` if `order` is not a prime power,
    /// and `FieldError::InvalidModulus` if the polynomial does not have degree
    /// `power` or is not monic.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Field;
    ///
    /// // GF(2^8) with the alternative modulus x^8 + x^4 + x^3 + x^2 + 1
    /// let f = Field::with_modulus(256, &[1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap();
    /// assert_eq!(f.modulus_polynomial(), Some(&[1, 0, 1, 1, 1, 0, 0, 0, 1][..]));
    /// ```
    pub fn with_modulus(order: u64, modulus: &[u64]) -> Result<Self, FieldError> {
        let (prime, power) = Self::factor_order(order)?;

        if power == 1 {
            return Ok(Self::from_parts(order, prime, power, Some(alloc::vec![1])));
        }

        let mut reduced: Vec<u64> = modulus.iter().map(|&c| c % prime).collect();
        poly::normalize(&mut reduced);

        let got = poly::degree(&reduced);
        if got != Some(power) {
            return Err(ModulusError::WrongDegree {
                expected: power,
                got,
            }
            .into());
        }
        if reduced[power] != 1 {
            return Err(ModulusError::NotMonic.into());
        }

        if !poly::is_irreducible_mod_p(&reduced, prime) {
            log::warn!(
                "modulus {} is reducible over GF({}); GF({}) arithmetic will not form a field",
                PolyDisplay(&reduced),
                prime,
                order
            );
        }

        Ok(Self::from_parts(order, prime, power, Some(reduced)))
    }

    fn from_parts(order: u64, prime: u64, power: usize, modulus: Option<Vec<u64>>) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                order,
                prime,
                power,
                modulus,
            }),
        }
    }

    fn factor_order(order: u64) -> Result<(u64, usize), FieldError> {
        let factors = Factorization::of(order);
        match factors.as_prime_power() {
            Some((prime, power)) => Ok((prime, power as usize)),
            None => Err(FieldError::InvalidFieldOrder { order, factors }),
        }
    }

    /// Number of elements, `prime^power`.
    pub fn order(&self) -> u64 {
        self.inner.order
    }

    /// The characteristic.
    pub fn prime(&self) -> u64 {
        self.inner.prime
    }

    /// The extension degree, which is also the number of coefficients per element.
    pub fn power(&self) -> usize {
        self.inner.power
    }

    /// The modulus polynomial (ascending, `power + 1` coefficients), `[1]`
    /// for prime fields, or `None` if the field has no known modulus.
    pub fn modulus_polynomial(&self) -> Option<&[u64]> {
        self.inner.modulus.as_deref()
    }

    /// True when no modulus polynomial is known, so multiplication is unavailable.
    pub fn is_degenerate(&self) -> bool {
        self.inner.modulus.is_none()
    }

    /// Whether the modulus passes Rabin's irreducibility test.
    ///
    /// Prime fields are always true; degenerate fields are false.
    pub fn modulus_is_irreducible(&self) -> bool {
        match (self.power(), self.modulus_polynomial()) {
            (1, _) => true,
            (_, Some(m)) => poly::is_irreducible_mod_p(m, self.prime()),
            (_, None) => false,
        }
    }

    /// Mint an element from its integer encoding.
    ///
    /// `value` is written in base `prime` over `power` digits, least
    /// significant digit first; digit `k` becomes the coefficient of `x^k`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::ValueOutOfField` if `value >= order`.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Field;
    ///
    /// let gf9 = Field::new(9).unwrap();
    /// assert_eq!(gf9.element(7).unwrap().coeff(), &[1, 2]);
    /// assert!(gf9.element(9).is_err());
    /// ```
    pub fn element(&self, value: u64) -> Result<Element, FieldError> {
        let prime = self.prime();
        let mut coeff = Vec::with_capacity(self.power());
        let mut quotient = value;
        for _ in 0..self.power() {
            coeff.push(quotient % prime);
            quotient /= prime;
        }

        if quotient != 0 {
            return Err(FieldError::ValueOutOfField {
                field: self.to_string(),
                value,
            });
        }

        Ok(Element::from_parts(self.clone(), coeff))
    }

    /// Mint an element from explicit coefficients (ascending degree).
    ///
    /// Each coefficient is reduced mod `prime`, so negative values wrap.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::CoefficientCount` unless exactly `power`
    /// coefficients are given.
    pub fn element_from_coeffs(&self, coeffs: &[i64]) -> Result<Element, FieldError> {
        if coeffs.len() != self.power() {
            return Err(FieldError::CoefficientCount {
                expected: self.power(),
                got: coeffs.len(),
            });
        }

        let coeff = poly::pad(&poly::reduce_mod_p(coeffs, self.prime()), self.power());
        Ok(Element::from_parts(self.clone(), coeff))
    }

    /// Coerce an integer, coefficient vector, or element into this field.
    ///
    /// Elements are accepted only if they already belong to this field.
    ///
    /// # Example
    ///
    /// ```
    /// use galoisfield::Field;
    ///
    /// let f = Field::new(27).unwrap();
    /// let a = f.as_element(5u64).unwrap();
    /// let b = f.as_element(vec![2i64, 1, 0]).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(f.as_element(&a).unwrap(), a);
    /// ```
    pub fn as_element<V: Into<ElementValue>>(&self, value: V) -> Result<Element, FieldError> {
        match value.into() {
            ElementValue::Integer(v) => self.element(v),
            ElementValue::Coefficients(coeffs) => self.element_from_coeffs(&coeffs),
            ElementValue::Element(e) => {
                self.check_compatible(e.field())?;
                Ok(e)
            }
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> Element {
        Element::from_parts(self.clone(), alloc::vec![0; self.power()])
    }

    /// The multiplicative identity.
    pub fn one(&self) -> Element {
        let mut coeff = alloc::vec![0; self.power()];
        coeff[0] = 1 % self.prime();
        Element::from_parts(self.clone(), coeff)
    }

    /// Iterate over all elements in integer order.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.order()).filter_map(move |v| self.element(v).ok())
    }

    /// Sum a sequence of elements of this field, starting from zero.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` if any element belongs to another field.
    pub fn sum<'a, I>(&self, elements: I) -> Result<Element, FieldError>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        elements
            .into_iter()
            .try_fold(self.zero(), |acc, e| acc.checked_add(e))
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Element {
        let value = rng.gen_range(0..self.order());
        self.element(value)
            .unwrap_or_else(|_| unreachable!("sampled value below the field order"))
    }

    /// Check that elements of `self` and `other` may be combined.
    ///
    /// Fields must share prime, power and modulus polynomial.
    pub(crate) fn check_compatible(&self, other: &Field) -> Result<(), FieldError> {
        if Arc::ptr_eq(&self.inner, &other.inner)
            || (self == other && self.inner.modulus == other.inner.modulus)
        {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    /// The modulus, or `UndefinedModulus` for degenerate fields.
    pub(crate) fn require_modulus(&self) -> Result<&[u64], FieldError> {
        self.modulus_polynomial()
            .ok_or_else(|| FieldError::UndefinedModulus {
                field: self.to_string(),
            })
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Element> for Field {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Element {
        self.random_element(rng)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.prime() == other.prime() && self.power() == other.power()
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prime().hash(state);
        self.power().hash(state);
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power() == 1 {
            write!(f, "GF({})", self.prime())
        } else {
            write!(f, "GF({}{})", self.prime(), to_superscript(self.power() as u64))
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("order", &self.order())
            .field("prime", &self.prime())
            .field("power", &self.power())
            .field("modulus", &self.inner.modulus)
            .finish()
    }
}

// ============================================================================
// Serde
// ============================================================================

/// Wire form of a field: its order and modulus.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FieldRepr {
    order: u64,
    modulus: Option<Vec<u64>>,
}

/// Serialize a field as `{ "order": .., "modulus": [..] | null }`.
#[cfg(feature = "serde")]
impl serde::Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        FieldRepr {
            order: self.order(),
            modulus: self.inner.modulus.clone(),
        }
        .serialize(serializer)
    }
}

/// Deserializing re-runs construction, so the order and modulus are validated.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = FieldRepr::deserialize(deserializer)?;
        let field = match repr.modulus {
            Some(m) => Field::with_modulus(repr.order, &m),
            None => Field::new(repr.order),
        };
        field.map_err(serde::de::Error::custom)
    }
}
