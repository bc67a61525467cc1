use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    ops as stdops,
};

use ordered_float::OrderedFloat;

use crate::{
    complex::ops::{self, Pair},
    error::MathResult,
};

/// `0` as a complex number.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// A complex number owning one `[real, imaginary]` value-pair.
///
/// The wrapper delegates every operation to the pure functions in
/// [`crate::complex::ops`]. Methods come in two kinds: pure methods return a
/// new instance and leave the receiver untouched, while the mutating methods
/// ([`increment_by`](Self::increment_by) and friends) overwrite the receiver's
/// pair and return it again for chaining.
///
/// The constructor performs no validation: non-finite components propagate
/// through the arithmetic as IEEE-754 dictates and are the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    value: Pair,
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.value[0], self.value[1]) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl Complex {
    /// Constructs a complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let c = Complex::new(5.0, -1.0);
    /// assert_eq!(c.value(), [5.0, -1.0]);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { value: [real, imaginary] }
    }

    /// Returns a copy of the wrapped value-pair.
    #[must_use]
    pub const fn value(&self) -> Pair {
        self.value
    }

    /// Overwrites the wrapped value-pair. Chainable.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let mut c = Complex::default();
    /// c.set_value([1.0, 2.0]);
    /// assert_eq!(c.value(), [1.0, 2.0]);
    /// ```
    pub const fn set_value(&mut self, value: Pair) -> &mut Self {
        self.value = value;
        self
    }

    /// Constructs a complex number from a `[modulus, argument]` polar pair.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let c = Complex::from_polar([2.0, 0.0]);
    /// assert!(c.is_nearly_equal_to(Complex::new(2.0, 0.0)));
    /// ```
    #[must_use]
    pub fn from_polar(polar: Pair) -> Self {
        Self { value: ops::from_polar(polar) }
    }

    /// Returns the sum of `self` and `b` as a new instance.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let a = Complex::new(1.0, 2.0);
    /// let b = Complex::new(3.0, 4.0);
    /// assert_eq!(a.add(b).value(), [4.0, 6.0]);
    /// assert_eq!(a.value(), [1.0, 2.0]);
    /// ```
    #[must_use]
    pub const fn add(self, b: Self) -> Self {
        Self { value: ops::add(self.value, b.value) }
    }

    /// Returns the difference of `self` and `b` as a new instance.
    #[must_use]
    pub const fn subtract(self, b: Self) -> Self {
        Self { value: ops::subtract(self.value, b.value) }
    }

    /// Returns the product of `self` and `b` as a new instance.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let a = Complex::new(2.0, 3.0);
    /// let b = Complex::new(4.0, 5.0);
    /// assert_eq!(a.multiply(b).value(), [-7.0, 22.0]);
    /// ```
    #[must_use]
    pub fn multiply(self, b: Self) -> Self {
        Self { value: ops::multiply(self.value, b.value) }
    }

    /// Returns the quotient of `self` and `b` as a new instance.
    ///
    /// Division by zero is not trapped; see [`ops::divide`].
    #[must_use]
    pub fn divide(self, b: Self) -> Self {
        Self { value: ops::divide(self.value, b.value) }
    }

    /// Returns the square of `self` as a new instance.
    #[must_use]
    pub const fn squared(self) -> Self {
        Self { value: ops::squared(self.value) }
    }

    /// Returns the complex conjugate as a new instance.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let c = Complex::new(1.0, 5.0);
    /// assert_eq!(c.conjugate().value(), [1.0, -5.0]);
    /// ```
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self { value: ops::conjugate(self.value) }
    }

    /// Returns the real part.
    #[must_use]
    pub const fn real(&self) -> f64 {
        ops::real(self.value)
    }

    /// Returns the imaginary part.
    #[must_use]
    pub const fn imaginary(&self) -> f64 {
        ops::imaginary(self.value)
    }

    /// Returns the square of the modulus.
    #[must_use]
    pub const fn modulus_squared(&self) -> f64 {
        ops::modulus_squared(self.value)
    }

    /// Returns the modulus (absolute value).
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// assert_eq!(Complex::new(3.0, 4.0).modulus(), 5.0);
    /// ```
    #[must_use]
    pub fn modulus(&self) -> f64 {
        ops::modulus(self.value)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn argument(&self) -> f64 {
        ops::argument(self.value)
    }

    /// Returns the value in `[modulus, argument]` polar form.
    #[must_use]
    pub fn to_polar(&self) -> Pair {
        ops::to_polar(self.value)
    }

    /// Tests for componentwise approximate equality with `b`.
    ///
    /// Inherits the non-transitivity of
    /// [`almost_equal`](crate::util::num::almost_equal).
    #[must_use]
    pub fn is_nearly_equal_to(&self, b: Self) -> bool {
        ops::is_nearly_equal_to(self.value, b.value)
    }

    /// Adds `b` to `self` in place. Chainable.
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::Complex;
    ///
    /// let mut a = Complex::new(1.0, 2.0);
    /// a.increment_by(Complex::new(3.0, 4.0))
    ///  .increment_by(Complex::new(1.0, 1.0));
    /// assert_eq!(a.value(), [5.0, 7.0]);
    /// ```
    pub fn increment_by(&mut self, b: Self) -> &mut Self {
        ops::increment_by(&mut self.value, b.value);
        self
    }

    /// Subtracts `b` from `self` in place. Chainable.
    pub fn decrement_by(&mut self, b: Self) -> &mut Self {
        ops::decrement_by(&mut self.value, b.value);
        self
    }

    /// Multiplies `self` by `b` in place. Chainable.
    pub fn multiply_by(&mut self, b: Self) -> &mut Self {
        ops::multiply_by(&mut self.value, b.value);
        self
    }

    /// Divides `self` by `b` in place. Chainable. Division by zero is not
    /// trapped; see [`ops::divide`].
    pub fn divide_by(&mut self, b: Self) -> &mut Self {
        ops::divide_by(&mut self.value, b.value);
        self
    }

    /// Integer division is not defined for complex numbers. True complex
    /// division is the `/` operator or [`divide`](Self::divide).
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    ///
    /// # Example
    /// ```
    /// use minimath::complex::number::{Complex, ONE};
    ///
    /// let error = Complex::default().div(ONE).unwrap_err();
    /// assert_eq!(error.to_string(),
    ///            "The requested function is not defined for complex numbers.");
    /// ```
    pub const fn div(self, b: Self) -> MathResult<Self> {
        match ops::div(self.value, b.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// The modulo operation is not defined for complex numbers.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn modulo(self, b: Self) -> MathResult<Self> {
        match ops::modulo(self.value, b.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// Combined quotient and remainder is not defined for complex numbers.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn div_mod(self, b: Self) -> MathResult<(Self, Self)> {
        match ops::div_mod(self.value, b.value) {
            Ok((quotient, remainder)) => {
                Ok((Self { value: quotient }, Self { value: remainder }))
            },
            Err(e) => Err(e),
        }
    }

    /// Complex numbers have no total order to compare by.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn compare(self, b: Self) -> MathResult<Ordering> {
        ops::compare(self.value, b.value)
    }

    /// Exact equality by ordering is not defined for complex numbers; use
    /// [`is_nearly_equal_to`](Self::is_nearly_equal_to) instead.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn is_equal_to(self, b: Self) -> MathResult<bool> {
        ops::is_equal_to(self.value, b.value)
    }

    /// Complex numbers have no total order.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn is_greater_than(self, b: Self) -> MathResult<bool> {
        ops::is_greater_than(self.value, b.value)
    }

    /// Complex numbers have no total order.
    ///
    /// # Errors
    /// Always returns [`MathError::Unsupported`](crate::error::MathError).
    pub const fn is_less_than(self, b: Self) -> MathResult<bool> {
        ops::is_less_than(self.value, b.value)
    }

    /// Reserved. The signum of a complex number is itself complex.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`](crate::error::MathError).
    pub const fn signum(self) -> MathResult<Self> {
        match ops::signum(self.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// Reserved. A completed version would compute `exp(b * log(self))`.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`](crate::error::MathError).
    pub const fn power(self, b: Self) -> MathResult<Self> {
        match ops::power(self.value, b.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// Reserved. A completed version would use the polar form.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`](crate::error::MathError).
    pub const fn sqrt(self) -> MathResult<Self> {
        match ops::sqrt(self.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// Reserved.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`](crate::error::MathError).
    pub const fn exp(self) -> MathResult<Self> {
        match ops::exp(self.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }

    /// Reserved.
    ///
    /// # Errors
    /// Always returns [`MathError::NotImplemented`](crate::error::MathError).
    pub const fn log(self) -> MathResult<Self> {
        match ops::log(self.value) {
            Ok(value) => Ok(Self { value }),
            Err(e) => Err(e),
        }
    }
}

impl Default for Complex {
    /// `Complex::default()` is zero.
    fn default() -> Self {
        ZERO
    }
}

impl From<Pair> for Complex {
    fn from(value: Pair) -> Self {
        Self { value }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self { value: [real, 0.0] }
    }
}

impl stdops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { value: [-self.value[0], -self.value[1]] }
    }
}

impl stdops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { value: ops::add(self.value, rhs.value) }
    }
}

impl stdops::AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        ops::increment_by(&mut self.value, rhs.value);
    }
}

impl stdops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { value: ops::subtract(self.value, rhs.value) }
    }
}

impl stdops::SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        ops::decrement_by(&mut self.value, rhs.value);
    }
}

impl stdops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { value: ops::multiply(self.value, rhs.value) }
    }
}

impl stdops::MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        ops::multiply_by(&mut self.value, rhs.value);
    }
}

impl stdops::Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self { value: ops::divide(self.value, rhs.value) }
    }
}

impl stdops::DivAssign for Complex {
    fn div_assign(&mut self, rhs: Self) {
        ops::divide_by(&mut self.value, rhs.value);
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.value[0]) == OrderedFloat(other.value[0])
        && OrderedFloat(self.value[1]) == OrderedFloat(other.value[1])
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.value[0]).hash(state);
        OrderedFloat(self.value[1]).hash(state);
    }
}
