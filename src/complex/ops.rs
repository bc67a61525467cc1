use crate::{
    error::{MathError, MathResult},
    util::num::almost_equal,
};

/// A complex number as an ordered `[real, imaginary]` value-pair.
///
/// The pair is owned by the caller and passed by value to every operation in
/// this module; operations never mutate their inputs unless they are one of
/// the explicitly named in-place variants.
pub type Pair = [f64; 2];

/// The error every operation without a complex-number definition raises.
const fn unsupported() -> MathError {
    MathError::Unsupported { subject: "complex numbers" }
}

/// Adds two complex numbers componentwise.
///
/// # Example
/// ```
/// use minimath::complex::ops::add;
///
/// assert_eq!(add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
/// ```
#[must_use]
pub const fn add(a: Pair, b: Pair) -> Pair {
    [a[0] + b[0], a[1] + b[1]]
}

/// Subtracts the second complex number from the first componentwise.
///
/// # Example
/// ```
/// use minimath::complex::ops::subtract;
///
/// assert_eq!(subtract([1.0, 2.0], [3.0, 4.0]), [-2.0, -2.0]);
/// ```
#[must_use]
pub const fn subtract(a: Pair, b: Pair) -> Pair {
    [a[0] - b[0], a[1] - b[1]]
}

/// Multiplies two complex numbers.
///
/// # Example
/// ```
/// use minimath::complex::ops::multiply;
///
/// assert_eq!(multiply([2.0, 3.0], [4.0, 5.0]), [-7.0, 22.0]);
/// ```
#[must_use]
pub fn multiply(a: Pair, b: Pair) -> Pair {
    [a[0].mul_add(b[0], -(a[1] * b[1])), a[1].mul_add(b[0], a[0] * b[1])]
}

/// Divides the first complex number by the second.
///
/// Division by the zero pair is not trapped: the components come out as
/// IEEE-754 `±inf`/`NaN`, which callers must check for if they care.
///
/// # Example
/// ```
/// use minimath::complex::ops::{divide, is_nearly_equal_to};
///
/// let quotient = divide([-7.0, 22.0], [4.0, 5.0]);
/// assert!(is_nearly_equal_to(quotient, [2.0, 3.0]));
///
/// assert!(divide([1.0, 0.0], [0.0, 0.0])[0].is_nan());
/// ```
#[must_use]
pub fn divide(a: Pair, b: Pair) -> Pair {
    // the modulus of b squared, |b|^2
    let modb2 = b[0].mul_add(b[0], b[1] * b[1]);

    [a[0].mul_add(b[0], a[1] * b[1]) / modb2, a[1].mul_add(b[0], -(a[0] * b[1])) / modb2]
}

/// Squares a complex number, the special case of multiplying a number by
/// itself. The result can differ from [`multiply`]`(a, a)` in the last ulp,
/// since [`multiply`] goes through fused multiply-adds.
///
/// # Example
/// ```
/// use minimath::complex::ops::squared;
///
/// assert_eq!(squared([2.0, 3.0]), [-5.0, 12.0]);
/// ```
#[must_use]
pub const fn squared(a: Pair) -> Pair {
    [a[0] * a[0] - a[1] * a[1], 2.0 * (a[0] * a[1])]
}

/// Returns the complex conjugate.
///
/// # Example
/// ```
/// use minimath::complex::ops::conjugate;
///
/// assert_eq!(conjugate([1.0, 5.0]), [1.0, -5.0]);
/// assert_eq!(conjugate(conjugate([1.0, 5.0])), [1.0, 5.0]);
/// ```
#[must_use]
pub const fn conjugate(a: Pair) -> Pair {
    [a[0], -a[1]]
}

/// Returns the real part.
#[must_use]
pub const fn real(a: Pair) -> f64 {
    a[0]
}

/// Returns the imaginary part.
#[must_use]
pub const fn imaginary(a: Pair) -> f64 {
    a[1]
}

/// Returns the square of the modulus.
///
/// Avoids a square root when only relative magnitudes matter.
///
/// # Example
/// ```
/// use minimath::complex::ops::modulus_squared;
///
/// assert_eq!(modulus_squared([3.0, 4.0]), 25.0);
/// ```
#[must_use]
pub const fn modulus_squared(a: Pair) -> f64 {
    a[0] * a[0] + a[1] * a[1]
}

/// Returns the modulus (absolute value).
///
/// # Example
/// ```
/// use minimath::complex::ops::modulus;
///
/// assert_eq!(modulus([3.0, 4.0]), 5.0);
/// ```
#[must_use]
pub fn modulus(a: Pair) -> f64 {
    a[0].hypot(a[1])
}

/// Returns the argument (phase angle) in radians.
///
/// The principal value lies in `(-π, π]`; `atan2(0, 0)` follows the standard
/// library's convention.
///
/// # Example
/// ```
/// use minimath::complex::ops::argument;
///
/// assert!((argument([0.0, 1.0]) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
/// ```
#[must_use]
pub fn argument(a: Pair) -> f64 {
    a[1].atan2(a[0])
}

/// Converts to polar form, `[modulus, argument]`.
#[must_use]
pub fn to_polar(a: Pair) -> Pair {
    [modulus(a), argument(a)]
}

/// Converts a `[modulus, argument]` polar pair back to rectangular form.
///
/// Inverse of [`to_polar`] up to the argument branch.
///
/// # Example
/// ```
/// use minimath::complex::ops::{from_polar, is_nearly_equal_to, to_polar};
///
/// let a = [3.0, -4.0];
/// assert!(is_nearly_equal_to(from_polar(to_polar(a)), a));
/// ```
#[must_use]
pub fn from_polar(p: Pair) -> Pair {
    [p[0] * p[1].cos(), p[0] * p[1].sin()]
}

/// Tests two complex numbers for componentwise approximate equality.
///
/// Inherits the non-transitivity of
/// [`almost_equal`](crate::util::num::almost_equal).
#[must_use]
pub fn is_nearly_equal_to(a: Pair, b: Pair) -> bool {
    almost_equal(a[0], b[0]) && almost_equal(a[1], b[1])
}

/// Adds `b` to `a` in place.
///
/// # Example
/// ```
/// use minimath::complex::ops::increment_by;
///
/// let mut a = [1.0, 2.0];
/// increment_by(&mut a, [3.0, 4.0]);
/// assert_eq!(a, [4.0, 6.0]);
/// ```
pub fn increment_by(a: &mut Pair, b: Pair) {
    a[0] += b[0];
    a[1] += b[1];
}

/// Subtracts `b` from `a` in place.
pub fn decrement_by(a: &mut Pair, b: Pair) {
    a[0] -= b[0];
    a[1] -= b[1];
}

/// Multiplies `a` by `b` in place.
///
/// Both result components are computed before either is stored, so the
/// imaginary part is not poisoned by the freshly written real part.
pub fn multiply_by(a: &mut Pair, b: Pair) {
    *a = multiply(*a, b);
}

/// Divides `a` by `b` in place. Division by the zero pair is not trapped,
/// exactly as in [`divide`].
pub fn divide_by(a: &mut Pair, b: Pair) {
    *a = divide(*a, b);
}

/// Integer division is not defined for complex numbers.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
///
/// # Example
/// ```
/// use minimath::complex::ops::div;
///
/// let error = div([1.0, 2.0], [3.0, 4.0]).unwrap_err();
/// assert_eq!(error.to_string(),
///            "The requested function is not defined for complex numbers.");
/// ```
pub const fn div(_a: Pair, _b: Pair) -> MathResult<Pair> {
    Err(unsupported())
}

/// The modulo operation is not defined for complex numbers.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn modulo(_a: Pair, _b: Pair) -> MathResult<Pair> {
    Err(unsupported())
}

/// Combined quotient and remainder is not defined for complex numbers.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn div_mod(_a: Pair, _b: Pair) -> MathResult<(Pair, Pair)> {
    Err(unsupported())
}

/// Complex numbers have no total order to compare by.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn compare(_a: Pair, _b: Pair) -> MathResult<std::cmp::Ordering> {
    Err(unsupported())
}

/// Exact equality by ordering is not defined for complex numbers; use
/// [`is_nearly_equal_to`] instead.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn is_equal_to(_a: Pair, _b: Pair) -> MathResult<bool> {
    Err(unsupported())
}

/// Complex numbers have no total order.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn is_greater_than(_a: Pair, _b: Pair) -> MathResult<bool> {
    Err(unsupported())
}

/// Complex numbers have no total order.
///
/// # Errors
/// Always returns [`MathError::Unsupported`].
pub const fn is_less_than(_a: Pair, _b: Pair) -> MathResult<bool> {
    Err(unsupported())
}

/// Reserved. The signum of a complex number is itself complex.
///
/// # Errors
/// Always returns [`MathError::NotImplemented`].
pub const fn signum(_a: Pair) -> MathResult<Pair> {
    Err(MathError::NotImplemented)
}

/// Reserved. A completed version would compute `exp(b * log(a))`.
///
/// # Errors
/// Always returns [`MathError::NotImplemented`].
pub const fn power(_a: Pair, _b: Pair) -> MathResult<Pair> {
    Err(MathError::NotImplemented)
}

/// Reserved. A completed version would be
/// `from_polar([modulus(a).sqrt(), argument(a) / 2.0])`.
///
/// # Errors
/// Always returns [`MathError::NotImplemented`].
pub const fn sqrt(_a: Pair) -> MathResult<Pair> {
    Err(MathError::NotImplemented)
}

/// Reserved. A completed version would be
/// `[exp(re) * cos(im), exp(re) * sin(im)]`.
///
/// # Errors
/// Always returns [`MathError::NotImplemented`].
pub const fn exp(_a: Pair) -> MathResult<Pair> {
    Err(MathError::NotImplemented)
}

/// Reserved. A completed version would be `[ln(modulus(a)), argument(a)]`.
///
/// # Errors
/// Always returns [`MathError::NotImplemented`].
pub const fn log(_a: Pair) -> MathResult<Pair> {
    Err(MathError::NotImplemented)
}
