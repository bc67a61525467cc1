/// Convert degrees to radians by multiplication.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;
/// Convert radians to degrees by multiplication.
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;
/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;
/// The relative error of a single IEEE-754 double-precision operation.
pub const EPSILON: f64 = 1.0 / 9_007_199_254_740_991.0;
/// Acceptable relative difference between almost equal floats.
pub const ALMOST_EQUAL: f64 = 1e-12;
/// Acceptable absolute difference between almost equal floats near zero.
pub const ALMOST_ZERO: f64 = 1e-305;

/// Decides whether two floating-point numbers should be treated as equal.
///
/// Two numbers are almost equal when their absolute difference is below
/// [`ALMOST_ZERO`] (needed for numbers near zero, where a relative test is
/// meaningless) or when their relative difference is below [`ALMOST_EQUAL`].
///
/// This relation is reflexive and symmetric but **not** transitive:
/// `almost_equal(a, b) && almost_equal(b, c)` does not imply
/// `almost_equal(a, c)`. It is total over all double pairs, including `±0`,
/// `NaN` and the infinities.
///
/// # Example
/// ```
/// use minimath::util::num::almost_equal;
///
/// assert!(almost_equal(0.1 + 0.2, 0.3));
/// assert!(!almost_equal(0.1, 0.2));
///
/// // The absolute test catches values straddling zero.
/// assert!(almost_equal(0.49e-305, -0.49e-305));
/// assert!(!almost_equal(0.5e-305, -0.5e-305));
/// ```
#[must_use]
pub fn almost_equal(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();

    diff < ALMOST_ZERO || diff < a.abs().max(b.abs()) * ALMOST_EQUAL
}

/// Tests whether an `f64` holds a valid integer.
///
/// A value qualifies when it is finite, has no fractional part, and lies
/// within [`MAX_SAFE_INT`] in absolute value, so that it is held exactly.
///
/// # Example
/// ```
/// use minimath::util::num::{MAX_SAFE_INT, is_integer};
///
/// assert!(is_integer(42.0));
/// assert!(is_integer(-3.0));
/// assert!(!is_integer(1.5));
/// assert!(!is_integer(f64::NAN));
/// assert!(!is_integer(f64::INFINITY));
/// assert!(!is_integer(MAX_SAFE_INT * 2.0));
/// ```
#[must_use]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0 && x.abs() <= MAX_SAFE_INT
}
