/// Numeric constants and scalar predicates.
///
/// This module provides the tolerance primitive used by complex-number
/// equality checks, integer validation for `f64` values, and the crate's
/// numeric constants (conversion factors, the safe-integer bound, and the
/// almost-equal thresholds).
pub mod num;
