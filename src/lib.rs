//! # minimath
//!
//! minimath is a small mathematics utility library. It provides
//! complex-number arithmetic (as a functional engine over value-pairs and as
//! a stateful wrapper type), a tolerant floating-point comparator, integer
//! validation, number formatting with configurable separators, and a message
//! templating helper with explicit localization catalogs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Complex-number arithmetic.
///
/// The core of the crate. Exposes the same set of operations twice: as pure
/// functions over `[real, imaginary]` value-pairs in [`complex::ops`], and as
/// methods on the owning wrapper type in [`complex::number`]. Operations that
/// are mathematically undefined for complex numbers (ordering, integer
/// division, modulo) fail with [`error::MathError::Unsupported`]; reserved
/// operations fail with [`error::MathError::NotImplemented`].
///
/// # Responsibilities
/// - Implements the arithmetic formulas exactly once, in the functional
///   engine.
/// - Provides a chainable wrapper with explicit in-place mutation methods.
/// - Routes undefined operations through a single shared error path.
pub mod complex;
/// Provides the error types raised by arithmetic operations.
///
/// Defines [`error::MathError`] with its two kinds — operations that are
/// mathematically undefined and operations that are reserved but not yet
/// implemented — and renders their text through the message templating
/// helper, optionally localized through a caller-supplied catalog.
pub mod error;
/// Number formatting for display.
///
/// Renders numeric results with a configurable decimal separator, grouping
/// separator, and fixed decimal places. Consumer-side only: nothing in the
/// core arithmetic calls into this module.
pub mod format;
/// Message templating with optional localization.
///
/// Substitutes positional `$0`, `$1`, ... placeholders into message
/// templates, and looks templates up in an explicit [`message::Catalog`]
/// before substitution. There is no process-wide message table; catalogs are
/// passed in by the caller, so message construction is independently
/// testable.
pub mod message;
/// Numeric constants and scalar predicates.
///
/// Houses the [`util::num::almost_equal`] tolerance primitive the complex
/// equality check is built on, the [`util::num::is_integer`] validator, and
/// the crate's numeric constants.
///
/// # Responsibilities
/// - Decide when two doubles should be treated as equal (absolute threshold
///   near zero, relative threshold elsewhere).
/// - Validate that an `f64` holds an exactly-representable integer.
pub mod util;
