/// The stateful complex-number wrapper.
///
/// Wraps one value-pair behind the [`number::Complex`] type, which offers the
/// same operations as the functional engine as methods. Pure methods return a
/// new instance; the mutating methods overwrite the receiver and return it
/// again so that calls chain.
pub mod number;
/// The functional complex-number engine.
///
/// Pure functions over `[real, imaginary]` value-pairs, plus in-place
/// variants for callers that own a mutable pair. All arithmetic formulas live
/// here; the wrapper in [`number`] delegates to this module rather than
/// duplicating them.
pub mod ops;
