/// Numeric and character conversion helpers.
///
/// This module provides safe conversion routines for the places where the
/// evaluator has to move between representations: shifting a character by an
/// integer code offset and turning a signed repetition count into a usable
/// length. All functions return a `Result` instead of panicking on values
/// outside the valid range.
pub mod num;
