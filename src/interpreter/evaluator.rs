/// Core evaluation logic.
///
/// Contains the evaluator itself: node dispatch, variable access, and
/// declaration handling against the environment.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the per-operator coercion matrix over pairings of runtime
/// types, including numeric promotion, string and character forms.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus, numeric negation, boolean negation, and the
/// absolute-value operation.
pub mod unary;
