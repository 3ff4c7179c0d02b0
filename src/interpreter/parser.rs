/// Parse entry point and top-level form dispatch.
///
/// Decides whether an input line is a variable declaration, a bare
/// expression, or a variable access, and hands off to the matching parser.
pub mod core;

/// Variable declaration parsing.
///
/// Implements the lookahead predicates for the four declaration forms and
/// builds [`crate::ast::VariableDeclaration`] nodes.
pub mod declaration;

/// Expression parsing.
///
/// Implements the precedence-climbing grammar for arithmetic expressions,
/// from additive operators down to literals.
pub mod expression;
