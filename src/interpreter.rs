/// The environment module holds the session's variable store.
///
/// The environment is a flat mapping from identifier to value and
/// mutability, living for the whole interactive session. It is a plain
/// keyed store; declaration policy is enforced by the evaluator.
///
/// # Responsibilities
/// - Stores, looks up, and tests for variables by name.
/// - Keeps each variable's mutability flag next to its value.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST produced by the parser, applies the
/// per-operator coercion tables over runtime types, and reads or writes the
/// environment for variable accesses and declarations.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies numeric promotion and the string/char coercion rules.
/// - Reports runtime errors such as type mismatches or unresolved
///   references.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a sequence of positioned
/// tokens, each corresponding to a meaningful language element such as a
/// literal, identifier, operator, keyword, or comment. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric, string, char, and boolean literals plus comments.
/// - Reports lexical errors for malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser consumes the token sequence of one logical line and produces
/// exactly one root node: a variable declaration, a bare expression, or a
/// variable access. Expressions follow a precedence-climbing grammar.
///
/// # Responsibilities
/// - Disambiguates the four declaration forms by bounded lookahead.
/// - Builds expression trees with the grammar's precedence and
///   associativity.
/// - Reports syntax errors with line and column information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed runtime value, covering the
/// four numeric widths, strings, characters, and booleans, together with
/// conversions from literal payloads.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Names runtime types for error reporting.
/// - Converts literal payloads into runtime values.
pub mod value;
