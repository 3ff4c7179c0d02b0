/// Lexical errors.
///
/// Defines all error types that can occur while turning raw source text into
/// tokens. Lexical errors include malformed character literals and numeric
/// literals that do not fit their target width.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token sequence. Parse errors include unexpected tokens at a consume
/// site, inputs that match no declaration or expression form, and literal
/// payloads that are not legal inside an expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include operator and operand type mismatches, unresolved variable
/// references, and reassignment of immutable variables.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Renders a caret marker underneath the offending span of a source line.
///
/// The returned string contains the source line followed by a second line of
/// spaces and `^` characters covering the half-open column span
/// `start..end`. Spans that reach past the end of the line are clamped so a
/// marker is always produced.
///
/// # Parameters
/// - `source`: The source line the error was reported against.
/// - `start`: First column of the offending span.
/// - `end`: Column one past the end of the offending span.
///
/// # Returns
/// A two-line string suitable for printing below an error message.
///
/// # Example
/// ```
/// use jawa::error::highlight_span;
///
/// let rendered = highlight_span("'ab'", 0, 4);
/// assert_eq!(rendered, "'ab'\n^^^^");
/// ```
#[must_use]
pub fn highlight_span(source: &str, start: usize, end: usize) -> String {
    let width = source.chars().count().max(1);
    let start = start.min(width - 1);
    let end = end.clamp(start + 1, width);

    let marker = " ".repeat(start) + &"^".repeat(end - start);
    format!("{source}\n{marker}")
}
