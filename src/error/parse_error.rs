#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token sequence.
pub enum ParseError {
    /// A consume site found a different token kind than it required.
    ExpectedToken {
        /// The token kind the grammar required.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token no expression rule can start with.
    IllegalToken {
        /// The token actually found.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
        /// First column of the offending token.
        start: usize,
        /// Column one past the end of the offending token.
        end:   usize,
    },
    /// A literal payload that is not legal inside an expression.
    IllegalLiteral {
        /// The literal value as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// First column of the offending literal.
        start:   usize,
        /// Column one past the end of the offending literal.
        end:     usize,
    },
    /// The input matches no declaration form and no expression form.
    UnsupportedDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input while a grammar rule still needed tokens.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the column span of the offending token, when known.
    #[must_use]
    pub const fn span(&self) -> Option<(usize, usize)> {
        match self {
            Self::IllegalToken { start, end, .. } | Self::IllegalLiteral { start, end, .. } => {
                Some((*start, *end))
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Expected token {expected}, but found {found}."),

            Self::IllegalToken { token,
                                 line,
                                 start,
                                 end, } => write!(f,
                                                  "Error on line {line}: Illegal token {token} at position {start} until {end}."),

            Self::IllegalLiteral { literal,
                                   line,
                                   start,
                                   end, } => write!(f,
                                                    "Error on line {line}: Illegal literal \"{literal}\" at position {start} until {end}."),

            Self::UnsupportedDeclaration { line } => {
                write!(f, "Error on line {line}: Declaration not supported.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
