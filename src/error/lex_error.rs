#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character literal with nothing between the quotes.
    EmptyCharLiteral {
        /// The source line where the error occurred.
        line:  usize,
        /// First column of the offending literal.
        start: usize,
        /// Column one past the end of the offending literal.
        end:   usize,
    },
    /// A character literal holding more than one character.
    TooManyCharacters {
        /// The content found between the quotes.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// First column of the offending literal.
        start:   usize,
        /// Column one past the end of the offending literal.
        end:     usize,
    },
    /// A numeric literal that does not fit its target width.
    NumberOutOfRange {
        /// The digits as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// First column of the offending literal.
        start:   usize,
        /// Column one past the end of the offending literal.
        end:     usize,
    },
    /// A fragment of text no lexer rule could make sense of.
    UnexpectedCharacter {
        /// The fragment as written in the source.
        fragment: String,
        /// The source line where the error occurred.
        line:     usize,
        /// First column of the offending fragment.
        start:    usize,
        /// Column one past the end of the offending fragment.
        end:      usize,
    },
}

impl LexError {
    /// Returns the column span of the offending text, when known.
    #[must_use]
    pub const fn span(&self) -> Option<(usize, usize)> {
        match self {
            Self::EmptyCharLiteral { start, end, .. }
            | Self::TooManyCharacters { start, end, .. }
            | Self::NumberOutOfRange { start, end, .. }
            | Self::UnexpectedCharacter { start, end, .. } => Some((*start, *end)),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCharLiteral { line, .. } => {
                write!(f, "Error on line {line}: Empty char literal.")
            },

            Self::TooManyCharacters { literal, line, .. } => write!(f,
                                                                    "Error on line {line}: Too many characters in a character literal \"{literal}\"."),

            Self::NumberOutOfRange { literal, line, .. } => write!(f,
                                                                   "Error on line {line}: Number literal \"{literal}\" is out of range."),

            Self::UnexpectedCharacter { fragment, line, .. } => {
                write!(f, "Error on line {line}: Unexpected character \"{fragment}\".")
            },
        }
    }
}

impl std::error::Error for LexError {}
