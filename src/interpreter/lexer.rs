use logos::Logos;

use crate::{ast::LiteralValue, error::LexError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Identifier scanning is deliberately greedy: it consumes every character up
/// to the next whitespace, so operators and delimiters only separate tokens
/// when they do not directly touch a leading letter. `x = 5` is three tokens
/// while `x=5` is a single identifier.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal tokens: numbers such as `42` or `42L`, strings such as
    /// `"jawa"`, characters such as `'j'`, and the booleans `true` and
    /// `false`.
    ///
    /// A digit run with an `l`/`L` suffix becomes a 64-bit integer, any other
    /// digit run a 32-bit integer. A string literal missing its closing quote
    /// runs to the end of the input. A char literal must hold exactly one
    /// character.
    #[regex(r"[0-9]+[lL]?", parse_number)]
    #[regex(r#""[^"]*"?"#, parse_string)]
    #[regex(r"'[^']*'?", parse_char)]
    #[token("true", |_| LiteralValue::Bool(true))]
    #[token("false", |_| LiteralValue::Bool(false))]
    Literal(LiteralValue),
    /// `fun`
    #[token("fun")]
    Fun,
    /// `konst`
    #[token("konst")]
    Const,
    /// `ubah`
    #[token("ubah")]
    Mutable,
    /// `tetap`
    #[token("tetap")]
    Immutable,
    /// Identifier tokens; names such as `x` or `umur`.
    #[regex(r"[A-Za-z][^ \t\r\n\f]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.` and `/* comments */`, kept as positioned tokens so
    /// downstream tools can read them. The payload is the comment body
    /// without its delimiters.
    #[regex(r"//[^\n]*", parse_line_comment, allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", parse_block_comment)]
    #[regex(r"/\*([^*]|\*+[^*/])*\**", parse_block_comment, allow_greedy = true)]
    Comment(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Pow,
    /// `|`, both the opening and the closing absolute-value bar.
    #[token("|")]
    Abs,
    /// `&`
    #[token("&")]
    And,
    /// Boolean OR. Part of the closed token set, but no lexer rule produces
    /// it.
    Or,
    /// Boolean negation. Part of the closed token set, but no lexer rule
    /// produces it.
    Not,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    ClosedParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`, marking the end of a logical line.
    #[token(";")]
    Eof,
    /// The two-character escaped-newline marker, a backslash followed by
    /// `n`. The only construct that advances the line counter outside of
    /// comments.
    #[token("\\n")]
    NewLine,
    /// Whitespace, plus any character no other rule recognizes. Both are
    /// skipped without producing a token.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[regex(r".", logos::skip, priority = 0)]
    Ignored,
}

impl Token {
    /// Returns `true` when the token is one of the five arithmetic
    /// operators used by the expression grammar.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::lexer::Token;
    ///
    /// assert!(Token::Pow.is_math_operator());
    /// assert!(!Token::Equals.is_math_operator());
    /// ```
    #[must_use]
    pub const fn is_math_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::Pow)
    }

    /// Transforms the token into its operator spelling.
    ///
    /// Returns `None` for tokens that are not operators of the evaluated
    /// grammar.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Multiply.symbol(), Some("*"));
    /// assert_eq!(Token::Colon.symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Pow => Some("^"),
            Self::And => Some("&"),
            _ => None,
        }
    }
}

/// A token together with its position in the source text.
///
/// Columns form a half-open span and restart at 0 after the escaped-newline
/// marker and after every comment. The line counter only advances at those
/// same places; literal line breaks inside string literals pass through the
/// lexer without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    /// The classified token, with its literal payload where one exists.
    pub token: Token,
    /// Line position.
    pub line:  usize,
    /// Start column of the token.
    pub start: usize,
    /// Column one past the end of the token.
    pub end:   usize,
}

/// Tokenizes a string of source text into positioned tokens.
///
/// Performs a single left-to-right scan, longest match first. Unrecognized
/// characters are skipped without error. Comments are kept as tokens. The
/// scan is stateless across calls; every invocation starts at line 0,
/// column 0.
///
/// # Errors
/// Returns a [`LexError`] for a character literal that is empty or holds
/// more than one character, and for a numeric literal that does not fit its
/// width.
///
/// # Example
/// ```
/// use jawa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("10 + x").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].token, Token::Plus);
/// assert_eq!((tokens[2].start, tokens[2].end), (5, 6));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<TokenInfo>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    let mut line = 0;
    let mut line_start = 0;

    while let Some(scanned) = lexer.next() {
        let span = lexer.span();
        let start = span.start - line_start;
        let end = span.end - line_start;

        match scanned {
            Ok(token) => {
                let next_line = matches!(token, Token::NewLine | Token::Comment(_));
                tokens.push(TokenInfo { token, line, start, end });

                if next_line {
                    line += 1;
                    line_start = span.end;
                }
            },
            Err(()) => return Err(classify_failure(lexer.slice(), line, start, end)),
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// A trailing `l`/`L` selects the 64-bit width; the suffix and any other
/// non-digit characters are stripped before conversion. Values that do not
/// fit the selected width make the rule fail, which surfaces as a
/// [`LexError::NumberOutOfRange`] at the [`tokenize`] level.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    let slice = lex.slice();

    if slice.ends_with(['l', 'L']) {
        let digits: String = slice.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok().map(LiteralValue::Long)
    } else {
        slice.parse().ok().map(LiteralValue::Int)
    }
}

/// Extracts the body of a string literal, tolerating a missing closing
/// quote at the end of input.
fn parse_string(lex: &logos::Lexer<Token>) -> LiteralValue {
    let slice = lex.slice();
    let body = slice.strip_prefix('"').unwrap_or(slice);
    let body = body.strip_suffix('"').unwrap_or(body);

    LiteralValue::Str(body.to_string())
}

/// Validates a character literal: exactly one character between the quotes.
fn parse_char(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    let body = char_literal_body(lex.slice());
    let mut chars = body.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(LiteralValue::Char(c)),
        _ => None,
    }
}

fn parse_line_comment(lex: &logos::Lexer<Token>) -> String {
    lex.slice()[2..].to_string()
}

fn parse_block_comment(lex: &logos::Lexer<Token>) -> String {
    let body = &lex.slice()[2..];
    body.strip_suffix("*/").unwrap_or(body).to_string()
}

fn char_literal_body(slice: &str) -> &str {
    let body = slice.strip_prefix('\'').unwrap_or(slice);
    body.strip_suffix('\'').unwrap_or(body)
}

/// Turns a failed lexer rule into the matching [`LexError`], based on the
/// shape of the rejected slice.
fn classify_failure(slice: &str, line: usize, start: usize, end: usize) -> LexError {
    if slice.starts_with('\'') {
        let body = char_literal_body(slice);

        if body.is_empty() {
            return LexError::EmptyCharLiteral { line, start, end };
        }
        return LexError::TooManyCharacters { literal: body.to_string(),
                                             line,
                                             start,
                                             end };
    }

    if slice.starts_with(|c: char| c.is_ascii_digit()) {
        return LexError::NumberOutOfRange { literal: slice.to_string(),
                                            line,
                                            start,
                                            end };
    }

    LexError::UnexpectedCharacter { fragment: slice.to_string(),
                                    line,
                                    start,
                                    end }
}
