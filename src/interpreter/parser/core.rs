use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenInfo},
        parser::{
            declaration::{is_variable_declaration, parse_variable_declaration},
            expression::parse_expression,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the token sequence of one logical line into a single node.
///
/// The possible forms are tried in a fixed order:
/// 1. A variable declaration, in any of its four forms.
/// 2. A bare arithmetic expression.
/// 3. A variable access, when the sole remaining token is a plain
///    identifier.
///
/// Each check inspects lookahead without consuming tokens, so a form that
/// does not match leaves the cursor untouched for the next one.
///
/// # Parameters
/// - `tokens`: Token iterator over the line's [`TokenInfo`] values.
///
/// # Returns
/// The parsed [`Node`].
///
/// # Errors
/// - `UnsupportedDeclaration` when no form matches the leading token.
/// - `UnexpectedEndOfInput` when the token sequence is empty.
/// - Any error raised by the declaration or expression grammar.
///
/// # Example
/// ```
/// use jawa::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2 + 2").unwrap();
/// let node = parse(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(node, Node::Expression(_)));
/// ```
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    if is_variable_declaration(tokens) {
        return parse_variable_declaration(tokens).map(Node::VariableDeclaration);
    }

    if is_math_expression(tokens) {
        return parse_expression(tokens).map(Node::Expression);
    }

    match tokens.peek() {
        Some(&info) => match &info.token {
            Token::Identifier(name) if token_at(tokens, 1).is_none() => {
                let node = Node::VariableAccess { identifier: name.clone(),
                                                 line:       info.line, };
                tokens.next();
                Ok(node)
            },
            _ => Err(ParseError::UnsupportedDeclaration { line: info.line }),
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Peeks at the token `offset` positions ahead of the cursor without
/// consuming anything. Offset 0 is the current token.
pub(crate) fn token_at<'a, I>(tokens: &Peekable<I>, offset: usize) -> Option<&'a Token>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    tokens.clone().nth(offset).map(|info| &info.token)
}

/// Checks whether the current token can start an arithmetic expression:
/// a literal, an opening parenthesis, an absolute-value bar, a leading
/// minus, or any arithmetic operator.
fn is_math_expression<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    token_at(tokens, 0).is_some_and(|token| {
                           matches!(token,
                                    Token::Literal(_) | Token::OpenParen | Token::Abs)
                           || token.is_math_operator()
                       })
}
