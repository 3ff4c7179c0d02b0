use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, NumberValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenInfo},
        parser::core::ParseResult,
    },
};

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy. Operators at the same level
/// associate to the left.
///
/// Grammar: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator over [`TokenInfo`] values.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    let mut node = parse_term(tokens)?;

    while let Some(&info) = tokens.peek()
          && matches!(info.token, Token::Plus | Token::Minus)
    {
        tokens.next();
        let right = parse_term(tokens)?;
        node = Expr::Binary { left:     Box::new(node),
                              operator: info.token.clone(),
                              right:    Box::new(right),
                              line:     info.line, };
    }

    Ok(node)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `term := power (("*" | "/") power)*`
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    let mut node = parse_power(tokens)?;

    while let Some(&info) = tokens.peek()
          && matches!(info.token, Token::Multiply | Token::Divide)
    {
        tokens.next();
        let right = parse_power(tokens)?;
        node = Expr::Binary { left:     Box::new(node),
                              operator: info.token.clone(),
                              right:    Box::new(right),
                              line:     info.line, };
    }

    Ok(node)
}

/// Parses exponentiation expressions.
///
/// The loop folds repeated `^` operators to the left, so `2^3^2` parses as
/// `(2^3)^2`. This differs from the conventional right-associative reading
/// of exponentiation and is kept as the language defines it.
///
/// Grammar: `power := factor ("^" factor)*`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    let mut node = parse_factor(tokens)?;

    while let Some(&info) = tokens.peek()
          && matches!(info.token, Token::Pow)
    {
        tokens.next();
        let right = parse_factor(tokens)?;
        node = Expr::Binary { left:     Box::new(node),
                              operator: info.token.clone(),
                              right:    Box::new(right),
                              line:     info.line, };
    }

    Ok(node)
}

/// Parses an atomic expression.
///
/// Grammar:
/// ```text
///     factor := "(" expr ")"
///             | "|" expr "|"
///             | "-" factor
///             | literal
/// ```
///
/// Closing delimiters are consumed and checked; a missing `)` or `|`
/// reports the token that was found instead. A literal payload with no
/// expression form, such as a floating-point value, is rejected here.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    let Some(&info) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match &info.token {
        Token::OpenParen => {
            tokens.next();
            let node = parse_expression(tokens)?;

            match tokens.next() {
                Some(TokenInfo { token: Token::ClosedParen, .. }) => Ok(node),
                Some(found) => {
                    Err(ParseError::ExpectedToken { expected: "ClosedParen",
                                                    found:    format!("{:?}", found.token),
                                                    line:     found.line, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line: info.line }),
            }
        },

        Token::Abs => {
            tokens.next();
            let node = parse_expression(tokens)?;

            match tokens.next() {
                Some(TokenInfo { token: Token::Abs, .. }) => {
                    Ok(Expr::Abs { expr: Box::new(node),
                                   line: info.line, })
                },
                Some(found) => {
                    Err(ParseError::ExpectedToken { expected: "Abs",
                                                    found:    format!("{:?}", found.token),
                                                    line:     found.line, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line: info.line }),
            }
        },

        Token::Minus => {
            tokens.next();
            let operand = parse_factor(tokens)?;
            Ok(Expr::Unary { operator: Token::Minus,
                             operand:  Box::new(operand),
                             line:     info.line, })
        },

        Token::Literal(value) => {
            let node = match value {
                LiteralValue::Int(n) => Expr::Number { value: NumberValue::Int(*n),
                                                       line:  info.line, },
                LiteralValue::Long(n) => Expr::Number { value: NumberValue::Long(*n),
                                                        line:  info.line, },
                LiteralValue::Str(s) => Expr::Str { value: s.clone(),
                                                    line:  info.line, },
                LiteralValue::Char(c) => Expr::Char { value: *c,
                                                      line:  info.line, },
                LiteralValue::Bool(b) => Expr::Boolean { value: *b,
                                                         line:  info.line, },
                LiteralValue::Float(_) | LiteralValue::Double(_) => {
                    return Err(ParseError::IllegalLiteral { literal: value.to_string(),
                                                            line:    info.line,
                                                            start:   info.start,
                                                            end:     info.end, });
                },
            };

            tokens.next();
            Ok(node)
        },

        token => Err(ParseError::IllegalToken { token: format!("{token:?}"),
                                                line:  info.line,
                                                start: info.start,
                                                end:   info.end, }),
    }
}
