use std::iter::Peekable;

use crate::{
    ast::VariableDeclaration,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenInfo},
        parser::{
            core::{ParseResult, token_at},
            expression::parse_expression,
        },
    },
};

/// Checks whether the current position starts a variable declaration.
///
/// The four accepted forms are tried in a fixed order, first match wins:
/// 1. `identifier = expr`
/// 2. `identifier : typeName = expr`
/// 3. `(ubah|tetap) identifier = expr`
/// 4. `(ubah|tetap) identifier : typeName = expr`
///
/// The check only inspects lookahead; no tokens are consumed.
pub fn is_variable_declaration<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    is_declaration_form1(tokens)
    || is_declaration_form2(tokens)
    || is_declaration_form3(tokens)
    || is_declaration_form4(tokens)
}

/// `identifier = expr`
fn is_declaration_form1<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    matches!(token_at(tokens, 0), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 1), Some(Token::Equals))
}

/// `identifier : typeName = expr`
fn is_declaration_form2<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    matches!(token_at(tokens, 0), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 1), Some(Token::Colon))
    && matches!(token_at(tokens, 2), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 3), Some(Token::Equals))
}

/// `(ubah|tetap) identifier = expr`
fn is_declaration_form3<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    matches!(token_at(tokens, 0), Some(Token::Mutable | Token::Immutable))
    && matches!(token_at(tokens, 1), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 2), Some(Token::Equals))
}

/// `(ubah|tetap) identifier : typeName = expr`
fn is_declaration_form4<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    matches!(token_at(tokens, 0), Some(Token::Mutable | Token::Immutable))
    && matches!(token_at(tokens, 1), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 2), Some(Token::Colon))
    && matches!(token_at(tokens, 3), Some(Token::Identifier(_)))
    && matches!(token_at(tokens, 4), Some(Token::Equals))
}

/// Parses a variable declaration in any of the four accepted forms.
///
/// A leading `ubah` or `tetap` keyword fixes the mutability; without one the
/// declaration is mutable. An optional `: typeName` annotation is recorded
/// as written but carries no semantics, the language is dynamically typed.
/// After the `=` token the initializer is parsed as a full expression.
///
/// Callers are expected to have checked [`is_variable_declaration`] first;
/// on input that matches none of the forms this reports the first token
/// that breaks the grammar.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the declaration.
///
/// # Returns
/// The parsed [`VariableDeclaration`].
///
/// # Errors
/// - `ExpectedToken` when the identifier, type name, or `=` is missing.
/// - `UnexpectedEndOfInput` when tokens run out mid-declaration.
/// - Any error raised while parsing the initializer expression.
pub fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>)
                                         -> ParseResult<VariableDeclaration>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    let line = tokens.peek().map_or(0, |info| info.line);

    let mut is_mutable = true;
    if matches!(token_at(tokens, 0), Some(Token::Mutable | Token::Immutable)) {
        is_mutable = matches!(token_at(tokens, 0), Some(Token::Mutable));
        tokens.next();
    }

    let identifier = expect_identifier(tokens)?;

    let data_type = if matches!(token_at(tokens, 0), Some(Token::Colon)) {
        tokens.next();
        Some(expect_identifier(tokens)?)
    } else {
        None
    };

    match tokens.next() {
        Some(TokenInfo { token: Token::Equals, .. }) => {},
        Some(info) => {
            return Err(ParseError::ExpectedToken { expected: "Equals",
                                                   found:    format!("{:?}", info.token),
                                                   line:     info.line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let expr = parse_expression(tokens)?;

    Ok(VariableDeclaration { identifier,
                             is_mutable,
                             data_type,
                             expr,
                             line })
}

/// Consumes the current token, requiring it to be an identifier, and
/// returns its name.
fn expect_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a TokenInfo> + Clone
{
    match tokens.next() {
        Some(TokenInfo { token: Token::Identifier(name), .. }) => Ok(name.clone()),
        Some(info) => Err(ParseError::ExpectedToken { expected: "Identifier",
                                                      found:    format!("{:?}", info.token),
                                                      line:     info.line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
