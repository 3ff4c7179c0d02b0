use jawa::{
    ast::{Expr, LiteralValue, Node, NumberValue},
    error::{LexError, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::{Token, TokenInfo, tokenize},
        parser::core::parse,
        value::Value,
    },
};

fn parse_expr(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("'{source}' failed to lex: {e}"));
    match parse(&mut tokens.iter().peekable()) {
        Ok(Node::Expression(expr)) => expr,
        Ok(other) => panic!("'{source}' parsed to a non-expression node: {other:?}"),
        Err(e) => panic!("'{source}' failed to parse: {e}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("'{source}' failed to lex: {e}"));
    match parse(&mut tokens.iter().peekable()) {
        Ok(node) => panic!("'{source}' parsed to {node:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn number(value: NumberValue) -> Box<Expr> {
    Box::new(Expr::Number { value, line: 0 })
}

#[test]
fn tokens_carry_line_and_column_spans() {
    let tokens = tokenize("10 + x").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
    assert_eq!((tokens[1].start, tokens[1].end), (3, 4));
    assert_eq!((tokens[2].start, tokens[2].end), (5, 6));
    assert!(tokens.iter().all(|info| info.line == 0));
}

#[test]
fn escaped_newline_marker_advances_the_line() {
    let tokens = tokenize(r"5 \n 7").unwrap();

    assert!(matches!(tokens[1].token, Token::NewLine));
    assert_eq!(tokens[1].line, 0);
    assert_eq!(tokens[2].line, 1);
    assert_eq!(tokens[2].start, 1);
}

#[test]
fn comments_are_kept_as_tokens() {
    let tokens = tokenize("5 + 5 // ten").unwrap();

    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[3].token, Token::Comment(text) if text == " ten"));
}

#[test]
fn block_comments_advance_the_line_once() {
    let tokens = tokenize("/* a\nb */ 7").unwrap();

    assert!(matches!(&tokens[0].token, Token::Comment(text) if text == " a\nb "));
    assert_eq!(tokens[0].line, 0);
    // One line bump for the whole comment, regardless of embedded newlines.
    assert_eq!(tokens[1].line, 1);
}

#[test]
fn keywords_collapse_booleans_into_literals() {
    let tokens = tokenize("true tetap ubah fun konst").unwrap();

    assert!(matches!(tokens[0].token, Token::Literal(LiteralValue::Bool(true))));
    assert!(matches!(tokens[1].token, Token::Immutable));
    assert!(matches!(tokens[2].token, Token::Mutable));
    assert!(matches!(tokens[3].token, Token::Fun));
    assert!(matches!(tokens[4].token, Token::Const));
}

#[test]
fn identifier_scanning_runs_to_whitespace() {
    let tokens = tokenize("x=5").unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(matches!(&tokens[0].token, Token::Identifier(name) if name == "x=5"));
}

#[test]
fn number_literals_out_of_range_fail() {
    assert!(matches!(tokenize("99999999999"),
                     Err(LexError::NumberOutOfRange { .. })));
}

#[test]
fn char_literal_errors_carry_spans() {
    let error = tokenize("'ab'").unwrap_err();

    assert!(matches!(error, LexError::TooManyCharacters { .. }));
    assert_eq!(error.span(), Some((0, 4)));
}

#[test]
fn unmatched_parenthesis_is_reported() {
    assert!(matches!(parse_err("(5 + 5"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("(5 + 5 ;"),
                     ParseError::ExpectedToken { expected: "ClosedParen", .. }));
}

#[test]
fn unmatched_abs_bar_is_reported() {
    assert!(matches!(parse_err("|5 + 5"),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn lines_matching_no_form_are_rejected() {
    assert!(matches!(parse_err("= 5"),
                     ParseError::UnsupportedDeclaration { .. }));
    assert!(matches!(parse_err("x 5"),
                     ParseError::UnsupportedDeclaration { .. }));
}

#[test]
fn empty_input_is_rejected() {
    let tokens = tokenize("").unwrap();
    assert!(tokens.is_empty());

    assert!(matches!(parse(&mut tokens.iter().peekable()),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn floating_point_literal_payloads_are_illegal_in_expressions() {
    let tokens = vec![TokenInfo { token: Token::Literal(LiteralValue::Float(2.5)),
                                  line:  0,
                                  start: 0,
                                  end:   3, }];

    assert!(matches!(parse(&mut tokens.iter().peekable()),
                     Err(ParseError::IllegalLiteral { .. })));
}

#[test]
fn canonical_rendering_is_parenthesized_infix() {
    assert_eq!(parse_expr("3 + 2 - 1").to_string(), "((3 + 2) - 1)");
    assert_eq!(parse_expr("|5 - 10|").to_string(), "|(5 - 10)|");
    assert_eq!(parse_expr("-5").to_string(), "(-5)");
    assert_eq!(parse_expr("12L").to_string(), "12L");
    assert_eq!(parse_expr("'a'").to_string(), "'a'");
    assert_eq!(parse_expr("\"ab\"").to_string(), "\"ab\"");
}

#[test]
fn rendering_round_trips_through_the_parser() {
    let sources = ["10 + (2 * |5 - 10|^2)",
                   "3 + 2 - 1",
                   "2^3^2",
                   "-5",
                   "'a' + 1",
                   "\"ab\" * 3",
                   "12L + 1",
                   "true"];

    for source in sources {
        let parsed = parse_expr(source);
        let reparsed = parse_expr(&parsed.to_string());

        assert_eq!(parsed, reparsed,
                   "'{source}' did not round-trip through its rendering");
    }
}

#[test]
fn float_operands_promote_in_hand_built_trees() {
    let mut environment = Environment::new();
    let mut evaluator = Evaluator::new(&mut environment);

    let sum = Expr::Binary { left:     number(NumberValue::Float(2.5)),
                             operator: Token::Plus,
                             right:    number(NumberValue::Int(1)),
                             line:     0, };
    assert_eq!(evaluator.eval(&sum).unwrap(), Value::Float(3.5));

    let quotient = Expr::Binary { left:     number(NumberValue::Double(7.0)),
                                  operator: Token::Divide,
                                  right:    number(NumberValue::Int(2)),
                                  line:     0, };
    assert_eq!(evaluator.eval(&quotient).unwrap(), Value::Double(3.5));

    let power = Expr::Binary { left:     number(NumberValue::Float(2.0)),
                               operator: Token::Pow,
                               right:    number(NumberValue::Int(3)),
                               line:     0, };
    assert_eq!(evaluator.eval(&power).unwrap(), Value::Float(8.0));
}

#[test]
fn bitwise_and_requires_matching_integer_widths() {
    assert_eq!(Evaluator::eval_binary(&Token::And, &Value::Int(6), &Value::Int(3), 0).unwrap(),
               Value::Int(2));
    assert_eq!(Evaluator::eval_binary(&Token::And, &Value::Long(6), &Value::Long(3), 0).unwrap(),
               Value::Long(2));

    assert!(Evaluator::eval_binary(&Token::And, &Value::Int(6), &Value::Long(3), 0).is_err());
}

#[test]
fn operators_without_rules_are_internal_faults() {
    use jawa::error::RuntimeError;

    assert!(matches!(Evaluator::eval_binary(&Token::Equals, &Value::Int(1), &Value::Int(1), 0),
                     Err(RuntimeError::UnsupportedOperator { .. })));
    assert!(matches!(Evaluator::eval_unary(&Token::Multiply, &Value::Int(1), 0),
                     Err(RuntimeError::UnsupportedUnaryOperator { .. })));
}

#[test]
fn unary_plus_is_identity_on_int_only() {
    use jawa::error::RuntimeError;

    assert_eq!(Evaluator::eval_unary(&Token::Plus, &Value::Int(4), 0).unwrap(),
               Value::Int(4));
    assert!(matches!(Evaluator::eval_unary(&Token::Plus, &Value::Long(4), 0),
                     Err(RuntimeError::UnaryTypeMismatch { .. })));
}
