use jawa::{
    error::{LexError, RuntimeError},
    interpreter::{environment::Environment, value::Value},
    run_line, run_source,
};

fn eval(source: &str) -> Value {
    let mut environment = Environment::new();
    run_line(source, &mut environment).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_err(source: &str) -> Box<dyn std::error::Error> {
    let mut environment = Environment::new();
    match run_line(source, &mut environment) {
        Ok(value) => panic!("'{source}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals() {
    assert_eq!(eval("0"), Value::Int(0));
    assert_eq!(eval("42"), Value::Int(42));
    assert_eq!(eval("12L"), Value::Long(12));
    assert_eq!(eval("12l"), Value::Long(12));
}

#[test]
fn boolean_and_text_literals() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("'a'"), Value::Char('a'));
    assert_eq!(eval("\"jawa\""), Value::Str("jawa".to_string()));
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(eval("3 + 2 - 1"), Value::Int(4));
    assert_eq!(eval("2 * 3 + 1"), Value::Int(7));
    assert_eq!(eval("2 + 3 * 1"), Value::Int(5));
    assert_eq!(eval("10 + (2 * |5 - 10|^2)"), Value::Int(60));
}

#[test]
fn pow_is_left_associative() {
    // 2^3^2 folds to (2^3)^2, not the conventional 2^(3^2).
    assert_eq!(eval("2^3^2"), Value::Int(64));
}

#[test]
fn pow_truncates_to_the_left_operand_width() {
    assert_eq!(eval("2^-1"), Value::Int(0));
    assert_eq!(eval("2L^10"), Value::Long(1024));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(eval("7 / 2"), Value::Int(3));
    assert_eq!(eval("-7 / 2"), Value::Int(-3));
}

#[test]
fn division_by_zero_is_reported() {
    let error = eval_err("1 / 0");
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn mixed_width_arithmetic_promotes() {
    assert_eq!(eval("2L + 3"), Value::Long(5));
    assert_eq!(eval("3 - 1L"), Value::Long(2));
    assert_eq!(eval("2 * 3L"), Value::Long(6));
}

#[test]
fn unary_minus_negates() {
    assert_eq!(eval("-5"), Value::Int(-5));
    assert_eq!(eval("-(2 + 3)"), Value::Int(-5));
    assert_eq!(eval("--5"), Value::Int(5));
}

#[test]
fn string_concatenation_and_repetition() {
    assert_eq!(eval("\"ab\" + \"cd\""), Value::Str("abcd".to_string()));
    assert_eq!(eval("\"ab\" + 2"), Value::Str("ab2".to_string()));
    assert_eq!(eval("\"ab\" * 3"), Value::Str("ababab".to_string()));
}

#[test]
fn char_arithmetic() {
    assert_eq!(eval("'a' + 1"), Value::Char('b'));
    assert_eq!(eval("'b' - 1"), Value::Char('a'));
    assert_eq!(eval("'a' * 3"), Value::Str("aaa".to_string()));
    assert_eq!(eval("3 * 'a'"), Value::Str("aaa".to_string()));
}

#[test]
fn char_arithmetic_outside_the_valid_range_fails() {
    let error = eval_err("'a' - 1000");
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::CharOutOfRange { .. })));
}

#[test]
fn negative_repetition_fails() {
    let error = eval_err("\"ab\" * -2");
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::InvalidRepetition { count: -2, .. })));
}

#[test]
fn type_mismatches_name_both_operand_types() {
    let error = eval_err("1 + true");
    match error.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::TypeMismatch { left, right, .. }) => {
            assert_eq!(*left, "Int");
            assert_eq!(*right, "Boolean");
        },
        other => panic!("expected a type mismatch, got {other:?}"),
    }

    // Arithmetic over booleans is not defined.
    assert!(eval_err("true + false").downcast_ref::<RuntimeError>().is_some());
    assert!(eval_err("true * true").downcast_ref::<RuntimeError>().is_some());
}

#[test]
fn abs_rejects_non_numeric_operands() {
    let error = eval_err("|\"abc\"|");
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::AbsTypeMismatch { operand: "String", .. })));

    let error = eval_err("|true|");
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::AbsTypeMismatch { operand: "Boolean", .. })));
}

#[test]
fn malformed_char_literals_fail_to_lex() {
    assert!(matches!(eval_err("''").downcast_ref::<LexError>(),
                     Some(LexError::EmptyCharLiteral { .. })));
    assert!(matches!(eval_err("'ab'").downcast_ref::<LexError>(),
                     Some(LexError::TooManyCharacters { .. })));
}

#[test]
fn unterminated_strings_run_to_end_of_input() {
    assert_eq!(eval("\"abc"), Value::Str("abc".to_string()));
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_eq!(eval("5 $ + ? 5"), Value::Int(10));
}

#[test]
fn trailing_tokens_after_an_expression_are_ignored() {
    // The grammar has no rule for `&`, so evaluation stops after the first
    // complete expression.
    assert_eq!(eval("6 & 3"), Value::Int(6));
}

#[test]
fn line_comments_do_not_disturb_evaluation() {
    assert_eq!(eval("5 + 5 // ten"), Value::Int(10));
}

#[test]
fn declarations_echo_their_assigned_value() {
    let mut environment = Environment::new();
    assert_eq!(run_line("x = 5", &mut environment).unwrap(), Value::Int(5));
    assert_eq!(run_line("tetap y = 'j'", &mut environment).unwrap(),
               Value::Char('j'));
}

#[test]
fn implicit_declarations_are_mutable() {
    let mut environment = Environment::new();
    run_line("x = 5", &mut environment).unwrap();
    run_line("x = 6", &mut environment).unwrap();

    assert_eq!(run_line("x", &mut environment).unwrap(), Value::Int(6));
}

#[test]
fn mutable_keyword_declarations_allow_reassignment() {
    let mut environment = Environment::new();
    run_line("ubah z = 1", &mut environment).unwrap();
    run_line("z = 9", &mut environment).unwrap();

    assert_eq!(run_line("z", &mut environment).unwrap(), Value::Int(9));
}

#[test]
fn immutable_declarations_reject_reassignment() {
    let mut environment = Environment::new();
    run_line("tetap y = 1", &mut environment).unwrap();

    let error = run_line("y = 2", &mut environment).unwrap_err();
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::ImmutableReassignment { .. })));

    // The stored value is untouched by the failed declaration.
    assert_eq!(run_line("y", &mut environment).unwrap(), Value::Int(1));
}

#[test]
fn typed_declaration_forms_bind_like_untyped_ones() {
    let mut environment = Environment::new();
    run_line("n : Int = 3", &mut environment).unwrap();
    assert_eq!(run_line("n", &mut environment).unwrap(), Value::Int(3));

    run_line("tetap k : Int = 4", &mut environment).unwrap();
    let error = run_line("k = 5", &mut environment).unwrap_err();
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::ImmutableReassignment { .. })));
}

#[test]
fn reading_an_undeclared_identifier_fails() {
    let error = eval_err("q");
    match error.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::UnresolvedReference { name, .. }) => assert_eq!(name, "q"),
        other => panic!("expected an unresolved reference, got {other:?}"),
    }
}

#[test]
fn an_environment_spans_a_whole_script() {
    let mut environment = Environment::new();
    let values = run_source("umur = 16\numur = 17\numur", &mut environment).unwrap();

    assert_eq!(values,
               vec![Value::Int(16), Value::Int(17), Value::Int(17)]);
}
