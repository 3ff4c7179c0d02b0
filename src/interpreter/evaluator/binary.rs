use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Token,
        value::Value,
    },
    util::num::{char_offset_checked, repeat_count_checked},
};

/// A pair of numeric operands after promotion to their common width.
///
/// Promotion follows the usual widening order, `Int < Long < Float <
/// Double`: the narrower operand is converted to the wider operand's
/// representation and the operation is carried out at that width.
enum NumericPair {
    Int(i32, i32),
    Long(i64, i64),
    Float(f32, f32),
    Double(f64, f64),
}

/// Promotes two runtime values to a common numeric width.
///
/// Returns `None` when either operand is not numeric; the caller then
/// falls through to the operator's non-numeric pairings.
#[allow(clippy::cast_precision_loss)]
fn promote(left: &Value, right: &Value) -> Option<NumericPair> {
    use Value::{Double, Float, Int, Long};

    Some(match (left, right) {
             (Int(a), Int(b)) => NumericPair::Int(*a, *b),
             (Int(a), Long(b)) => NumericPair::Long(i64::from(*a), *b),
             (Int(a), Float(b)) => NumericPair::Float(*a as f32, *b),
             (Int(a), Double(b)) => NumericPair::Double(f64::from(*a), *b),

             (Long(a), Int(b)) => NumericPair::Long(*a, i64::from(*b)),
             (Long(a), Long(b)) => NumericPair::Long(*a, *b),
             (Long(a), Float(b)) => NumericPair::Float(*a as f32, *b),
             (Long(a), Double(b)) => NumericPair::Double(*a as f64, *b),

             (Float(a), Int(b)) => NumericPair::Float(*a, *b as f32),
             (Float(a), Long(b)) => NumericPair::Float(*a, *b as f32),
             (Float(a), Float(b)) => NumericPair::Float(*a, *b),
             (Float(a), Double(b)) => NumericPair::Double(f64::from(*a), *b),

             (Double(a), Int(b)) => NumericPair::Double(*a, f64::from(*b)),
             (Double(a), Long(b)) => NumericPair::Double(*a, *b as f64),
             (Double(a), Float(b)) => NumericPair::Double(*a, f64::from(*b)),
             (Double(a), Double(b)) => NumericPair::Double(*a, *b),

             _ => return None,
         })
}

/// Reads a numeric value as `f64`, whatever its width.
#[allow(clippy::cast_precision_loss)]
fn numeric_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Long(n) => Some(*n as f64),
        Value::Float(n) => Some(*n as f64),
        Value::Double(n) => Some(*n),
        _ => None,
    }
}

impl Evaluator<'_> {
    /// Evaluates a binary operation over two runtime values.
    ///
    /// The operator token selects the coercion table; within each table the
    /// pairing of runtime types decides the rule. Numeric pairings promote
    /// to the wider width first. Pairings a table does not list fail with a
    /// [`RuntimeError::TypeMismatch`] naming both operand types.
    ///
    /// Operator tokens outside the arithmetic set and `&` have no binary
    /// rule at all; the parser's grammar never produces them, so they
    /// report an internal [`RuntimeError::UnsupportedOperator`].
    ///
    /// # Parameters
    /// - `operator`: The operator token from the syntax tree.
    /// - `left`: Left operand, already evaluated.
    /// - `right`: Right operand, already evaluated.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::{evaluator::core::Evaluator, lexer::Token, value::Value};
    ///
    /// let product = Evaluator::eval_binary(&Token::Multiply,
    ///                                      &Value::Str("ha".to_string()),
    ///                                      &Value::Int(3),
    ///                                      1).unwrap();
    ///
    /// assert_eq!(product, Value::Str("hahaha".to_string()));
    /// ```
    pub fn eval_binary(operator: &Token,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match operator {
            Token::Plus => Self::eval_plus(left, right, line),
            Token::Minus => Self::eval_minus(left, right, line),
            Token::Multiply => Self::eval_multiply(left, right, line),
            Token::Divide => Self::eval_divide(left, right, line),
            Token::Pow => Self::eval_pow(left, right, line),
            Token::And => Self::eval_and(left, right, line),
            other => Err(RuntimeError::UnsupportedOperator { operator: format!("{other:?}"),
                                                            line }),
        }
    }

    /// Addition, string concatenation, and character shifting.
    ///
    /// - numeric + numeric: sum at the promoted width.
    /// - string + int, string + string: concatenation.
    /// - char + int: character code arithmetic.
    fn eval_plus(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if let Some(pair) = promote(left, right) {
            return Ok(match pair {
                          NumericPair::Int(a, b) => Value::Int(a.wrapping_add(b)),
                          NumericPair::Long(a, b) => Value::Long(a.wrapping_add(b)),
                          NumericPair::Float(a, b) => Value::Float(a + b),
                          NumericPair::Double(a, b) => Value::Double(a + b),
                      });
        }

        match (left, right) {
            (Value::Char(c), Value::Int(n)) => {
                Ok(Value::Char(char_offset_checked(*c, i64::from(*n), line)?))
            },
            (Value::Str(s), Value::Int(n)) => Ok(Value::Str(format!("{s}{n}"))),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(type_mismatch("plus", left, right, line)),
        }
    }

    /// Subtraction and character shifting.
    fn eval_minus(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if let Some(pair) = promote(left, right) {
            return Ok(match pair {
                          NumericPair::Int(a, b) => Value::Int(a.wrapping_sub(b)),
                          NumericPair::Long(a, b) => Value::Long(a.wrapping_sub(b)),
                          NumericPair::Float(a, b) => Value::Float(a - b),
                          NumericPair::Double(a, b) => Value::Double(a - b),
                      });
        }

        match (left, right) {
            (Value::Char(c), Value::Int(n)) => {
                Ok(Value::Char(char_offset_checked(*c, -i64::from(*n), line)?))
            },
            _ => Err(type_mismatch("minus", left, right, line)),
        }
    }

    /// Multiplication and repetition.
    ///
    /// - numeric * numeric: product at the promoted width.
    /// - string * int: the string repeated.
    /// - char * int and int * char: a string built by repeating the
    ///   character's text form.
    fn eval_multiply(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if let Some(pair) = promote(left, right) {
            return Ok(match pair {
                          NumericPair::Int(a, b) => Value::Int(a.wrapping_mul(b)),
                          NumericPair::Long(a, b) => Value::Long(a.wrapping_mul(b)),
                          NumericPair::Float(a, b) => Value::Float(a * b),
                          NumericPair::Double(a, b) => Value::Double(a * b),
                      });
        }

        match (left, right) {
            (Value::Char(c), Value::Int(n)) => {
                Ok(Value::Str(c.to_string().repeat(repeat_count_checked(*n, line)?)))
            },
            (Value::Int(n), Value::Char(c)) => {
                Ok(Value::Str(c.to_string().repeat(repeat_count_checked(*n, line)?)))
            },
            (Value::Str(s), Value::Int(n)) => {
                Ok(Value::Str(s.repeat(repeat_count_checked(*n, line)?)))
            },
            _ => Err(type_mismatch("multiply", left, right, line)),
        }
    }

    /// Division over numeric pairings only.
    ///
    /// Integer division truncates toward zero. A zero divisor at either
    /// integer width is rejected before dividing.
    fn eval_divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match promote(left, right) {
            Some(NumericPair::Int(_, 0) | NumericPair::Long(_, 0)) => {
                Err(RuntimeError::DivisionByZero { line })
            },
            Some(NumericPair::Int(a, b)) => Ok(Value::Int(a.wrapping_div(b))),
            Some(NumericPair::Long(a, b)) => Ok(Value::Long(a.wrapping_div(b))),
            Some(NumericPair::Float(a, b)) => Ok(Value::Float(a / b)),
            Some(NumericPair::Double(a, b)) => Ok(Value::Double(a / b)),
            None => Err(type_mismatch("divide", left, right, line)),
        }
    }

    /// Exponentiation over numeric pairings only.
    ///
    /// The power is computed in floating point and cast back to the left
    /// operand's width, so an integer base yields an integer result with
    /// the fractional part truncated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn eval_pow(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let Some(exponent) = numeric_as_f64(right) else {
            return Err(type_mismatch("pow", left, right, line));
        };

        match left {
            Value::Int(a) => Ok(Value::Int(f64::from(*a).powf(exponent) as i32)),
            Value::Long(a) => Ok(Value::Long((*a as f64).powf(exponent) as i64)),
            Value::Float(a) => Ok(Value::Float(a.powf(exponent as f32))),
            Value::Double(a) => Ok(Value::Double(a.powf(exponent))),
            _ => Err(type_mismatch("pow", left, right, line)),
        }
    }

    /// Bitwise AND, defined for int/int and long/long pairings only. Mixed
    /// widths are not promoted here.
    fn eval_and(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a & b)),
            (Value::Long(a), Value::Long(b)) => Ok(Value::Long(a & b)),
            _ => Err(type_mismatch("and", left, right, line)),
        }
    }
}

/// Builds the error for a pairing of runtime types an operator table does
/// not list.
fn type_mismatch(operator: &'static str, left: &Value, right: &Value, line: usize)
                 -> RuntimeError {
    RuntimeError::TypeMismatch { operator,
                                 left: left.type_name(),
                                 right: right.type_name(),
                                 line }
}
