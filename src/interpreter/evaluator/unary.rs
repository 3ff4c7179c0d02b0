use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Token,
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported pairings:
    /// - unary plus: identity on an `Int`.
    /// - unary minus: negation of an `Int`.
    /// - boolean negation: inversion of a `Boolean`.
    ///
    /// Any other operand type for these operators is a type mismatch; any
    /// other operator token has no unary rule at all.
    ///
    /// # Parameters
    /// - `operator`: The operator token from the syntax tree.
    /// - `operand`: The operand, already evaluated.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::{evaluator::core::Evaluator, lexer::Token, value::Value};
    ///
    /// let negated = Evaluator::eval_unary(&Token::Minus, &Value::Int(5), 1).unwrap();
    /// assert_eq!(negated, Value::Int(-5));
    ///
    /// let inverted = Evaluator::eval_unary(&Token::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(inverted, Value::Bool(true));
    /// ```
    pub fn eval_unary(operator: &Token, operand: &Value, line: usize) -> EvalResult<Value> {
        match operator {
            Token::Plus => match operand {
                Value::Int(n) => Ok(Value::Int(*n)),
                _ => Err(RuntimeError::UnaryTypeMismatch { operator: "plus",
                                                           operand:  operand.type_name(),
                                                           line, }),
            },

            Token::Minus => match operand {
                Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
                _ => Err(RuntimeError::UnaryTypeMismatch { operator: "minus",
                                                           operand:  operand.type_name(),
                                                           line, }),
            },

            Token::Not => match operand {
                Value::Bool(b) => Ok(Value::Bool(!b)),
                _ => Err(RuntimeError::UnaryTypeMismatch { operator: "not",
                                                           operand:  operand.type_name(),
                                                           line, }),
            },

            other => {
                Err(RuntimeError::UnsupportedUnaryOperator { operator: format!("{other:?}"),
                                                             line })
            },
        }
    }

    /// Evaluates the absolute-value operation.
    ///
    /// Defined only for an `Int` operand; every other runtime type is
    /// rejected with an error naming the operand's type.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::{evaluator::core::Evaluator, value::Value};
    ///
    /// let magnitude = Evaluator::eval_abs(&Value::Int(-5), 1).unwrap();
    /// assert_eq!(magnitude, Value::Int(5));
    ///
    /// assert!(Evaluator::eval_abs(&Value::Bool(true), 1).is_err());
    /// ```
    pub fn eval_abs(operand: &Value, line: usize) -> EvalResult<Value> {
        match operand {
            Value::Int(n) => Ok(Value::Int(n.wrapping_abs())),
            _ => Err(RuntimeError::AbsTypeMismatch { operand: operand.type_name(),
                                                     line }),
        }
    }
}
