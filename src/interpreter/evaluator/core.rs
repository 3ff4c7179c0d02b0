use crate::{
    ast::{Expr, Node, VariableDeclaration},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree and computes its value.
///
/// The evaluator borrows the session's [`Environment`] for the duration of
/// one evaluation. It reads the environment for variable accesses and writes
/// it for declarations; expression evaluation itself has no side effects.
///
/// # Example
/// ```
/// use jawa::interpreter::{
///     environment::Environment,
///     evaluator::core::Evaluator,
///     lexer::tokenize,
///     parser::core::parse,
///     value::Value,
/// };
///
/// let tokens = tokenize("10 + (2 * |5 - 10|^2)").unwrap();
/// let node = parse(&mut tokens.iter().peekable()).unwrap();
///
/// let mut environment = Environment::new();
/// let value = Evaluator::new(&mut environment).eval_node(&node).unwrap();
///
/// assert_eq!(value, Value::Int(60));
/// ```
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over the given environment.
    #[must_use]
    pub fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }

    /// Evaluates a parsed top-level node.
    ///
    /// Expressions evaluate to their computed value, declarations to the
    /// value they assign, and variable accesses to the stored value.
    ///
    /// # Errors
    /// - `UnresolvedReference` when a variable access names an identifier
    ///   the environment does not hold.
    /// - `ImmutableReassignment` when a declaration targets an existing
    ///   immutable variable.
    /// - Any error raised while evaluating an expression.
    pub fn eval_node(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Expression(expr) => self.eval(expr),
            Node::VariableDeclaration(declaration) => self.eval_declaration(declaration),
            Node::VariableAccess { identifier, line } => {
                self.environment
                    .get(identifier)
                    .map(|variable| variable.value.clone())
                    .ok_or_else(|| RuntimeError::UnresolvedReference { name: identifier.clone(),
                                                                       line: *line, })
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Binary operands are evaluated left to right, the left strictly before
    /// the right, with no short-circuiting. Literal nodes are leaves and
    /// evaluate to their value as written.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Binary { left,
                           operator,
                           right,
                           line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(operator, &left, &right, *line)
            },
            Expr::Unary { operator, operand, line } => {
                let operand = self.eval(operand)?;
                Self::eval_unary(operator, &operand, *line)
            },
            Expr::Abs { expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_abs(&value, *line)
            },
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Char { value, .. } => Ok(Value::Char(*value)),
            Expr::Number { value, .. } => Ok(Value::from(value)),
            Expr::Boolean { value, .. } => Ok(Value::Bool(*value)),
        }
    }

    /// Evaluates a variable declaration against the environment.
    ///
    /// The initializer is evaluated first. A declaration targeting an
    /// existing immutable variable fails without touching the stored entry;
    /// one targeting an existing mutable variable replaces the value and
    /// stays mutable; a fresh identifier is stored with the declared
    /// mutability. The assigned value is returned either way.
    fn eval_declaration(&mut self, declaration: &VariableDeclaration) -> EvalResult<Value> {
        let value = self.eval(&declaration.expr)?;

        let is_mutable = match self.environment.get(&declaration.identifier) {
            Some(variable) if !variable.is_mutable => {
                return Err(RuntimeError::ImmutableReassignment {
                    name: declaration.identifier.clone(),
                    line: declaration.line,
                });
            },
            Some(_) => true,
            None => declaration.is_mutable,
        };

        self.environment
            .set(declaration.identifier.clone(), value.clone(), is_mutable);

        Ok(value)
    }
}
