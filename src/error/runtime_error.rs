#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while evaluating a syntax tree.
pub enum RuntimeError {
    /// A binary operator applied to a pairing of runtime types it does not
    /// support.
    TypeMismatch {
        /// Human-readable name of the operator.
        operator: &'static str,
        /// Runtime type name of the left operand.
        left:     &'static str,
        /// Runtime type name of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A unary operator applied to an operand of a runtime type it does not
    /// support.
    UnaryTypeMismatch {
        /// Human-readable name of the operator.
        operator: &'static str,
        /// Runtime type name of the operand.
        operand:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The absolute-value operation applied to a non-numeric operand.
    AbsTypeMismatch {
        /// Runtime type name of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator token that has no binary evaluation rule. The parser's
    /// grammar never produces such a tree, so hitting this is an internal
    /// fault rather than a user mistake.
    UnsupportedOperator {
        /// The operator token, rendered for diagnostics.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator token that has no unary evaluation rule.
    UnsupportedUnaryOperator {
        /// The operator token, rendered for diagnostics.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Read of an identifier that was never declared.
    UnresolvedReference {
        /// The identifier that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration targeting an identifier that is already bound
    /// immutably.
    ImmutableReassignment {
        /// The identifier of the immutable variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Character arithmetic that left the valid character range.
    CharOutOfRange {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A repetition count that cannot be used to repeat a value.
    InvalidRepetition {
        /// The repetition count as computed.
        count: i32,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { operator,
                                 left,
                                 right,
                                 line, } => write!(f,
                                                   "Error on line {line}: Cannot apply {operator} operator on types {left} and {right}."),

            Self::UnaryTypeMismatch { operator,
                                      operand,
                                      line, } => write!(f,
                                                        "Error on line {line}: Cannot apply unary {operator} operator on type {operand}."),

            Self::AbsTypeMismatch { operand, line } => write!(f,
                                                              "Error on line {line}: Cannot apply abs operator to type {operand}."),

            Self::UnsupportedOperator { operator, line } => write!(f,
                                                                   "Error on line {line}: Operator {operator} not supported for binary evaluation."),

            Self::UnsupportedUnaryOperator { operator, line } => write!(f,
                                                                        "Error on line {line}: Operator {operator} not supported for unary expression."),

            Self::UnresolvedReference { name, line } => {
                write!(f, "Error on line {line}: Unresolved reference: {name}.")
            },

            Self::ImmutableReassignment { name, line } => write!(f,
                                                                 "Error on line {line}: Immutable variable \"{name}\" cannot be reassigned."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::CharOutOfRange { line } => write!(f,
                                                    "Error on line {line}: Character arithmetic left the valid character range."),

            Self::InvalidRepetition { count, line } => {
                write!(f, "Error on line {line}: Cannot repeat a value {count} times.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
