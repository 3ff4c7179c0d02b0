use crate::ast::{LiteralValue, NumberValue};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types a computed result can have:
/// the four numeric widths, text strings, single characters and booleans.
/// Values are dynamically typed; operators inspect the pairing of runtime
/// types at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A single-precision floating-point number.
    Float(f32),
    /// A double-precision floating-point number.
    Double(f64),
    /// A text string.
    Str(String),
    /// A single character.
    Char(char),
    /// A boolean: `true` or `false`.
    Bool(bool),
}

impl Value {
    /// Returns the name of the value's runtime type, as used in error
    /// messages.
    ///
    /// # Example
    /// ```
    /// use jawa::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(7).type_name(), "Int");
    /// assert_eq!(Value::Str("jawa".to_string()).type_name(), "String");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::Long(_) => "Long",
            Self::Float(_) => "Float",
            Self::Double(_) => "Double",
            Self::Str(_) => "String",
            Self::Char(_) => "Char",
            Self::Bool(_) => "Boolean",
        }
    }

    /// Returns `true` if the value is numeric, in any of the four widths.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self,
                 Self::Int(_) | Self::Long(_) | Self::Float(_) | Self::Double(_))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Int(n) => (*n).into(),
            LiteralValue::Long(n) => (*n).into(),
            LiteralValue::Float(n) => (*n).into(),
            LiteralValue::Double(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Char(c) => (*c).into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl From<&NumberValue> for Value {
    fn from(num: &NumberValue) -> Self {
        match num {
            NumberValue::Int(n) => (*n).into(),
            NumberValue::Long(n) => (*n).into(),
            NumberValue::Float(n) => (*n).into(),
            NumberValue::Double(n) => (*n).into(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
