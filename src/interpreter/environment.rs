use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A stored variable: its current value and whether later declarations may
/// replace it.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The value most recently assigned to the variable.
    pub value:      Value,
    /// Whether the variable accepts reassignment.
    pub is_mutable: bool,
}

/// The session-lifetime variable store.
///
/// A flat mapping from identifier to [`Variable`], with no shadowing and no
/// nested scopes. The environment is a plain keyed store; the reassignment
/// policy for immutable entries is enforced by the evaluator, not here.
///
/// One environment belongs to exactly one session. Callers that run several
/// sessions side by side must give each its own instance.
///
/// # Example
/// ```
/// use jawa::interpreter::{environment::Environment, value::Value};
///
/// let mut environment = Environment::new();
/// environment.set("umur", Value::Int(17), true);
///
/// assert!(environment.has("umur"));
/// assert_eq!(environment.get("umur").unwrap().value, Value::Int(17));
/// assert!(environment.get("nama").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Variable>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a variable under `name`, replacing any previous entry.
    pub fn set(&mut self, name: impl Into<String>, value: Value, is_mutable: bool) {
        self.variables
            .insert(name.into(), Variable { value, is_mutable });
    }

    /// Looks up the variable stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Returns `true` when a variable is stored under `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}
