//! # jawa
//!
//! jawa is a small, dynamically-typed expression language. This crate holds
//! its whole front end and evaluator: a lexer producing positioned tokens, a
//! recursive-descent parser with declaration-form disambiguation, and a
//! tree-walking evaluator with cross-type arithmetic coercion over a
//! session-scoped variable store.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    lexer::tokenize,
    parser::core::parse,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator; rendering a tree through its
/// `Display` impl produces canonical text the parser accepts again.
///
/// # Responsibilities
/// - Defines the literal, expression, and declaration node types.
/// - Attaches source lines to nodes for error reporting.
/// - Renders trees back to re-parseable text.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running source
/// code. It standardizes error reporting and carries detailed information
/// about failures, including source lines and column spans where the
/// offending text is known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Renders caret markers underneath offending spans.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime value
/// representation, and the variable environment to provide a complete
/// pipeline for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion helpers used by the evaluator,
/// covering the places where a computed quantity has to be narrowed into
/// another representation without panicking.
///
/// # Responsibilities
/// - Safely shift characters by integer code offsets.
/// - Safely convert repetition counts.
pub mod util;

/// Runs one line of source text against a session environment.
///
/// This is the pipeline boundary an interactive caller drives: the line is
/// tokenized, parsed into a single root node, and evaluated. Declarations
/// write to the environment and return the assigned value; variable
/// accesses read from it; bare expressions leave it untouched. The pipeline
/// itself never writes to any output channel.
///
/// # Errors
/// Returns the first failure from any phase: a lexical error, a parse
/// error, or a runtime error. A failed line never leaves the environment
/// partially updated.
///
/// # Examples
/// ```
/// use jawa::{interpreter::environment::Environment, run_line};
///
/// let mut environment = Environment::new();
///
/// let value = run_line("10 + (2 * |5 - 10|^2)", &mut environment).unwrap();
/// assert_eq!(value.to_string(), "60");
///
/// run_line("umur = 17", &mut environment).unwrap();
/// let stored = run_line("umur", &mut environment).unwrap();
/// assert_eq!(stored.to_string(), "17");
///
/// // Reading a variable that was never declared is an error.
/// assert!(run_line("nama", &mut environment).is_err());
/// ```
pub fn run_line(source: &str,
                environment: &mut Environment)
                -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let node = parse(&mut tokens.iter().peekable())?;
    let value = Evaluator::new(environment).eval_node(&node)?;

    Ok(value)
}

/// Runs a whole script, one line at a time, against a session environment.
///
/// Blank lines are skipped; every other line goes through [`run_line`] and
/// its value is collected in order. Execution stops at the first failing
/// line.
///
/// # Errors
/// Returns the failure of the first line that does not run.
///
/// # Examples
/// ```
/// use jawa::{interpreter::environment::Environment, run_source};
///
/// let mut environment = Environment::new();
/// let values = run_source("x = 2\n\n2 * 3 + 1", &mut environment).unwrap();
///
/// let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["2", "7"]);
/// ```
pub fn run_source(source: &str,
                  environment: &mut Environment)
                  -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let mut values = Vec::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }

        values.push(run_line(line, environment)?);
    }

    Ok(values)
}
