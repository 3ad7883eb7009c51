//! # mutex-lang
//!
//! mutex is a small scripting language written in Rust.
//! Source text is scanned into tokens, parsed by a Pratt parser into a syntax
//! tree, and evaluated directly by a tree-walking interpreter with lexically
//! scoped, mutability-aware variables. Values are nil, booleans, numbers,
//! strings and arrays.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::value::core::Value, session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to every node for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source line it refers to and
/// renders as a single human-readable message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator,
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// An interactive read-eval-print loop over any reader and writer.
pub mod repl;
/// Per-shell state: the global environment and the error flag.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// This module provides helpers that turn the language's floating-point
/// numbers into integer indices without silent data loss.
pub mod util;

/// Runs a complete program in a fresh session and returns the value of its
/// last statement.
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mutex_lang::{interpreter::value::core::Value, run};
///
/// // Simple program: the last statement's value is returned.
/// let value = run("var imm x = 2 + 2; x * 10;").unwrap();
/// assert_eq!(value, Value::Number(40.0));
///
/// // Example with an intentional error (unknown variable).
/// assert!(run("var imm y = x + 1;").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    Session::new().run(source)
}
