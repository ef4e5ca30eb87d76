//! # mao
//!
//! mao is an interpreter for a small typed expression language written in
//! Rust. Programs declare `int` and `double` variables, assign arithmetic
//! expressions to them and print results:
//!
//! ```text
//! double r, area;
//! r = 2;
//! area = 3.14159 * r * r;
//! print("area: ");
//! print(area);
//! ```
//!
//! All storage is built on a block-chunked arena, variables live in a chained
//! hash table, and expressions are parsed by splitting token ranges at their
//! loosest-binding operator.

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

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Tokenized, tokenize},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the expression tree, its node and operator types, and
/// the statement types produced by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes referencing their children by index.
/// - Attaches source lines to nodes for error reporting.
/// - Defines declaration, expression and print statements.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing, parsing
/// or evaluating code. Every error carries the source line it relates to.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (lexer, parser, declarations,
///   evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for mao programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Storage primitives shared by every phase.
///
/// Provides the block-chunked arena and the chained hash table built on it.
pub mod memory;
/// General utilities for numeric conversion.
///
/// This module provides the conversion routines between the integer and double
/// representations used throughout the evaluator.
pub mod util;

/// Runs a mao program.
///
/// The source is tokenized first. Lexical diagnostics are written to
/// `diagnostics` as `Error #n: line L: message` and never stop execution; the
/// malformed input is simply skipped. Statements are then executed in order,
/// with `print` output going to `out`.
///
/// # Parameters
/// - `source`: The program text.
/// - `out`: Destination of `print` output.
/// - `diagnostics`: Destination of lexical diagnostics.
///
/// # Returns
/// `Ok(())` once every statement ran and `out` was flushed, or the first
/// parse, declaration or runtime error. A failed write or flush of `out` is
/// reported as [`Error::Io`].
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// let mut diagnostics = Vec::new();
///
/// mao::run("int a; a = 1 + 2 * 3; print(a);", &mut out, &mut diagnostics).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n");
/// assert!(diagnostics.is_empty());
/// ```
pub fn run<W, D>(source: &str, out: &mut W, diagnostics: &mut D) -> Result<(), Error>
    where W: Write,
          D: Write
{
    let Tokenized { tokens, errors } = tokenize(source);
    tracing::debug!(tokens = tokens.len(), diagnostics = errors.len(), "source tokenized");

    for (number, error) in errors.iter().enumerate() {
        tracing::warn!(line = error.line(), %error, "lexical error");
        writeln!(diagnostics, "Error #{}: {error}", number + 1)?;
    }

    let result = Context::new().execute(&tokens, out);
    let flushed = out.flush();
    result?;
    flushed?;
    Ok(())
}
