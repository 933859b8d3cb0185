//! # sting
//!
//! sting is a small expression language and its tree-walking interpreter,
//! written in Rust. Source text is scanned into tokens, parsed into a syntax
//! tree under a fixed precedence grammar, and then either printed in a
//! canonical parenthesized form or evaluated.

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
    ast::Stmt,
    error::Diagnostics,
    interpreter::{
        evaluator::{core::Evaluator, statement::Interpreter},
        lexer::{Token, scan},
        parser::{parse, parse_program},
        printer::AstPrinter,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the printer and the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator tokens on the nodes so that errors can name their line.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code, and the `Diagnostics` collection that gathers every
/// lexical and syntax error found in one run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, printing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, printer, evaluator and
///   value types.
/// - Defines the visitor traits the tree consumers implement.
pub mod interpreter;

/// Scans `source` and parses it with `parse_fn`.
///
/// Parsing is skipped when scanning reported errors, and the result is only
/// returned if neither phase reported anything.
fn front_end<T>(source: &str,
                parse_fn: impl FnOnce(&[Token], &mut Diagnostics) -> T)
                -> Result<T, Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan(source, &mut diagnostics);
    if diagnostics.had_error() {
        return Err(diagnostics);
    }

    let parsed = parse_fn(&tokens, &mut diagnostics);
    diagnostics.into_result(parsed)
}

/// Scans `source` into tokens, ending with `Eof`.
///
/// # Examples
/// ```
/// use sting::{interpreter::lexer::TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
///
/// assert!(tokenize("\"open").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostics> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    diagnostics.into_result(tokens)
}

/// Parses a program and renders each statement in canonical form, one line
/// per statement.
///
/// # Examples
/// ```
/// use sting::render;
///
/// let lines = render("print 1 + 2 * 3;\n-4;").unwrap();
/// assert_eq!(lines, vec!["(print (+ 1 (* 2 3)))", "(expression (- 4))"]);
/// ```
pub fn render(source: &str) -> Result<Vec<String>, Diagnostics> {
    let program: Vec<Stmt> = front_end(source, parse_program)?;
    Ok(program.iter().map(|statement| AstPrinter.print_statement(statement)).collect())
}

/// Evaluates `source` as a single expression.
///
/// # Errors
/// Returns the [`Diagnostics`] if scanning or parsing failed, or the
/// [`error::RuntimeError`] that stopped evaluation.
///
/// # Examples
/// ```
/// use sting::{evaluate, interpreter::value::Value};
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), Value::Number(9.0));
/// assert_eq!(evaluate("\"con\" + \"cat\"").unwrap(), Value::from("concat"));
///
/// // Type mismatch.
/// assert!(evaluate("\"a\" - 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan(source, &mut diagnostics);
    if !diagnostics.had_error()
       && let Some(expr) = parse(&tokens, &mut diagnostics)
    {
        return Ok(Evaluator::new().evaluate(&expr)?);
    }

    Err(Box::new(diagnostics))
}

/// Parses and executes every statement in `source`, writing the output of
/// `print` statements to `out`.
///
/// Nothing runs if the program has a lexical or syntax error anywhere.
///
/// # Errors
/// Returns the [`Diagnostics`] if scanning or parsing failed, or the
/// [`error::RuntimeError`] that stopped execution.
///
/// # Examples
/// ```
/// use sting::run;
///
/// let mut out = Vec::new();
/// run("print 1 + 1;\nprint \"done\";", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2\ndone\n");
///
/// // A syntax error anywhere prevents execution.
/// let mut out = Vec::new();
/// assert!(run("print 1;\nprint (2;", &mut out).is_err());
/// assert!(out.is_empty());
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Box<dyn std::error::Error>> {
    let program = front_end(source, parse_program)?;
    Interpreter::new(out).interpret(&program)?;
    Ok(())
}
