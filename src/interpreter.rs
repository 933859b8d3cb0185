/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks expression trees and computes their runtime values, and
/// runs statements in order against an output writer. It is the execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates literals, groups, unary and binary operations.
/// - Executes `print` and expression statements.
/// - Reports runtime type errors with the line of the offending operator.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, punctuation and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal value and source line.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for unexpected characters and unterminated
///   strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements, following an unambiguous precedence grammar.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Validates the grammar, reporting syntax errors with location info.
/// - Recovers after a malformed statement so later ones are still checked.
pub mod parser;
/// Canonical, fully parenthesized rendering of syntax trees.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (numbers, strings, booleans and `nil`) along with
/// truthiness and the display form used by `print`.
pub mod value;
/// Visitor traits for traversing expressions and statements.
pub mod visitor;
