/// Cursor, entry points and error recovery.
///
/// Holds the token cursor shared by all grammar levels, the single-expression
/// entry point and the synchronization routine used after a syntax error.
pub mod core;

/// Binary precedence levels.
///
/// Implements equality, comparison, term and factor. Each level folds a flat
/// chain of same-precedence operators into a left-leaning tree.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Handles right-associative `!` and `-`, literals and parenthesized groups.
pub mod unary;

/// Statements and programs.
///
/// Parses `print` and expression statements and the statement sequence that
/// makes up a program, recovering after each malformed statement.
pub mod statement;

pub use self::{core::parse, statement::parse_program};
