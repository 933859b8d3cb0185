/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, its visitor implementation and the `EvalResult`
/// alias shared by every evaluation function.
pub mod core;

/// Statement execution.
///
/// Runs `print` and expression statements against an output writer.
pub mod statement;
