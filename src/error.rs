/// Lexical errors.
///
/// Defines the errors the scanner can report: characters that start no token
/// and strings that never close.
pub mod scan_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as a missing closing parenthesis or a token that cannot start
/// an expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors are type mismatches between operators and their operands, or
/// failures to write program output.
pub mod runtime_error;
/// Per-run accumulation of lexical and syntactic errors.
///
/// Scanning and parsing keep going after most errors so that every problem in a
/// file is reported at once. They record what they find in a [`Diagnostics`]
/// value owned by the caller, which decides whether to continue.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;
