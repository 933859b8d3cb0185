#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and execution.
pub enum RuntimeError {
    /// A unary operator needed a numeric operand.
    ExpectedNumber {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator needed two numeric operands.
    ExpectedNumbers {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The operands of an overloaded operator do not share a kind it accepts.
    MismatchedOperands {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The tree holds an operator token that is not valid in its position.
    UnknownOperator {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing program output failed.
    Output {
        /// Details reported by the writer.
        details: String,
    },
}

impl RuntimeError {
    /// Gets the line number the error was reported on, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::ExpectedNumber { line, .. }
            | Self::ExpectedNumbers { line, .. }
            | Self::MismatchedOperands { line, .. }
            | Self::UnknownOperator { line, .. } => Some(*line),
            Self::Output { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { operator, line } => write!(f,
                                                              "Error on line {line}: Type error: operand of '{operator}' must be a number."),
            Self::ExpectedNumbers { operator, line } => write!(f,
                                                               "Error on line {line}: Type error: operands of '{operator}' must be numbers."),
            Self::MismatchedOperands { operator, line } => write!(f,
                                                                  "Error on line {line}: Type error: operands of '{operator}' must be two numbers or two strings."),
            Self::UnknownOperator { operator, line } => {
                write!(f, "Error on line {line}: Unknown operator '{operator}'.")
            },
            Self::Output { details } => write!(f, "Error writing output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
