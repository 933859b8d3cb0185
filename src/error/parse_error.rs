#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Variants that point at a token keep its lexeme in `found`; an empty lexeme
/// means the parser was looking at the end of input.
pub enum ParseError {
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of what was required, e.g. `')' after expression`.
        expected: String,
        /// The lexeme found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot begin an expression.
    ExpectedExpression {
        /// The lexeme found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal token carried no usable value.
    InvalidLiteral {
        /// The literal's lexeme.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses or prefix operators nest deeper than the parser allows.
    NestingTooDeep {
        /// The source line where the limit was hit.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}

/// Renders where an error happened relative to the offending lexeme.
fn location(found: &str) -> String {
    if found.is_empty() {
        "at end".to_string()
    } else {
        format!("at '{found}'")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line} {}: Expected {expected}.", location(found))
            },
            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line} {}: Expected expression.", location(found))
            },
            Self::InvalidLiteral { found, line } => {
                write!(f, "Error on line {line} {}: Literal has no value.", location(found))
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
