use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{Token, TokenKind},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// - `+` adds two numbers or concatenates two strings.
    /// - `-`, `*`, `/` need two numbers. Division follows IEEE-754, so `1 / 0`
    ///   is infinity rather than an error.
    /// - `>`, `>=`, `<`, `<=` need two numbers and yield a boolean.
    /// - `==` and `!=` compare structurally without coercion.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `operator`: The operator token; its line is used for error reporting.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use sting::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     lexer::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    /// let result = Evaluator::eval_binary(&Value::Number(3.0), &plus, &Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Evaluator::eval_binary(&Value::from("a"), &plus, &Value::Number(4.0));
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(left: &Value, operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ => Err(RuntimeError::MismatchedOperands { operator: operator.lexeme.clone(),
                                                            line:     operator.line, }),
            },
            TokenKind::Minus => {
                let (a, b) = numbers(left, operator, right)?;
                Ok(Value::Number(a - b))
            },
            TokenKind::Star => {
                let (a, b) = numbers(left, operator, right)?;
                Ok(Value::Number(a * b))
            },
            TokenKind::Slash => {
                let (a, b) = numbers(left, operator, right)?;
                Ok(Value::Number(a / b))
            },
            TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual => Self::eval_comparison(left, operator, right),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::UnknownOperator { operator: operator.lexeme.clone(),
                                                     line:     operator.line, }),
        }
    }

    /// Evaluates a relational comparison of two numbers.
    ///
    /// Comparisons involving `NaN` are `false`, as in IEEE-754.
    pub fn eval_comparison(left: &Value, operator: &Token, right: &Value) -> EvalResult<Value> {
        let (a, b) = numbers(left, operator, right)?;

        let result = match operator.kind {
            TokenKind::Greater => a > b,
            TokenKind::GreaterEqual => a >= b,
            TokenKind::Less => a < b,
            TokenKind::LessEqual => a <= b,
            _ => {
                return Err(RuntimeError::UnknownOperator { operator: operator.lexeme.clone(),
                                                           line:     operator.line, });
            },
        };

        Ok(Value::Bool(result))
    }
}

/// Extracts both operands as numbers, or fails with
/// [`RuntimeError::ExpectedNumbers`].
fn numbers(left: &Value, operator: &Token, right: &Value) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::ExpectedNumbers { operator: operator.lexeme.clone(),
                                                 line:     operator.line, }),
    }
}
