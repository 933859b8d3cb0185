use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{Token, TokenKind},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `-`: numeric negation. The operand must be a number.
    /// - `!`: logical negation of the operand's truthiness. Accepts any value.
    ///
    /// # Parameters
    /// - `operator`: The operator token; its line is used for error reporting.
    /// - `operand`: Input value.
    ///
    /// # Example
    /// ```
    /// use sting::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     lexer::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let v = Evaluator::eval_unary(&minus, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    /// let v = Evaluator::eval_unary(&bang, &Value::Nil).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(operator: &Token, operand: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::ExpectedNumber { operator: operator.lexeme.clone(),
                                                        line:     operator.line, }),
            },
            TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
            _ => Err(RuntimeError::UnknownOperator { operator: operator.lexeme.clone(),
                                                     line:     operator.line, }),
        }
    }
}
