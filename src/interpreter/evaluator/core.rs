use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{lexer::Token, value::Value, visitor::ExprVisitor},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the runtime value of expressions.
///
/// The evaluator holds no state between calls; each call walks the tree it is
/// given, operands first and left to right, and stops at the first runtime
/// error.
///
/// # Example
/// ```
/// use sting::{
///     ast::Expr,
///     interpreter::{evaluator::core::Evaluator, value::Value},
/// };
///
/// let expr = Expr::grouping(Expr::literal(7.0));
/// assert_eq!(Evaluator::new().evaluate(&expr), Ok(Value::Number(7.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Dispatch goes through [`Expr::accept`]; the operator semantics live in
    /// [`Evaluator::eval_unary`] and [`Evaluator::eval_binary`].
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        expr.accept(self)
    }
}

impl ExprVisitor<EvalResult<Value>> for Evaluator {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Self::eval_binary(&left, operator, &right)
    }

    fn visit_grouping(&mut self, inner: &Expr) -> EvalResult<Value> {
        self.evaluate(inner)
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> EvalResult<Value> {
        Ok(Value::from(value))
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> EvalResult<Value> {
        let operand = self.evaluate(operand)?;
        Self::eval_unary(operator, &operand)
    }
}
