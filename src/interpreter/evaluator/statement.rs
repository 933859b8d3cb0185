use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        visitor::StmtVisitor,
    },
};

/// Executes statements, writing the output of `print` to `W`.
///
/// Statements run in order. The first runtime error aborts the run; output
/// already written stays written.
///
/// # Example
/// ```
/// use sting::{
///     ast::{Expr, Stmt},
///     interpreter::evaluator::statement::Interpreter,
/// };
///
/// let program = [Stmt::Print { expr: Expr::literal("hello") },
///                Stmt::Expression { expr: Expr::literal(1.0) },
///                Stmt::Print { expr: Expr::literal(2.5) }];
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.into_inner(), b"hello\n2.5\n");
/// ```
pub struct Interpreter<W: Write> {
    evaluator: Evaluator,
    out:       W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { evaluator: Evaluator::new(),
               out }
    }

    /// Runs every statement of `program` in order.
    pub fn interpret(&mut self, program: &[Stmt]) -> EvalResult<()> {
        for statement in program {
            self.execute(statement)?;
        }
        self.out.flush().map_err(|e| RuntimeError::Output { details: e.to_string() })
    }

    /// Runs a single statement.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        statement.accept(self)
    }

    /// Consumes the interpreter and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StmtVisitor<EvalResult<()>> for Interpreter<W> {
    fn visit_expression(&mut self, expr: &Expr) -> EvalResult<()> {
        self.evaluator.evaluate(expr)?;
        Ok(())
    }

    fn visit_print(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = self.evaluator.evaluate(expr)?;
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string() })
    }
}
