use crate::{
    ast::{Expr, LiteralValue, Stmt},
    interpreter::{
        lexer::Token,
        value::Value,
        visitor::{ExprVisitor, StmtVisitor},
    },
};

/// Renders syntax trees in a canonical, fully parenthesized prefix form.
///
/// Operators print as `(lexeme operand...)`, groups as `(group inner)` and
/// literals in their display form. The rendering is total and has no side
/// effects, and it makes the tree's shape explicit: `1 + 2 * 3` prints as
/// `(+ 1 (* 2 3))`.
///
/// # Example
/// ```
/// use sting::{ast::Expr, interpreter::printer::AstPrinter};
///
/// let expr = Expr::grouping(Expr::literal(2.5));
/// assert_eq!(AstPrinter.print(&expr), "(group 2.5)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AstPrinter;

impl AstPrinter {
    /// Renders an expression.
    #[must_use]
    pub fn print(mut self, expr: &Expr) -> String {
        expr.accept(&mut self)
    }

    /// Renders a statement as `(print expr)` or `(expression expr)`.
    #[must_use]
    pub fn print_statement(mut self, statement: &Stmt) -> String {
        statement.accept(&mut self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({name}");
        for expr in exprs {
            let rendered: String = expr.accept(self);
            out.push(' ');
            out.push_str(&rendered);
        }
        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        Value::from(value).to_string()
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression(&mut self, expr: &Expr) -> String {
        self.parenthesize("expression", &[expr])
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        self.parenthesize("print", &[expr])
    }
}
