use crate::{
    ast::{Expr, LiteralValue, Stmt},
    interpreter::lexer::Token,
};

/// A traversal over expressions, with one operation per node variant.
///
/// Implementors never match on [`Expr`] themselves: [`Expr::accept`] selects
/// the operation for the node it is called on. Adding a traversal means adding
/// an implementor; the node types stay as they are.
pub trait ExprVisitor<T> {
    /// Handles a `Binary` node.
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    /// Handles a `Grouping` node.
    fn visit_grouping(&mut self, inner: &Expr) -> T;
    /// Handles a `Literal` node.
    fn visit_literal(&mut self, value: &LiteralValue) -> T;
    /// Handles a `Unary` node.
    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> T;
}

/// A traversal over statements, with one operation per statement variant.
pub trait StmtVisitor<T> {
    /// Handles an expression statement.
    fn visit_expression(&mut self, expr: &Expr) -> T;
    /// Handles a `print` statement.
    fn visit_print(&mut self, expr: &Expr) -> T;
}

impl Expr {
    /// Forwards this node to the matching operation of `visitor`.
    ///
    /// # Example
    /// ```
    /// use sting::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{lexer::Token, visitor::ExprVisitor},
    /// };
    ///
    /// struct CountNodes;
    ///
    /// impl ExprVisitor<usize> for CountNodes {
    ///     fn visit_binary(&mut self, left: &Expr, _: &Token, right: &Expr) -> usize {
    ///         1 + left.accept(self) + right.accept(self)
    ///     }
    ///
    ///     fn visit_grouping(&mut self, inner: &Expr) -> usize {
    ///         1 + inner.accept(self)
    ///     }
    ///
    ///     fn visit_literal(&mut self, _: &LiteralValue) -> usize {
    ///         1
    ///     }
    ///
    ///     fn visit_unary(&mut self, _: &Token, operand: &Expr) -> usize {
    ///         1 + operand.accept(self)
    ///     }
    /// }
    ///
    /// let expr = Expr::grouping(Expr::literal(1.0));
    /// assert_eq!(expr.accept(&mut CountNodes), 2);
    /// ```
    pub fn accept<T, V>(&self, visitor: &mut V) -> T
        where V: ExprVisitor<T> + ?Sized
    {
        match self {
            Self::Binary { left,
                           operator,
                           right, } => visitor.visit_binary(left, operator, right),
            Self::Grouping { inner } => visitor.visit_grouping(inner),
            Self::Literal { value } => visitor.visit_literal(value),
            Self::Unary { operator, operand } => visitor.visit_unary(operator, operand),
        }
    }
}

impl Stmt {
    /// Forwards this statement to the matching operation of `visitor`.
    pub fn accept<T, V>(&self, visitor: &mut V) -> T
        where V: StmtVisitor<T> + ?Sized
    {
        match self {
            Self::Expression { expr } => visitor.visit_expression(expr),
            Self::Print { expr } => visitor.visit_print(expr),
        }
    }
}
