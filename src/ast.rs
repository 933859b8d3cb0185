use crate::interpreter::lexer::Token;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: numbers, strings, booleans and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The absent value, `nil`.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children exclusively, so a tree is always finite and
/// acyclic. Nodes are built bottom-up by the parser and never change
/// afterwards. The operator tokens of `Binary` and `Unary` keep their lexeme and
/// line for printing and error reporting; which kinds they may hold is decided
/// by the parser, not by this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `a + b` or `a == b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        inner: Box<Self>,
    },
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A prefix operation, `-a` or `!a`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
}

impl Expr {
    /// Builds a `Binary` node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a `Grouping` node.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping { inner: Box::new(inner) }
    }

    /// Builds a `Literal` node.
    ///
    /// ## Example
    /// ```
    /// use sting::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::literal(2.0),
    ///            Expr::Literal { value: LiteralValue::Number(2.0) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a `Unary` node.
    #[must_use]
    pub fn unary(operator: Token, operand: Self) -> Self {
        Self::Unary { operator,
                      operand: Box::new(operand) }
    }
}

/// Represents a top-level statement.
///
/// Statements are terminated by `;` in source and each owns one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated for its effects and discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print <expr>;` writes the value of the expression.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
}
