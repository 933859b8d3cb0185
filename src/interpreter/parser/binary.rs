use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{Cursor, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses one left-associative precedence level.
///
/// One operand is parsed at the next-higher level; then, while the current
/// token is one of `operators`, the operator and another operand are consumed
/// and folded into a `Binary` node with everything parsed so far on its left.
/// `a - b - c` therefore becomes `(a - b) - c`.
///
/// The chain is folded in a loop, but every fold makes the tree one level
/// taller, so a long chain fails with `NestingTooDeep` once it passes
/// [`MAX_TREE_HEIGHT`](crate::interpreter::parser::core::MAX_TREE_HEIGHT).
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `operators`: The operator kinds belonging to this level.
/// - `operand`: Parser for the next-higher level.
fn parse_left_associative<'a>(cursor: &mut Cursor<'a>,
                              operators: &[TokenKind],
                              operand: fn(&mut Cursor<'a>) -> ParseResult<Expr>)
                              -> ParseResult<Expr> {
    let mut left = operand(cursor)?;
    let mut height = cursor.height();

    while let Some(operator) = cursor.match_any(operators) {
        let right = operand(cursor)?;
        cursor.raise(height.max(cursor.height()))?;
        height = cursor.height();
        left = Expr::binary(left, operator.clone(), right);
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor,
                           &[TokenKind::BangEqual, TokenKind::EqualEqual],
                           parse_comparison)
}

/// Parses relational expressions.
///
/// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor,
                           &[TokenKind::Greater,
                             TokenKind::GreaterEqual,
                             TokenKind::Less,
                             TokenKind::LessEqual],
                           parse_term)
}

/// Parses addition and subtraction.
///
/// Grammar: `term := factor (("-" | "+") factor)*`
pub fn parse_term(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor, &[TokenKind::Minus, TokenKind::Plus], parse_factor)
}

/// Parses multiplication and division.
///
/// Grammar: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor, &[TokenKind::Slash, TokenKind::Star], parse_unary)
}
