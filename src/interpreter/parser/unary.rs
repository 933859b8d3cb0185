use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Literal, TokenKind},
        parser::core::{Cursor, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )` and `--x` as two nested negations. Without a prefix operator the
/// function falls through to [`parse_primary`].
///
/// Every call counts as one level of nesting, which bounds both prefix chains
/// and parenthesized groups (a group re-enters this function for its inner
/// expression).
///
/// Grammar:
/// ```text
///     unary := ("!" | "-") unary
///            | primary
/// ```
pub fn parse_unary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    cursor.enter()?;
    let result = parse_prefix(cursor);
    cursor.leave();
    result
}

fn parse_prefix(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    if let Some(operator) = cursor.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
        let operand = parse_unary(cursor)?;
        cursor.raise(cursor.height())?;
        return Ok(Expr::unary(operator.clone(), operand));
    }

    parse_primary(cursor)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are number and string literals, `true`, `false`,
/// `nil` and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `ExpectedExpression` if the current token cannot start an expression,
///   including the end of input.
/// - `ExpectedToken` if a group is missing its closing `)`.
pub fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let Some(token) = cursor.match_any(&[TokenKind::False,
                                         TokenKind::True,
                                         TokenKind::Nil,
                                         TokenKind::Number,
                                         TokenKind::String,
                                         TokenKind::LeftParen])
    else {
        let (found, line) = cursor.current();
        return Err(ParseError::ExpectedExpression { found, line });
    };

    let expr = match (token.kind, &token.literal) {
        (TokenKind::False, _) => Expr::literal(false),
        (TokenKind::True, _) => Expr::literal(true),
        (TokenKind::Nil, _) => Expr::literal(LiteralValue::Nil),
        (TokenKind::Number, Some(Literal::Number(n))) => Expr::literal(*n),
        (TokenKind::String, Some(Literal::Str(s))) => Expr::literal(s.as_str()),
        (TokenKind::LeftParen, _) => {
            let inner = parse_expression(cursor)?;
            cursor.consume(TokenKind::RightParen, "')' after expression")?;
            cursor.raise(cursor.height())?;
            return Ok(Expr::grouping(inner));
        },
        _ => {
            return Err(ParseError::InvalidLiteral { found: token.lexeme.clone(),
                                                    line:  token.line, });
        },
    };

    cursor.raise(0)?;
    Ok(expr)
}
