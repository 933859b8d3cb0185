use crate::{
    ast::Stmt,
    error::Diagnostics,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Cursor, ParseResult, parse_expression, synchronize},
    },
};

/// Parses a whole program: a sequence of statements up to the end of input.
///
/// A statement that fails to parse is reported to `diagnostics` and left out
/// of the result; the cursor is then synchronized to the next statement
/// boundary so that later statements are still parsed and checked. Callers
/// must consult `diagnostics` before using the returned statements.
///
/// Grammar: `program := statement* EOF`
///
/// # Example
/// ```
/// use sting::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::parse_program},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("1 +; print 2;", &mut diagnostics);
/// let program = parse_program(&tokens, &mut diagnostics);
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(program.len(), 1);
/// ```
pub fn parse_program(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    let mut cursor = Cursor::new(tokens);
    let mut statements = Vec::new();

    while !cursor.is_at_end() {
        match parse_statement(&mut cursor) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                diagnostics.report(e);
                synchronize(&mut cursor);
            },
        }
    }

    statements
}

/// Parses a single statement.
///
/// A statement is either a `print` statement or an expression statement.
///
/// Grammar: `statement := "print" expression ";" | expression ";"`
pub fn parse_statement(cursor: &mut Cursor<'_>) -> ParseResult<Stmt> {
    if cursor.match_any(&[TokenKind::Print]).is_some() {
        return parse_print_statement(cursor);
    }

    parse_expression_statement(cursor)
}

/// Parses the rest of a `print` statement after the keyword.
fn parse_print_statement(cursor: &mut Cursor<'_>) -> ParseResult<Stmt> {
    let expr = parse_expression(cursor)?;
    cursor.consume(TokenKind::Semicolon, "';' after value")?;
    Ok(Stmt::Print { expr })
}

fn parse_expression_statement(cursor: &mut Cursor<'_>) -> ParseResult<Stmt> {
    let expr = parse_expression(cursor)?;
    cursor.consume(TokenKind::Semicolon, "';' after expression")?;
    Ok(Stmt::Expression { expr })
}
