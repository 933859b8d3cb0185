use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::{Diagnostics, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_equality,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply prefix operators and parenthesized groups may nest.
///
/// Every nested group or prefix operator adds a handful of stack frames to the
/// descent, and the same depth again to printing and evaluation. Input nested
/// deeper than this is rejected with [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 100;

/// How tall a parsed expression tree may grow.
///
/// Printing, evaluation and dropping a tree all recurse once per level, and a
/// flat chain such as `1 + 1 + 1` adds a level for every operator even though
/// the parser folds it in a loop. Counting every node level, groups and prefix
/// operators included, a tree taller than this is rejected with
/// [`ParseError::NestingTooDeep`].
pub const MAX_TREE_HEIGHT: usize = 500;

/// A forward-only position in a token sequence with one token of lookahead.
///
/// The `Eof` marker is never consumed: once it is the current token, every
/// matching attempt fails and [`Cursor::advance`] returns `None`. A sequence
/// without a trailing `Eof` behaves the same once it is exhausted.
pub struct Cursor<'a> {
    tokens: Peekable<Iter<'a, Token>>,
    line:   usize,
    depth:  usize,
    height: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens: tokens.iter().peekable(),
               line:   1,
               depth:  0,
               height: 0, }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Returns `true` when the current token is `Eof` or the sequence is
    /// exhausted.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none_or(|token| token.kind == TokenKind::Eof)
    }

    /// Returns `true` if the current token has the given kind.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Consumes and returns the current token, unless at the end.
    pub fn advance(&mut self) -> Option<&'a Token> {
        if self.is_at_end() {
            return None;
        }
        let token = self.tokens.next()?;
        self.line = token.line;
        Some(token)
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes a token of the given kind or fails with
    /// [`ParseError::ExpectedToken`].
    ///
    /// # Parameters
    /// - `kind`: The required token kind.
    /// - `expected`: What was required, used in the error message.
    pub fn consume(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'a Token> {
        if self.check(kind)
           && let Some(token) = self.advance()
        {
            return Ok(token);
        }
        let (found, line) = self.current();
        Err(ParseError::ExpectedToken { expected: expected.to_string(),
                                        found,
                                        line })
    }

    /// Lexeme and line of the current token, for error reports. The lexeme is
    /// empty at the end of input.
    pub fn current(&mut self) -> (String, usize) {
        match self.peek() {
            Some(token) => (token.lexeme.clone(), token.line),
            None => (String::new(), self.line),
        }
    }

    /// Fails with [`ParseError::UnexpectedTrailingTokens`] unless the cursor is
    /// at the end.
    pub fn expect_end(&mut self) -> ParseResult<()> {
        if self.is_at_end() {
            return Ok(());
        }
        let (token, line) = self.current();
        Err(ParseError::UnexpectedTrailingTokens { token, line })
    }

    /// Enters one level of nesting.
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            let (_, line) = self.current();
            return Err(ParseError::NestingTooDeep { line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Height of the expression built last.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Records a node built on top of children at most `below` levels tall.
    ///
    /// Fails with [`ParseError::NestingTooDeep`] if the node would make the
    /// tree taller than [`MAX_TREE_HEIGHT`].
    pub fn raise(&mut self, below: usize) -> ParseResult<()> {
        if below >= MAX_TREE_HEIGHT {
            let (_, line) = self.current();
            return Err(ParseError::NestingTooDeep { line });
        }
        self.height = below + 1;
        Ok(())
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_equality(cursor)
}

/// Parses a token sequence holding exactly one expression.
///
/// A syntax error, including tokens left over after the expression, is
/// recorded in `diagnostics` and yields `None`.
///
/// # Example
/// ```
/// use sting::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::parse, printer::AstPrinter},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("8 - 4 - 2", &mut diagnostics);
/// let expr = parse(&tokens, &mut diagnostics).unwrap();
///
/// assert_eq!(AstPrinter.print(&expr), "(- (- 8 4) 2)");
/// ```
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Option<Expr> {
    let mut cursor = Cursor::new(tokens);
    let result = parse_expression(&mut cursor).and_then(|expr| cursor.expect_end().map(|()| expr));

    match result {
        Ok(expr) => Some(expr),
        Err(e) => {
            diagnostics.report(e);
            None
        },
    }
}

/// Moves the cursor to the next plausible statement boundary after an error.
///
/// The token the error was reported at is skipped first. Skipping then stops
/// right after a `;`, or in front of a keyword that begins a statement, or at
/// the end of input.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    while let Some(token) = cursor.advance() {
        if token.kind == TokenKind::Semicolon {
            return;
        }
        if cursor.peek().is_some_and(|next| next.kind.begins_statement()) {
            return;
        }
    }
}
