use logos::Logos;

use crate::error::{Diagnostics, ScanError};

/// The category of a lexical token.
///
/// The enum is closed: punctuation, one- and two-character operators, the
/// three literal classes, reserved words and the end marker. `Eof` is never
/// produced by the generated lexer; [`scan`] appends it after the last token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens such as `total` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens. Strings may span lines and have no escapes.
    #[regex(r#""[^"]*""#, |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
    })]
    String,
    /// Numeric literal tokens, such as `42` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.` The terminating newline is left for the newline rule.
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the keywords that can begin a statement or a
    /// declaration. The parser resumes at these after an error.
    ///
    /// # Example
    /// ```
    /// use sting::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Print.begins_statement());
    /// assert!(!TokenKind::Plus.begins_statement());
    /// ```
    #[must_use]
    pub const fn begins_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fn
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }

    const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::And
                 | Self::Class
                 | Self::Else
                 | Self::False
                 | Self::Fn
                 | Self::For
                 | Self::If
                 | Self::Nil
                 | Self::Or
                 | Self::Print
                 | Self::Return
                 | Self::Super
                 | Self::This
                 | Self::True
                 | Self::Var
                 | Self::While)
    }
}

/// The literal payload a token may carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Value of a `Number` token.
    Number(f64),
    /// Text of a `String` token without its quotes, or the text of an
    /// identifier or keyword.
    Str(String),
}

/// A scanned token.
///
/// Tokens are created only by [`scan`] and are never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's category.
    pub kind:    TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The literal value, if the token has one.
    pub literal: Option<Literal>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Builds a token, deriving its literal from the kind and lexeme.
    ///
    /// Numbers carry their value and strings their text without quotes.
    /// Identifiers and every keyword, `true`, `false` and `nil` included, carry
    /// their own text. Punctuation and operators carry nothing.
    ///
    /// # Example
    /// ```
    /// use sting::interpreter::lexer::{Literal, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 3);
    /// assert_eq!(token.literal, Some(Literal::Str("hi".to_string())));
    /// assert_eq!(token.line, 3);
    ///
    /// let token = Token::new(TokenKind::Nil, "nil", 1);
    /// assert_eq!(token.literal, Some(Literal::Str("nil".to_string())));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
            TokenKind::String => lexeme.strip_prefix('"')
                                       .and_then(|s| s.strip_suffix('"'))
                                       .map(|s| Literal::Str(s.to_string())),
            kind if kind == TokenKind::Identifier || kind.is_keyword() => {
                Some(Literal::Str(lexeme.to_string()))
            },
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Builds the end-of-input marker for the given line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(Literal::Number(n)) => write!(f, "{:?} {} {n}", self.kind, self.lexeme),
            Some(Literal::Str(s)) => write!(f, "{:?} {} {s}", self.kind, self.lexeme),
            None => write!(f, "{:?} {} null", self.kind, self.lexeme),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Scans `source` into tokens, terminated by an `Eof` token.
///
/// Lexical errors are recorded in `diagnostics` and scanning continues past
/// them, except for an unterminated string: no later token boundary can be
/// trusted, so scanning stops there. The returned sequence always ends with
/// `Eof`.
///
/// # Example
/// ```
/// use sting::{
///     error::Diagnostics,
///     interpreter::lexer::{TokenKind, scan},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("1 >= 2 // done", &mut diagnostics);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::GreaterEqual, TokenKind::Number, TokenKind::Eof]);
/// assert!(!diagnostics.had_error());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with('"') {
                    let rest = &source[lexer.span().start..];
                    let line = line + rest.matches('\n').count();
                    diagnostics.report(ScanError::UnterminatedString { line });
                    lexer.extras.line = line;
                    break;
                }
                for character in slice.chars() {
                    diagnostics.report(ScanError::UnexpectedCharacter { character, line });
                }
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    tokens
}
