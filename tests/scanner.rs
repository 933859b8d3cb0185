use sting::{
    error::{Diagnostic, Diagnostics, ScanError},
    interpreter::lexer::{Literal, Token, TokenKind, TokenKind::*, scan},
};

fn scan_source(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan_source(source).0.into_iter().map(|t| t.kind).collect()
}

fn keyword_text(lexeme: &str) -> Option<Literal> {
    Some(Literal::Str(lexeme.to_string()))
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("(){},.+-*/;"),
               vec![LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Plus, Minus, Star,
                    Slash, Semicolon, Eof]);
}

#[test]
fn two_character_operators() {
    assert_eq!(kinds("! != = == < <= > >="),
               vec![Bang,
                    BangEqual,
                    Equal,
                    EqualEqual,
                    Less,
                    LessEqual,
                    Greater,
                    GreaterEqual,
                    Eof]);
    assert_eq!(kinds("!!="), vec![Bang, BangEqual, Eof]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t\r\n() "), vec![LeftParen, RightParen, Eof]);
}

#[test]
fn numbers_carry_their_value() {
    for (text, value) in [("0", 0.0), ("42", 42.0), ("2.25", 2.25), ("007.50", 7.5)] {
        let (tokens, _) = scan_source(text);
        assert_eq!(tokens.len(), 2, "{text}");
        assert_eq!(tokens[0].kind, Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(value)));
    }
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    let (tokens, _) = scan_source("12.");
    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[1].kind, Dot);
    assert_eq!(tokens[2].kind, Eof);

    assert_eq!(kinds("1.x"), vec![Number, Dot, Identifier, Eof]);
}

#[test]
fn comment_runs_to_end_of_line() {
    let (tokens, diagnostics) = scan_source("// comment\n+");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, Plus);
    assert_eq!(tokens[0].line, 2);
    assert!(!diagnostics.had_error());
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("1 // trailing"), vec![Number, Eof]);
}

#[test]
fn string_literal() {
    let (tokens, _) = scan_source("\"hello world\"");
    assert_eq!(tokens[0].kind, String);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(tokens[0].literal, Some(Literal::Str("hello world".to_string())));
    assert_eq!(tokens[1].kind, Eof);
}

#[test]
fn multi_line_string_advances_line() {
    let (tokens, _) = scan_source("\"a\nb\" +");
    assert_eq!(tokens[0].literal, Some(Literal::Str("a\nb".to_string())));
    assert_eq!(tokens[1].kind, Plus);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unterminated_string_halts_scanning() {
    let (tokens, diagnostics) = scan_source("1 \"abc");
    assert!(diagnostics.had_error());
    assert!(tokens.iter().all(|t| t.kind != String));
    assert_eq!(tokens.last().map(|t| t.kind), Some(Eof));
    assert!(diagnostics.errors()[0].to_string().contains("Unterminated string"));
}

#[test]
fn unterminated_string_is_reported_where_input_ends() {
    let (tokens, diagnostics) = scan_source("print \"one\ntwo\nthree");
    assert_eq!(diagnostics.errors(),
               [Diagnostic::Scan(ScanError::UnterminatedString { line: 3 })]);
    assert_eq!(tokens.last().map(|t| (t.kind, t.line)), Some((Eof, 3)));
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let (tokens, diagnostics) = scan_source("1 @ 2");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Number, Number, Eof]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].line(), 1);
}

#[test]
fn identifiers_and_keywords() {
    let (tokens, _) = scan_source("var foo = true; android fn");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Var, Identifier, Equal, True, Semicolon, Identifier, Fn, Eof]);
    assert_eq!(tokens[0].literal, keyword_text("var"));
    assert_eq!(tokens[1].literal, keyword_text("foo"));
    assert_eq!(tokens[3].literal, keyword_text("true"));
    assert_eq!(tokens[5].lexeme, "android");
    assert_eq!(tokens[6].literal, keyword_text("fn"));
}

#[test]
fn every_keyword_carries_its_text() {
    let source = "and class else false fn for if nil or print return super this true var while";
    let (tokens, diagnostics) = scan_source(source);
    assert!(!diagnostics.had_error());

    let words: Vec<_> = source.split(' ').collect();
    assert_eq!(tokens.len(), words.len() + 1);
    for (token, word) in tokens.iter().zip(words) {
        assert_ne!(token.kind, Identifier, "{word}");
        assert_eq!(token.literal, keyword_text(word));
    }
}

#[test]
fn punctuation_carries_no_literal() {
    let (tokens, _) = scan_source("( == ;");
    assert!(tokens.iter().all(|t| t.literal.is_none()));
    assert_eq!(tokens[1].to_string(), "EqualEqual == null");
}

#[test]
fn token_display() {
    let (tokens, _) = scan_source("nil 2.5 \"s\"");
    let lines: Vec<_> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Nil nil nil", "Number 2.5 2.5", "String \"s\" s", "Eof  null"]);
}

#[test]
fn lines_are_counted() {
    let (tokens, _) = scan_source("1\n\n2\n");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].line, 4);
}
