use std::io::Write;

use sting::{
    ast::{Expr, LiteralValue, Stmt},
    error::{Diagnostic, Diagnostics, ParseError, RuntimeError, ScanError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            statement::Interpreter,
        },
        lexer::{Token, TokenKind, scan},
        parser::{core::MAX_TREE_HEIGHT, parse, parse_program},
        printer::AstPrinter,
        value::Value,
    },
};

fn eval(source: &str) -> EvalResult<Value> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let expr = parse(&tokens, &mut diagnostics).expect("parse failed");
    Evaluator::new().evaluate(&expr)
}

fn execute(source: &str) -> (EvalResult<()>, String) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let program = parse_program(&tokens, &mut diagnostics);
    assert!(!diagnostics.had_error(), "{diagnostics}");

    let mut interpreter = Interpreter::new(Vec::new());
    let result = interpreter.interpret(&program);
    let output = String::from_utf8(interpreter.into_inner()).expect("output is not UTF-8");
    (result, output)
}

fn op(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, 1)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(eval("1 + 2 * 3"), Ok(num(7.0)));
    assert_eq!(eval("(1 + 2) * 3"), Ok(num(9.0)));
    assert_eq!(eval("8 - 4 - 2"), Ok(num(2.0)));
    assert_eq!(eval("8 / 4 / 2"), Ok(num(1.0)));
}

#[test]
fn unary_chains() {
    assert_eq!(eval("!!true"), Ok(Value::Bool(true)));
    assert_eq!(eval("-(-5)"), Ok(num(5.0)));
    assert_eq!(eval("--5"), Ok(num(5.0)));
    assert_eq!(eval("!nil"), Ok(Value::Bool(true)));
    assert_eq!(eval("!0"), Ok(Value::Bool(false)));
}

#[test]
fn strings_and_equality() {
    assert_eq!(eval("\"ab\" + \"cd\""), Ok(Value::from("abcd")));
    assert_eq!(eval("nil == nil"), Ok(Value::Bool(true)));
    assert_eq!(eval("nil == false"), Ok(Value::Bool(false)));
    assert_eq!(eval("1 == \"1\""), Ok(Value::Bool(false)));
    assert_eq!(eval("\"a\" != \"b\""), Ok(Value::Bool(true)));
}

#[test]
fn first_error_stops_evaluation() {
    assert_eq!(eval("\"a\" - 1"),
               Err(RuntimeError::ExpectedNumbers { operator: "-".to_string(),
                                                   line:     1, }));
    assert_eq!(eval("-\"a\" + (1 < true)"),
               Err(RuntimeError::ExpectedNumber { operator: "-".to_string(),
                                                  line:     1, }));
}

#[test]
fn error_carries_operator_line() {
    assert_eq!(eval("1 +\n\n\"x\""),
               Err(RuntimeError::MismatchedOperands { operator: "+".to_string(),
                                                      line:     1, }));
    assert_eq!(eval("1\n<\n\"x\"").map_err(|e| e.line()), Err(Some(2)));
}

#[test]
fn tallest_accepted_tree_evaluates_and_prints() {
    let source = vec!["1"; MAX_TREE_HEIGHT].join(" + ");
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(&source, &mut diagnostics);
    let expr = parse(&tokens, &mut diagnostics).expect("parse failed");

    assert_eq!(Evaluator::new().evaluate(&expr), Ok(num(500.0)));
    assert!(AstPrinter.print(&expr).starts_with(&"(+ ".repeat(MAX_TREE_HEIGHT - 1)));
}

#[test]
fn binary_arithmetic() {
    assert_eq!(Evaluator::eval_binary(&num(7.0), &op(TokenKind::Minus, "-"), &num(2.0)),
               Ok(num(5.0)));
    assert_eq!(Evaluator::eval_binary(&num(7.0), &op(TokenKind::Star, "*"), &num(2.0)),
               Ok(num(14.0)));
    assert_eq!(Evaluator::eval_binary(&num(7.0), &op(TokenKind::Slash, "/"), &num(2.0)),
               Ok(num(3.5)));
}

#[test]
fn division_by_zero_is_infinite() {
    let slash = op(TokenKind::Slash, "/");
    assert_eq!(Evaluator::eval_binary(&num(1.0), &slash, &num(0.0)), Ok(num(f64::INFINITY)));
    assert_eq!(Evaluator::eval_binary(&num(-1.0), &slash, &num(0.0)), Ok(num(f64::NEG_INFINITY)));
    let nan = Evaluator::eval_binary(&num(0.0), &slash, &num(0.0));
    assert!(matches!(nan, Ok(Value::Number(n)) if n.is_nan()));
}

#[test]
fn plus_requires_matching_kinds() {
    let plus = op(TokenKind::Plus, "+");
    assert_eq!(Evaluator::eval_binary(&Value::from("a"), &plus, &Value::from("b")),
               Ok(Value::from("ab")));
    assert_eq!(Evaluator::eval_binary(&Value::from("a"), &plus, &num(1.0)),
               Err(RuntimeError::MismatchedOperands { operator: "+".to_string(),
                                                      line:     1, }));
    assert!(Evaluator::eval_binary(&Value::Nil, &plus, &Value::Nil).is_err());
}

#[test]
fn arithmetic_rejects_non_numbers() {
    let operators = [(TokenKind::Minus, "-"), (TokenKind::Star, "*"), (TokenKind::Slash, "/")];
    for (kind, lexeme) in operators {
        assert_eq!(Evaluator::eval_binary(&Value::from("a"), &op(kind, lexeme), &num(1.0)),
                   Err(RuntimeError::ExpectedNumbers { operator: lexeme.to_string(),
                                                       line:     1, }));
    }
}

#[test]
fn comparisons() {
    let cases = [(TokenKind::Greater, ">", false),
                 (TokenKind::GreaterEqual, ">=", true),
                 (TokenKind::Less, "<", false),
                 (TokenKind::LessEqual, "<=", true)];
    for (kind, lexeme, expected) in cases {
        assert_eq!(Evaluator::eval_binary(&num(2.0), &op(kind, lexeme), &num(2.0)),
                   Ok(Value::Bool(expected)));
    }
    assert_eq!(Evaluator::eval_binary(&Value::from("a"), &op(TokenKind::Less, "<"), &num(1.0)),
               Err(RuntimeError::ExpectedNumbers { operator: "<".to_string(),
                                                   line:     1, }));
}

#[test]
fn equality_is_structural() {
    let eq = op(TokenKind::EqualEqual, "==");
    let ne = op(TokenKind::BangEqual, "!=");
    assert_eq!(Evaluator::eval_binary(&Value::Nil, &eq, &Value::Nil), Ok(Value::Bool(true)));
    assert_eq!(Evaluator::eval_binary(&Value::Nil, &eq, &num(0.0)), Ok(Value::Bool(false)));
    assert_eq!(Evaluator::eval_binary(&Value::from("x"), &eq, &Value::from("x")),
               Ok(Value::Bool(true)));
    assert_eq!(Evaluator::eval_binary(&num(1.0), &ne, &Value::from("1")), Ok(Value::Bool(true)));
}

#[test]
fn non_operator_token_is_rejected() {
    let semicolon = op(TokenKind::Semicolon, ";");
    assert!(matches!(Evaluator::eval_binary(&num(1.0), &semicolon, &num(1.0)),
                     Err(RuntimeError::UnknownOperator { .. })));
    let plus = op(TokenKind::Plus, "+");
    assert!(matches!(Evaluator::eval_comparison(&num(1.0), &plus, &num(1.0)),
                     Err(RuntimeError::UnknownOperator { .. })));
    assert!(matches!(Evaluator::eval_unary(&plus, &num(1.0)),
                     Err(RuntimeError::UnknownOperator { .. })));
}

#[test]
fn negation_requires_a_number() {
    let minus = Token::new(TokenKind::Minus, "-", 3);
    assert_eq!(Evaluator::eval_unary(&minus, &Value::from("a")),
               Err(RuntimeError::ExpectedNumber { operator: "-".to_string(),
                                                  line:     3, }));
    assert_eq!(Evaluator::eval_unary(&minus, &Value::Nil).map_err(|e| e.line()), Err(Some(3)));
}

#[test]
fn not_uses_truthiness() {
    let bang = op(TokenKind::Bang, "!");
    assert_eq!(Evaluator::eval_unary(&bang, &Value::Bool(false)), Ok(Value::Bool(true)));
    assert_eq!(Evaluator::eval_unary(&bang, &Value::from("")), Ok(Value::Bool(false)));
    assert_eq!(Evaluator::eval_unary(&bang, &num(0.0)), Ok(Value::Bool(false)));
}

#[test]
fn prints_in_order() {
    let (result, output) = execute("print 1 + 2;\nprint \"a\" + \"b\";\nprint nil;\nprint 1 < 2;");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "3\nab\nnil\ntrue\n");
}

#[test]
fn expression_statements_print_nothing() {
    let (result, output) = execute("1 + 2;\n\"unused\";");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "");
}

#[test]
fn runtime_error_stops_the_run() {
    let (result, output) = execute("print 1;\nprint -\"x\";\nprint 2;");
    assert_eq!(result,
               Err(RuntimeError::ExpectedNumber { operator: "-".to_string(),
                                                  line:     2, }));
    assert_eq!(output, "1\n");
}

#[test]
fn errors_in_expression_statements_are_reported() {
    let (result, _) = execute("true * 2;");
    assert!(matches!(result, Err(RuntimeError::ExpectedNumbers { .. })));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_an_output_error() {
    let mut interpreter = Interpreter::new(BrokenPipe);
    let result = interpreter.interpret(&[Stmt::Print { expr: Expr::literal(1.0) }]);
    assert!(matches!(result, Err(RuntimeError::Output { .. })));
}

#[test]
fn value_display() {
    assert_eq!(num(3.0).to_string(), "3");
    assert_eq!(num(2.5).to_string(), "2.5");
    assert_eq!(num(-0.25).to_string(), "-0.25");
    assert_eq!(num(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn value_equality_never_coerces() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(num(1.0), Value::from("1"));
    assert_ne!(num(0.0), Value::Bool(false));
    assert_eq!(Value::from("a"), Value::from(String::from("a")));
}

#[test]
fn value_from_literal() {
    assert_eq!(Value::from(&LiteralValue::Number(4.0)), num(4.0));
    assert_eq!(Value::from(&LiteralValue::Str("s".to_string())), Value::from("s"));
    assert_eq!(Value::from(&LiteralValue::Bool(false)), Value::Bool(false));
    assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
}

#[test]
fn value_accessors() {
    assert_eq!(num(1.0).as_number(), Some(1.0));
    assert_eq!(Value::Bool(true).as_number(), None);
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(num(0.0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn diagnostics_keep_report_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(ScanError::UnexpectedCharacter { character: '@',
                                                        line:      2, });
    diagnostics.report(ParseError::ExpectedExpression { found: ";".to_string(),
                                                        line:  5, });

    let lines: Vec<_> = diagnostics.errors().iter().map(Diagnostic::line).collect();
    assert_eq!(lines, vec![2, 5]);
    assert_eq!(diagnostics.to_string(),
               "Error on line 2: Unexpected character '@'.\nError on line 5 at ';': Expected expression.");
}

#[test]
fn diagnostics_into_result() {
    assert_eq!(Diagnostics::new().into_result(7), Ok(7));

    let mut diagnostics = Diagnostics::new();
    diagnostics.report(ParseError::NestingTooDeep { line: 1 });
    assert!(diagnostics.into_result(7).is_err());
}
