//! Integration tests for the front-end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser to a program and its error list.

use monkey_frontend::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
    parse, render_error, tokenize, Lexer, Parser,
};

const PROGRAM: &str = "
let five = 5;
let ten = 10;

let add = fn(x, y) {
    x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";

#[test]
fn test_lex_full_program() {
    let tokens = tokenize(PROGRAM, Some(String::from("program.monkey")));

    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Function).count(),
        1
    );

    let offsets: Vec<u32> = tokens.iter().map(|t| t.offset()).collect();
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_parse_full_program() {
    let mut parser = Parser::new(Lexer::new(PROGRAM, Some(String::from("program.monkey"))));
    let program = parser.parse_program();

    // `!-/*5` is the only malformed statement
    assert_eq!(parser.errors(), vec!["no prefix parse function for `Slash` found"]);
    assert_eq!(program.len(), 8);

    let kinds: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(_) => "let",
            Stmt::Return(_) => "return",
            Stmt::Expression(_) => "expr",
            Stmt::Block(_) => "block",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["let", "let", "let", "let", "expr", "expr", "expr", "expr"]
    );

    assert_eq!(program.statements[2].to_string(), "let add = fn(x, y) { (x + y) };");
    assert_eq!(program.statements[3].to_string(), "let result = add(five, ten);");
    assert_eq!(program.statements[4].to_string(), "((5 < 10) > 5)");
    assert_eq!(
        program.statements[5].to_string(),
        "if (5 < 10) { return true; } else { return false; }"
    );
}

#[test]
fn test_canonical_output_reparses_identically() {
    let source = "let f = fn(a, b) { if (a > b) { a } else { b * -1 } }; f(1, 2 + 3) == !true";

    let (program, errors) = parse(source, None);
    assert!(errors.is_empty());

    let (reparsed, errors) = parse(&program.to_string(), None);
    assert!(errors.is_empty());
    assert_eq!(reparsed.to_string(), program.to_string());
}

#[test]
fn test_partial_program_with_diagnostics() {
    let source = "let a = 1;\nlet b 2;\nlet c = (3 + ;\nlet d = a + c;";
    let (program, errors) = parse(source, Some(String::from("broken.monkey")));

    assert_eq!(program.to_string(), "let a = 1;\nlet d = (a + c);");
    assert_eq!(errors.len(), 2);

    let first = render_error(&errors[0], source);
    assert!(first.starts_with("Error: expected `=`"));
    assert!(first.contains("-> broken.monkey:2:7"));

    let second = render_error(&errors[1], source);
    assert!(second.contains("no prefix parse function for `Semicolon` found"));
    assert!(second.contains("3 | let c = (3 + ;"));
}

#[test]
fn test_deeply_nested_expression() {
    let depth = 200;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));

    let (program, errors) = parse(&source, None);
    assert!(errors.is_empty());
    match &program.statements[0] {
        Stmt::Expression(stmt) => assert!(matches!(stmt.expression, Expr::Identifier(_))),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_excessive_nesting_reports_an_error() {
    let source = format!("let a = 1;\n{}1;\nlet b = a;", "-".repeat(20_000));

    let (program, errors) = parse(&source, Some(String::from("deep.monkey")));
    assert_eq!(program.to_string(), "let a = 1;\nlet b = a;");
    assert_eq!(errors.len(), 1);

    let rendered = render_error(&errors[0], &source);
    assert!(rendered.starts_with("Error: expression nested deeper than"));
    assert!(rendered.contains("-> deep.monkey:2:"));
}

#[test]
fn test_garbage_input_terminates() {
    let source = "}}{{ ) ( ; ; fn fn let let = = if else @@@ $ 99999999999999999999999";
    let (_, errors) = parse(source, None);

    assert!(!errors.is_empty());
}
