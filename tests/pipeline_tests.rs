//! End-to-end integration tests for the front end
//!
//! Demonstrates: Scanner → Parser working together, plus JSON dumps of
//! tokens and trees for external drivers.

use minijava::{BinaryOp, Expression, Parser, Program, Scanner, Statement, Token};

#[test]
fn test_pipeline_single_class() {
    let source = r#"
        class Main {
            public static void main() {
                1 + 2 * 3;
            }
        }
    "#;

    // Lex
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();

    // Parse
    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    assert_eq!(program.classes.len(), 1);
    assert_eq!(program.classes[0].methods.len(), 1);

    let Statement::Expression(expr) = &program.classes[0].methods[0].body[0];
    assert_eq!(expr.to_string(), "(1 + (2 * 3))");
}

#[test]
fn test_pipeline_empty_method_bodies() {
    let source = "class A { public static void f() { } public static void g() { } }";

    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();
    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    assert!(program.classes[0].methods[0].body.is_empty());
    assert!(program.classes[0].methods[1].body.is_empty());
}

#[test]
fn test_pipeline_reports_scan_error_before_parse() {
    let source = "class Main { public static void main() { 1 $ 2; } }";

    let mut scanner = Scanner::new(source);
    let err = scanner.scan_tokens().unwrap_err();

    assert!(err.to_string().contains("Unexpected character '$'"));
}

#[test]
fn test_token_json_round_trip() {
    let mut scanner = Scanner::new("int a = 5 + 3;");
    let tokens = scanner.scan_tokens().unwrap();

    let json = serde_json::to_string(&tokens).unwrap();
    let restored: Vec<Token> = serde_json::from_str(&json).unwrap();

    assert_eq!(tokens, restored);
}

#[test]
fn test_program_json_round_trip() {
    let source = "class Main { public static void main() { a + 5 * 3; } }";

    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();
    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    let json = serde_json::to_string(&program).unwrap();
    let restored: Program = serde_json::from_str(&json).unwrap();

    assert_eq!(program, restored);
}

#[test]
fn test_variable_declaration_json_round_trip() {
    // not reachable through the grammar, but a first-class tree node
    let decl = Expression::VariableDeclaration {
        name: "a".to_string(),
        type_name: "int".to_string(),
        initializer: Box::new(Expression::Binary {
            op: BinaryOp::Add,
            left: Box::new(Expression::IntegerLiteral(5)),
            right: Box::new(Expression::IntegerLiteral(3)),
        }),
    };

    let json = serde_json::to_string(&decl).unwrap();
    let restored: Expression = serde_json::from_str(&json).unwrap();

    assert_eq!(decl, restored);
}

#[test]
fn test_display_of_scanned_tokens() {
    let mut scanner = Scanner::new("class Main");
    let tokens = scanner.scan_tokens().unwrap();

    assert_eq!(tokens[0].to_string(), "Token < Class , class, line 1 >");
    assert_eq!(tokens[1].to_string(), "Token < Identifier , Main, line 1 >");
}

#[test]
fn test_lexer_alias_names_the_scanner() {
    let mut lexer = minijava::Lexer::new("class A { }");
    let tokens = lexer.scan_tokens().unwrap();

    assert_eq!(tokens.last().unwrap().kind, minijava::TokenKind::Eof);
}

#[test]
fn test_version_is_exposed() {
    assert!(!minijava::VERSION.is_empty());
}
