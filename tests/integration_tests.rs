//! End-to-end tests: source text through the lexer and parser to the rendered
//! program or diagnostics.

use std::path::PathBuf;

use trashlang::{
    ast::ast::{Node, Stmt, StmtType},
    config::ReplConfig,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
    repl::{eval_file, eval_line},
};

fn scripts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts")
}

fn script_config() -> ReplConfig {
    ReplConfig {
        script_dir: scripts_dir(),
        quiet: true,
        ..ReplConfig::default()
    }
}

#[test]
fn test_parse_script() {
    let source = std::fs::read_to_string(scripts_dir().join("functions.txt")).unwrap();
    let program = parse(&source, Some("functions.txt".to_string())).unwrap();

    let kinds: Vec<StmtType> = program.iter().map(|s| s.get_stmt_type()).collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::VarStmt,
            StmtType::VarStmt,
            StmtType::VarStmt,
            StmtType::WhileStmt,
            StmtType::ExpressionStmt,
        ]
    );
    assert_eq!(program.token_literal(), "var");

    assert_eq!(
        program.to_string(),
        "var add = fn(a,b) { return (a+b); }; \
         var max = function(a,b) { if ((a>b)) { a } else { b } }; \
         var counter = 0; \
         while ((counter<10)) { var counter = (counter+1); } \
         add(max(1,2),((-3)*4))"
    );
}

#[test]
fn test_rendered_script_parses_to_same_rendering() {
    let source = std::fs::read_to_string(scripts_dir().join("functions.txt")).unwrap();

    let first = parse(&source, None).unwrap().to_string();
    let second = parse(&first, None).unwrap().to_string();

    assert_eq!(first, second);
}

#[test]
fn test_script_diagnostics() {
    let source = std::fs::read_to_string(scripts_dir().join("broken.txt")).unwrap();
    let errors = parse(&source, Some("broken.txt".to_string())).unwrap_err();

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Expected token ASSIGN, got INT instead",
            "Expected token RBRACE, got EOF instead",
        ]
    );

    assert_eq!(
        render_error(&errors[0], &source),
        "Error: Expected token ASSIGN, got INT instead\n\
         -> broken.txt\n  |\n\
         2 | var missing 5;\n  \
         | ------------^"
    );

    let rendered = render_error(&errors[1], &source);
    assert!(rendered.starts_with(
        "Error: Expected token RBRACE, got EOF instead (block is never closed)\n-> broken.txt\n"
    ));
}

#[test]
fn test_tokenize_matches_parser_input() {
    let tokens = tokenize("fn(x) { x == 1 }", None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Int,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_repl_file_command() {
    let config = script_config();

    let rendered = eval_line(&config, "file functions").unwrap();
    assert!(rendered.starts_with("var add = fn(a,b) { return (a+b); };"));

    let rendered = eval_line(&config, "file broken").unwrap();
    assert!(rendered.starts_with(
        "Parser errors:\nError: Expected token ASSIGN, got INT instead\n-> broken.txt"
    ));
}

#[test]
fn test_repl_source_line() {
    let config = script_config();
    assert_eq!(eval_line(&config, "add(1, 2 * 3)").unwrap(), "add(1,(2*3))");
}

#[test]
fn test_eval_missing_file() {
    assert!(eval_file(&scripts_dir().join("missing.txt")).is_err());
}
