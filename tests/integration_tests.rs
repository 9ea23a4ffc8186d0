//! Integration tests for the full front end.
//!
//! These tests drive the whole pipeline: source text through tokenization
//! into a parsed expression tree, including the diagnostic rendering path.

use exprlang::{
    ast::ast::{Expr, Identifier},
    display_error,
    lexer::lexer::tokenize,
    lexer::tokens::TokenKind,
    parser::parser::parse,
};

#[test]
fn test_tokenize_and_parse_program() {
    let source = "{ var n = 10; var acc = 0; while n > 0 do { acc = acc + n; n = n - 1; }; acc }";
    let tokens = tokenize(source).unwrap();
    let parsed = parse(tokens).unwrap().unwrap();

    match parsed {
        Expr::Block { statements, result } => {
            assert_eq!(statements.len(), 3);
            assert!(matches!(statements[0], Expr::Variable { .. }));
            assert!(matches!(statements[2], Expr::WhileStatement { .. }));
            assert_eq!(*result, Expr::identifier("acc"));
        }
        other => panic!("expected a block, got {:?}", other),
    }
}

#[test]
fn test_conditional_with_calls() {
    let source = "if ready() then print(1, 2) else print(3)";
    let parsed = parse(tokenize(source).unwrap()).unwrap().unwrap();

    let expected = Expr::TernaryOp {
        condition: Box::new(Expr::FunctionCall {
            callee: Identifier::new("ready"),
            arguments: None,
        }),
        then_branch: Box::new(Expr::FunctionCall {
            callee: Identifier::new("print"),
            arguments: Some(vec![Expr::int(1), Expr::int(2)]),
        }),
        else_branch: Some(Box::new(Expr::FunctionCall {
            callee: Identifier::new("print"),
            arguments: Some(vec![Expr::int(3)]),
        })),
    };
    assert_eq!(parsed, expected);
}

#[test]
fn test_comments_do_not_reach_the_parser() {
    let source = "1 + // ignored\n2 # also ignored";
    let parsed = parse(tokenize(source).unwrap()).unwrap().unwrap();

    assert_eq!(parsed, Expr::binary(Expr::int(1), "+", Expr::int(2)));
}

#[test]
fn test_retokenizing_token_texts_is_idempotent() {
    let source = "{ var x = 1; if x <= 2 then f(x) else x // tail\n}";
    let tokens = tokenize(source).unwrap();

    let joined = tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<&str>>()
        .join(" ");
    let retokenized = tokenize(&joined).unwrap();

    assert_eq!(retokenized.len(), tokens.len());
    for (before, after) in tokens.iter().zip(retokenized.iter()) {
        assert_eq!(before.kind, after.kind);
        assert_eq!(before.text, after.text);
    }
}

#[test]
fn test_lex_error_propagates_through_pipeline() {
    let source = "var x = 2 @";
    let result = tokenize(source);
    assert!(result.is_err());

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "LexError");

    // rendering a diagnostic must not panic
    display_error(&error, source);
}

#[test]
fn test_syntax_error_location_points_at_offender() {
    let source = "x +\n* 2";
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_location().line, 2);
    assert_eq!(error.get_location().column, 1);

    display_error(&error, source);
}

#[test]
fn test_tokenizer_output_feeds_parser_kinds() {
    let tokens = tokenize("f(x) == 2").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Operator,
            TokenKind::IntLiteral,
        ]
    );

    assert!(parse(tokens).unwrap().is_some());
}

#[test]
fn test_whitespace_only_program_is_no_program() {
    let tokens = tokenize(" \n\t ").unwrap();
    assert!(tokens.is_empty());
    assert!(parse(tokens).unwrap().is_none());
}
