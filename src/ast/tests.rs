//! Unit tests for the AST node types.

use super::ast::{Expr, Identifier, LiteralValue, Operator};

#[test]
fn test_structural_equality() {
    let left = Expr::binary(Expr::int(1), "+", Expr::identifier("a"));
    let right = Expr::binary(Expr::int(1), "+", Expr::identifier("a"));

    assert_eq!(left, right);
}

#[test]
fn test_inequality_across_fields() {
    assert_ne!(
        Expr::binary(Expr::int(1), "+", Expr::int(2)),
        Expr::binary(Expr::int(1), "-", Expr::int(2))
    );
    assert_ne!(Expr::int(1), Expr::int(2));
    assert_ne!(Expr::identifier("a"), Expr::identifier("b"));
}

#[test]
fn test_inequality_across_variants() {
    assert_ne!(Expr::int(1), Expr::identifier("1"));
    assert_ne!(Expr::bool(true), Expr::identifier("true"));
    assert_ne!(Expr::unit(), Expr::int(0));
}

#[test]
fn test_equality_is_recursive() {
    let nested = |value| {
        Expr::TernaryOp {
            condition: Box::new(Expr::identifier("a")),
            then_branch: Box::new(Expr::binary(Expr::int(value), "*", Expr::int(2))),
            else_branch: None,
        }
    };

    assert_eq!(nested(3), nested(3));
    assert_ne!(nested(3), nested(4));
}

#[test]
fn test_empty_call_is_distinct_from_empty_list() {
    let no_arguments = Expr::FunctionCall {
        callee: Identifier::new("f"),
        arguments: None,
    };
    let empty_list = Expr::FunctionCall {
        callee: Identifier::new("f"),
        arguments: Some(vec![]),
    };

    assert_ne!(no_arguments, empty_list);
}

#[test]
fn test_operator_and_literal_helpers() {
    assert_eq!(Operator::new("+"), Operator::new("+"));
    assert_ne!(Operator::new("+"), Operator::new("=="));
    assert_eq!(Expr::unit(), Expr::Literal(LiteralValue::Unit));
}
