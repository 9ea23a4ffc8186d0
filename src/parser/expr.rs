//! Grammar productions, lowest precedence first.
//!
//! Binary operators are table-driven: `BINARY_LEVELS` lists the operator
//! set of each left-associative level, and one combinator walks the table.
//! Assignment sits above it as its own right-associative production, and
//! `KEYWORD_LOOKUP` dispatches identifier tokens that act as keywords.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Identifier, LiteralValue, Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Left-associative binary operator sets, loosest binding first. Adding a
/// precedence level is one new row here.
pub const BINARY_LEVELS: &[&[&str]] = &[
    &["or"],
    &["and"],
    &["==", "!="],
    &["<", "<=", ">", ">="],
    &["+", "-"],
    &["*", "/", "%"],
];

pub const UNARY_OPERATORS: &[&str] = &["not", "-"];

pub type KeywordHandler = fn(&mut Parser) -> Result<Expr, Error>;

lazy_static! {
    /// Identifier texts that dispatch to a statement parser instead of
    /// being read as a variable reference.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, KeywordHandler> = {
        let mut map: HashMap<&'static str, KeywordHandler> = HashMap::new();
        map.insert("if", parse_if_expr);
        map.insert("while", parse_while_expr);
        map.insert("var", parse_var_expr);
        map
    };
}

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

// `=` is right-associative and its left operand, once seen, must be an
// identifier.
fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, 0)?;

    if parser.peek().text != "=" {
        return Ok(left);
    }

    let operator_token = parser.advance();
    if !matches!(left, Expr::Identifier(_)) {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.location,
        ));
    }

    let right = parse_assignment_expr(parser)?;

    Ok(Expr::BinaryOp {
        left: Box::new(left),
        operator: Operator::new(&operator_token.text),
        right: Box::new(right),
    })
}

// One combinator for every left-associative level: parse an operand at the
// next-tighter level, then fold left while the lookahead is in this
// level's operator set.
fn parse_binary_expr(parser: &mut Parser, level: usize) -> Result<Expr, Error> {
    if level == BINARY_LEVELS.len() {
        return parse_unary_expr(parser);
    }

    let mut left = parse_binary_expr(parser, level + 1)?;

    while BINARY_LEVELS[level].contains(&parser.peek().text.as_str()) {
        let operator_token = parser.advance();
        let right = parse_binary_expr(parser, level + 1)?;

        left = Expr::BinaryOp {
            left: Box::new(left),
            operator: Operator::new(&operator_token.text),
            right: Box::new(right),
        };
    }

    Ok(left)
}

// Right-recursive so prefixes stack: `not not a`, `- - 1`.
fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if UNARY_OPERATORS.contains(&parser.peek().text.as_str()) {
        let operator_token = parser.expect_one_of(UNARY_OPERATORS)?;
        let operand = parse_unary_expr(parser)?;

        return Ok(Expr::UnaryOp {
            operator: Operator::new(&operator_token.text),
            operand: Box::new(operand),
        });
    }

    parse_primary_expr(parser)
}

fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.peek();

    if token.text == "(" {
        return parse_parenthesized_expr(parser);
    }
    if token.text == "{" {
        return parse_block_expr(parser);
    }

    match token.kind {
        TokenKind::IntLiteral => parse_int_literal(parser),
        TokenKind::Identifier => parse_identifier_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: token.text.clone(),
            },
            token.location,
        )),
    }
}

fn parse_int_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let value: i64 = token.text.parse().map_err(|_| {
        Error::new(
            ErrorImpl::IntOutOfRange {
                token: token.text.clone(),
            },
            token.location.clone(),
        )
    })?;

    Ok(Expr::Literal(LiteralValue::Int(value)))
}

fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let text = parser.peek().text;

    if let Some(handler) = KEYWORD_LOOKUP.get(text.as_str()) {
        return handler(parser);
    }
    if text == "true" || text == "false" {
        parser.advance();
        return Ok(Expr::Literal(LiteralValue::Bool(text == "true")));
    }

    let token = parser.advance();
    let identifier = Identifier { name: token.text };

    if parser.peek().text == "(" {
        return parse_call_expr(parser, identifier);
    }

    Ok(Expr::Identifier(identifier))
}

// `f()` carries no argument list at all; a non-empty list is
// comma-separated top-level expressions.
fn parse_call_expr(parser: &mut Parser, callee: Identifier) -> Result<Expr, Error> {
    parser.expect("(")?;

    if parser.peek().text == ")" {
        parser.advance();
        return Ok(Expr::FunctionCall {
            callee,
            arguments: None,
        });
    }

    let mut arguments = vec![parse_expr(parser)?];
    while parser.peek().text == "," {
        parser.advance();
        arguments.push(parse_expr(parser)?);
    }

    parser.expect(")")?;

    Ok(Expr::FunctionCall {
        callee,
        arguments: Some(arguments),
    })
}

fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("if")?;
    let condition = parse_expr(parser)?;
    parser.expect("then")?;
    let then_branch = parse_expr(parser)?;

    let else_branch = if parser.peek().text == "else" {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    Ok(Expr::TernaryOp {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("while")?;
    let condition = parse_expr(parser)?;
    parser.expect("do")?;
    let body = parse_expr(parser)?;

    Ok(Expr::WhileStatement {
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

fn parse_var_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("var")?;

    let token = parser.advance();
    if token.kind != TokenKind::Identifier || KEYWORD_LOOKUP.contains_key(token.text.as_str()) {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: String::from("an identifier"),
                found: token.text.clone(),
            },
            token.location,
        ));
    }

    parser.expect("=")?;
    let initializer = parse_expr(parser)?;

    Ok(Expr::Variable {
        identifier: Identifier { name: token.text },
        initializer: Box::new(initializer),
    })
}

fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("(")?;
    let expression = parse_expr(parser)?;
    parser.expect(")")?;

    Ok(expression)
}

// `{` then expressions separated by `;`; an expression directly followed
// by `}` becomes the block's result. Empty block, or one ending in `;`,
// results in the unit literal.
fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("{")?;

    let mut statements = Vec::new();
    let mut result = Expr::Literal(LiteralValue::Unit);

    while parser.peek().text != "}" {
        let expression = parse_expr(parser)?;

        if parser.peek().text == ";" {
            parser.advance();
            statements.push(expression);
        } else {
            result = expression;
            break;
        }
    }

    parser.expect("}")?;

    Ok(Expr::Block {
        statements,
        result: Box::new(result),
    })
}
