//! The parser's cursor discipline and top-level drive.
//!
//! The parser holds the token sequence and a single integer read position;
//! each `parse` call owns its own cursor, so independent parses can run
//! concurrently with no coordination.

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    SourceLocation,
};

use super::expr::parse_expr;

pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the token at the read position without advancing. Past the
    /// end this returns the synthetic `End` token carrying the last real
    /// token's location - it never fails.
    pub fn peek(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => token.clone(),
            None => {
                let location = self
                    .tokens
                    .last()
                    .map(|token| token.location.clone())
                    .unwrap_or_else(SourceLocation::start);
                Token::end(location)
            }
        }
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.peek();
        self.pos += 1;
        token
    }

    /// Consumes the current token, requiring its text to be `expected`.
    /// On mismatch fails without advancing, naming what was expected and
    /// the current location.
    pub fn expect(&mut self, expected: &str) -> Result<Token, Error> {
        let token = self.peek();
        if token.text != expected {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: format!("\"{}\"", expected),
                    found: token.text.clone(),
                },
                token.location,
            ));
        }
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token, requiring its text to be one of
    /// `expected`.
    pub fn expect_one_of(&mut self, expected: &[&str]) -> Result<Token, Error> {
        let token = self.peek();
        if !expected.contains(&token.text.as_str()) {
            let comma_separated = expected
                .iter()
                .map(|text| format!("\"{}\"", text))
                .collect::<Vec<String>>()
                .join(", ");
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: format!("one of: {}", comma_separated),
                    found: token.text.clone(),
                },
                token.location,
            ));
        }
        self.pos += 1;
        Ok(token)
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }
}

/// Parses a token sequence into a single root expression.
///
/// Returns `Ok(None)` for empty input. Fails with a `SyntaxError` when the
/// grammar is violated or when tokens remain after a complete top-level
/// expression; the error carries the first unconsumed token's location.
pub fn parse(tokens: Vec<Token>) -> Result<Option<Expr>, Error> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser::new(tokens);
    let expression = parse_expr(&mut parser)?;

    if parser.has_tokens() {
        let token = parser.peek();
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                token: token.text.clone(),
            },
            token.location,
        ));
    }

    Ok(Some(expression))
}
